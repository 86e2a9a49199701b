//! Diagnostics compositor and the commands that drive it.
//!
//! [`Diagnostics`] owns all of the overlay's mutable state: toggles, counters,
//! the frame-rate window and the last pointer position. The host feeds it
//! [`Command`]s as events arrive and calls
//! [`Diagnostics::render_diagnostics`] once per animation frame; the latest
//! command before a render is what that render sees.
//!
//! Separated from [`crate::engine::Overlay`] so it can be tested without a
//! browser, against a [`crate::surface::Recorder`].

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;

use crate::error::DrawError;
use crate::fps::FrameRate;
use crate::render;
use crate::shapes::{Point, TextSpec};
use crate::surface::{StyleScope, Surface};
use crate::timekeeper::Timekeeper;
use crate::toggles::{Toggle, Toggles};

/// Host events, delivered in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// The pointer moved to `(x, y)` relative to the canvas.
    PointerMoved { x: f64, y: f64 },
    /// A button bar entry for `Toggle` was activated.
    ToggleActivated(Toggle),
    /// The host rendered a frame.
    AdvanceFrame,
    /// The host simulation stepped one generation.
    AdvanceGeneration,
}

/// All overlay state.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    pub toggles: Toggles,
    pub timekeeper: Timekeeper,
    pub frame_rate: FrameRate,
    /// Last observed pointer position; `None` until the pointer first moves.
    pub mouse: Option<Point>,
    /// Text whose bounding box the text-box overlay outlines.
    pub text_probe: Option<TextSpec>,
}

impl Diagnostics {
    #[must_use]
    pub fn new(toggles: Toggles) -> Self {
        Self { toggles, ..Self::default() }
    }

    /// Set the text outlined by the text-box overlay.
    #[must_use]
    pub fn with_text_probe(mut self, probe: TextSpec) -> Self {
        self.text_probe = Some(probe);
        self
    }

    // --- Commands ---

    /// Apply one host event.
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::PointerMoved { x, y } => self.mouse = Some(Point::new(x, y)),
            Command::ToggleActivated(toggle) => {
                let enabled = self.toggles.flip(toggle);
                log::debug!("overlay {toggle} {}", if enabled { "enabled" } else { "disabled" });
            }
            Command::AdvanceFrame => self.timekeeper.advance_frame(),
            Command::AdvanceGeneration => self.timekeeper.advance_generation(),
        }
    }

    /// Apply a batch of host events in order.
    pub fn handle_all(&mut self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            self.handle(command);
        }
    }

    // --- Render ---

    /// Draw every enabled overlay for the frame at `timestamp_ms`.
    ///
    /// Everything runs inside a single style scope. The FPS overlay records
    /// the frame before drawing, so the frame-rate window only advances while
    /// it is enabled. Toggles are never modified here.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any overlay fails to draw; the surface's style state is
    /// restored regardless.
    pub fn render_diagnostics<S: Surface + ?Sized>(&mut self, surface: &mut S, timestamp_ms: f64) -> Result<(), DrawError> {
        let toggles = self.toggles;
        let mut scope = StyleScope::new(surface);

        if toggles.grid {
            render::draw_grid(&mut *scope)?;
        }
        if toggles.center {
            render::draw_center_reticle(&mut *scope);
        }
        if toggles.text_box {
            if let Some(probe) = &self.text_probe {
                render::draw_text(&mut *scope, probe)?;
                render::draw_text_bounds_overlay(&mut *scope, probe)?;
            }
        }
        if toggles.mouse_coords {
            if let Some(position) = self.mouse {
                render::draw_mouse_position(&mut *scope, position)?;
            }
        }
        if toggles.fps {
            self.frame_rate.record_frame(timestamp_ms);
            render::draw_fps(&mut *scope, self.frame_rate.fps())?;
        }
        Ok(())
    }

    /// Log the timekeeper counters.
    pub fn report_counters(&self) {
        self.timekeeper.report();
    }
}
