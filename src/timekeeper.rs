//! Frame, generation and cycle counters.
//!
//! A frame is one render; a generation is one discrete state advance in the
//! host simulation. The two are driven by different triggers and advance
//! independently. Four generations make a cycle, which the host uses to step
//! through a fixed color palette.

#[cfg(test)]
#[path = "timekeeper_test.rs"]
mod timekeeper_test;

use std::fmt;

use crate::consts::{GENERATIONS_PER_CYCLE, MAX_SAFE_INTEGER};

/// Increment `count`, wrapping to zero once it has reached `MAX_SAFE_INTEGER`.
fn wrapping_advance(count: u64) -> u64 {
    if count >= MAX_SAFE_INTEGER { 0 } else { count + 1 }
}

/// Frame and generation counters with the derived cycle count.
///
/// Invariant: `cycle_count == generation_count / 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timekeeper {
    frame_count: u64,
    generation_count: u64,
    cycle_count: u64,
}

impl Timekeeper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from explicit counts. Values above `MAX_SAFE_INTEGER` are clamped.
    #[must_use]
    pub fn from_counts(frame_count: u64, generation_count: u64) -> Self {
        let generation_count = generation_count.min(MAX_SAFE_INTEGER);
        Self {
            frame_count: frame_count.min(MAX_SAFE_INTEGER),
            generation_count,
            cycle_count: generation_count / GENERATIONS_PER_CYCLE,
        }
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[must_use]
    pub fn generation_count(&self) -> u64 {
        self.generation_count
    }

    #[must_use]
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Count one rendered frame.
    pub fn advance_frame(&mut self) {
        self.frame_count = wrapping_advance(self.frame_count);
    }

    /// Count one generation and recompute the cycle.
    pub fn advance_generation(&mut self) {
        self.generation_count = wrapping_advance(self.generation_count);
        self.cycle_count = self.generation_count / GENERATIONS_PER_CYCLE;
    }

    /// Palette entry for the current cycle, or `None` for an empty palette.
    #[must_use]
    pub fn palette_color<'a>(&self, palette: &[&'a str]) -> Option<&'a str> {
        let len = u64::try_from(palette.len()).unwrap_or(u64::MAX);
        if len == 0 {
            return None;
        }
        let index = usize::try_from(self.cycle_count % len).unwrap_or(0);
        palette.get(index).copied()
    }

    /// Write the three counters to the log, one line each, as [`Display`] renders them.
    ///
    /// [`Display`]: fmt::Display
    pub fn report(&self) {
        for line in self.to_string().lines() {
            log::info!("{line}");
        }
    }
}

impl fmt::Display for Timekeeper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "frameCount: {}", self.frame_count)?;
        writeln!(f, "generationCount: {}", self.generation_count)?;
        write!(f, "cycleCount: {}", self.cycle_count)
    }
}
