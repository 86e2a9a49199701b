//! Browser entry point.
//!
//! [`Overlay`] binds a [`Diagnostics`] core to a canvas element's 2D context
//! and exposes it to JavaScript. The host page keeps the animation loop and
//! DOM listeners; it forwards pointer moves and button clicks here and calls
//! [`Overlay::render`] from `requestAnimationFrame`.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::diagnostics::{Command, Diagnostics};
use crate::error::DrawError;
use crate::shapes::TextSpec;
use crate::toggles::{Toggle, Toggles};

/// Install the panic hook and route `log` output to the browser console.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("console logger already installed");
    }
}

/// The diagnostics overlay attached to one canvas.
#[wasm_bindgen]
pub struct Overlay {
    ctx: CanvasRenderingContext2d,
    core: Diagnostics,
}

#[wasm_bindgen]
impl Overlay {
    /// Attach to `canvas` with the initial toggles in `config`, a JSON object
    /// such as `{"grid": true, "fps": true}`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the configuration is invalid or the canvas has no 2D context.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: &HtmlCanvasElement, config: &str) -> Result<Overlay, JsValue> {
        let toggles = Toggles::from_json(config)?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| DrawError::Surface("canvas has no 2d context".to_owned()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| DrawError::Surface("context is not a CanvasRenderingContext2d".to_owned()))?;
        log::info!("overlay attached: {toggles:?}");
        Ok(Self { ctx, core: Diagnostics::new(toggles) })
    }

    // --- Events ---

    /// Record the pointer position, in canvas offset coordinates.
    #[wasm_bindgen(js_name = onPointerMove)]
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.core.handle(Command::PointerMoved { x, y });
    }

    /// Flip the toggle named by a button and return its new state.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `name` is not a known toggle.
    #[wasm_bindgen(js_name = onButton)]
    pub fn on_button(&mut self, name: &str) -> Result<bool, JsValue> {
        let toggle = name.parse::<Toggle>()?;
        self.core.handle(Command::ToggleActivated(toggle));
        Ok(self.core.toggles.is_enabled(toggle))
    }

    #[wasm_bindgen(js_name = advanceFrame)]
    pub fn advance_frame(&mut self) {
        self.core.handle(Command::AdvanceFrame);
    }

    #[wasm_bindgen(js_name = advanceGeneration)]
    pub fn advance_generation(&mut self) {
        self.core.handle(Command::AdvanceGeneration);
    }

    /// Set the text outlined by the text-box overlay from a JSON spec such as
    /// `{"message": "Hello", "x": 10, "y": 40, "font": "24px serif"}`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `spec` is not a valid text spec; the previous probe is kept.
    #[wasm_bindgen(js_name = setTextProbe)]
    pub fn set_text_probe(&mut self, spec: &str) -> Result<(), JsValue> {
        let probe = TextSpec::from_json(spec)?;
        log::debug!("text probe set: {:?}", probe.message);
        self.core.text_probe = Some(probe);
        Ok(())
    }

    // --- Render ---

    /// Draw the enabled overlays for the frame at `timestamp_ms`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn render(&mut self, timestamp_ms: f64) -> Result<(), JsValue> {
        self.core.render_diagnostics(&mut self.ctx, timestamp_ms)?;
        Ok(())
    }

    // --- Queries ---

    /// Write the timekeeper counters to the console.
    #[wasm_bindgen(js_name = reportCounters)]
    pub fn report_counters(&self) {
        self.core.report_counters();
    }

    /// Last published frames-per-second value.
    #[must_use]
    pub fn fps(&self) -> usize {
        self.core.frame_rate.fps()
    }

    /// Palette entry for the current cycle; empty for an empty palette.
    #[must_use]
    #[wasm_bindgen(js_name = paletteColor)]
    pub fn palette_color(&self, palette: Vec<String>) -> String {
        let names: Vec<&str> = palette.iter().map(String::as_str).collect();
        self.core
            .timekeeper
            .palette_color(&names)
            .unwrap_or_default()
            .to_owned()
    }
}
