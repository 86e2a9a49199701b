//! Text bounding-box measurement.

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

use crate::error::DrawError;
use crate::shapes::TextSpec;
use crate::surface::{StyleScope, Surface};

/// Bounding rectangle and centers of a measured text run, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBox {
    pub top: f64,
    pub bottom: f64,
    /// Always `bottom - top`.
    pub height: f64,
    /// Always `top + height / 2`.
    pub mid: f64,
    pub left: f64,
    pub right: f64,
    /// Always `right - left`.
    pub width: f64,
    /// Always `left + width / 2`.
    pub horizontal_center: f64,
    /// Equal to `mid`.
    pub vertical_center: f64,
}

impl TextBox {
    /// Derive the box from explicit edges.
    #[must_use]
    pub fn from_edges(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        let height = bottom - top;
        let mid = top + height / 2.0;
        let width = right - left;
        let horizontal_center = left + width / 2.0;
        Self {
            top,
            bottom,
            height,
            mid,
            left,
            right,
            width,
            horizontal_center,
            vertical_center: mid,
        }
    }
}

/// Measure `text` as it would be drawn by [`crate::render::draw_text`].
///
/// The text's fill color and font are applied before measuring, inside a
/// style scope, so the surface's persistent style is unchanged afterwards.
///
/// # Errors
///
/// Returns `Err` if the surface cannot measure text.
pub fn measure_text_box<S: Surface + ?Sized>(surface: &mut S, text: &TextSpec) -> Result<TextBox, DrawError> {
    let mut scope = StyleScope::new(surface);
    scope.set_fill_style(&text.color);
    scope.set_font(&text.font);
    let glyphs = scope.measure_text(&text.message)?;

    Ok(TextBox::from_edges(
        text.y - glyphs.actual_ascent,
        text.y + glyphs.actual_descent,
        text.x - glyphs.actual_left,
        text.x + glyphs.actual_right,
    ))
}
