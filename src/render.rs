//! Rendering: primitive drawers and the composite overlays built from them.
//!
//! Every drawer takes any [`Surface`] and opens a [`StyleScope`] before it
//! touches style state, so callers can invoke drawers in any order without
//! color, width or font leaking between them. Geometry is passed through
//! uninterpreted: NaN or off-canvas coordinates are the caller's business.
//!
//! All fallible surface calls propagate errors via `Result<(), DrawError>`.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{
    FPS_READOUT_WIDTH, GRID_COLOR, GRID_LABEL_COLOR, GRID_LABEL_FONT, GRID_LABEL_OFFSET, GRID_LABEL_TOP,
    GRID_LINE_WIDTH, GRID_SPACING, READOUT_COLOR, READOUT_FONT, READOUT_MARGIN, RETICLE_COLOR, RETICLE_LINE_WIDTH,
    TEXT_GUIDE_BOTTOM_COLOR, TEXT_GUIDE_LEFT_COLOR, TEXT_GUIDE_MID_COLOR, TEXT_GUIDE_RIGHT_COLOR,
    TEXT_GUIDE_TOP_COLOR, TEXT_GUIDE_WIDTH,
};
use crate::error::DrawError;
use crate::metrics::{TextBox, measure_text_box};
use crate::shapes::{LineSpec, Point, TextSpec};
use crate::surface::{StyleScope, Surface};

// =============================================================
// Primitives
// =============================================================

/// Stroke a single segment with the line's color and width.
pub fn draw_line<S: Surface + ?Sized>(surface: &mut S, line: &LineSpec) {
    let mut scope = StyleScope::new(surface);
    scope.set_stroke_style(&line.color);
    scope.set_line_width(line.width);
    scope.begin_path();
    scope.move_to(line.x1, line.y1);
    scope.line_to(line.x2, line.y2);
    scope.stroke();
}

/// Fill a text run with the text's color and font.
///
/// # Errors
///
/// Returns `Err` if the surface rejects the fill.
pub fn draw_text<S: Surface + ?Sized>(surface: &mut S, text: &TextSpec) -> Result<(), DrawError> {
    let mut scope = StyleScope::new(surface);
    scope.set_fill_style(&text.color);
    scope.set_font(&text.font);
    scope.fill_text(&text.message, text.x, text.y)
}

// =============================================================
// Grid and reticle
// =============================================================

/// Grid positions `0, 30, 60, ...` strictly below `limit`.
fn grid_steps(limit: f64) -> impl Iterator<Item = f64> {
    (0u32..)
        .map(|i| f64::from(i) * GRID_SPACING)
        .take_while(move |pos| *pos < limit)
}

/// Labeled grid over the whole surface.
///
/// Vertical lines carry their x coordinate near the top edge; horizontal lines
/// carry their y coordinate near the left edge.
///
/// # Errors
///
/// Returns `Err` if a label cannot be drawn.
pub fn draw_grid<S: Surface + ?Sized>(surface: &mut S) -> Result<(), DrawError> {
    let width = surface.width();
    let height = surface.height();

    for x in grid_steps(width) {
        draw_line(surface, &grid_line(LineSpec::vertical(x, height)));
        draw_text(surface, &grid_label(x, x + GRID_LABEL_OFFSET, GRID_LABEL_TOP))?;
    }
    for y in grid_steps(height) {
        draw_line(surface, &grid_line(LineSpec::horizontal(y, width)));
        draw_text(surface, &grid_label(y, GRID_LABEL_OFFSET, y + GRID_LABEL_TOP))?;
    }
    Ok(())
}

fn grid_line(line: LineSpec) -> LineSpec {
    line.with_color(GRID_COLOR).with_width(GRID_LINE_WIDTH)
}

fn grid_label(value: f64, x: f64, y: f64) -> TextSpec {
    TextSpec::new(format!("{value}"), x, y)
        .with_color(GRID_LABEL_COLOR)
        .with_font(GRID_LABEL_FONT)
}

/// Crosshair through the geometric center of the surface.
pub fn draw_center_reticle<S: Surface + ?Sized>(surface: &mut S) {
    let width = surface.width();
    let height = surface.height();
    let center = Point::new(width / 2.0, height / 2.0);

    for line in [LineSpec::vertical(center.x, height), LineSpec::horizontal(center.y, width)] {
        draw_line(surface, &line.with_color(RETICLE_COLOR).with_width(RETICLE_LINE_WIDTH));
    }
}

// =============================================================
// Text bounds
// =============================================================

/// Guide lines at the measured top, bottom, mid, left and right of `text`.
///
/// Each guide spans the whole surface across the perpendicular axis and has
/// its own color. The text itself is not drawn. Returns the measured box.
///
/// # Errors
///
/// Returns `Err` if the text cannot be measured.
pub fn draw_text_bounds_overlay<S: Surface + ?Sized>(surface: &mut S, text: &TextSpec) -> Result<TextBox, DrawError> {
    let tb = measure_text_box(surface, text)?;
    let width = surface.width();
    let height = surface.height();

    let guides = [
        LineSpec::horizontal(tb.top, width).with_color(TEXT_GUIDE_TOP_COLOR),
        LineSpec::horizontal(tb.bottom, width).with_color(TEXT_GUIDE_BOTTOM_COLOR),
        LineSpec::horizontal(tb.mid, width).with_color(TEXT_GUIDE_MID_COLOR),
        LineSpec::vertical(tb.left, height).with_color(TEXT_GUIDE_LEFT_COLOR),
        LineSpec::vertical(tb.right, height).with_color(TEXT_GUIDE_RIGHT_COLOR),
    ];
    for guide in guides {
        draw_line(surface, &guide.with_width(TEXT_GUIDE_WIDTH));
    }
    Ok(tb)
}

// =============================================================
// Readouts
// =============================================================

/// Last pointer position, bottom-left.
///
/// # Errors
///
/// Returns `Err` if the text cannot be drawn.
pub fn draw_mouse_position<S: Surface + ?Sized>(surface: &mut S, position: Point) -> Result<(), DrawError> {
    let y = surface.height() - READOUT_MARGIN;
    let message = format!("x: {}, y: {}", position.x, position.y);
    draw_text(surface, &readout(message, READOUT_MARGIN, y))
}

/// Frames-per-second value, top-right.
///
/// # Errors
///
/// Returns `Err` if the text cannot be drawn.
pub fn draw_fps<S: Surface + ?Sized>(surface: &mut S, fps: usize) -> Result<(), DrawError> {
    let x = surface.width() - FPS_READOUT_WIDTH;
    draw_text(surface, &readout(format!("FPS: {fps}"), x, READOUT_MARGIN * 2.0))
}

fn readout(message: String, x: f64, y: f64) -> TextSpec {
    TextSpec::new(message, x, y)
        .with_color(READOUT_COLOR)
        .with_font(READOUT_FONT)
}
