//! Drawing-surface capability consumed by every drawer in the crate.
//!
//! [`Surface`] is the narrow slice of the Canvas 2D API the overlay needs.
//! The browser backend is [`web_sys::CanvasRenderingContext2d`]; tests and
//! headless hosts use [`Recorder`], which logs calls instead of producing
//! pixels.
//!
//! Style state (stroke, fill, width, font) is persistent on a real canvas.
//! Drawers never touch it directly without first opening a [`StyleScope`],
//! which saves on construction and restores on drop, so a drawer that returns
//! early through `?` still leaves the surface as it found it.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::ops::{Deref, DerefMut};

use web_sys::CanvasRenderingContext2d;

use crate::error::DrawError;
use crate::shapes::Point;

/// Measurements for a run of text in the current font.
///
/// The `actual_*` fields mirror the Canvas `TextMetrics` bounding-box values:
/// distances from the anchor point, positive in the direction named.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlyphMetrics {
    /// Advance width.
    pub width: f64,
    pub actual_ascent: f64,
    pub actual_descent: f64,
    pub actual_left: f64,
    pub actual_right: f64,
}

/// The drawing operations the overlay issues against a 2D surface.
pub trait Surface {
    fn save(&mut self);
    fn restore(&mut self);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
    fn set_stroke_style(&mut self, color: &str);
    fn set_fill_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &str);

    /// Fill `text` at `(x, y)` with the current fill style and font.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the call.
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), DrawError>;

    /// Measure `text` in the current font.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend cannot measure text.
    fn measure_text(&mut self, text: &str) -> Result<GlyphMetrics, DrawError>;

    /// Surface width in pixels.
    fn width(&self) -> f64;

    /// Surface height in pixels.
    fn height(&self) -> f64;
}

// =============================================================
// Scoped style state
// =============================================================

/// Save/restore bracket around a surface.
///
/// Derefs to the wrapped surface, so nested drawers can take `&mut *scope`
/// and open scopes of their own.
pub struct StyleScope<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> StyleScope<'a, S> {
    /// Push the surface's style state; it is popped when the scope drops.
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Deref for StyleScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for StyleScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for StyleScope<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

// =============================================================
// Browser backend
// =============================================================

// Inherent methods are called by path: `self.save()` would resolve to the
// trait method and recurse.
impl Surface for CanvasRenderingContext2d {
    fn save(&mut self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&mut self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.set_stroke_style_str(color);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn set_font(&mut self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), DrawError> {
        CanvasRenderingContext2d::fill_text(self, text, x, y)?;
        Ok(())
    }

    fn measure_text(&mut self, text: &str) -> Result<GlyphMetrics, DrawError> {
        let metrics = CanvasRenderingContext2d::measure_text(self, text)?;
        Ok(GlyphMetrics {
            width: metrics.width(),
            actual_ascent: metrics.actual_bounding_box_ascent(),
            actual_descent: metrics.actual_bounding_box_descent(),
            actual_left: metrics.actual_bounding_box_left(),
            actual_right: metrics.actual_bounding_box_right(),
        })
    }

    fn width(&self) -> f64 {
        self.canvas().map_or(0.0, |canvas| f64::from(canvas.width()))
    }

    fn height(&self) -> f64 {
        self.canvas().map_or(0.0, |canvas| f64::from(canvas.height()))
    }
}

// =============================================================
// Recording backend
// =============================================================

/// Default font of a fresh Canvas 2D context.
const DEFAULT_FONT: &str = "10px sans-serif";

/// One call issued against a [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Save,
    Restore,
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
    StrokeStyle(String),
    FillStyle(String),
    LineWidth(f64),
    Font(String),
    FillText { text: String, x: f64, y: f64 },
    MeasureText(String),
}

/// Persistent style state, as saved and restored by the Canvas API.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub stroke: String,
    pub fill: String,
    pub line_width: f64,
    pub font: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: "#000000".to_owned(),
            fill: "#000000".to_owned(),
            line_width: 1.0,
            font: DEFAULT_FONT.to_owned(),
        }
    }
}

/// A stroked path segment captured with the style in force at `stroke()`.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeRecord {
    pub from: Point,
    pub to: Point,
    pub color: String,
    pub width: f64,
}

/// A filled text run captured with the style in force at `fill_text()`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRecord {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub font: String,
}

/// Headless surface that records every call.
///
/// Text is measured from the pixel size in the current font: each character
/// advances half the size, ascent is 0.8× and descent 0.2× the size. Fonts
/// without a `px` size measure as the default 10px. Glyphs start at the anchor
/// unless [`Recorder::with_left_overhang`] sets an overhang.
#[derive(Debug, Clone)]
pub struct Recorder {
    width: f64,
    height: f64,
    calls: Vec<Call>,
    style: Style,
    stack: Vec<Style>,
    path: Vec<Point>,
    strokes: Vec<StrokeRecord>,
    texts: Vec<TextRecord>,
    left_overhang: f64,
}

impl Recorder {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
            style: Style::default(),
            stack: Vec::new(),
            path: Vec::new(),
            strokes: Vec::new(),
            texts: Vec::new(),
            left_overhang: 0.0,
        }
    }

    /// Report every measured run as extending `px` to the left of its anchor,
    /// like italic or right-aligned text on a real canvas.
    #[must_use]
    pub fn with_left_overhang(mut self, px: f64) -> Self {
        self.left_overhang = px;
        self
    }

    /// Every call in issue order.
    #[must_use]
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Stroked segments in issue order.
    #[must_use]
    pub fn strokes(&self) -> &[StrokeRecord] {
        &self.strokes
    }

    /// Filled text runs in issue order.
    #[must_use]
    pub fn texts(&self) -> &[TextRecord] {
        &self.texts
    }

    /// Current style state.
    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Number of saved style states not yet restored.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether any stroke or text fill was issued.
    #[must_use]
    pub fn has_drawn(&self) -> bool {
        !self.strokes.is_empty() || !self.texts.is_empty()
    }

    /// Forget recorded calls, keeping dimensions and style state.
    pub fn clear(&mut self) {
        self.calls.clear();
        self.strokes.clear();
        self.texts.clear();
        self.path.clear();
    }

    fn font_px(&self) -> f64 {
        font_size_px(&self.style.font).unwrap_or(10.0)
    }
}

/// First `<n>px` token of a CSS font shorthand.
fn font_size_px(font: &str) -> Option<f64> {
    for token in font.split_whitespace() {
        if let Some(number) = token.strip_suffix("px")
            && let Ok(size) = number.parse::<f64>()
        {
            return Some(size);
        }
    }
    None
}

impl Surface for Recorder {
    fn save(&mut self) {
        self.calls.push(Call::Save);
        self.stack.push(self.style.clone());
    }

    fn restore(&mut self) {
        self.calls.push(Call::Restore);
        // An unbalanced restore is a no-op on a real canvas.
        if let Some(style) = self.stack.pop() {
            self.style = style;
        }
    }

    fn begin_path(&mut self) {
        self.calls.push(Call::BeginPath);
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(Call::MoveTo(x, y));
        self.path.push(Point::new(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(Call::LineTo(x, y));
        self.path.push(Point::new(x, y));
    }

    fn stroke(&mut self) {
        self.calls.push(Call::Stroke);
        for pair in self.path.windows(2) {
            self.strokes.push(StrokeRecord {
                from: pair[0],
                to: pair[1],
                color: self.style.stroke.clone(),
                width: self.style.line_width,
            });
        }
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.calls.push(Call::StrokeStyle(color.to_owned()));
        color.clone_into(&mut self.style.stroke);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.calls.push(Call::FillStyle(color.to_owned()));
        color.clone_into(&mut self.style.fill);
    }

    fn set_line_width(&mut self, width: f64) {
        self.calls.push(Call::LineWidth(width));
        self.style.line_width = width;
    }

    fn set_font(&mut self, font: &str) {
        self.calls.push(Call::Font(font.to_owned()));
        font.clone_into(&mut self.style.font);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), DrawError> {
        self.calls.push(Call::FillText { text: text.to_owned(), x, y });
        self.texts.push(TextRecord {
            text: text.to_owned(),
            x,
            y,
            color: self.style.fill.clone(),
            font: self.style.font.clone(),
        });
        Ok(())
    }

    #[allow(clippy::cast_precision_loss)]
    fn measure_text(&mut self, text: &str) -> Result<GlyphMetrics, DrawError> {
        self.calls.push(Call::MeasureText(text.to_owned()));
        let size = self.font_px();
        let width = text.chars().count() as f64 * size * 0.5;
        Ok(GlyphMetrics {
            width,
            actual_ascent: size * 0.8,
            actual_descent: size * 0.2,
            actual_left: self.left_overhang,
            actual_right: width,
        })
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }
}
