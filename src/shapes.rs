//! Line and text specs: ephemeral descriptions of what to draw.
//!
//! Specs carry no identity beyond their fields. They are built per draw call
//! in Rust; a [`TextSpec`] can also arrive as JSON from the host page.

#[cfg(test)]
#[path = "shapes_test.rs"]
mod shapes_test;

use serde::Deserialize;

use crate::error::DrawError;

/// A point in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A stroked segment from `(x1, y1)` to `(x2, y2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSpec {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    /// CSS color string.
    pub color: String,
    /// Stroke width in pixels.
    pub width: f64,
}

impl LineSpec {
    /// A one-pixel black segment.
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2, color: "#000000".to_owned(), width: 1.0 }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Vertical segment at `x` spanning `0..=height`.
    #[must_use]
    pub fn vertical(x: f64, height: f64) -> Self {
        Self::new(x, 0.0, x, height)
    }

    /// Horizontal segment at `y` spanning `0..=width`.
    #[must_use]
    pub fn horizontal(y: f64, width: f64) -> Self {
        Self::new(0.0, y, width, y)
    }
}

const DEFAULT_TEXT_COLOR: &str = "#000000";
const DEFAULT_TEXT_FONT: &str = "16px sans-serif";

fn default_text_color() -> String {
    DEFAULT_TEXT_COLOR.to_owned()
}

fn default_text_font() -> String {
    DEFAULT_TEXT_FONT.to_owned()
}

/// A run of filled text anchored at `(x, y)`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextSpec {
    pub message: String,
    pub x: f64,
    pub y: f64,
    /// CSS color string.
    #[serde(default = "default_text_color")]
    pub color: String,
    /// CSS font shorthand, e.g. `"16px sans-serif"`.
    #[serde(default = "default_text_font")]
    pub font: String,
}

impl TextSpec {
    /// Black 16px sans-serif text.
    #[must_use]
    pub fn new(message: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            message: message.into(),
            x,
            y,
            color: default_text_color(),
            font: default_text_font(),
        }
    }

    /// Parse a host-supplied spec such as
    /// `{"message": "Hello", "x": 10, "y": 40, "font": "24px serif"}`.
    /// `color` and `font` fall back to the [`TextSpec::new`] defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Config`] if `json` is malformed, lacks `message`,
    /// `x` or `y`, or carries an unknown key.
    pub fn from_json(json: &str) -> Result<Self, DrawError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }
}
