//! Per-overlay on/off flags.
//!
//! The host's button bar names overlays with the strings accepted by
//! [`Toggle::from_str`]; the initial set comes from a JSON object with the
//! same camelCase keys, each defaulting to `false`. Any other key is rejected.

#[cfg(test)]
#[path = "toggles_test.rs"]
mod toggles_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DrawError;

/// One diagnostic overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    /// Labeled 30px grid.
    Grid,
    /// Crosshair through the canvas center.
    Center,
    /// Bounding-box guides around the probe text.
    TextBox,
    /// Pointer position readout.
    MouseCoords,
    /// Frames-per-second readout.
    Fps,
}

impl Toggle {
    pub const ALL: [Self; 5] = [Self::Grid, Self::Center, Self::TextBox, Self::MouseCoords, Self::Fps];

    /// Button / config name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Center => "center",
            Self::TextBox => "textBox",
            Self::MouseCoords => "mouseCoords",
            Self::Fps => "fps",
        }
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Toggle {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "grid" => Ok(Self::Grid),
            "center" => Ok(Self::Center),
            "textBox" | "text_box" => Ok(Self::TextBox),
            "mouseCoords" | "mouse_coords" => Ok(Self::MouseCoords),
            "fps" => Ok(Self::Fps),
            other => Err(DrawError::UnknownToggle(other.to_owned())),
        }
    }
}

/// Which overlays render. Flags are independent of one another.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Toggles {
    pub grid: bool,
    pub center: bool,
    pub text_box: bool,
    pub mouse_coords: bool,
    pub fps: bool,
}

impl Toggles {
    /// Every overlay enabled.
    #[must_use]
    pub fn all() -> Self {
        Self { grid: true, center: true, text_box: true, mouse_coords: true, fps: true }
    }

    /// Parse an initial configuration such as `{"grid": true, "fps": true}`.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Config`] if `json` is not an object of booleans or
    /// names a key other than the five overlays.
    pub fn from_json(json: &str) -> Result<Self, DrawError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn is_enabled(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Grid => self.grid,
            Toggle::Center => self.center,
            Toggle::TextBox => self.text_box,
            Toggle::MouseCoords => self.mouse_coords,
            Toggle::Fps => self.fps,
        }
    }

    pub fn set(&mut self, toggle: Toggle, enabled: bool) {
        let flag = match toggle {
            Toggle::Grid => &mut self.grid,
            Toggle::Center => &mut self.center,
            Toggle::TextBox => &mut self.text_box,
            Toggle::MouseCoords => &mut self.mouse_coords,
            Toggle::Fps => &mut self.fps,
        };
        *flag = enabled;
    }

    /// Invert one flag and return its new value.
    pub fn flip(&mut self, toggle: Toggle) -> bool {
        let enabled = !self.is_enabled(toggle);
        self.set(toggle, enabled);
        enabled
    }
}
