// Pad settings. Every field has a default, so an empty JSON object is a valid config.

use crate::error::{Error, Result};
use crate::types::INK_BLACK;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_SURFACE_HEIGHT: usize = 200;
pub const DEFAULT_LINE_WIDTH: f32 = 2.0;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PadConfig {
    /// Fixed surface height; the width always follows the container.
    pub surface_height: usize,
    /// Stroke width in surface pixels.
    pub line_width: f32,
    /// Ink color as 0xAARRGGBB.
    pub stroke_color: u32,
    /// Hint shown while nothing is signed.
    pub placeholder: String,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            surface_height: DEFAULT_SURFACE_HEIGHT,
            line_width: DEFAULT_LINE_WIDTH,
            stroke_color: INK_BLACK,
            placeholder: String::from("Sign Here"),
        }
    }
}

impl PadConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let cfg: PadConfig =
            serde_json::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    fn validate(&self) -> Result<()> {
        if self.surface_height == 0 {
            return Err(Error::Config("surface_height must be > 0".into()));
        }
        if self.line_width.is_nan() || self.line_width <= 0.0 {
            return Err(Error::Config("line_width must be > 0".into()));
        }
        Ok(())
    }
}
