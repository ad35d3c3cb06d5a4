use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::Rgb;

/// Measured text box, reported relative to the text's baseline origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextExtent {
    pub width: i32,
    pub height: i32,
    /// Height of the first text line; equals `height` for single-line labels.
    pub first_line_height: i32,
}

impl TextExtent {
    #[must_use]
    pub const fn new(width: i32, height: i32, first_line_height: i32) -> Self {
        Self {
            width,
            height,
            first_line_height,
        }
    }
}

/// Font configuration for a text draw call.
///
/// Without a `path` the raster backend falls back to its embedded bitmap
/// fonts; with one it rasterizes the referenced scalable font.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Size in pixels.
    pub size: u32,
    pub color: Rgb,
    /// Rotation in degrees, 0 = horizontal.
    pub angle: i32,
    pub path: Option<PathBuf>,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            size: 10,
            color: Rgb::BLACK,
            angle: 0,
            path: None,
        }
    }
}

impl FontSpec {
    #[must_use]
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }
}
