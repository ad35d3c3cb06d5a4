use serde::{Deserialize, Serialize};

use crate::core::scale::ValueScale;
use crate::core::types::Rgb;

/// One named Y series bound to the chart's X categories.
///
/// `rows_px` holds the pixel row of each value, parallel to `values`; it is
/// refreshed from the current scale before every draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub values: Vec<f64>,
    pub color: Rgb,
    pub caption: String,
    pub rows_px: Vec<i32>,
}

impl Series {
    #[must_use]
    pub fn new(values: Vec<f64>, color: Rgb, caption: impl Into<String>) -> Self {
        Self {
            values,
            color,
            caption: caption.into(),
            rows_px: Vec::new(),
        }
    }

    /// Recomputes the pixel-row projection of every value.
    pub fn project(&mut self, scale: &ValueScale) {
        self.rows_px.clear();
        self.rows_px.extend(self.values.iter().map(|&v| scale.project(v)));
    }
}
