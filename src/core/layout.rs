use serde::{Deserialize, Serialize};

use crate::core::types::{CanvasSize, ChartKind, RectPx};

/// Share of the canvas width reserved for the legend column.
const LEGEND_WIDTH_PCT: i32 = 20;
/// Share of the canvas width reserved for Y-axis captions.
const Y_LABEL_WIDTH_PCT: i32 = 10;
/// Share of the canvas height left empty above the plot.
const TOP_MARGIN_PCT: i32 = 3;

/// Canvas partition: plot area, legend column, and the two axis-label offsets.
///
/// Derived purely from the requested canvas size by fixed percentage splits,
/// truncated to whole pixels. Must be recomputed whenever the canvas changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub canvas: CanvasSize,
    /// Data area, relative to its own origin; shift by (`x_start`, `y_start`)
    /// to get canvas coordinates.
    pub plot: RectPx,
    /// Legend column, in canvas coordinates.
    pub legend: RectPx,
    /// Width of the Y-axis caption column left of the plot.
    pub x_start: i32,
    /// Top margin above the plot.
    pub y_start: i32,
}

impl Layout {
    /// Partitions `canvas` for one chart kind.
    ///
    /// The X-axis caption band depends on the kind (20 % of the height for
    /// line charts, 15 % for stacked bars); the other splits are shared.
    #[must_use]
    pub fn compute(canvas: CanvasSize, kind: ChartKind) -> Self {
        // Percentage products of a u32 edge can exceed i32; compute in i64
        // and clamp each edge to the i32 coordinate space of the draw calls.
        let w = i64::from(canvas.width.min(i32::MAX as u32));
        let h = i64::from(canvas.height.min(i32::MAX as u32));

        let legend_width = w * i64::from(LEGEND_WIDTH_PCT) / 100;
        let x_start = w * i64::from(Y_LABEL_WIDTH_PCT) / 100;
        let y_start = h * i64::from(TOP_MARGIN_PCT) / 100;
        let x_label_band = h * i64::from(kind.x_label_band_pct()) / 100;

        Self {
            canvas,
            plot: RectPx::from_ltwh(
                0,
                0,
                (w - x_start - legend_width) as i32,
                (h - y_start - x_label_band) as i32,
            ),
            legend: RectPx::from_ltrb((w - legend_width) as i32, y_start as i32, w as i32, h as i32),
            x_start: x_start as i32,
            y_start: y_start as i32,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::compute(CanvasSize::new(0, 0), ChartKind::Line)
    }
}
