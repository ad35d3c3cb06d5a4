mod primitives;
mod recording;

pub use primitives::{FontSpec, TextExtent};
pub use recording::{DrawOp, RecordingSurface};

#[cfg(feature = "raster-backend")]
mod raster;
#[cfg(feature = "raster-backend")]
pub use raster::RasterSurface;

use crate::core::{PointPx, RectPx, Rgb};
use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// The chart pipeline emits primitive draw calls through this trait, so the
/// layout/scale/axis code stays isolated from the raster library and tests can
/// run against a call-recording double.
pub trait Surface {
    /// Draws a one-pixel line between two points.
    fn line(&mut self, from: PointPx, to: PointPx, color: Rgb) -> ChartResult<()>;

    /// Fills a rectangle, corners inclusive.
    fn fill_rect(&mut self, rect: RectPx, color: Rgb) -> ChartResult<()>;

    /// Draws a one-pixel rectangle outline, corners inclusive.
    fn stroke_rect(&mut self, rect: RectPx, color: Rgb) -> ChartResult<()>;

    /// Reports the box `text` would occupy, relative to its baseline origin.
    fn measure_text(&mut self, font: &FontSpec, text: &str) -> ChartResult<TextExtent>;

    /// Draws `text` with its baseline-left corner at (`x`, `y`) and returns
    /// the occupied box.
    fn draw_text(&mut self, font: &FontSpec, x: i32, y: i32, text: &str) -> ChartResult<TextExtent>;
}
