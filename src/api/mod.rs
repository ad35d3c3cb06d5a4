mod chart;
mod draw;
#[cfg(feature = "raster-backend")]
mod png;

pub use chart::Chart;
pub use crate::core::ChartKind;
