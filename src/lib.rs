//! barline: raster rendering for simple business charts.
//!
//! The crate lays a plot area, a legend column, and axis-caption bands out of
//! a requested canvas size, scales arbitrary-range Y series into pixel rows
//! (sign-aware, with integer range compression), draws axes with greedy
//! label-collision avoidance, and renders line or stacked-bar data plus a
//! color-swatch legend. All drawing goes through the [`render::Surface`]
//! capability trait; the bundled software raster backend produces PNG output,
//! and a recording surface serves tests and headless checks.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use crate::api::{Chart, ChartKind};
pub use crate::core::{CanvasSize, Category, Layout, PointPx, RectPx, Rgb, Series, ValueScale};
pub use crate::error::{ChartError, ChartResult};
#[cfg(feature = "raster-backend")]
pub use crate::render::RasterSurface;
pub use crate::render::{DrawOp, FontSpec, RecordingSurface, Surface, TextExtent};
