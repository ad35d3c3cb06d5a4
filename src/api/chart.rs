use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::{AxisStyle, CanvasSize, Category, ChartKind, Layout, RectPx, Rgb, Series, ValueScale};
use crate::error::{ChartError, ChartResult};

/// A configurable chart: canvas layout, X categories, Y series, fonts.
///
/// A chart is built empty, configured through the setters, and drawn onto an
/// injected surface; it stays mutable and reusable between draws. Instances
/// are single-threaded, so parallel rendering needs independent charts.
pub struct Chart {
    pub(super) kind: ChartKind,
    pub(super) layout: Layout,
    pub(super) x_vals: Vec<Category>,
    pub(super) series: Vec<Series>,
    pub(super) scale: ValueScale,
    /// Pixels per X category, rounded.
    pub(super) px_per_x: i32,
    pub(super) axis_style: AxisStyle,
    pub(super) font_path: Option<PathBuf>,
    pub(super) last_error: String,
}

impl Chart {
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            layout: Layout::compute(CanvasSize::new(0, 0), kind),
            x_vals: Vec::new(),
            series: Vec::new(),
            scale: ValueScale::default(),
            px_per_x: 0,
            axis_style: AxisStyle::default(),
            font_path: None,
            last_error: String::new(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ChartKind {
        self.kind
    }

    /// Sets the output canvas size and recomputes layout and scale state.
    pub fn set_graph_area(&mut self, width: u32, height: u32) {
        self.layout = Layout::compute(CanvasSize::new(width, height), self.kind);
        self.refit();
    }

    /// Plot-area rectangle of the current layout.
    #[must_use]
    pub const fn graph_area(&self) -> RectPx {
        self.layout.plot
    }

    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Replaces the X categories. Stored series whose value count no longer
    /// matches the new category count are dropped.
    pub fn set_x_coordinates<I, C>(&mut self, values: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Category>,
    {
        self.x_vals = values.into_iter().map(Into::into).collect();
        let n = self.x_vals.len();
        self.series.retain(|s| s.values.len() == n);
        self.refit();
    }

    #[must_use]
    pub fn x_coordinates(&self) -> &[Category] {
        &self.x_vals
    }

    /// Adds one Y series. Fails when the value count does not match the X
    /// categories or a value is not finite; the stored series are untouched
    /// on failure.
    pub fn add_y_coordinates(
        &mut self,
        values: Vec<f64>,
        color: Rgb,
        caption: impl Into<String>,
    ) -> ChartResult<()> {
        let res = self.try_add_series(values, color, caption.into());
        self.record(res)
    }

    fn try_add_series(&mut self, values: Vec<f64>, color: Rgb, caption: String) -> ChartResult<()> {
        if values.len() != self.x_vals.len() {
            return Err(ChartError::InvalidData(format!(
                "Y series has {} values but the X axis has {} categories",
                values.len(),
                self.x_vals.len()
            )));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "Y values must be finite numbers, got {bad}"
            )));
        }

        self.series.push(Series::new(values, color, caption));
        self.refit();
        Ok(())
    }

    /// Removes one Y series by index; out-of-range indexes are ignored.
    /// Remaining series shift down.
    pub fn remove_y_coordinates(&mut self, index: usize) {
        if index < self.series.len() {
            self.series.remove(index);
            self.refit();
        }
    }

    #[must_use]
    pub fn y_coordinates(&self) -> &[Series] {
        &self.series
    }

    /// Current derived scale state.
    #[must_use]
    pub const fn scale(&self) -> &ValueScale {
        &self.scale
    }

    /// Message of the most recent failed operation; overwritten by the next
    /// failure. Kept for callers migrating from check-then-ask error styles.
    /// New code should use the returned `ChartResult`s directly.
    #[must_use]
    pub fn last_error(&self) -> &str {
        &self.last_error
    }

    /// Configures the scalable font file used for captions. The file must
    /// exist.
    pub fn set_font_file(&mut self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        if !path.exists() {
            let res = Err(ChartError::FontNotFound {
                path: path.to_path_buf(),
            });
            return self.record(res);
        }
        self.font_path = Some(path.to_path_buf());
        self.axis_style.font.path = self.font_path.clone();
        Ok(())
    }

    /// Configures axis caption size, axis color, optional distinct caption
    /// color, and caption rotation.
    pub fn set_axis_font(&mut self, size: u32, color: Rgb, label_color: Option<Rgb>, angle: i32) {
        self.axis_style.set_font(size, color, label_color, angle);
        self.axis_style.font.path = self.font_path.clone();
    }

    /// Refits derived state after any X/Y/canvas mutation.
    pub(super) fn refit(&mut self) {
        self.scale = ValueScale::fit(
            self.series.iter().flat_map(|s| s.values.iter().copied()),
            self.layout.plot.height(),
        );
        self.px_per_x = if self.x_vals.is_empty() {
            0
        } else {
            (f64::from(self.layout.plot.width()) / self.x_vals.len() as f64).round() as i32
        };
        debug!(
            series = self.series.len(),
            categories = self.x_vals.len(),
            px_per_x = self.px_per_x,
            "refitted chart state"
        );
    }

    pub(super) fn record<T>(&mut self, res: ChartResult<T>) -> ChartResult<T> {
        if let Err(e) = &res {
            self.last_error = e.to_string();
        }
        res
    }
}
