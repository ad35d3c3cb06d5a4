//! PNG output paths over the software raster backend.

use std::path::Path;

use crate::api::Chart;
use crate::error::ChartResult;
use crate::render::RasterSurface;

impl Chart {
    /// Renders the chart and returns the encoded PNG bytes (`image/png`).
    ///
    /// The raster surface lives only inside this call; on any failure it is
    /// dropped without flushing.
    pub fn render_png(&mut self) -> ChartResult<Vec<u8>> {
        let canvas = self.layout.canvas;
        let surface = RasterSurface::new(canvas.width, canvas.height);
        let mut surface = self.record(surface)?;
        self.draw_onto(&mut surface)?;
        let png = surface.encode_png();
        self.record(png)
    }

    /// Renders the chart and writes the PNG to `path`.
    pub fn render_png_to_file(&mut self, path: impl AsRef<Path>) -> ChartResult<()> {
        let bytes = self.render_png()?;
        let written = std::fs::write(path, bytes).map_err(Into::into);
        self.record(written)
    }
}
