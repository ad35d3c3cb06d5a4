//! Draw choreography for the two chart kinds.
//!
//! The order matches the classic raster-chart pipeline: frames, data shapes,
//! zero baseline, axes, legend. Any failing step aborts the remaining steps
//! and surfaces the first error unchanged, so a partial image is never
//! flushed.

use smallvec::SmallVec;
use tracing::debug;

use crate::api::Chart;
use crate::core::{Category, ChartKind, PointPx, RectPx, Rgb, axis};
use crate::error::ChartResult;
use crate::render::Surface;

/// Channel delta between a block's fill and its outline shade.
const OUTLINE_DARKEN: u8 = 70;
/// Legend geometry: row pitch, swatch edge, inner margin, caption gap.
const LEGEND_ROW_PITCH: i32 = 20;
const LEGEND_SWATCH_PX: i32 = 10;
const LEGEND_MARGIN_PX: i32 = 5;
const LEGEND_CAPTION_GAP_PX: i32 = 5;
const LEGEND_CAPTION_SIZE: u32 = 8;

/// Per-category stacking bucket: (series index, pixel row).
type StackBucket = SmallVec<[(usize, i32); 8]>;

impl Chart {
    /// Draws the whole chart onto `surface`.
    ///
    /// Projections are refreshed from the current scale state first, so the
    /// call reflects every mutation made since the previous draw.
    pub fn draw_onto(&mut self, surface: &mut dyn Surface) -> ChartResult<()> {
        let res = self.draw_steps(surface);
        self.record(res)
    }

    fn draw_steps(&mut self, surface: &mut dyn Surface) -> ChartResult<()> {
        debug!(kind = ?self.kind, series = self.series.len(), "drawing chart");

        let scale = self.scale;
        for series in &mut self.series {
            series.project(&scale);
        }

        let lay = self.layout;
        let plot = RectPx::from_ltrb(
            lay.plot.left + lay.x_start,
            lay.plot.top + lay.y_start,
            lay.plot.right + lay.x_start,
            lay.plot.bottom + lay.y_start,
        );
        surface.stroke_rect(plot, Rgb::BLACK)?;
        surface.stroke_rect(lay.legend, Rgb::BLACK)?;

        match self.kind {
            ChartKind::Line => self.draw_line_data(surface)?,
            ChartKind::StackedBar => self.draw_stacked_data(surface)?,
        }

        // Zero baseline across the plot; the stacked variant thickens it so
        // it stays visible under the block outlines.
        let zero_y = self.scale.zero_row() + lay.y_start;
        let baseline = match self.kind {
            ChartKind::Line => RectPx::from_ltrb(lay.x_start, zero_y, plot.right, zero_y),
            ChartKind::StackedBar => {
                RectPx::from_ltrb(lay.x_start, zero_y - 1, plot.right, zero_y + 1)
            }
        };
        surface.fill_rect(baseline, Rgb::BLACK)?;

        match self.kind {
            ChartKind::Line => {
                axis::draw_horizontal(surface, &self.axis_style, plot.left, plot.right, plot.bottom, plot.left)?;
            }
            ChartKind::StackedBar => {
                if !self.x_vals.is_empty() {
                    let labels: Vec<String> = self.x_vals.iter().map(Category::label).collect();
                    axis::draw_horizontal_text_labels(
                        surface,
                        &self.axis_style,
                        plot.left,
                        plot.right,
                        plot.bottom,
                        &labels,
                        true,
                    )?;
                }
            }
        }
        axis::draw_vertical(
            surface,
            &self.axis_style,
            plot.left,
            plot.top,
            plot.bottom,
            zero_y,
            self.scale.value_span(),
        )?;

        self.draw_legend(surface)
    }

    /// Connects neighbor points of every series and marks each point with a
    /// small square.
    fn draw_line_data(&self, surface: &mut dyn Surface) -> ChartResult<()> {
        let lay = &self.layout;
        for key in 0..self.x_vals.len() {
            for series in &self.series {
                let prev = key.saturating_sub(1);
                let from = PointPx::new(
                    self.px_per_x * prev as i32 + lay.x_start,
                    series.rows_px[prev] + lay.y_start,
                );
                let to = PointPx::new(
                    self.px_per_x * key as i32 + lay.x_start,
                    series.rows_px[key] + lay.y_start,
                );
                surface.line(from, to, series.color)?;
                surface.stroke_rect(
                    RectPx::from_ltrb(to.x - 1, to.y - 1, to.x + 1, to.y + 1),
                    series.color,
                )?;
            }
        }
        Ok(())
    }

    /// Stacks one block per series per category, outward from the zero row.
    ///
    /// Blocks on each side are drawn farthest-from-zero first, so the block
    /// closest to the zero row always ends up on top.
    fn draw_stacked_data(&self, surface: &mut dyn Surface) -> ChartResult<()> {
        let lay = &self.layout;
        let zero_row = self.scale.zero_row();

        for key in 0..self.x_vals.len() {
            let mut below: StackBucket = SmallVec::new();
            let mut above: StackBucket = SmallVec::new();
            for (i, series) in self.series.iter().enumerate() {
                let row = series.rows_px[key];
                if row >= zero_row {
                    below.push((i, row));
                } else {
                    above.push((i, row));
                }
            }
            below.sort_by(|a, b| b.1.cmp(&a.1));
            above.sort_by(|a, b| a.1.cmp(&b.1));

            for &(i, row) in below.iter().chain(above.iter()) {
                let block = RectPx::from_ltrb(
                    self.px_per_x * key as i32 + lay.x_start,
                    row + lay.y_start,
                    self.px_per_x * (key as i32 + 1) + lay.x_start,
                    zero_row + lay.y_start,
                );
                draw_block(surface, block, self.series[i].color)?;
            }
        }
        Ok(())
    }

    /// Color swatch plus caption per series, stacked down the legend column.
    fn draw_legend(&self, surface: &mut dyn Surface) -> ChartResult<()> {
        let legend = self.layout.legend;
        for (i, series) in self.series.iter().enumerate() {
            let left = legend.left + LEGEND_MARGIN_PX;
            let top = legend.top + LEGEND_MARGIN_PX + i as i32 * LEGEND_ROW_PITCH;
            let swatch = RectPx::from_ltrb(left, top, left + LEGEND_SWATCH_PX, top + LEGEND_SWATCH_PX);
            draw_block(surface, swatch, series.color)?;

            let font = self
                .axis_style
                .font
                .clone()
                .with_size(LEGEND_CAPTION_SIZE)
                .with_color(series.color);
            surface.draw_text(
                &font,
                left + LEGEND_SWATCH_PX + LEGEND_CAPTION_GAP_PX,
                top + LEGEND_SWATCH_PX,
                &series.caption,
            )?;
        }
        Ok(())
    }
}

/// Filled rectangle with a darker outline shade.
fn draw_block(surface: &mut dyn Surface, rect: RectPx, color: Rgb) -> ChartResult<()> {
    let rect = rect.normalized();
    surface.fill_rect(rect, color)?;
    surface.stroke_rect(rect, color.darken(OUTLINE_DARKEN))
}
