//! Axis rendering: tick walks outward from the zero mark with greedy
//! label-collision avoidance.
//!
//! All three entry points draw through the injected [`Surface`] so the same
//! code path serves the raster backend and the recording test double. The
//! collision policy is shared: the first caption on each walk direction is
//! always drawn; a later caption is drawn only when its leading edge clears
//! the trailing edge of the last caption drawn in that direction.

use crate::core::types::{PointPx, Rgb};
use crate::error::{ChartError, ChartResult};
use crate::render::{FontSpec, Surface};

/// Distance between adjacent tick marks, in pixels.
pub const TICK_SPACING_PX: i32 = 10;
/// Half-length of a tick mark across the axis line.
const TICK_HALF_LEN_PX: i32 = 5;

/// Axis line color plus caption font for one axis pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisStyle {
    pub color: Rgb,
    pub font: FontSpec,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            color: Rgb::BLACK,
            font: FontSpec::default(),
        }
    }
}

impl AxisStyle {
    /// Configures caption size, axis color, an optional distinct caption
    /// color, and caption rotation. Captions inherit the axis color unless
    /// `label_color` is given.
    pub fn set_font(&mut self, size: u32, color: Rgb, label_color: Option<Rgb>, angle: i32) {
        self.color = color;
        self.font.size = size;
        self.font.color = label_color.unwrap_or(color);
        self.font.angle = angle;
    }
}

/// Draws a horizontal numeric axis along `y`, spanning `x_begin..x_end`, with
/// the zero mark at `x_zero`. Captions are the signed pixel distance from the
/// zero mark. `x_begin`/`x_end` may be given in either order.
pub fn draw_horizontal(
    surface: &mut dyn Surface,
    style: &AxisStyle,
    x_begin: i32,
    x_end: i32,
    y: i32,
    x_zero: i32,
) -> ChartResult<()> {
    check_non_negative(&[
        ("x_begin", x_begin),
        ("x_end", x_end),
        ("y", y),
        ("x_zero", x_zero),
    ])?;
    let (x_begin, x_end) = ordered(x_begin, x_end);
    check_zero_within(x_zero, x_begin, x_end)?;

    let mark_top = y - TICK_HALF_LEN_PX;
    let mark_bottom = y + TICK_HALF_LEN_PX;
    surface.line(PointPx::new(x_begin, y), PointPx::new(x_end, y), style.color)?;

    // Walk right from the zero mark.
    let mut prev_end = 0;
    let mut first = true;
    let mut x = x_zero;
    while x <= x_end {
        surface.line(PointPx::new(x, mark_top), PointPx::new(x, mark_bottom), style.color)?;

        let caption = (x - x_zero).to_string();
        let extent = surface.measure_text(&style.font, &caption)?;
        let half = extent.width / 2;
        if first || x - half > prev_end {
            surface.draw_text(&style.font, x - half, mark_bottom + extent.height, &caption)?;
            prev_end = x + half;
            first = false;
        }
        x += TICK_SPACING_PX;
    }

    // Walk left.
    let mut prev_begin = 0;
    let mut first = true;
    let mut x = x_zero;
    while x >= x_begin {
        surface.line(PointPx::new(x, mark_top), PointPx::new(x, mark_bottom), style.color)?;

        let caption = (x - x_zero).to_string();
        let extent = surface.measure_text(&style.font, &caption)?;
        let half = extent.width / 2;
        if first || x + half < prev_begin {
            surface.draw_text(&style.font, x - half, mark_bottom + extent.height, &caption)?;
            prev_begin = x - half;
            first = false;
        }
        x -= TICK_SPACING_PX;
    }

    Ok(())
}

/// Draws a vertical numeric axis along `x`, spanning `y_begin..y_end`, with
/// the zero mark at `y_zero`. `value_span` is the data-unit length the whole
/// segment represents; each tick caption advances by
/// `trunc(value_span * 10 / segment_length)`, positive above the zero row.
pub fn draw_vertical(
    surface: &mut dyn Surface,
    style: &AxisStyle,
    x: i32,
    y_begin: i32,
    y_end: i32,
    y_zero: i32,
    value_span: f64,
) -> ChartResult<()> {
    check_non_negative(&[
        ("x", x),
        ("y_begin", y_begin),
        ("y_end", y_end),
        ("y_zero", y_zero),
    ])?;
    let (y_begin, y_end) = ordered(y_begin, y_end);
    check_zero_within(y_zero, y_begin, y_end)?;
    if y_begin == y_end {
        return Err(ChartError::InvalidData(
            "vertical axis segment is degenerate".to_owned(),
        ));
    }

    let delta_val =
        (value_span * f64::from(TICK_SPACING_PX) / f64::from(y_end - y_begin)) as i64;

    let mark_left = x - TICK_HALF_LEN_PX;
    let mark_right = x + TICK_HALF_LEN_PX;
    surface.line(PointPx::new(x, y_begin), PointPx::new(x, y_end), style.color)?;

    // Walk up from the zero mark; values grow positive.
    let mut prev_begin = 0;
    let mut first = true;
    let mut cur_val: i64 = 0;
    let mut y = y_zero;
    while y >= y_begin {
        surface.line(PointPx::new(mark_left, y), PointPx::new(mark_right, y), style.color)?;

        let caption = cur_val.to_string();
        cur_val += delta_val;
        let extent = surface.measure_text(&style.font, &caption)?;
        let half = extent.height / 2;
        if first || y + half < prev_begin {
            surface.draw_text(&style.font, mark_left - extent.width, y + half, &caption)?;
            prev_begin = y - half;
            first = false;
        }
        y -= TICK_SPACING_PX;
    }

    // Walk down; values grow negative.
    let mut prev_end = 0;
    let mut first = true;
    let mut cur_val: i64 = 0;
    let mut y = y_zero;
    while y <= y_end {
        surface.line(PointPx::new(mark_left, y), PointPx::new(mark_right, y), style.color)?;

        let caption = cur_val.to_string();
        cur_val -= delta_val;
        let extent = surface.measure_text(&style.font, &caption)?;
        let half = extent.height / 2;
        if first || y - half > prev_end {
            surface.draw_text(&style.font, mark_left - extent.width, y + half, &caption)?;
            prev_end = y + half;
            first = false;
        }
        y += TICK_SPACING_PX;
    }

    Ok(())
}

/// Draws a horizontal axis whose captions come from an explicit label list.
///
/// The segment is divided into `labels.len()` equal sections with a tick at
/// the end of each. With `full_section` a caption is centered across its
/// section; otherwise it is centered on its tick.
pub fn draw_horizontal_text_labels<S: AsRef<str>>(
    surface: &mut dyn Surface,
    style: &AxisStyle,
    x_begin: i32,
    x_end: i32,
    y: i32,
    labels: &[S],
    full_section: bool,
) -> ChartResult<()> {
    check_non_negative(&[("x_begin", x_begin), ("x_end", x_end), ("y", y)])?;
    let (x_begin, x_end) = ordered(x_begin, x_end);
    if labels.is_empty() {
        return Err(ChartError::InvalidData(
            "category axis needs at least one label".to_owned(),
        ));
    }

    let spacing = (x_end - x_begin) / labels.len() as i32;
    let mark_top = y - TICK_HALF_LEN_PX;
    let mark_bottom = y + TICK_HALF_LEN_PX;
    surface.line(PointPx::new(x_begin, y), PointPx::new(x_end, y), style.color)?;

    let mut prev_end = 0;
    let mut first = true;
    let mut cur = x_begin;
    let mut next = cur + spacing;
    for label in labels {
        let label = label.as_ref();
        surface.line(PointPx::new(next, mark_top), PointPx::new(next, mark_bottom), style.color)?;

        let extent = surface.measure_text(&style.font, label)?;
        let half = extent.width / 2;
        if first || cur - half > prev_end {
            let text_x = if full_section {
                cur + (next - cur - extent.width) / 2
            } else {
                next - half
            };
            // Multi-line captions hang from their first line.
            surface.draw_text(&style.font, text_x, mark_bottom + extent.first_line_height, label)?;
            prev_end = cur + half;
            first = false;
        }

        cur = next;
        next = cur + spacing;
    }

    Ok(())
}

fn ordered(begin: i32, end: i32) -> (i32, i32) {
    if begin > end { (end, begin) } else { (begin, end) }
}

fn check_non_negative(params: &[(&str, i32)]) -> ChartResult<()> {
    for &(name, value) in params {
        if value < 0 {
            return Err(ChartError::InvalidData(format!(
                "axis coordinate `{name}` must not be negative, got {value}"
            )));
        }
    }
    Ok(())
}

fn check_zero_within(zero: i32, begin: i32, end: i32) -> ChartResult<()> {
    if zero < begin || zero > end {
        return Err(ChartError::ZeroOutsideAxis { zero, begin, end });
    }
    Ok(())
}
