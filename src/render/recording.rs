use crate::core::{PointPx, RectPx, Rgb};
use crate::error::ChartResult;
use crate::render::{FontSpec, Surface, TextExtent};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Line {
        from: PointPx,
        to: PointPx,
        color: Rgb,
    },
    FillRect {
        rect: RectPx,
        color: Rgb,
    },
    StrokeRect {
        rect: RectPx,
        color: Rgb,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        color: Rgb,
        size: u32,
    },
}

/// Draw-call-logging surface used by tests and headless checks.
///
/// Text metrics use a fixed per-character advance so label layout is
/// deterministic without any font stack; widening the advance forces
/// label-collision skips on purpose.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
    char_width: Option<i32>,
}

/// Synthetic glyph advance used when none is configured.
const DEFAULT_CHAR_WIDTH: i32 = 6;

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the synthetic glyph advance.
    #[must_use]
    pub fn with_char_width(char_width: i32) -> Self {
        Self {
            ops: Vec::new(),
            char_width: Some(char_width),
        }
    }

    fn extent(&self, font: &FontSpec, text: &str) -> TextExtent {
        let advance = self.char_width.unwrap_or(DEFAULT_CHAR_WIDTH);
        let height = font.size as i32;
        TextExtent::new(text.chars().count() as i32 * advance, height, height)
    }

    /// Recorded text draws, as (x, width, caption) triples in draw order.
    #[must_use]
    pub fn drawn_labels(&self) -> Vec<(i32, i32, &str)> {
        let advance = self.char_width.unwrap_or(DEFAULT_CHAR_WIDTH);
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { x, text, .. } => {
                    Some((*x, text.chars().count() as i32 * advance, text.as_str()))
                }
                _ => None,
            })
            .collect()
    }

    /// Recorded filled rectangles, in draw order.
    #[must_use]
    pub fn filled_rects(&self) -> Vec<(RectPx, Rgb)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn line(&mut self, from: PointPx, to: PointPx, color: Rgb) -> ChartResult<()> {
        self.ops.push(DrawOp::Line { from, to, color });
        Ok(())
    }

    fn fill_rect(&mut self, rect: RectPx, color: Rgb) -> ChartResult<()> {
        self.ops.push(DrawOp::FillRect {
            rect: rect.normalized(),
            color,
        });
        Ok(())
    }

    fn stroke_rect(&mut self, rect: RectPx, color: Rgb) -> ChartResult<()> {
        self.ops.push(DrawOp::StrokeRect {
            rect: rect.normalized(),
            color,
        });
        Ok(())
    }

    fn measure_text(&mut self, font: &FontSpec, text: &str) -> ChartResult<TextExtent> {
        Ok(self.extent(font, text))
    }

    fn draw_text(&mut self, font: &FontSpec, x: i32, y: i32, text: &str) -> ChartResult<TextExtent> {
        let extent = self.extent(font, text);
        self.ops.push(DrawOp::Text {
            x,
            y,
            text: text.to_owned(),
            color: font.color,
            size: font.size,
        });
        Ok(extent)
    }
}
