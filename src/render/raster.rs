//! Software raster backend: an RGB pixel buffer with PNG encoding.
//!
//! Text rendering uses the embedded Spleen bitmap fonts by default, so charts
//! render without any font file on disk; configuring a font path switches the
//! surface to `ab_glyph` rasterization of that scalable font. A non-zero
//! `FontSpec.angle` rotates the text counterclockwise about its baseline
//! anchor; axis-aligned rotations map pixels exactly.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontArc, ScaleFont};
use image::{ImageFormat, RgbImage};
use spleen_font::{FONT_6X12, FONT_8X16, FONT_12X24, PSF2Font};

use crate::core::{PointPx, RectPx, Rgb};
use crate::error::{ChartError, ChartResult};
use crate::render::{FontSpec, Surface, TextExtent};

/// Raster surface backed by an RGB image buffer, white by default.
pub struct RasterSurface {
    image: RgbImage,
    ttf_cache: Option<(PathBuf, FontArc)>,
}

impl RasterSurface {
    /// Creates a white canvas of the given size.
    pub fn new(width: u32, height: u32) -> ChartResult<Self> {
        if width == 0 || height == 0 {
            return Err(ChartError::InvalidCanvas { width, height });
        }
        Ok(Self {
            image: RgbImage::from_pixel(width, height, image::Rgb([255, 255, 255])),
            ttf_cache: None,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Encodes the surface as PNG bytes (`image/png`).
    pub fn encode_png(&self) -> ChartResult<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.image
            .write_to(&mut buf, ImageFormat::Png)
            .map_err(|e| ChartError::Backend(format!("png encoding failed: {e}")))?;
        Ok(buf.into_inner())
    }

    /// Encodes the surface as PNG and writes it to `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    #[inline]
    fn put(&mut self, x: i32, y: i32, color: Rgb) {
        if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height() {
            self.image
                .put_pixel(x as u32, y as u32, image::Rgb([color.r, color.g, color.b]));
        }
    }

    /// Coverage-weighted blend of `color` over the existing pixel.
    fn blend(&mut self, x: i32, y: i32, color: Rgb, coverage: f32) {
        if x < 0 || y < 0 || x as u32 >= self.image.width() || y as u32 >= self.image.height() {
            return;
        }
        let c = coverage.clamp(0.0, 1.0);
        let bg = *self.image.get_pixel(x as u32, y as u32);
        let mix = |bg: u8, fg: u8| (f32::from(bg) * (1.0 - c) + f32::from(fg) * c) as u8;
        self.image.put_pixel(
            x as u32,
            y as u32,
            image::Rgb([mix(bg[0], color.r), mix(bg[1], color.g), mix(bg[2], color.b)]),
        );
    }

    fn ttf(&mut self, path: &Path) -> ChartResult<FontArc> {
        if let Some((cached_path, font)) = &self.ttf_cache {
            if cached_path == path {
                return Ok(font.clone());
            }
        }
        let bytes = std::fs::read(path)?;
        let font = FontArc::try_from_vec(bytes)
            .map_err(|e| ChartError::Backend(format!("failed to parse font file: {e}")))?;
        self.ttf_cache = Some((path.to_path_buf(), font.clone()));
        Ok(font)
    }

    fn ttf_extent(font: &FontArc, size: f32, text: &str) -> TextExtent {
        let scaled = font.as_scaled(size);
        let width: f32 = text
            .chars()
            .map(|ch| scaled.h_advance(font.glyph_id(ch)))
            .sum();
        let height = (scaled.ascent() - scaled.descent()).ceil() as i32;
        TextExtent::new(width.ceil() as i32, height, height)
    }

    fn draw_ttf_text(
        &mut self,
        font: &FontArc,
        size: f32,
        color: Rgb,
        angle: i32,
        x: i32,
        y: i32,
        text: &str,
    ) -> TextExtent {
        let rotation = Rotation::about(angle, x, y);
        let scaled = font.as_scaled(size);
        let mut caret = x as f32;
        for ch in text.chars() {
            let glyph_id = font.glyph_id(ch);
            let glyph = glyph_id.with_scale_and_position(size, ab_glyph::point(caret, y as f32));
            caret += scaled.h_advance(glyph_id);

            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|px, py, coverage| {
                    let gx = px as f32 + bounds.min.x;
                    let gy = py as f32 + bounds.min.y;
                    match rotation {
                        Some(rot) => {
                            let (rx, ry) = rot.apply(gx, gy);
                            self.blend(rx, ry, color, coverage);
                        }
                        None => self.blend(gx as i32, gy as i32, color, coverage),
                    }
                });
            }
        }
        Self::ttf_extent(font, size, text)
    }

    fn draw_bitmap_text(
        &mut self,
        size: u32,
        color: Rgb,
        angle: i32,
        x: i32,
        y: i32,
        text: &str,
    ) -> ChartResult<TextExtent> {
        let (data, glyph_w, glyph_h) = bitmap_font(size);
        let Ok(mut font) = PSF2Font::new(data) else {
            return Err(ChartError::Backend(
                "failed to parse embedded bitmap font".to_owned(),
            ));
        };

        let rotation = Rotation::about(angle, x, y);
        // `y` is the baseline; bitmap glyphs hang from their top edge.
        let top = y - glyph_h;
        let mut cursor_x = x;
        for ch in text.chars() {
            let utf8 = ch.to_string();
            if let Some(glyph) = font.glyph_for_utf8(utf8.as_bytes()) {
                for (row_y, row) in glyph.enumerate() {
                    for (col_x, on) in row.enumerate() {
                        if on {
                            let gx = cursor_x + col_x as i32;
                            let gy = top + row_y as i32;
                            match rotation {
                                Some(rot) => {
                                    let (rx, ry) = rot.apply(gx as f32, gy as f32);
                                    self.put(rx, ry, color);
                                }
                                None => self.put(gx, gy, color),
                            }
                        }
                    }
                }
            }
            cursor_x += glyph_w;
        }
        Ok(bitmap_extent(size, text))
    }
}

impl Surface for RasterSurface {
    fn line(&mut self, from: PointPx, to: PointPx, color: Rgb) -> ChartResult<()> {
        // Bresenham.
        let (mut x, mut y) = (from.x, from.y);
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put(x, y, color);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
        Ok(())
    }

    fn fill_rect(&mut self, rect: RectPx, color: Rgb) -> ChartResult<()> {
        let rect = rect.normalized();
        for y in rect.top..=rect.bottom {
            for x in rect.left..=rect.right {
                self.put(x, y, color);
            }
        }
        Ok(())
    }

    fn stroke_rect(&mut self, rect: RectPx, color: Rgb) -> ChartResult<()> {
        let rect = rect.normalized();
        self.line(PointPx::new(rect.left, rect.top), PointPx::new(rect.right, rect.top), color)?;
        self.line(PointPx::new(rect.right, rect.top), PointPx::new(rect.right, rect.bottom), color)?;
        self.line(PointPx::new(rect.right, rect.bottom), PointPx::new(rect.left, rect.bottom), color)?;
        self.line(PointPx::new(rect.left, rect.bottom), PointPx::new(rect.left, rect.top), color)
    }

    fn measure_text(&mut self, font: &FontSpec, text: &str) -> ChartResult<TextExtent> {
        let extent = match &font.path {
            Some(path) => {
                let ttf = self.ttf(path)?;
                Self::ttf_extent(&ttf, font.size as f32, text)
            }
            None => bitmap_extent(font.size, text),
        };
        Ok(rotated_extent(extent, font.angle))
    }

    fn draw_text(&mut self, font: &FontSpec, x: i32, y: i32, text: &str) -> ChartResult<TextExtent> {
        let extent = match &font.path {
            Some(path) => {
                let ttf = self.ttf(path)?;
                self.draw_ttf_text(&ttf, font.size as f32, font.color, font.angle, x, y, text)
            }
            None => self.draw_bitmap_text(font.size, font.color, font.angle, x, y, text)?,
        };
        Ok(rotated_extent(extent, font.angle))
    }
}

/// Rotation about a text anchor, counterclockwise in screen coordinates
/// (y grows downward).
#[derive(Clone, Copy)]
struct Rotation {
    sin: f32,
    cos: f32,
    origin_x: f32,
    origin_y: f32,
}

impl Rotation {
    fn about(angle: i32, x: i32, y: i32) -> Option<Self> {
        if angle == 0 {
            return None;
        }
        let rad = (angle as f32).to_radians();
        Some(Self {
            sin: rad.sin(),
            cos: rad.cos(),
            origin_x: x as f32,
            origin_y: y as f32,
        })
    }

    fn apply(self, x: f32, y: f32) -> (i32, i32) {
        let dx = x - self.origin_x;
        let dy = y - self.origin_y;
        (
            (self.origin_x + dx * self.cos + dy * self.sin).round() as i32,
            (self.origin_y - dx * self.sin + dy * self.cos).round() as i32,
        )
    }
}

/// Axis-aligned bounding box of the rotated text box.
fn rotated_extent(extent: TextExtent, angle: i32) -> TextExtent {
    if angle == 0 {
        return extent;
    }
    let rad = (angle as f32).to_radians();
    let (sin, cos) = (rad.sin().abs(), rad.cos().abs());
    let width = (extent.width as f32 * cos + extent.height as f32 * sin).round() as i32;
    let height = (extent.width as f32 * sin + extent.height as f32 * cos).round() as i32;
    TextExtent::new(width, height, height)
}

/// Nearest embedded bitmap font for the requested pixel size.
fn bitmap_font(size: u32) -> (&'static [u8], i32, i32) {
    if size <= 12 {
        (FONT_6X12, 6, 12)
    } else if size <= 20 {
        (FONT_8X16, 8, 16)
    } else {
        (FONT_12X24, 12, 24)
    }
}

fn bitmap_extent(size: u32, text: &str) -> TextExtent {
    let (_, glyph_w, glyph_h) = bitmap_font(size);
    TextExtent::new(text.chars().count() as i32 * glyph_w, glyph_h, glyph_h)
}
