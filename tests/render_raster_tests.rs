#![cfg(feature = "raster-backend")]

use barline::{FontSpec, RasterSurface, Surface};

/// Bounding box (width, height) of the non-white pixels of an encoded PNG.
fn ink_bbox(bytes: &[u8]) -> (u32, u32) {
    let decoded = image::load_from_memory(bytes).expect("valid PNG").to_rgb8();
    let mut min = (u32::MAX, u32::MAX);
    let mut max = (0u32, 0u32);
    for (x, y, pixel) in decoded.enumerate_pixels() {
        if pixel.0 != [255, 255, 255] {
            min = (min.0.min(x), min.1.min(y));
            max = (max.0.max(x), max.1.max(y));
        }
    }
    assert!(min.0 <= max.0, "expected some ink");
    (max.0 - min.0 + 1, max.1 - min.1 + 1)
}

#[test]
fn rotated_text_measure_swaps_the_extent_at_right_angles() {
    let mut surface = RasterSurface::new(120, 120).expect("canvas");

    let flat = FontSpec::default();
    let upright = FontSpec {
        angle: 90,
        ..FontSpec::default()
    };

    let base = surface.measure_text(&flat, "abc").expect("measure");
    let turned = surface.measure_text(&upright, "abc").expect("measure");

    assert_eq!((turned.width, turned.height), (base.height, base.width));
}

#[test]
fn rotated_text_draws_vertically() {
    let mut flat_surface = RasterSurface::new(120, 120).expect("canvas");
    flat_surface
        .draw_text(&FontSpec::default(), 60, 60, "www")
        .expect("draw");
    let (flat_w, flat_h) = ink_bbox(&flat_surface.encode_png().expect("encode"));
    assert!(flat_w > flat_h, "horizontal text is wider than tall");

    let mut turned_surface = RasterSurface::new(120, 120).expect("canvas");
    let upright = FontSpec {
        angle: 90,
        ..FontSpec::default()
    };
    turned_surface
        .draw_text(&upright, 60, 60, "www")
        .expect("draw");
    let (turned_w, turned_h) = ink_bbox(&turned_surface.encode_png().expect("encode"));
    assert!(turned_h > turned_w, "rotated text is taller than wide");
}
