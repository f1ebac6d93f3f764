//! Tests painted geometry and colors at 1:1 destination scale.

use photo_mosaic_core::{MosaicSpec, PixelBuffer, Rgb};
use photo_mosaic_render::{PaintRect, render_mosaic};

#[test]
fn identity_scale_tests_rects_equal_tile_origins_and_size() {
    let buffer =
        PixelBuffer::solid(10, 6, Rgb { r: 40, g: 50, b: 60 }).expect("buffer should build");
    let spec = MosaicSpec::new(10, 6, 10, 6, 4).expect("spec should build");

    let mut rects = Vec::new();
    let mut paint = |rect: PaintRect, _color: Rgb| rects.push(rect);
    let mut progress = |_fraction: f64| {};
    render_mosaic(&buffer, &spec, &mut paint, &mut progress).expect("render should work");

    // Edge tiles still paint the full tile extent; the surface clips.
    let expected = [
        (0.0, 0.0),
        (4.0, 0.0),
        (8.0, 0.0),
        (0.0, 4.0),
        (4.0, 4.0),
        (8.0, 4.0),
    ];
    assert_eq!(rects.len(), expected.len());
    for (rect, (x, y)) in rects.iter().zip(expected) {
        assert_eq!(rect.x, x);
        assert_eq!(rect.y, y);
        assert_eq!(rect.width, 4.0);
        assert_eq!(rect.height, 4.0);
    }
}

#[test]
fn identity_scale_tests_uniform_source_paints_exact_color() {
    let color = Rgb { r: 123, g: 45, b: 67 };
    let buffer = PixelBuffer::solid(9, 9, color).expect("buffer should build");
    let spec = MosaicSpec::new(9, 9, 9, 9, 4).expect("spec should build");

    let mut colors = Vec::new();
    let mut paint = |_rect: PaintRect, fill: Rgb| colors.push(fill);
    let mut progress = |_fraction: f64| {};
    render_mosaic(&buffer, &spec, &mut paint, &mut progress).expect("render should work");

    assert!(!colors.is_empty());
    assert!(colors.iter().all(|fill| *fill == color));
}

#[test]
fn identity_scale_tests_half_scale_halves_rects() {
    let buffer =
        PixelBuffer::solid(10, 10, Rgb { r: 1, g: 1, b: 1 }).expect("buffer should build");
    let spec = MosaicSpec::new(10, 10, 5, 5, 5).expect("spec should build");

    let mut rects = Vec::new();
    let mut paint = |rect: PaintRect, _color: Rgb| rects.push(rect);
    let mut progress = |_fraction: f64| {};
    render_mosaic(&buffer, &spec, &mut paint, &mut progress).expect("render should work");

    assert_eq!(rects.len(), 4);
    assert_eq!(rects[0], PaintRect { x: 0.0, y: 0.0, width: 2.5, height: 2.5 });
    assert_eq!(rects[3], PaintRect { x: 2.5, y: 2.5, width: 2.5, height: 2.5 });
}
