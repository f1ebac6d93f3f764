//! Tests the tile-grid paint call count against the ceiling formula.

use photo_mosaic_core::{MosaicSpec, PixelBuffer, Rgb};
use photo_mosaic_render::{PaintRect, render_mosaic};

fn count_fills(width: u32, height: u32, tile_size: u32) -> usize {
    let buffer =
        PixelBuffer::solid(width, height, Rgb { r: 1, g: 2, b: 3 }).expect("buffer should build");
    let spec = MosaicSpec::new(width, height, width, height, tile_size).expect("spec should build");

    let mut fills = 0_usize;
    let mut paint = |_rect: PaintRect, _color: Rgb| fills += 1;
    let mut progress = |_fraction: f64| {};
    render_mosaic(&buffer, &spec, &mut paint, &mut progress).expect("render should work");
    fills
}

fn expected_tiles(extent: u32, tile_size: u32) -> usize {
    extent.div_ceil(tile_size) as usize
}

#[test]
fn paint_call_count_tests_matches_ceiling_grid() {
    for (width, height, tile_size) in [
        (10, 10, 5),
        (25, 10, 10),
        (7, 3, 2),
        (800, 600, 50),
        (1, 1, 1),
        (9, 9, 4),
    ] {
        let expected = expected_tiles(width, tile_size) * expected_tiles(height, tile_size);
        assert_eq!(
            count_fills(width, height, tile_size),
            expected,
            "grid {width}x{height} with tile {tile_size}"
        );
    }
}

#[test]
fn paint_call_count_tests_tile_one_paints_per_pixel() {
    assert_eq!(count_fills(4, 3, 1), 12);
}
