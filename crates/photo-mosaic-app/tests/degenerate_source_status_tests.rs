//! Integration tests for degenerate-source reporting.

mod common;

use photo_mosaic_app::generate_mosaic;
use photo_mosaic_core::PixelBuffer;
use photo_mosaic_render::CanvasSurface;
use photo_mosaic_source::{ImageSource, ImageSourceError};
use photo_mosaic_ui::{StageStatus, StudioState};

#[derive(Debug)]
struct EmptyImageSource;

impl ImageSource for EmptyImageSource {
    fn fetch_image(&self, _query: &str) -> Result<PixelBuffer, ImageSourceError> {
        PixelBuffer::new(0, 600, Vec::new())
            .map_err(|error| ImageSourceError::Unavailable(error.to_string()))
    }
}

#[test]
fn degenerate_source_status_tests_no_op_with_reported_condition() {
    let source = EmptyImageSource;
    let mut canvas = CanvasSurface::new(12, 8);
    let before = canvas.clone();
    let mut state = StudioState::new("v0.1.0");
    let request = common::fixture_request("forest", 5);

    let outcome = generate_mosaic(None, &source, &mut canvas, &mut state, &request)
        .expect("degenerate input is a no-op, not a failure");

    assert!(outcome.degenerate);
    assert_eq!(outcome.tiles_painted, 0);
    assert_eq!(canvas, before);
    assert_eq!(state.render, StageStatus::Degraded);
    assert_eq!(state.status_line, "Source image has no pixels.");
    assert_eq!(state.progress, 0.0);
}
