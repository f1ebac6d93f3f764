//! Integration tests for JSON request intake into the pipeline.

mod common;

use photo_mosaic_app::generate_mosaic;
use photo_mosaic_core::MosaicRequest;
use photo_mosaic_render::CanvasSurface;
use photo_mosaic_ui::StudioState;

#[test]
fn request_intake_tests_decodes_and_renders_json_request() {
    let raw = serde_json::json!({
        "prompt": "sunset over the ridge",
        "complexity": 20
    });
    let request = MosaicRequest::from_json_bytes(raw.to_string().as_bytes())
        .expect("request should decode");

    // Complexity 20 engages the tile-size clamp.
    assert_eq!(request.complexity, 20);

    let source = common::UniformImageSource::new();
    let mut canvas = CanvasSurface::new(12, 8);
    let mut state = StudioState::new("v0.1.0");

    generate_mosaic(None, &source, &mut canvas, &mut state, &request)
        .expect("pipeline should complete");

    assert_eq!(source.recorded_queries(), vec!["sunset".to_string()]);
}
