//! Integration tests for the explicit completion signal.

mod common;

use photo_mosaic_app::generate_mosaic;
use photo_mosaic_render::CanvasSurface;
use photo_mosaic_ui::StudioState;

#[test]
fn progress_completion_tests_reports_full_bar_after_run() {
    let source = common::UniformImageSource::new();
    let mut canvas = CanvasSurface::new(12, 8);
    let mut state = StudioState::new("v0.1.0");
    let request = common::fixture_request("forest", 0);

    generate_mosaic(None, &source, &mut canvas, &mut state, &request)
        .expect("pipeline should complete");

    // The renderer never reports 1.0; the orchestrator's final step does.
    assert_eq!(state.progress, 1.0);
    assert_eq!(state.progress_percent(), "100%");
}
