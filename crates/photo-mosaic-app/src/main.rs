#![warn(missing_docs)]
//! # photo-mosaic-app binary
//!
//! Offline CLI demo: renders a mosaic of a deterministic synthetic photograph
//! selected by the prompt keyword.

use photo_mosaic_app::{AppError, app_version, enrichment_enabled_from_env, generate_mosaic};
use photo_mosaic_core::MosaicRequest;
use photo_mosaic_render::CanvasSurface;
use photo_mosaic_source::{DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH, SyntheticImageSource};
use photo_mosaic_ui::StudioState;

/// CLI entry point.
fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let prompt = args.first().cloned().unwrap_or_default();
    let complexity = args
        .get(1)
        .and_then(|value| value.parse().ok())
        .unwrap_or(5);

    if let Err(error) = run(&prompt, complexity) {
        eprintln!("mosaic generation failed: {error}");
        std::process::exit(1);
    }
}

fn run(prompt: &str, complexity: u32) -> Result<(), AppError> {
    println!("photo-mosaic {}", app_version());
    println!(
        "enrichment_enabled={} (PHOTO_MOSAIC_ENRICHMENT_ENABLED)",
        enrichment_enabled_from_env()
    );

    let source = SyntheticImageSource::new();
    let mut canvas = CanvasSurface::new(DEFAULT_IMAGE_WIDTH, DEFAULT_IMAGE_HEIGHT);
    let mut state = StudioState::new(app_version());
    let request = MosaicRequest {
        prompt: prompt.to_string(),
        complexity,
    };

    // The demo runs offline: no enrichment transport is wired in.
    let outcome = generate_mosaic(None, &source, &mut canvas, &mut state, &request)?;

    println!("status: {}", state.status_line);
    println!("tiles painted: {}", outcome.tiles_painted);
    println!("rows completed: {}", outcome.rows_completed);
    println!("progress: {}", state.progress_percent());
    Ok(())
}
