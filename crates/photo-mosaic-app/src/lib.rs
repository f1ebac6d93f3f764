#![warn(missing_docs)]
//! # photo-mosaic-app
//!
//! ## Purpose
//! Orchestrates prompt enrichment, keyword resolution, image acquisition, and
//! mosaic rendering for `photo-mosaic`.
//!
//! ## Responsibilities
//! - Run the single linear generation pipeline per request.
//! - Update studio state with per-stage statuses and human-readable text.
//! - Provide the runtime enrichment kill-switch and version plumbing.
//! - Project studio state into a flat snapshot for shells.
//!
//! ## Data flow
//! [`MosaicRequest`] -> best-effort enrichment -> keyword resolution -> image
//! fetch -> tile-size policy -> progressive render onto [`CanvasSurface`] ->
//! explicit completion signal.
//!
//! ## Ownership and lifetimes
//! The pipeline borrows its collaborators for one synchronous run; the canvas
//! has exactly one writer and state snapshots are owned values.
//!
//! ## Error model
//! Enrichment failures are absorbed with the raw-text fallback. Image-source
//! and render failures wrap into [`AppError`] and terminate the run without
//! retry.
//!
//! ## Security and privacy notes
//! Status lines never embed prompt text; only fixed stage messages are shown.

use photo_mosaic_core::{CoreError, MosaicRequest, MosaicSpec, tile_size_for_complexity};
use photo_mosaic_prompt::{EnrichmentClient, resolve_keyword};
use photo_mosaic_render::{CanvasSurface, RenderError, RenderOutcome, render_mosaic};
use photo_mosaic_source::{ImageSource, ImageSourceError};
use photo_mosaic_ui::{StageStatus, StudioState};
use thiserror::Error;

/// Build-time application version loaded from root `VERSION` file.
pub const APP_VERSION: &str = env!("PHOTO_MOSAIC_VERSION");

/// Consolidated runtime status snapshot for simple shell projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStatus {
    /// Whether a new generation run may start right now.
    pub render_allowed: bool,
    /// Whether idle-state and the env kill-switch currently allow enrichment.
    pub enrichment_allowed: bool,
    /// Enrichment stage state as human-readable string.
    pub enrichment: String,
    /// Image fetch stage state.
    pub fetch: String,
    /// Render stage state.
    pub render: String,
    /// Current status line.
    pub status_line: String,
    /// Progress bar width as a percent string.
    pub progress: String,
}

/// Returns the app version sourced from root `VERSION`.
pub fn app_version() -> &'static str {
    APP_VERSION
}

/// Checks the runtime enrichment kill-switch env var.
///
/// Semantics:
/// - Unset => enrichment enabled.
/// - `0`, `false`, `off` (case-insensitive) => enrichment disabled.
/// - Any other value => enrichment enabled.
pub fn enrichment_enabled_from_env() -> bool {
    match std::env::var("PHOTO_MOSAIC_ENRICHMENT_ENABLED") {
        Ok(value) => {
            let normalized = value.trim().to_ascii_lowercase();
            !(normalized == "0" || normalized == "false" || normalized == "off")
        }
        Err(_) => true,
    }
}

/// Resolves the working prompt text for one run.
///
/// Enrichment is best-effort: it only runs when a client is supplied and the
/// raw text is non-blank, and any failure falls back to the raw text.
pub fn enriched_prompt_text(client: Option<&EnrichmentClient>, raw_text: &str) -> String {
    match client {
        Some(client) if !raw_text.trim().is_empty() => client.enrich_or_fallback(raw_text),
        _ => raw_text.to_string(),
    }
}

/// Runs one full mosaic generation pass.
///
/// # Errors
/// Returns [`AppError::ImageSource`] when the bitmap fetch fails (terminal,
/// status line set to `Error loading image.`), [`AppError::Core`] for spec
/// validation failures, and [`AppError::Render`] for render failures.
pub fn generate_mosaic(
    enrichment: Option<&EnrichmentClient>,
    source: &dyn ImageSource,
    canvas: &mut CanvasSurface,
    state: &mut StudioState,
    request: &MosaicRequest,
) -> Result<RenderOutcome, AppError> {
    state.reset_for_run();

    let raw_text = request.prompt.trim();
    let working_text = if enrichment.is_some() && !raw_text.is_empty() {
        state.enrichment = StageStatus::Running;
        state.set_status_line("Fetching creative prompt...");
        let enriched = enriched_prompt_text(enrichment, raw_text);
        state.enrichment = StageStatus::Healthy;
        enriched
    } else {
        raw_text.to_string()
    };

    let keyword = resolve_keyword(&working_text);

    state.fetch = StageStatus::Running;
    state.set_status_line("Loading image...");
    let buffer = match source.fetch_image(keyword.as_query()) {
        Ok(buffer) => {
            state.fetch = StageStatus::Healthy;
            buffer
        }
        Err(error) => {
            state.fetch = StageStatus::Degraded;
            state.set_status_line("Error loading image.");
            return Err(AppError::ImageSource(error));
        }
    };

    let tile_size = tile_size_for_complexity(request.complexity);
    let spec = MosaicSpec::new(
        buffer.width(),
        buffer.height(),
        canvas.width(),
        canvas.height(),
        tile_size,
    )
    .map_err(AppError::Core)?;

    state.render = StageStatus::Running;
    state.set_status_line("Generating mosaic...");
    let outcome = {
        let mut on_progress = |fraction: f64| state.apply_progress(fraction);
        render_mosaic(&buffer, &spec, canvas, &mut on_progress).map_err(AppError::Render)?
    };

    if outcome.degenerate {
        state.render = StageStatus::Degraded;
        state.set_status_line("Source image has no pixels.");
        return Ok(outcome);
    }

    // Completion is an explicit final step, never implied by loop exit.
    state.apply_progress(1.0);
    state.render = StageStatus::Healthy;
    state.set_status_line("Mosaic generation complete.");
    Ok(outcome)
}

/// Projects studio state into a flat status snapshot.
pub fn project_studio_status(state: &StudioState) -> RenderStatus {
    RenderStatus {
        render_allowed: state.can_start_render(),
        enrichment_allowed: state.can_start_render() && enrichment_enabled_from_env(),
        enrichment: format!("{:?}", state.enrichment),
        fetch: format!("{:?}", state.fetch),
        render: format!("{:?}", state.render),
        status_line: state.status_line.clone(),
        progress: state.progress_percent(),
    }
}

/// App integration error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Core model error.
    #[error("core error: {0}")]
    Core(CoreError),
    /// Image acquisition error.
    #[error("image source error: {0}")]
    ImageSource(ImageSourceError),
    /// Mosaic render error.
    #[error("render error: {0}")]
    Render(RenderError),
}
