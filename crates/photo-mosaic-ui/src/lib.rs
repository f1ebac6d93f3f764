#![warn(missing_docs)]
//! # photo-mosaic-ui
//!
//! ## Purpose
//! Defines the UI-facing runtime state model for `photo-mosaic`.
//!
//! ## Responsibilities
//! - Represent per-stage pipeline statuses (enrichment, fetch, render).
//! - Hold the human-readable status line shown next to the canvas.
//! - Project the progress fraction into a display-safe bar width.
//! - Guard against overlapping generation runs.
//!
//! ## Data flow
//! Orchestration events mutate [`StudioState`], which drives the rendered
//! status and progress bar in whatever shell hosts the pipeline.
//!
//! ## Ownership and lifetimes
//! `StudioState` owns all string and status values to keep event handling
//! free of borrow coupling with the render pass.
//!
//! ## Error model
//! This crate favors explicit state over recoverable errors. Invalid
//! combinations are prevented by guard methods.
//!
//! ## Security and privacy notes
//! Studio state intentionally excludes raw prompt text and pixel data.

/// Generic stage status used for the enrichment/fetch/render flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    /// Stage has not started.
    Idle,
    /// Stage is currently running.
    Running,
    /// Stage completed successfully.
    Healthy,
    /// Stage encountered a non-fatal or terminal error.
    Degraded,
}

/// Aggregate runtime state for the mosaic studio shell.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioState {
    /// App version string sourced from root `VERSION`.
    pub version: String,
    /// Prompt enrichment stage status.
    pub enrichment: StageStatus,
    /// Image fetch stage status.
    pub fetch: StageStatus,
    /// Mosaic render stage status.
    pub render: StageStatus,
    /// Human-readable status line.
    pub status_line: String,
    /// Progress fraction in `[0, 1]`, monotonically non-decreasing per run.
    pub progress: f64,
}

impl StudioState {
    /// Creates default studio state.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            enrichment: StageStatus::Idle,
            fetch: StageStatus::Idle,
            render: StageStatus::Idle,
            status_line: "Ready".to_string(),
            progress: 0.0,
        }
    }

    /// Replaces the status line.
    pub fn set_status_line(&mut self, line: impl Into<String>) {
        self.status_line = line.into();
    }

    /// Applies a progress fraction, clamped to `[0, 1]`.
    ///
    /// The bar never moves backwards within a run; stale or repeated reports
    /// are absorbed silently.
    pub fn apply_progress(&mut self, fraction: f64) {
        let clamped = fraction.clamp(0.0, 1.0);
        if clamped > self.progress {
            self.progress = clamped;
        }
    }

    /// Renders the progress bar width as a percent string.
    pub fn progress_percent(&self) -> String {
        format!("{:.0}%", self.progress * 100.0)
    }

    /// Resets stage statuses and progress for a fresh run.
    pub fn reset_for_run(&mut self) {
        self.enrichment = StageStatus::Idle;
        self.fetch = StageStatus::Idle;
        self.render = StageStatus::Idle;
        self.progress = 0.0;
        self.status_line = "Ready".to_string();
    }

    /// Returns `true` when no stage is currently running.
    ///
    /// The renderer itself is not re-entrant-safe; this guard is how the
    /// shell prevents overlapping generation runs.
    pub fn can_start_render(&self) -> bool {
        self.enrichment != StageStatus::Running
            && self.fetch != StageStatus::Running
            && self.render != StageStatus::Running
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for progress projection and the re-entrancy guard.

    use super::*;

    #[test]
    fn progress_clamps_and_never_moves_backwards() {
        let mut state = StudioState::new("v0.1.0");
        state.apply_progress(0.5);
        state.apply_progress(0.25);
        assert_eq!(state.progress, 0.5);

        state.apply_progress(7.0);
        assert_eq!(state.progress, 1.0);
        assert_eq!(state.progress_percent(), "100%");
    }

    #[test]
    fn render_guard_blocks_while_any_stage_runs() {
        let mut state = StudioState::new("v0.1.0");
        assert!(state.can_start_render());

        state.fetch = StageStatus::Running;
        assert!(!state.can_start_render());

        state.fetch = StageStatus::Healthy;
        state.render = StageStatus::Running;
        assert!(!state.can_start_render());

        state.reset_for_run();
        assert!(state.can_start_render());
        assert_eq!(state.progress, 0.0);
    }
}
