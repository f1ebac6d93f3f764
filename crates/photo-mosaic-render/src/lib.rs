#![warn(missing_docs)]
//! # photo-mosaic-render
//!
//! ## Purpose
//! Renders the progressive tile-averaged mosaic of a source bitmap onto a
//! destination surface whose dimensions may differ from the source.
//!
//! ## Responsibilities
//! - Walk tile origins row-major across the source buffer.
//! - Paint one scaled, solid-color rectangle per tile through [`PaintSink`].
//! - Report row-level progress fractions through [`ProgressSink`].
//! - Provide [`CanvasSurface`], an owned RGBA destination with clipped fills.
//!
//! ## Data flow
//! Decoded [`PixelBuffer`] + [`MosaicSpec`] -> [`render_mosaic`] -> paint and
//! progress callbacks consumed by the orchestration layer.
//!
//! ## Ownership and lifetimes
//! The renderer borrows the source buffer immutably and the sinks mutably for
//! the duration of one synchronous pass; it holds no state across calls and
//! the destination surface has exactly one writer.
//!
//! ## Error model
//! Geometry disagreements between spec and buffer fail with [`RenderError`].
//! Zero-dimension sources are not errors: the pass degrades to a reported
//! no-op with zero paint calls (see [`RenderOutcome::degenerate`]).
//!
//! ## Security and privacy notes
//! No pixel data leaves this crate except through the caller-supplied sinks.

use photo_mosaic_core::{CoreError, MosaicSpec, PixelBuffer, Rgb, tile_mean_color};
use thiserror::Error;

/// Destination rectangle for one tile fill, in canvas coordinates.
///
/// Coordinates are fractional because tiles scale by `dest / source` ratios;
/// integer snapping is the paint surface's concern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Rectangle width.
    pub width: f64,
    /// Rectangle height.
    pub height: f64,
}

/// Receives one opaque fill per tile, synchronously.
pub trait PaintSink {
    /// Marks `rect` as filled with `color` on the destination surface.
    fn fill_rect(&mut self, rect: PaintRect, color: Rgb);
}

impl<F> PaintSink for F
where
    F: FnMut(PaintRect, Rgb),
{
    fn fill_rect(&mut self, rect: PaintRect, color: Rgb) {
        self(rect, color);
    }
}

/// Receives fire-and-forget progress fractions in `[0, 1]`.
pub trait ProgressSink {
    /// Reports the fraction of tile rows completed so far.
    fn report(&mut self, fraction: f64);
}

impl<F> ProgressSink for F
where
    F: FnMut(f64),
{
    fn report(&mut self, fraction: f64) {
        self(fraction);
    }
}

/// Summary of one completed render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOutcome {
    /// Number of paint calls issued.
    pub tiles_painted: usize,
    /// Number of completed tile rows.
    pub rows_completed: usize,
    /// `true` when the source had a zero dimension and nothing was painted.
    pub degenerate: bool,
}

/// Renders the mosaic of `buffer` through the supplied sinks.
///
/// # Semantics
/// Tiles are visited left-to-right, top-to-bottom in steps of
/// `spec.tile_size`. Each tile paints the full scaled tile extent at
/// `(origin_x * sx, origin_y * sy)`; edge tiles average only in-bounds
/// pixels but still paint the full rectangle, and the surface clips. After
/// each completed row the progress sink receives `origin_y / source_height`.
/// The renderer never reports `1.0`; completion is the caller's explicit
/// final step.
///
/// Identical inputs always produce identical painted output; the pass is
/// pure, synchronous, and deterministic.
///
/// # Errors
/// Returns [`RenderError::GeometryMismatch`] when the spec's source
/// dimensions disagree with the buffer.
pub fn render_mosaic<P, G>(
    buffer: &PixelBuffer,
    spec: &MosaicSpec,
    paint: &mut P,
    progress: &mut G,
) -> Result<RenderOutcome, RenderError>
where
    P: PaintSink + ?Sized,
    G: ProgressSink + ?Sized,
{
    if spec.source_width != buffer.width() || spec.source_height != buffer.height() {
        return Err(RenderError::GeometryMismatch {
            spec_width: spec.source_width,
            spec_height: spec.source_height,
            buffer_width: buffer.width(),
            buffer_height: buffer.height(),
        });
    }

    // Guard before deriving scale factors: a zero dimension is a reported
    // no-op, never a division by zero or an unbounded loop.
    if buffer.is_degenerate() {
        return Ok(RenderOutcome {
            tiles_painted: 0,
            rows_completed: 0,
            degenerate: true,
        });
    }

    let scale_x = spec.dest_width as f64 / spec.source_width as f64;
    let scale_y = spec.dest_height as f64 / spec.source_height as f64;

    // Spec fields are public, so the loop step is clamped here regardless of
    // what the constructor validated.
    let tile_size = spec.tile_size.max(1);

    let mut tiles_painted = 0_usize;
    let mut rows_completed = 0_usize;

    let mut origin_y = 0_u32;
    while origin_y < spec.source_height {
        let mut origin_x = 0_u32;
        while origin_x < spec.source_width {
            let color = tile_mean_color(buffer, origin_x, origin_y, tile_size)
                .map_err(RenderError::Tile)?;

            paint.fill_rect(
                PaintRect {
                    x: origin_x as f64 * scale_x,
                    y: origin_y as f64 * scale_y,
                    width: tile_size as f64 * scale_x,
                    height: tile_size as f64 * scale_y,
                },
                color,
            );
            tiles_painted += 1;

            origin_x = origin_x.saturating_add(tile_size);
        }

        rows_completed += 1;
        let fraction = origin_y as f64 / spec.source_height as f64;
        progress.report(fraction.clamp(0.0, 1.0));

        origin_y = origin_y.saturating_add(tile_size);
    }

    Ok(RenderOutcome {
        tiles_painted,
        rows_completed,
        degenerate: false,
    })
}

/// Owned RGBA destination surface with clipped opaque fills.
///
/// This is the explicit destination handle passed into the render entry
/// point; no ambient canvas state exists anywhere in the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasSurface {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl CanvasSurface {
    /// Creates a black, fully opaque canvas.
    pub fn new(width: u32, height: u32) -> Self {
        let mut rgba = vec![0_u8; (width as usize) * (height as usize) * 4];
        for pixel in rgba.chunks_exact_mut(4) {
            pixel[3] = 255;
        }

        Self {
            width,
            height,
            rgba,
        }
    }

    /// Returns canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the canvas pixel at `(x, y)`, or `None` outside the bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = ((y as usize) * (self.width as usize) + x as usize) * 4;
        Some(Rgb {
            r: self.rgba[index],
            g: self.rgba[index + 1],
            b: self.rgba[index + 2],
        })
    }

    /// Consumes the canvas and returns its interleaved RGBA bytes.
    pub fn into_rgba(self) -> Vec<u8> {
        self.rgba
    }
}

impl PaintSink for CanvasSurface {
    fn fill_rect(&mut self, rect: PaintRect, color: Rgb) {
        let x0 = clamp_axis(rect.x, self.width);
        let x1 = clamp_axis(rect.x + rect.width, self.width);
        let y0 = clamp_axis(rect.y, self.height);
        let y1 = clamp_axis(rect.y + rect.height, self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                let index = (y * self.width as usize + x) * 4;
                self.rgba[index] = color.r;
                self.rgba[index + 1] = color.g;
                self.rgba[index + 2] = color.b;
                self.rgba[index + 3] = 255;
            }
        }
    }
}

fn clamp_axis(value: f64, limit: u32) -> usize {
    (value.round().max(0.0) as usize).min(limit as usize)
}

/// Error type for mosaic rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Spec source dimensions disagree with the pixel buffer.
    #[error(
        "spec geometry {spec_width}x{spec_height} does not match buffer {buffer_width}x{buffer_height}"
    )]
    GeometryMismatch {
        /// Source width declared by the spec.
        spec_width: u32,
        /// Source height declared by the spec.
        spec_height: u32,
        /// Actual buffer width.
        buffer_width: u32,
        /// Actual buffer height.
        buffer_height: u32,
    },
    /// Tile averaging failed.
    #[error("tile averaging failure: {0}")]
    Tile(CoreError),
}
