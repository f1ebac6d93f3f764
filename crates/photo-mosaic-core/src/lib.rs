#![warn(missing_docs)]
//! # photo-mosaic-core
//!
//! ## Purpose
//! Defines the pure data model and tile math used across the `photo-mosaic`
//! workspace.
//!
//! ## Responsibilities
//! - Represent validated RGBA pixel buffers and mosaic geometry.
//! - Compute per-tile mean colors over tile-local pixel offsets.
//! - Derive tile size from the user-facing complexity level.
//! - Encode/decode the user-input mosaic request for transport.
//!
//! ## Data flow
//! An image source decodes into [`PixelBuffer`]. The renderer derives a
//! [`MosaicSpec`] from buffer and canvas dimensions and calls
//! [`tile_mean_color`] once per tile.
//!
//! ## Ownership and lifetimes
//! Buffers and requests own their backing storage (`Vec<u8>`, `String`) so no
//! borrow coupling exists between pipeline stages. A buffer is created once
//! per render call and discarded afterwards; nothing here caches across calls.
//!
//! ## Error model
//! Validation failures (buffer shape, zero tile size, empty tile regions)
//! return [`CoreError`] variants with caller-actionable categorization.
//!
//! ## Security and privacy notes
//! This crate never logs pixel bytes or prompt text. Requests are treated as
//! opaque user input and are only transformed by the JSON codec.
//!
//! ## Example
//! ```rust
//! use photo_mosaic_core::{tile_mean_color, PixelBuffer, Rgb};
//!
//! let buffer = PixelBuffer::solid(4, 4, Rgb { r: 10, g: 20, b: 30 }).unwrap();
//! let mean = tile_mean_color(&buffer, 0, 0, 4).unwrap();
//! assert_eq!(mean, Rgb { r: 10, g: 20, b: 30 });
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Policy floor for tile size derived from the complexity slider.
pub const MIN_TILE_SIZE: u32 = 5;

/// Base tile size at complexity zero.
pub const BASE_TILE_SIZE: u32 = 50;

/// Tile size reduction per complexity step.
pub const TILE_SIZE_STEP: u32 = 3;

/// Opaque mean color of one tile. Alpha is ignored throughout the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// Validated, immutable RGBA pixel buffer in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl PixelBuffer {
    /// Constructs a validated pixel buffer.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidBufferShape`] when the byte length is not
    /// exactly `width * height * 4`.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, CoreError> {
        let expected_len = required_rgba_len(width, height)?;
        if rgba.len() != expected_len {
            return Err(CoreError::InvalidBufferShape {
                expected: expected_len,
                actual: rgba.len(),
            });
        }

        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Constructs a buffer filled with one opaque color.
    ///
    /// # Errors
    /// Returns [`CoreError::DimensionOverflow`] when the byte length would
    /// overflow `usize`.
    pub fn solid(width: u32, height: u32, color: Rgb) -> Result<Self, CoreError> {
        let len = required_rgba_len(width, height)?;
        let mut rgba = Vec::with_capacity(len);
        for _ in 0..len / 4 {
            rgba.extend_from_slice(&[color.r, color.g, color.b, 255]);
        }

        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Returns buffer width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns buffer height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the interleaved RGBA bytes.
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Returns `true` when either dimension is zero.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Geometry of one mosaic render pass.
///
/// Destination dimensions may differ from the source; the renderer derives a
/// uniform scale factor per axis exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicSpec {
    /// Source bitmap width in pixels.
    pub source_width: u32,
    /// Source bitmap height in pixels.
    pub source_height: u32,
    /// Destination canvas width in pixels.
    pub dest_width: u32,
    /// Destination canvas height in pixels.
    pub dest_height: u32,
    /// Square tile edge length in source pixels.
    pub tile_size: u32,
}

impl MosaicSpec {
    /// Creates a validated mosaic spec.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidTileSize`] when `tile_size == 0`.
    pub fn new(
        source_width: u32,
        source_height: u32,
        dest_width: u32,
        dest_height: u32,
        tile_size: u32,
    ) -> Result<Self, CoreError> {
        if tile_size == 0 {
            return Err(CoreError::InvalidTileSize);
        }

        Ok(Self {
            source_width,
            source_height,
            dest_width,
            dest_height,
            tile_size,
        })
    }
}

/// Derives tile size from the user-facing complexity level.
///
/// # Semantics
/// `max(MIN_TILE_SIZE, BASE_TILE_SIZE - complexity * TILE_SIZE_STEP)`.
/// Higher complexity yields smaller tiles and therefore more detail.
pub fn tile_size_for_complexity(complexity: u32) -> u32 {
    let raw = BASE_TILE_SIZE as i64 - (complexity as i64) * (TILE_SIZE_STEP as i64);
    raw.max(MIN_TILE_SIZE as i64) as u32
}

/// Computes the mean color of one tile as a pure fold over tile-local offsets.
///
/// Offsets whose absolute coordinate falls at or beyond the buffer edge are
/// skipped, so edge-clipped tiles average only their in-bounds pixels and no
/// out-of-bounds read can occur. Per-channel means round half away from zero
/// on the floating-point quotient.
///
/// # Errors
/// Returns [`CoreError::EmptyTile`] when the origin lies outside the buffer
/// and no pixel contributes. Callers that keep tile origins inside the buffer
/// never observe this.
pub fn tile_mean_color(
    buffer: &PixelBuffer,
    origin_x: u32,
    origin_y: u32,
    tile_size: u32,
) -> Result<Rgb, CoreError> {
    let width = buffer.width() as u64;
    let height = buffer.height() as u64;
    let data = buffer.rgba();

    let mut sum_r = 0_u64;
    let mut sum_g = 0_u64;
    let mut sum_b = 0_u64;
    let mut count = 0_u64;

    for offset_y in 0..tile_size as u64 {
        let y = origin_y as u64 + offset_y;
        if y >= height {
            break;
        }

        for offset_x in 0..tile_size as u64 {
            let x = origin_x as u64 + offset_x;
            if x >= width {
                break;
            }

            let index = ((y * width + x) * 4) as usize;
            sum_r += data[index] as u64;
            sum_g += data[index + 1] as u64;
            sum_b += data[index + 2] as u64;
            count += 1;
        }
    }

    if count == 0 {
        return Err(CoreError::EmptyTile { origin_x, origin_y });
    }

    Ok(Rgb {
        r: mean_channel(sum_r, count),
        g: mean_channel(sum_g, count),
        b: mean_channel(sum_b, count),
    })
}

fn mean_channel(sum: u64, count: u64) -> u8 {
    // f64::round is half-away-from-zero, which is the averaging contract.
    (sum as f64 / count as f64).round() as u8
}

/// User-input payload describing one mosaic generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicRequest {
    /// Free-text creative prompt; may be blank.
    pub prompt: String,
    /// Complexity level feeding [`tile_size_for_complexity`].
    pub complexity: u32,
}

impl MosaicRequest {
    /// Serializes the request to compact JSON bytes.
    ///
    /// # Errors
    /// Returns [`CoreError::Codec`] when JSON serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, CoreError> {
        serde_json::to_vec(self).map_err(CoreError::Codec)
    }

    /// Deserializes a request from JSON bytes.
    ///
    /// # Errors
    /// Returns [`CoreError::Codec`] when JSON decoding fails.
    pub fn from_json_bytes(raw: &[u8]) -> Result<Self, CoreError> {
        serde_json::from_slice(raw).map_err(CoreError::Codec)
    }
}

/// Error type for core model validation and codec failures.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Pixel buffer byte length does not match declared geometry.
    #[error("invalid buffer shape: expected {expected} bytes, got {actual}")]
    InvalidBufferShape {
        /// Expected RGBA byte count.
        expected: usize,
        /// Actual RGBA byte count.
        actual: usize,
    },
    /// Buffer dimensions overflow addressable byte length.
    #[error("buffer dimension overflow")]
    DimensionOverflow,
    /// Tile size must be strictly positive.
    #[error("tile size must be greater than zero")]
    InvalidTileSize,
    /// No pixel contributed to a tile average.
    #[error("tile at ({origin_x}, {origin_y}) covers no pixels")]
    EmptyTile {
        /// Tile origin x in source pixels.
        origin_x: u32,
        /// Tile origin y in source pixels.
        origin_y: u32,
    },
    /// JSON encoding/decoding error.
    #[error("request codec failure: {0}")]
    Codec(#[from] serde_json::Error),
}

fn required_rgba_len(width: u32, height: u32) -> Result<usize, CoreError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(4))
        .ok_or(CoreError::DimensionOverflow)
}
