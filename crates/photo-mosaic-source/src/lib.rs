#![warn(missing_docs)]
//! # photo-mosaic-source
//!
//! ## Purpose
//! Provides the image-acquisition abstraction that turns a subject query into
//! a decoded RGBA bitmap.
//!
//! ## Responsibilities
//! - Define a provider-agnostic [`ImageSource`] trait.
//! - Build and validate image request URLs for remote photo providers.
//! - Expose a deterministic synthetic source for CI and unit tests.
//!
//! ## Data flow
//! Resolved keyword query -> [`ImageSource::fetch_image`] ->
//! [`photo_mosaic_core::PixelBuffer`] consumed by the renderer.
//!
//! ## Ownership and lifetimes
//! Fetched buffers are owned values with independent storage; no borrowed
//! pixel memory escapes source boundaries, and nothing is cached across
//! fetches.
//!
//! ## Error model
//! Invalid provider endpoints and unavailable images are reported as
//! [`ImageSourceError`]. A fetch failure is terminal for that render attempt;
//! callers never retry.
//!
//! ## Security and privacy notes
//! Queries are fixed subject keywords, never raw prompt text, so no personal
//! input reaches a remote provider URL.

use photo_mosaic_core::PixelBuffer;
use rand::{Rng, SeedableRng, rngs::StdRng};
use sha2::{Digest, Sha256};
use thiserror::Error;
use url::Url;

/// Default requested image width in pixels.
pub const DEFAULT_IMAGE_WIDTH: u32 = 800;

/// Default requested image height in pixels.
pub const DEFAULT_IMAGE_HEIGHT: u32 = 600;

/// Trait implemented by concrete image providers.
pub trait ImageSource: Send + Sync {
    /// Fetches one decoded bitmap for the subject query.
    ///
    /// # Errors
    /// Returns [`ImageSourceError::Unavailable`] when no image can be
    /// produced for the query.
    fn fetch_image(&self, query: &str) -> Result<PixelBuffer, ImageSourceError>;
}

/// Builds the provider request URL `{base}/{width}x{height}?{query}`.
///
/// # Errors
/// Returns [`ImageSourceError::InvalidEndpoint`] for unparsable or non-HTTPS
/// base URLs.
pub fn image_request_url(
    base: &str,
    width: u32,
    height: u32,
    query: &str,
) -> Result<Url, ImageSourceError> {
    let mut url = Url::parse(base)
        .map_err(|error| ImageSourceError::InvalidEndpoint(format!("invalid base url: {error}")))?;

    if url.scheme() != "https" {
        return Err(ImageSourceError::InvalidEndpoint(
            "image source endpoint must use https".to_string(),
        ));
    }

    url.set_path(&format!("{width}x{height}"));
    url.set_query(Some(query));
    Ok(url)
}

/// Deterministic synthetic image source for test and CI usage.
///
/// The SHA-256 digest of the query seeds the generator, so identical queries
/// always decode to identical bitmaps: a subject-specific base color with
/// bounded per-pixel jitter.
#[derive(Debug, Clone)]
pub struct SyntheticImageSource {
    width: u32,
    height: u32,
}

impl SyntheticImageSource {
    /// Creates a source producing default-size (800x600) bitmaps.
    pub fn new() -> Self {
        Self {
            width: DEFAULT_IMAGE_WIDTH,
            height: DEFAULT_IMAGE_HEIGHT,
        }
    }

    /// Creates a source with caller-provided bitmap dimensions.
    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the stable placeholder identity for a query.
    pub fn placeholder_id(query: &str) -> String {
        let digest = Sha256::digest(query.as_bytes());
        format!("placeholder-{}", hex::encode(&digest[..8]))
    }
}

impl Default for SyntheticImageSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageSource for SyntheticImageSource {
    fn fetch_image(&self, query: &str) -> Result<PixelBuffer, ImageSourceError> {
        if query.trim().is_empty() {
            return Err(ImageSourceError::Unavailable(
                "query must be a subject keyword".to_string(),
            ));
        }

        let digest = Sha256::digest(query.as_bytes());
        let mut seed = [0_u8; 32];
        seed.copy_from_slice(&digest);
        let mut rng = StdRng::from_seed(seed);

        let base = [digest[0], digest[1], digest[2]];
        let pixels = (self.width as usize) * (self.height as usize);
        let mut rgba = Vec::with_capacity(pixels * 4);
        for _ in 0..pixels {
            for channel in base {
                let jitter = rng.random_range(-16_i16..=16);
                rgba.push((channel as i16 + jitter).clamp(0, 255) as u8);
            }
            rgba.push(255);
        }

        PixelBuffer::new(self.width, self.height, rgba)
            .map_err(|error| ImageSourceError::Unavailable(error.to_string()))
    }
}

/// Image acquisition error type.
#[derive(Debug, Error)]
pub enum ImageSourceError {
    /// Provider endpoint violates URL policy.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    /// No image could be produced for the query.
    #[error("image unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    //! Unit tests for URL policy and synthetic determinism.

    use super::*;

    #[test]
    fn builds_provider_url_with_dimensions_and_query() {
        let url = image_request_url("https://photos.example.test", 800, 600, "forest")
            .expect("url should build");
        assert_eq!(url.as_str(), "https://photos.example.test/800x600?forest");
    }

    #[test]
    fn rejects_non_https_endpoints() {
        assert!(image_request_url("http://photos.example.test", 800, 600, "forest").is_err());
        assert!(image_request_url("not a url", 800, 600, "forest").is_err());
    }

    #[test]
    fn identical_queries_decode_identically() {
        let source = SyntheticImageSource::with_dimensions(16, 16);
        let first = source.fetch_image("ocean").expect("fetch should work");
        let second = source.fetch_image("ocean").expect("fetch should work");
        assert_eq!(first, second);

        let other = source.fetch_image("sunset").expect("fetch should work");
        assert_ne!(first, other);
    }

    #[test]
    fn placeholder_id_is_stable_per_query() {
        let first = SyntheticImageSource::placeholder_id("nature");
        let second = SyntheticImageSource::placeholder_id("nature");
        assert_eq!(first, second);
        assert!(first.starts_with("placeholder-"));
    }

    #[test]
    fn blank_query_is_unavailable() {
        let source = SyntheticImageSource::with_dimensions(4, 4);
        assert!(matches!(
            source.fetch_image("  "),
            Err(ImageSourceError::Unavailable(_))
        ));
    }
}
