//! Shared fixtures for app integration tests.

use std::sync::Mutex;

use photo_mosaic_core::{MosaicRequest, PixelBuffer, Rgb};
use photo_mosaic_source::{ImageSource, ImageSourceError};

/// Image source that returns one uniform color and records its queries.
#[derive(Debug)]
#[allow(dead_code)]
pub struct UniformImageSource {
    pub width: u32,
    pub height: u32,
    pub color: Rgb,
    pub queries: Mutex<Vec<String>>,
}

impl UniformImageSource {
    /// Creates a small uniform source with a recognizable color.
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self {
            width: 12,
            height: 8,
            color: Rgb { r: 30, g: 90, b: 150 },
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Returns the queries seen so far.
    #[allow(dead_code)]
    pub fn recorded_queries(&self) -> Vec<String> {
        self.queries.lock().expect("query lock should work").clone()
    }
}

impl ImageSource for UniformImageSource {
    fn fetch_image(&self, query: &str) -> Result<PixelBuffer, ImageSourceError> {
        self.queries
            .lock()
            .expect("query lock should work")
            .push(query.to_string());
        PixelBuffer::solid(self.width, self.height, self.color)
            .map_err(|error| ImageSourceError::Unavailable(error.to_string()))
    }
}

/// Image source that always fails with an unavailable error.
#[derive(Debug)]
#[allow(dead_code)]
pub struct UnavailableImageSource;

impl ImageSource for UnavailableImageSource {
    fn fetch_image(&self, _query: &str) -> Result<PixelBuffer, ImageSourceError> {
        Err(ImageSourceError::Unavailable(
            "provider returned no image".to_string(),
        ))
    }
}

/// Creates a deterministic request fixture.
#[allow(dead_code)]
pub fn fixture_request(prompt: &str, complexity: u32) -> MosaicRequest {
    MosaicRequest {
        prompt: prompt.to_string(),
        complexity,
    }
}
