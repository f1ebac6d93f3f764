#![warn(missing_docs)]
//! # photo-mosaic-prompt
//!
//! ## Purpose
//! Maps free-text creative input to photograph subject keywords and wraps the
//! optional remote prompt-enrichment step.
//!
//! ## Responsibilities
//! - Resolve text to one of a fixed small set of subject keywords.
//! - Define the enrichment request/response wire payloads.
//! - Validate enrichment endpoint policy (HTTPS, fixed path).
//! - Recover locally from enrichment failures by falling back to raw text.
//!
//! ## Data flow
//! Raw user text -> [`EnrichmentClient::enrich_or_fallback`] (best-effort)
//! -> [`resolve_keyword`] -> [`Keyword`] consumed by the image source.
//!
//! ## Ownership and lifetimes
//! Payloads own their strings to decouple transport and orchestration
//! lifetimes; the transport itself sits behind an `Arc<dyn>` seam.
//!
//! ## Error model
//! Endpoint policy violations, transport failures, and blank completions are
//! surfaced as [`PromptError`]. Keyword resolution is total and never fails.
//!
//! ## Security and privacy notes
//! Prompt text may contain personal creative input; it is never logged here.
//! API credentials live entirely behind the transport implementation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Required enrichment path suffix for v1.
pub const REQUIRED_ENRICHMENT_PATH: &str = "/api/creative-prompt";

/// Subject keyword used to select which photograph the image source fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Keyword {
    /// Forest scenes.
    Forest,
    /// Ocean scenes.
    Ocean,
    /// Sunset scenes.
    Sunset,
    /// Mountain scenes.
    Mountain,
    /// Generic nature fallback.
    Nature,
}

impl Keyword {
    /// Returns the lowercase query string sent to the image source.
    pub fn as_query(&self) -> &'static str {
        match self {
            Keyword::Forest => "forest",
            Keyword::Ocean => "ocean",
            Keyword::Sunset => "sunset",
            Keyword::Mountain => "mountain",
            Keyword::Nature => "nature",
        }
    }
}

// Priority order is fixed: the first matching substring wins.
const KEYWORD_RULES: [(&str, Keyword); 4] = [
    ("forest", Keyword::Forest),
    ("ocean", Keyword::Ocean),
    ("sunset", Keyword::Sunset),
    ("mountain", Keyword::Mountain),
];

/// Resolves free text to a subject keyword.
///
/// # Semantics
/// Case-insensitive substring containment against a fixed ordered rule list;
/// first match wins. Text with no match, including empty or whitespace-only
/// input, resolves to [`Keyword::Nature`]. Total function, never fails.
pub fn resolve_keyword(text: &str) -> Keyword {
    let lowered = text.to_lowercase();
    for (needle, keyword) in KEYWORD_RULES {
        if lowered.contains(needle) {
            return keyword;
        }
    }

    Keyword::Nature
}

/// Enrichment request payload forwarded to the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentRequest {
    /// Raw creative prompt to expand.
    pub prompt: String,
}

/// Enrichment response payload returned by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentResponse {
    /// Enriched creative prompt.
    pub prompt: String,
}

/// Abstract transport used by the enrichment client.
pub trait EnrichmentTransport: Send + Sync {
    /// Sends one completion request to the enrichment backend.
    fn complete(
        &self,
        endpoint: &str,
        request: &EnrichmentRequest,
    ) -> Result<EnrichmentResponse, PromptError>;
}

/// Enrichment client that validates endpoint policy and recovers from
/// failures locally.
#[derive(Clone)]
pub struct EnrichmentClient {
    endpoint: String,
    transport: Arc<dyn EnrichmentTransport>,
}

impl EnrichmentClient {
    /// Creates a validated enrichment client.
    ///
    /// # Errors
    /// Returns [`PromptError::InvalidEndpoint`] when the URL is not HTTPS or
    /// does not include the required `/api/creative-prompt` path.
    pub fn new(
        endpoint: impl Into<String>,
        transport: Arc<dyn EnrichmentTransport>,
    ) -> Result<Self, PromptError> {
        let endpoint = endpoint.into();
        validate_enrichment_endpoint(&endpoint)?;
        Ok(Self {
            endpoint,
            transport,
        })
    }

    /// Requests an enriched prompt for `raw_text`.
    ///
    /// # Errors
    /// Propagates transport failures and rejects blank completions with
    /// [`PromptError::InvalidResponse`].
    pub fn enrich(&self, raw_text: &str) -> Result<String, PromptError> {
        let response = self.transport.complete(
            &self.endpoint,
            &EnrichmentRequest {
                prompt: raw_text.to_string(),
            },
        )?;

        if response.prompt.trim().is_empty() {
            return Err(PromptError::InvalidResponse(
                "completion contained no text".to_string(),
            ));
        }

        Ok(response.prompt)
    }

    /// Best-effort enrichment: any failure falls back to the raw text
    /// unchanged and is never surfaced to the caller.
    pub fn enrich_or_fallback(&self, raw_text: &str) -> String {
        self.enrich(raw_text)
            .unwrap_or_else(|_| raw_text.to_string())
    }

    /// Returns the configured enrichment endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Validates v1 enrichment endpoint constraints.
///
/// # Errors
/// Returns [`PromptError::InvalidEndpoint`] for non-HTTPS or path mismatch.
pub fn validate_enrichment_endpoint(endpoint: &str) -> Result<(), PromptError> {
    let parsed = Url::parse(endpoint)
        .map_err(|error| PromptError::InvalidEndpoint(format!("invalid enrichment url: {error}")))?;

    if parsed.scheme() != "https" {
        return Err(PromptError::InvalidEndpoint(
            "enrichment endpoint must use https".to_string(),
        ));
    }

    if !parsed.path().ends_with(REQUIRED_ENRICHMENT_PATH) {
        return Err(PromptError::InvalidEndpoint(format!(
            "enrichment endpoint path must end with {REQUIRED_ENRICHMENT_PATH}"
        )));
    }

    Ok(())
}

/// Errors produced by enrichment client logic.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Endpoint violates policy requirements.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    /// Transport failure from the enrichment backend.
    #[error("enrichment transport failure: {0}")]
    Transport(String),
    /// Response payload violated contract expectations.
    #[error("invalid enrichment response: {0}")]
    InvalidResponse(String),
}
