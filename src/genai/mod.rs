//! Generation provider abstraction for the text and image stages.
//!
//! This module provides trait-based abstractions over the two external
//! generation services, a Gemini-backed implementation, and fakes for
//! testing without network access or API costs.

mod fake;
mod gemini;

pub use fake::{FakeImageProvider, FakeTextProvider};
pub use gemini::GeminiClient;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::config::GenConfig;

/// Error type for generation provider operations.
#[derive(Debug, Error)]
pub enum GenAiError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Request for the text-generation stage.
#[derive(Debug, Clone, Default)]
pub struct TextRequest {
    /// The composed instruction embedding the user's request.
    pub instruction: String,
    /// Optional system-level instruction.
    pub system_instruction: Option<String>,
    /// If set, the provider requests strict JSON matching this schema.
    pub response_schema: Option<JsonValue>,
}

/// One content part of an image-generation response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePart {
    /// Base64-encoded inline image bytes.
    Inline { mime_type: String, data: String },
    /// A text part; image models sometimes interleave commentary.
    Text(String),
}

/// Response from the image-generation stage: zero or more content parts.
#[derive(Debug, Clone, Default)]
pub struct ImageOutput {
    pub parts: Vec<ImagePart>,
}

impl ImageOutput {
    /// The base64 payload of the first inline part with an image MIME type,
    /// if any. Absence means the image stage produced no usable picture.
    pub fn first_inline_image(&self) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            ImagePart::Inline { mime_type, data } if mime_type.starts_with("image/") => {
                Some(data.as_str())
            }
            _ => None,
        })
    }
}

/// Trait for text-generation providers.
///
/// Implementations should be stateless and thread-safe. The provider is
/// responsible for making the API call and returning the model's raw text.
#[async_trait]
pub trait TextProvider: Send + Sync + fmt::Debug {
    /// Send a text request and get the model's raw response text.
    async fn generate(&self, request: &TextRequest) -> Result<String, GenAiError>;

    /// Get the provider name (e.g., "gemini", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "gemini-3-flash-preview").
    fn model_name(&self) -> &str;
}

/// Trait for image-generation providers.
#[async_trait]
pub trait ImageProvider: Send + Sync + fmt::Debug {
    /// Generate an image for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<ImageOutput, GenAiError>;

    /// Get the provider name (e.g., "gemini", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "gemini-2.5-flash-image").
    fn model_name(&self) -> &str;
}

/// Create the provider pair from environment configuration.
///
/// Use environment variables to configure:
/// - TOQUE_PROVIDER: "gemini" | "fake"
/// - GEMINI_API_KEY: API key for Gemini
/// - TOQUE_TEXT_MODEL / TOQUE_IMAGE_MODEL: model names
pub fn create_providers_from_env(
) -> Result<(Arc<dyn TextProvider>, Arc<dyn ImageProvider>), GenAiError> {
    let provider = std::env::var("TOQUE_PROVIDER").unwrap_or_else(|_| "gemini".to_string());

    match provider.as_str() {
        "fake" => {
            let text: Arc<dyn TextProvider> = Arc::new(FakeTextProvider::default());
            let image: Arc<dyn ImageProvider> = Arc::new(FakeImageProvider::default());
            Ok((text, image))
        }
        "gemini" => {
            let config = GenConfig::from_env()
                .map_err(|e| GenAiError::NotConfigured(e.to_string()))?;
            let client = Arc::new(GeminiClient::new(config));
            let text: Arc<dyn TextProvider> = client.clone();
            let image: Arc<dyn ImageProvider> = client;
            Ok((text, image))
        }
        other => Err(GenAiError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}
