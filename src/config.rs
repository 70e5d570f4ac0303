//! Generation client configuration from environment variables.

use std::env;
use thiserror::Error;

/// Default base URL for the Gemini API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for recipe text generation.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";

/// Default model for dish image generation.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// Generation client configuration.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// API key for the Gemini API.
    pub api_key: String,
    /// Model used for the text stage.
    pub text_model: String,
    /// Model used for the image stage.
    pub image_model: String,
    /// Base URL for the API.
    pub base_url: String,
}

impl GenConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `GEMINI_API_KEY`: API key for the Gemini API
    ///
    /// Optional:
    /// - `TOQUE_TEXT_MODEL`: Text model name (default: "gemini-3-flash-preview")
    /// - `TOQUE_IMAGE_MODEL`: Image model name (default: "gemini-2.5-flash-image")
    /// - `TOQUE_BASE_URL`: API base URL
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()))?;

        let text_model =
            env::var("TOQUE_TEXT_MODEL").unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string());

        let image_model =
            env::var("TOQUE_IMAGE_MODEL").unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string());

        let base_url = env::var("TOQUE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            text_model,
            image_model,
            base_url,
        })
    }
}
