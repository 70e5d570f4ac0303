//! Gemini generation provider.

use super::{GenAiError, ImageOutput, ImagePart, ImageProvider, TextProvider, TextRequest};
use crate::config::GenConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Gemini API provider for both generation stages.
///
/// One client serves both traits: the text stage and the image stage hit the
/// same `generateContent` endpoint with different models.
#[derive(Debug)]
pub struct GeminiClient {
    config: GenConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a new GeminiClient with the given configuration.
    pub fn new(config: GenConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest<'_>,
    ) -> Result<GenerateContentResponse, GenAiError> {
        let url = format!("{}/models/{}:generateContent", self.config.base_url, model);

        tracing::debug!(model = model, "calling Gemini generateContent");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| GenAiError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();

        let body = response
            .text()
            .await
            .map_err(|e| GenAiError::RequestFailed(e.to_string()))?;

        if status != 200 {
            // Try to parse error response
            if let Ok(error_response) = serde_json::from_str::<GeminiErrorResponse>(&body) {
                return Err(GenAiError::ApiError {
                    status,
                    message: error_response.error.message,
                });
            }
            return Err(GenAiError::ApiError {
                status,
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| GenAiError::ParseError(e.to_string()))
    }
}

/// Gemini API request format.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

impl<'a> Content<'a> {
    fn text(text: &'a str) -> Self {
        Self {
            parts: vec![RequestPart { text }],
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a JsonValue,
}

/// Gemini API response format.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    text: Option<String>,
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiApiError,
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    message: String,
}

#[async_trait]
impl TextProvider for GeminiClient {
    async fn generate(&self, request: &TextRequest) -> Result<String, GenAiError> {
        let generation_config = request
            .response_schema
            .as_ref()
            .map(|schema| GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            });

        let api_request = GenerateContentRequest {
            contents: vec![Content::text(&request.instruction)],
            system_instruction: request.system_instruction.as_deref().map(Content::text),
            generation_config,
        };

        let response = self
            .generate_content(&self.config.text_model, &api_request)
            .await?;

        // Extract text from the first candidate's first text part
        let text = response
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.text)
            .ok_or_else(|| GenAiError::ParseError("No text content in response".to_string()))?;

        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.config.text_model
    }
}

#[async_trait]
impl ImageProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<ImageOutput, GenAiError> {
        // The image model supports neither responseMimeType nor a schema;
        // the caller scans returned parts for inline data instead.
        let api_request = GenerateContentRequest {
            contents: vec![Content::text(prompt)],
            system_instruction: None,
            generation_config: None,
        };

        let response = self
            .generate_content(&self.config.image_model, &api_request)
            .await?;

        let parts = response
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| match (p.inline_data, p.text) {
                (Some(inline), _) => Some(ImagePart::Inline {
                    mime_type: inline.mime_type,
                    data: inline.data,
                }),
                (None, Some(text)) => Some(ImagePart::Text(text)),
                (None, None) => None,
            })
            .collect();

        Ok(ImageOutput { parts })
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.config.image_model
    }
}
