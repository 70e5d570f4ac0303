//! Fake generation providers for testing.
//!
//! These providers return deterministic responses, allowing tests to run
//! without network access or API costs.

use super::{GenAiError, ImageOutput, ImagePart, ImageProvider, TextProvider, TextRequest};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// A fake text provider for testing.
///
/// Responses are matched by checking if the instruction contains a registered
/// substring. If no match is found, returns a default response or error.
#[derive(Debug)]
pub struct FakeTextProvider {
    /// Map of instruction substring -> response
    responses: RwLock<HashMap<String, String>>,
    /// Default response if no match found
    default_response: Option<String>,
    /// Instructions received, in call order
    requests: RwLock<Vec<String>>,
}

impl Default for FakeTextProvider {
    fn default() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: Some("{}".to_string()),
            requests: RwLock::new(Vec::new()),
        }
    }
}

impl FakeTextProvider {
    /// Create a new FakeTextProvider with no registered responses.
    ///
    /// With no default response, any unmatched instruction errors - useful
    /// for simulating a text-stage failure.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: None,
            requests: RwLock::new(Vec::new()),
        }
    }

    /// Create a provider that returns a specific response for instructions
    /// containing a substring.
    pub fn with_response(instruction_contains: &str, response: &str) -> Self {
        let mut provider = Self::new();
        provider.add_response(instruction_contains, response);
        provider
    }

    /// Add a response for instructions containing a specific substring.
    pub fn add_response(&mut self, instruction_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(instruction_contains.to_string(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Instructions this provider has received so far.
    pub fn seen_instructions(&self) -> Vec<String> {
        self.requests.read().unwrap().clone()
    }
}

#[async_trait]
impl TextProvider for FakeTextProvider {
    async fn generate(&self, request: &TextRequest) -> Result<String, GenAiError> {
        self.requests
            .write()
            .unwrap()
            .push(request.instruction.clone());

        let responses = self.responses.read().unwrap();

        // Find first matching pattern (case-insensitive)
        let instruction_lower = request.instruction.to_lowercase();
        for (pattern, response) in responses.iter() {
            if instruction_lower.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(GenAiError::RequestFailed(format!(
                "FakeTextProvider: No response configured for instruction (first 100 chars): {}",
                &request.instruction[..request.instruction.len().min(100)]
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-text-model"
    }
}

/// A fake image provider for testing.
///
/// Returns a scripted [`ImageOutput`] or a scripted error. The default
/// returns an output with no parts at all (no usable image).
#[derive(Debug, Default)]
pub struct FakeImageProvider {
    output: ImageOutput,
    fail_with: Option<String>,
    /// Prompts received, in call order
    prompts: RwLock<Vec<String>>,
}

impl FakeImageProvider {
    /// Provider that returns a single inline PNG part with the given
    /// base64 payload.
    pub fn with_inline_png(data: &str) -> Self {
        Self {
            output: ImageOutput {
                parts: vec![ImagePart::Inline {
                    mime_type: "image/png".to_string(),
                    data: data.to_string(),
                }],
            },
            ..Self::default()
        }
    }

    /// Provider that responds successfully but with no inline image part.
    pub fn without_image() -> Self {
        Self {
            output: ImageOutput {
                parts: vec![ImagePart::Text("I could not draw that.".to_string())],
            },
            ..Self::default()
        }
    }

    /// Provider whose calls always fail.
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Prompts this provider has received so far.
    pub fn seen_prompts(&self) -> Vec<String> {
        self.prompts.read().unwrap().clone()
    }
}

#[async_trait]
impl ImageProvider for FakeImageProvider {
    async fn generate(&self, prompt: &str) -> Result<ImageOutput, GenAiError> {
        self.prompts.write().unwrap().push(prompt.to_string());

        match &self.fail_with {
            Some(message) => Err(GenAiError::RequestFailed(message.clone())),
            None => Ok(self.output.clone()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-image-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_request(instruction: &str) -> TextRequest {
        TextRequest {
            instruction: instruction.to_string(),
            ..TextRequest::default()
        }
    }

    #[tokio::test]
    async fn test_fake_text_provider_matching() {
        let provider = FakeTextProvider::with_response("hello", "world");
        let result = provider.generate(&text_request("Say hello to the user")).await.unwrap();
        assert_eq!(result, "world");
    }

    #[tokio::test]
    async fn test_fake_text_provider_case_insensitive() {
        let provider = FakeTextProvider::with_response("HELLO", "world");
        let result = provider.generate(&text_request("hello there")).await.unwrap();
        assert_eq!(result, "world");
    }

    #[tokio::test]
    async fn test_fake_text_provider_no_match() {
        let provider = FakeTextProvider::new();
        let result = provider.generate(&text_request("random instruction")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fake_text_provider_default_response() {
        let provider = FakeTextProvider::new().with_default_response("default");
        let result = provider.generate(&text_request("random instruction")).await.unwrap();
        assert_eq!(result, "default");
    }

    #[tokio::test]
    async fn test_fake_text_provider_records_instructions() {
        let provider = FakeTextProvider::default();
        provider.generate(&text_request("first")).await.unwrap();
        provider.generate(&text_request("second")).await.unwrap();
        assert_eq!(provider.seen_instructions(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_fake_image_provider_inline_png() {
        let provider = FakeImageProvider::with_inline_png("aW1hZ2U=");
        let output = provider.generate("a bowl of soup").await.unwrap();
        assert_eq!(output.first_inline_image(), Some("aW1hZ2U="));
        assert_eq!(provider.seen_prompts(), vec!["a bowl of soup"]);
    }

    #[tokio::test]
    async fn test_fake_image_provider_without_image() {
        let provider = FakeImageProvider::without_image();
        let output = provider.generate("a bowl of soup").await.unwrap();
        assert_eq!(output.first_inline_image(), None);
    }

    #[tokio::test]
    async fn test_fake_image_provider_failing() {
        let provider = FakeImageProvider::failing("quota exceeded");
        assert!(provider.generate("a bowl of soup").await.is_err());
    }
}
