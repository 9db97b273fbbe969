//! Fake AI client for testing.
//!
//! Returns deterministic responses keyed by prompt name, so the captioning
//! pipeline can be exercised without network access or API costs.

use async_trait::async_trait;
use std::collections::HashMap;

use super::client::{AiClient, AiError};
use super::types::{ChatRequest, ChatResponse, Usage};

#[derive(Debug, Default, Clone)]
pub struct FakeAiClient {
    /// Map of prompt name -> response content
    responses: HashMap<String, String>,
}

impl FakeAiClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `prompt_name` with `content`.
    pub fn with_response(mut self, prompt_name: &str, content: &str) -> Self {
        self.responses
            .insert(prompt_name.to_string(), content.to_string());
        self
    }
}

#[async_trait]
impl AiClient for FakeAiClient {
    async fn complete(
        &self,
        prompt_name: &str,
        _request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        match self.responses.get(prompt_name) {
            Some(content) => Ok(ChatResponse {
                content: content.clone(),
                usage: Usage::default(),
                cached: false,
            }),
            None => Err(AiError::Api(format!(
                "FakeAiClient: no response configured for prompt {}",
                prompt_name
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_configured_response() {
        let client = FakeAiClient::new().with_response("hello", "world");
        let response = client
            .complete("hello", ChatRequest::default())
            .await
            .unwrap();
        assert_eq!(response.content, "world");
    }

    #[tokio::test]
    async fn test_missing_response() {
        let client = FakeAiClient::new();
        let result = client.complete("hello", ChatRequest::default()).await;
        assert!(matches!(result, Err(AiError::Api(_))));
    }
}
