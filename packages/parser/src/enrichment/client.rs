//! Annotation service client.
//!
//! One blocking request per call, no retries: a failed request is
//! degraded by the orchestrator, never repeated.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::enrichment::config::EnrichmentConfig;
use crate::error::{ParserError, Result};

/// User agent for annotation requests.
const USER_AGENT: &str = concat!("erlass-parser/", env!("CARGO_PKG_VERSION"));

/// Client abstraction for the annotation service, enabling mocking in
/// tests.
pub trait AnnotationClient {
    /// Send one prompt and return the raw response content.
    fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String>;
}

/// OpenAI-compatible chat-completions client (OpenRouter by default).
///
/// NOTE: Do NOT derive `Debug` on this struct, `api_key` would be
/// exposed. If Debug is needed, implement it manually with the key
/// redacted.
pub struct OpenRouterClient {
    http: Client,
    api_key: String,
    api_base_url: String,
    model: String,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl OpenRouterClient {
    pub fn new(config: &EnrichmentConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            api_base_url: config.api_base_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }
}

impl AnnotationClient for OpenRouterClient {
    fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        let url = format!("{}/chat/completions", self.api_base_url);

        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(ParserError::Annotation {
                status: status.as_u16(),
                message,
            });
        }

        let api_response: ChatResponse = response.json()?;
        let content = api_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        if content.is_empty() {
            return Err(ParserError::AnnotationEmptyResponse);
        }

        Ok(content)
    }
}

/// Test utilities for the annotation client.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support {
    use super::*;
    use std::sync::Mutex;

    /// Mock annotation client returning pre-configured responses in order.
    pub struct MockAnnotationClient {
        responses: Mutex<Vec<Result<String>>>,
    }

    impl MockAnnotationClient {
        pub fn new(responses: Vec<Result<String>>) -> Self {
            // Reverse so we can pop from the end
            let mut responses = responses;
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
            }
        }

        pub fn with_response(content: &str) -> Self {
            Self::new(vec![Ok(content.to_string())])
        }

        pub fn with_responses(contents: Vec<&str>) -> Self {
            Self::new(contents.into_iter().map(|c| Ok(c.to_string())).collect())
        }
    }

    impl AnnotationClient for MockAnnotationClient {
        fn complete(&self, _prompt: &str, _max_tokens: u32) -> Result<String> {
            let mut responses = self
                .responses
                .lock()
                .map_err(|e| ParserError::Config(format!("mock lock poisoned: {e}")))?;
            responses
                .pop()
                .unwrap_or(Err(ParserError::AnnotationEmptyResponse))
        }
    }
}
