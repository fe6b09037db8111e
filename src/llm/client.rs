//! Chat-completions client — request/response wire handling.
//!
//! The client sends one request per call and never retries; retry policy, if
//! any, belongs to whoever sits in front of it. Body parsing lives in free
//! functions so the wire handling is testable without a server.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::llm::types::{ChatMessage, ModelParameters};

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// The seam between the conversation core and the network. Production code
/// uses [`ChatClient`]; tests substitute canned implementations.
#[allow(async_fn_in_trait)]
pub trait CompletionApi {
    /// Send a full transcript with resolved parameters and return the
    /// assistant's reply text.
    async fn complete(
        &self,
        transcript: &[ChatMessage],
        params: &ModelParameters,
    ) -> Result<String, Error>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Production client for a chat-completions endpoint.
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ChatClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point at a different endpoint (self-hosted gateways, test servers).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl CompletionApi for ChatClient {
    async fn complete(
        &self,
        transcript: &[ChatMessage],
        params: &ModelParameters,
    ) -> Result<String, Error> {
        let start = std::time::Instant::now();
        log::info!(
            "[LLM] Model: {}, max_tokens: {}, {} messages",
            params.model,
            params.max_tokens,
            transcript.len()
        );

        let request = ChatRequest {
            model: &params.model,
            messages: transcript,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Transport {
                message: format!("Request failed: {}", e),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| Error::Transport {
            message: format!("Failed to read response: {}", e),
        })?;

        if !status.is_success() {
            let message = error_message(status, &body);
            log::error!("[LLM] API returned {}: {}", status, message);
            return Err(Error::Transport { message });
        }

        log::info!(
            "[LLM] Response in {}ms ({} bytes)",
            start.elapsed().as_millis(),
            body.len()
        );
        extract_reply(&body)
    }
}

/// Best-effort error message from a provider failure body.
///
/// Expects `{"error": {"message": "..."}}`; anything else falls back to a
/// generic status line.
pub(crate) fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = parsed["error"]["message"].as_str() {
            if !msg.is_empty() {
                return msg.to_string();
            }
        }
    }
    format!(
        "HTTP {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("unknown error")
    )
}

/// Pull the assistant text out of a success body. Only `choices[0]` is
/// consulted; a missing choice or non-string content is an invalid shape.
pub(crate) fn extract_reply(body: &str) -> Result<String, Error> {
    let parsed: ChatResponse = serde_json::from_str(body).map_err(|_| Error::InvalidResponse)?;
    parsed
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or(Error::InvalidResponse)
}
