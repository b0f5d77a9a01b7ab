//! The completion operation and its wire types.
//!
//! [`CompletionClient::complete`] posts an ordered message sequence to the
//! configured endpoint and returns the extracted response text. All failure
//! modes (transport, non-success status, malformed body) collapse into the
//! normalized [`CompletionError`](crate::CompletionError); a service
//! response that simply carries no usable text is a success and yields
//! [`NO_RESPONSE_FALLBACK`].

use crate::client::CompletionClient;
use crate::error::{CompletionError, Result};
use crate::message::ChatMessage;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// Default `max_tokens` when the caller does not specify one.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Fixed sampling temperature sent with every request.
///
/// An `f64` so it serializes as `0.7` exactly, whether the request is
/// rendered to a string or to a `serde_json::Value`.
pub const TEMPERATURE: f64 = 0.7;

/// Success-path text returned when the service yields no usable content.
pub const NO_RESPONSE_FALLBACK: &str = "No response generated";

/// Request body for the chat-completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    /// Model identifier.
    pub model: String,
    /// Ordered conversation turns; a system message, if present, is first.
    pub messages: Vec<ChatMessage>,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Sampling temperature; always [`TEMPERATURE`].
    pub temperature: f64,
}

impl CompletionRequest {
    /// Create a request with the fixed temperature applied.
    #[must_use]
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            messages,
            max_tokens,
            temperature: TEMPERATURE,
        }
    }
}

/// Response body of the chat-completions endpoint.
///
/// `choices` is required: a body without it is malformed. Within a choice,
/// `message` and `content` default so sparse-but-well-formed bodies parse
/// and fall through to the fallback text.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Default, Deserialize)]
struct Choice {
    #[serde(default)]
    message: ResponseMessage,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Extract the first choice's content, or the fallback text.
fn extract_content(response: CompletionResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .unwrap_or_else(|| NO_RESPONSE_FALLBACK.to_string())
}

impl CompletionClient {
    /// Send a completion request with the default token limit.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`CompletionError`](crate::CompletionError)
    /// if the request fails at the transport level, the service responds
    /// with a non-success status, or the body does not match the expected
    /// shape.
    pub async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String> {
        self.complete_with_max_tokens(model, messages, DEFAULT_MAX_TOKENS)
            .await
    }

    /// Send a completion request with an explicit token limit.
    ///
    /// Single shot: no retries, no backoff. Dropping the returned future
    /// aborts the in-flight request with no further side effects.
    ///
    /// # Errors
    ///
    /// Same normalization as [`complete`](Self::complete); the diagnostic
    /// cause goes to the log, never to the caller-visible message.
    #[instrument(skip(self, messages))]
    pub async fn complete_with_max_tokens(
        &self,
        model: &str,
        messages: &[ChatMessage],
        max_tokens: u32,
    ) -> Result<String> {
        let request = CompletionRequest::new(model, messages.to_vec(), max_tokens);

        debug!(message_count = request.messages.len(), "Sending completion request");

        let response = self
            .http_client()
            .post(self.completions_url())
            .headers(self.request_headers())
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                error!(cause = %err, "Completion request failed");
                CompletionError::from(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, body = %body, "Completion service returned an error status");
            return Err(CompletionError::http_status());
        }

        let body: CompletionResponse = response.json().await.map_err(|err| {
            error!(cause = %err, "Completion response did not match the expected shape");
            CompletionError::from(err)
        })?;

        Ok(extract_content(body))
    }
}
