// src/completion.rs
//! Chat-completion client - the single point of entry for all hosted
//! language-model calls in JobPulse.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// The model used for every completion call. Intentionally hardcoded.
pub const MODEL: &str = "gpt-3.5-turbo";
const MAX_COMPLETION_TOKENS: u32 = 500;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion API rejected the credential")]
    Auth,

    #[error("completion API rate limited the request")]
    RateLimited,

    #[error("completion request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("completion API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("completion API response could not be parsed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("completion API response contained no choices")]
    EmptyResponse,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Backend seam for the two analysis stages, so the pipeline can be
/// exercised against a scripted fake.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, CompletionError>;
}

/// Reqwest-backed client for the hosted completion API.
///
/// The credential is injected at construction and owned here; nothing reads
/// it from ambient process state after startup.
pub struct CompletionClient {
    client: Client,
    api_key: String,
}

impl CompletionClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl CompletionBackend for CompletionClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, CompletionError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: MAX_COMPLETION_TOKENS,
        };

        info!("Calling completion API with model {}", MODEL);

        let response = self
            .client
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        debug!("Completion API responded with status {}", status);

        match status.as_u16() {
            401 | 403 => return Err(CompletionError::Auth),
            429 => return Err(CompletionError::RateLimited),
            _ => {}
        }

        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or(body);
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)?;
        let first = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyResponse)?;

        Ok(first.message.content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parsing_takes_first_choice() {
        let body = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "  trend text  "}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ]
        }"#;

        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        let first = parsed.choices.into_iter().next().unwrap();
        assert_eq!(first.message.content.trim(), "trend text");
    }

    #[test]
    fn error_body_parsing_extracts_message() {
        let body = r#"{"error": {"message": "model overloaded", "type": "server_error"}}"#;
        let parsed: ApiErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "model overloaded");
    }

    #[test]
    fn empty_choices_is_a_distinct_error() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        let result: Result<Choice, CompletionError> = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyResponse);
        assert!(matches!(result, Err(CompletionError::EmptyResponse)));
    }
}
