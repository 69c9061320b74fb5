//! Client for the remote chat-completion endpoint.
//!
//! One blocking request per turn: POST the user query, read back a JSON
//! envelope whose `answer` field carries the reply. The envelope is the only
//! part of the service this crate depends on; everything past `answer` is
//! handled by the interpreter.

use crate::config::EndpointConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Clone, Debug, Error)]
pub enum ChatError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("chat endpoint error {status}: {body}")]
    Endpoint { status: u16, body: String },
    #[error("malformed reply envelope: missing answer field")]
    MalformedEnvelope,
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        ChatError::Transport(err.to_string())
    }
}

pub type ChatResult<T> = Result<T, ChatError>;

/// Extract the required `answer` string from a success-status body.
///
/// A success body that is not a JSON object with a string `answer` is a
/// protocol violation, reported through the same error path as a transport
/// failure. Exported for tests.
pub fn parse_envelope(body: &str) -> ChatResult<String> {
    #[derive(Deserialize)]
    struct ChatEnvelope {
        answer: String,
    }

    serde_json::from_str::<ChatEnvelope>(body)
        .map(|envelope| envelope.answer)
        .map_err(|_| ChatError::MalformedEnvelope)
}

#[derive(Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    config: EndpointConfig,
}

impl ChatClient {
    pub fn new(config: EndpointConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Build a client from environment configuration.
    pub fn from_env() -> ChatResult<Self> {
        let config = EndpointConfig::from_env().map_err(|e| ChatError::Config(e.to_string()))?;
        Ok(Self::new(config))
    }

    /// Send one user query and return the raw `answer` payload.
    pub async fn send(&self, query: &str) -> ChatResult<String> {
        #[derive(Serialize)]
        struct Inputs {}

        #[derive(Serialize)]
        struct ChatRequest<'a> {
            inputs: Inputs,
            query: &'a str,
            response_mode: &'a str,
            conversation_id: &'a str,
            user: &'a str,
        }

        debug!(endpoint = %self.config.url, "dispatching chat request");

        let response = self
            .client
            .post(&self.config.url)
            .bearer_auth(&self.config.api_key)
            .json(&ChatRequest {
                inputs: Inputs {},
                query,
                response_mode: "blocking",
                conversation_id: "",
                user: "user",
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(status = status.as_u16(), "chat endpoint returned an error");
            return Err(ChatError::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        parse_envelope(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_envelope_extracts_answer() {
        let body = r#"{"answer":"hello","conversation_id":"abc"}"#;
        assert_eq!(parse_envelope(body).unwrap(), "hello");
    }

    #[test]
    fn test_parse_envelope_missing_answer() {
        let result = parse_envelope(r#"{"conversation_id":"abc"}"#);
        assert!(matches!(result, Err(ChatError::MalformedEnvelope)));
    }

    #[test]
    fn test_parse_envelope_non_json_body() {
        assert!(matches!(
            parse_envelope("<html>gateway timeout</html>"),
            Err(ChatError::MalformedEnvelope)
        ));
    }

    #[test]
    fn test_parse_envelope_non_string_answer() {
        assert!(matches!(
            parse_envelope(r#"{"answer":7}"#),
            Err(ChatError::MalformedEnvelope)
        ));
    }

    #[test]
    fn test_error_display_embeds_description() {
        let err = ChatError::Endpoint {
            status: 502,
            body: "bad gateway".into(),
        };
        let text = err.to_string();
        assert!(text.contains("502"));
        assert!(text.contains("bad gateway"));
    }
}
