use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_ENDPOINT: &str = "https://api.dify.ai/v1/chat-messages";

/// Connection settings for the remote chat endpoint.
///
/// Resolved once at startup and injected into the client at construction;
/// nothing else reads the credential afterwards.
#[derive(Clone, Debug)]
pub struct EndpointConfig {
    pub url: String,
    pub api_key: String,
}

impl EndpointConfig {
    /// Read configuration from the environment.
    ///
    /// `CHAT_API_KEY` is required; `CHAT_ENDPOINT` falls back to the hosted
    /// default. On native builds the variables come from `.env` via dotenvy,
    /// on wasm/mobile from the bundled config parsed in `main`.
    pub fn from_env() -> Result<Self> {
        let url = env::var("CHAT_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let api_key = env::var("CHAT_API_KEY")
            .context("CHAT_API_KEY not set; the widget cannot reach the chat endpoint")?;
        Ok(Self { url, api_key })
    }
}
