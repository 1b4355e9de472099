//! Endpoint and sampling settings for completion calls.
//!
//! [`ClientConfig`] carries everything a [`CompletionClient`](crate::CompletionClient)
//! sends besides the credential and the messages. The defaults are tuned for
//! short, lively in-character replies: high temperature, a 200-token cap,
//! and a 30-second time budget.

use std::time::Duration;

use crate::{DEFAULT_MODEL, GROQ_URL};

/// Default time budget for one completion call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for a completion client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Chat completions URL. Default: the Groq OpenAI-compatible endpoint.
    pub endpoint: String,
    /// Model identifier. Default: `"llama-3.3-70b-versatile"`.
    pub model: String,
    /// Sampling temperature. Default: `0.9`.
    pub temperature: f32,
    /// Maximum tokens in the reply. Default: `200`.
    pub max_tokens: u32,
    /// Nucleus sampling threshold. Default: `0.9`.
    pub top_p: f32,
    /// Bound on the whole exchange, body read included. Default: 30 s.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: GROQ_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.9,
            max_tokens: 200,
            top_p: 0.9,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Host part of the endpoint, for display (e.g. `"api.groq.com"`).
    pub fn provider(&self) -> &str {
        let rest = self
            .endpoint
            .split_once("://")
            .map_or(self.endpoint.as_str(), |(_, rest)| rest);
        rest.split(['/', '?']).next().unwrap_or(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_groq_llama() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, GROQ_URL);
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.max_tokens, 200);
        assert!((config.temperature - 0.9).abs() < f32::EPSILON);
        assert!((config.top_p - 0.9).abs() < f32::EPSILON);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn builders_override_fields() {
        let config = ClientConfig::default()
            .with_endpoint("http://127.0.0.1:9/v1/chat/completions")
            .with_model("tiny")
            .with_timeout(Duration::from_millis(250));
        assert_eq!(config.model, "tiny");
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert_eq!(config.provider(), "127.0.0.1:9");
    }

    #[test]
    fn provider_is_endpoint_host() {
        assert_eq!(ClientConfig::default().provider(), "api.groq.com");
        let bare = ClientConfig::default().with_endpoint("localhost:8080");
        assert_eq!(bare.provider(), "localhost:8080");
    }
}
