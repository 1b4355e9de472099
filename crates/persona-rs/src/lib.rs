//! Personality-driven chat completions with a no-network demo mode.
//!
//! `persona-rs` asks a hosted, OpenAI-compatible chat-completions endpoint
//! (Groq by default) a question in the voice of a chosen *personality*: a
//! role plus a style that become the system prompt. When no API key is
//! configured the same calls are answered from a table of canned replies,
//! so the surfaces built on top keep working offline.
//!
//! # Getting started
//!
//! ```no_run
//! use persona_rs::prelude::*;
//!
//! # async fn run() -> Result<(), String> {
//! let api_key = std::env::var("GROQ_API_KEY").ok();
//! let showcase = Showcase::new(api_key, ClientConfig::default())?;
//!
//! let request = AskRequest::preset("cheshire_cat", "Why is the sky blue?");
//! match showcase.ask(&request).await {
//!     Ok(reply) => println!("{} {} says: {}", reply.emoji, reply.name, reply.text),
//!     Err(e) => eprintln!("{e}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Where to find things
//!
//! - **Personalities:** [`Preset`](personality::Preset) is the closed set of
//!   built-in voices, [`Personality`](personality::Personality) adds the
//!   user-defined custom variant.
//! - **System prompts:** [`compose_system_prompt`](prompt::compose_system_prompt).
//! - **The HTTP call:** [`CompletionClient`] sends one request and returns a
//!   [`CompletionResult`](api::CompletionResult). The status/body classifier
//!   lives in [`api::outcome`] and is usable without a network.
//! - **Offline replies:** [`demo::demo_reply`].
//! - **Putting it together:** [`Showcase`](showcase::Showcase) picks AI or
//!   demo mode once from the credential, validates input, and dispatches.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`personality`] | [`Preset`](personality::Preset) records, [`Personality`](personality::Personality) union |
//! | [`prompt`] | System prompt composition |
//! | [`api`] | Response classification, request ids |
//! | [`config`] | [`ClientConfig`](config::ClientConfig) endpoint and sampling settings |
//! | [`demo`] | Canned replies for demo mode |
//! | [`showcase`] | Mode selection, validation, dispatch, connection test |

pub mod api;
pub mod config;
pub mod demo;
pub mod personality;
pub mod prelude;
pub mod prompt;
pub mod showcase;

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, trace, warn};

use crate::api::{CompletionResult, classify_response, generate_request_id};
use crate::config::ClientConfig;

// ── Constants ──────────────────────────────────────────────────────

pub const GROQ_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default model for all completions.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

const USER_AGENT: &str = concat!("persona-rs/", env!("CARGO_PKG_VERSION"));

// ── Request types ──────────────────────────────────────────────────

/// Chat completion request body.
#[derive(Serialize, Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
}

// ── Message types ──────────────────────────────────────────────────

/// Role of a message in the conversation.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::User => write!(f, "user"),
        }
    }
}

/// A message in the conversation.
#[derive(Serialize, Clone, Debug)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

// ── Response types ─────────────────────────────────────────────────

/// Raw API response (internal deserialization target).
///
/// Every field is optional: a success body carries `choices`, an error body
/// carries `error`, and anything else still has to classify cleanly.
#[derive(Deserialize, Debug, Default)]
pub(crate) struct RawChatResponse {
    #[serde(default)]
    pub(crate) choices: Vec<RawChoice>,
    #[serde(default)]
    pub(crate) error: Option<ApiErrorResponse>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RawChoice {
    #[serde(default)]
    pub(crate) message: Option<RawResponseMessage>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RawResponseMessage {
    #[serde(default)]
    pub(crate) content: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ApiErrorResponse {
    #[serde(default)]
    pub(crate) message: Option<String>,
}

// ── Client ─────────────────────────────────────────────────────────

/// Async HTTP client for an OpenAI-compatible chat completions endpoint.
///
/// One [`complete`](Self::complete) call sends exactly one request. There
/// is no retry and no caching; the configured timeout bounds the whole
/// exchange, body included.
pub struct CompletionClient {
    pub(crate) client: reqwest::Client,
    pub(crate) api_key: String,
    pub(crate) config: ClientConfig,
}

impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("api_key", &"<redacted>")
            .field("config", &self.config)
            .finish()
    }
}

impl CompletionClient {
    /// Create a new client with the given API key and settings.
    pub fn new(api_key: impl Into<String>, config: ClientConfig) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| format!("failed to build HTTP client: {e}"))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
        })
    }

    /// The settings this client sends with every request.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the request body for a system prompt and a user message.
    pub fn build_request(&self, system_prompt: &str, user_message: &str) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![Message::system(system_prompt), Message::user(user_message)],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            top_p: self.config.top_p,
        }
    }

    /// Send one chat completion request and classify the outcome.
    ///
    /// Never fails in the `Result` sense: every transport and API problem
    /// is a [`CompletionResult`] variant.
    pub async fn complete(&self, system_prompt: &str, user_message: &str) -> CompletionResult {
        let body = self.build_request(system_prompt, user_message);
        let request_id = generate_request_id();

        debug!(
            "[{request_id}] LLM request: model={}, messages={}, max_tokens={}, temp={}, top_p={}",
            body.model,
            body.messages.len(),
            body.max_tokens,
            body.temperature,
            body.top_p,
        );
        trace!(
            "[{request_id}] Request payload size: {} bytes",
            serde_json::to_string(&body).map_or(0, |s| s.len())
        );

        let start = Instant::now();

        let resp = match self
            .client
            .post(&self.config.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => return transport_failure(&request_id, &e),
        };

        let status = resp.status().as_u16();
        let text = match resp.text().await {
            Ok(text) => text,
            Err(e) => return transport_failure(&request_id, &e),
        };

        debug!(
            "[{request_id}] LLM response: HTTP {} in {:.1}s ({} bytes)",
            status,
            start.elapsed().as_secs_f64(),
            text.len()
        );

        let result = classify_response(status, &text);
        match &result {
            CompletionResult::Success(reply) => {
                debug!("[{request_id}] LLM output: {} chars", reply.len());
            }
            other => warn!("[{request_id}] completion failed: {other:?}"),
        }
        result
    }
}

fn transport_failure(request_id: &str, error: &reqwest::Error) -> CompletionResult {
    let result = CompletionResult::from_transport_error(error);
    warn!("[{request_id}] request failed: {error}");
    result
}
