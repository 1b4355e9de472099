//! Convenience re-exports for common `persona-rs` types.
//!
//! ```ignore
//! use persona_rs::prelude::*;
//! ```

// ── Core types ──────────────────────────────────────────────────────
pub use crate::{ChatRequest, CompletionClient, Message, MessageRole};

// ── Outcomes ────────────────────────────────────────────────────────
pub use crate::api::{CompletionResult, classify_response};

// ── Personalities and prompts ───────────────────────────────────────
pub use crate::demo::demo_reply;
pub use crate::personality::{Personality, PersonalityInfo, Preset, catalog};
pub use crate::prompt::compose_system_prompt;

// ── Dispatch ────────────────────────────────────────────────────────
pub use crate::config::ClientConfig;
pub use crate::showcase::{AskRequest, ConnectionCheck, Mode, Reply, Showcase, ValidationError};
