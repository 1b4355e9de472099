//! API interaction layer: response classification and request correlation.
//!
//! These modules sit between [`CompletionClient`](crate::CompletionClient)
//! and the wire:
//!
//! - [`outcome`]: [`CompletionResult`], the one tagged outcome every call
//!   produces, and [`classify_response`], the pure `(status, body)` mapping
//!   behind it. 401 and 429 get their own variants; everything else that is
//!   not a 200 becomes a service error carrying the API's `error.message`.
//! - [`tracing`]: per-call request ids used to correlate log lines.

pub mod outcome;
pub mod tracing;

// Re-export commonly used items at the module level.
pub use outcome::{CompletionResult, classify_response};
pub use tracing::generate_request_id;
