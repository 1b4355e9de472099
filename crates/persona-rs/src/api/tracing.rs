//! Correlation ids for outbound completion calls.
//!
//! Each call through [`CompletionClient`](crate::CompletionClient) is tagged
//! with a request id so its request, response, and failure log lines can be
//! matched up when several browsers hit the web surface at once.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Calls issued by this process so far.
static ISSUED: AtomicU32 = AtomicU32::new(0);

/// Generate a request id of the form `rq-<unix millis, hex>-<sequence>`.
///
/// The sequence number keeps ids distinct within one millisecond.
pub fn generate_request_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or(0);
    let seq = ISSUED.fetch_add(1, Ordering::Relaxed);
    format!("rq-{millis:x}-{seq:04x}")
}
