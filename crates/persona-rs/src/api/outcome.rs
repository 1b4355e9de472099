//! Classification of a completion exchange into a single outcome.
//!
//! The HTTP layer only ever hands this module a status code and a body
//! string (or a transport error), so the whole status mapping can be tested
//! without a network.

use crate::RawChatResponse;

/// Fallback message when a failed response carries no `error.message`.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Fallback message when a 200 response lacks `choices[0].message.content`.
pub const UNEXPECTED_FORMAT: &str = "Unexpected response format";

/// The outcome of one completion call. Exactly one variant per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    /// The model's reply, surrounding whitespace trimmed.
    Success(String),
    /// HTTP 401: the credential was rejected.
    AuthError,
    /// HTTP 429: the provider is throttling this key.
    RateLimited,
    /// Any other failed status, or a 200 whose body is missing the reply.
    ServiceError { status: u16, message: String },
    /// The time budget elapsed before the exchange completed.
    Timeout,
    /// DNS, connect, TLS, reset, or any other transport failure.
    TransportError(String),
}

impl CompletionResult {
    /// Map a `reqwest` failure to `Timeout` or `TransportError`.
    pub fn from_transport_error(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            CompletionResult::Timeout
        } else {
            CompletionResult::TransportError(error.to_string())
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CompletionResult::Success(_))
    }

    /// The text to show the user in place of (or as) the response.
    pub fn user_message(&self) -> String {
        match self {
            CompletionResult::Success(text) => text.clone(),
            CompletionResult::AuthError => {
                format!("⚠️ Invalid API key. Please check your {} setting.", crate::API_KEY_ENV)
            }
            CompletionResult::RateLimited => {
                "⏱️ Rate limit reached. Please wait a moment and try again.".to_string()
            }
            CompletionResult::ServiceError { status, message } => {
                format!("⚠️ API Error ({status}): {message}")
            }
            CompletionResult::Timeout => "⏱️ Request timed out. Please try again.".to_string(),
            CompletionResult::TransportError(detail) => format!("❌ Error: {detail}"),
        }
    }
}

/// Classify a completed HTTP exchange by status code and body.
pub fn classify_response(status: u16, body: &str) -> CompletionResult {
    match status {
        200 => parse_success(body),
        401 => CompletionResult::AuthError,
        429 => CompletionResult::RateLimited,
        _ => CompletionResult::ServiceError {
            status,
            message: error_message(body).unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        },
    }
}

fn parse_success(body: &str) -> CompletionResult {
    let parsed: RawChatResponse = serde_json::from_str(body).unwrap_or_default();

    let content = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content);

    match content {
        Some(text) => CompletionResult::Success(text.trim().to_string()),
        None => CompletionResult::ServiceError {
            status: 200,
            message: parsed
                .error
                .and_then(|e| e.message)
                .unwrap_or_else(|| UNEXPECTED_FORMAT.to_string()),
        },
    }
}

/// Best-effort `error.message` extraction.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<RawChatResponse>(body)
        .ok()?
        .error?
        .message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_is_auth_error_whatever_the_body() {
        assert_eq!(classify_response(401, ""), CompletionResult::AuthError);
        assert_eq!(
            classify_response(401, r#"{"error":{"message":"bad key"}}"#),
            CompletionResult::AuthError
        );
    }

    #[test]
    fn too_many_requests_is_rate_limited() {
        assert_eq!(classify_response(429, "slow down"), CompletionResult::RateLimited);
    }

    #[test]
    fn success_trims_whitespace() {
        let body = r#"{"choices":[{"message":{"content":" hi "}}]}"#;
        assert_eq!(
            classify_response(200, body),
            CompletionResult::Success("hi".into())
        );
    }

    #[test]
    fn success_uses_first_choice() {
        let body = r#"{"choices":[
            {"message":{"role":"assistant","content":"first\n"},"finish_reason":"stop"},
            {"message":{"role":"assistant","content":"second"}}
        ],"usage":{"total_tokens":12}}"#;
        assert_eq!(
            classify_response(200, body),
            CompletionResult::Success("first".into())
        );
    }

    #[test]
    fn service_error_carries_api_message() {
        assert_eq!(
            classify_response(500, r#"{"error":{"message":"boom"}}"#),
            CompletionResult::ServiceError {
                status: 500,
                message: "boom".into()
            }
        );
    }

    #[test]
    fn service_error_falls_back_to_unknown() {
        assert_eq!(
            classify_response(500, "{}"),
            CompletionResult::ServiceError {
                status: 500,
                message: UNKNOWN_ERROR.into()
            }
        );
        assert_eq!(
            classify_response(503, "<html>upstream down</html>"),
            CompletionResult::ServiceError {
                status: 503,
                message: UNKNOWN_ERROR.into()
            }
        );
    }

    #[test]
    fn malformed_success_is_service_error() {
        assert_eq!(
            classify_response(200, r#"{"choices":[]}"#),
            CompletionResult::ServiceError {
                status: 200,
                message: UNEXPECTED_FORMAT.into()
            }
        );
        assert_eq!(
            classify_response(200, "not json"),
            CompletionResult::ServiceError {
                status: 200,
                message: UNEXPECTED_FORMAT.into()
            }
        );
        assert_eq!(
            classify_response(200, r#"{"error":{"message":"model overloaded"}}"#),
            CompletionResult::ServiceError {
                status: 200,
                message: "model overloaded".into()
            }
        );
    }

    #[test]
    fn user_messages() {
        assert_eq!(CompletionResult::Success("hi".into()).user_message(), "hi");
        assert!(CompletionResult::AuthError.user_message().contains("Invalid API key"));
        assert!(CompletionResult::RateLimited.user_message().contains("Rate limit"));
        assert_eq!(
            CompletionResult::ServiceError {
                status: 500,
                message: "boom".into()
            }
            .user_message(),
            "⚠️ API Error (500): boom"
        );
        assert!(CompletionResult::Timeout.user_message().contains("timed out"));
        assert_eq!(
            CompletionResult::TransportError("dns".into()).user_message(),
            "❌ Error: dns"
        );
    }

    #[test]
    fn only_success_is_success() {
        assert!(CompletionResult::Success(String::new()).is_success());
        assert!(!CompletionResult::Timeout.is_success());
        assert!(!CompletionResult::AuthError.is_success());
    }
}
