//! REST API endpoint handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use persona_rs::personality::{PersonalityInfo, catalog};
use persona_rs::showcase::{AskRequest, Mode, Reply, Showcase};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Shared application state passed to all handlers via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub showcase: Arc<Showcase>,
}

/// Response body for GET /api/status.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub mode: Mode,
    /// `"AI Mode"` or `"Demo Mode"`.
    pub label: String,
    pub model: String,
    pub provider: String,
}

/// GET /api/status: Mode banner data.
pub async fn get_status(State(app): State<AppState>) -> Json<StatusResponse> {
    let config = app.showcase.config();
    let mode = app.showcase.mode();
    Json(StatusResponse {
        mode,
        label: mode.label().to_string(),
        model: config.model.clone(),
        provider: config.provider().to_string(),
    })
}

/// GET /api/personalities: Presets followed by custom.
pub async fn get_personalities() -> Json<Vec<PersonalityInfo>> {
    Json(catalog())
}

/// Response body for a successful POST /api/ask.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    #[serde(flatten)]
    pub reply: Reply,
    /// RFC 3339 time the reply was produced.
    pub answered_at: String,
}

/// Error body for rejected input.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// POST /api/ask: Ask the selected personality a question.
///
/// Returns 200 with the reply (check `ok`: a failed completion still
/// answers 200, with the message to show in `text`), or 422 when the
/// question or custom role is missing. A 422 means no call was made.
pub async fn post_ask(
    State(app): State<AppState>,
    Json(body): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, Json<ErrorBody>)> {
    match app.showcase.ask(&body).await {
        Ok(reply) => Ok(Json(AskResponse {
            reply,
            answered_at: chrono::Utc::now().to_rfc3339(),
        })),
        Err(e) => {
            debug!("Rejected ask for '{}': {e}", body.personality);
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorBody {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

/// Response body for POST /api/test-connection.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConnectionResponse {
    /// `"working"`, `"failed"`, or `"demo"`.
    pub status: String,
    pub message: String,
}

/// POST /api/test-connection: Send the fixed greeting through the client.
pub async fn post_test_connection(State(app): State<AppState>) -> Json<ConnectionResponse> {
    let check = app.showcase.test_connection().await;
    Json(ConnectionResponse {
        status: check.status().to_string(),
        message: check.message(),
    })
}
