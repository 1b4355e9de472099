//! Axum server setup and router construction.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use persona_rs::showcase::Showcase;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{error, info};

use crate::api::{self, AppState};
use crate::page;

/// Build the full axum router.
///
/// The router serves:
/// - The form page at `/`
/// - REST API at `/api/*`
/// - Optional static files for anything else
pub fn build_router(showcase: Arc<Showcase>, static_dir: Option<PathBuf>) -> Router {
    let app_state = AppState { showcase };

    // CORS layer so the API can be driven from a page served elsewhere.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/", get(page::index))
        .route("/api/status", get(api::get_status))
        .route("/api/personalities", get(api::get_personalities))
        .route("/api/ask", post(api::post_ask))
        .route("/api/test-connection", post(api::post_test_connection))
        .with_state(app_state)
        .layer(cors);

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
}

/// Bind the listener, start serving on a background task, and return the
/// bound address.
pub async fn start_server(router: Router, bind_addr: SocketAddr) -> Result<SocketAddr, String> {
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|e| format!("failed to bind {bind_addr}: {e}"))?;
    let addr = listener
        .local_addr()
        .map_err(|e| format!("failed to read bound address: {e}"))?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            error!("web server stopped: {e}");
        }
    });

    info!("Listening on http://{addr}");
    Ok(addr)
}
