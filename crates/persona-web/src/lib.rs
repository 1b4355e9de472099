//! Browser-based personality showcase for persona-rs.
//!
//! `persona-web` serves a single form page (pick a personality, ask a
//! question, read the reply) and the small JSON API behind it. Every
//! request is answered by one shared [`Showcase`], so the
//! AI-or-demo decision made at startup holds for every browser.
//!
//! # Quick start
//!
//! ```ignore
//! use std::sync::Arc;
//! use persona_rs::prelude::*;
//! use persona_web::{WebConfig, spawn_web};
//!
//! let showcase = Arc::new(Showcase::new(std::env::var("GROQ_API_KEY").ok(), ClientConfig::default())?);
//! let addr = spawn_web(showcase, WebConfig::default()).await?;
//! println!("Web UI: http://{addr}");
//! ```
//!
//! # Endpoints
//!
//! | Route | Purpose |
//! |-------|---------|
//! | `GET /` | The form page |
//! | `GET /api/status` | Current mode, model, provider |
//! | `GET /api/personalities` | Selectable personalities |
//! | `POST /api/ask` | Ask a question; 422 when the input is invalid |
//! | `POST /api/test-connection` | Send the fixed greeting |

mod api;
mod page;
mod server;

pub use api::{AskResponse, ConnectionResponse, ErrorBody, StatusResponse};

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use persona_rs::showcase::Showcase;

/// Configuration for the web server.
pub struct WebConfig {
    /// Address to bind to. Default: `127.0.0.1:8501`.
    pub bind_addr: SocketAddr,
    /// Directory of static assets (e.g. a `background.png`) served for any
    /// path the API does not claim.
    pub static_dir: Option<PathBuf>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8501)),
            static_dir: None,
        }
    }
}

/// Spawn the web server on a Tokio task and return the bound address.
///
/// The server runs until the Tokio runtime shuts down.
pub async fn spawn_web(showcase: Arc<Showcase>, config: WebConfig) -> Result<SocketAddr, String> {
    let router = server::build_router(showcase, config.static_dir);
    server::start_server(router, config.bind_addr).await
}
