//! AI Personalities Showcase, browser UI.
//!
//! Serves the personality form and its JSON API. With `GROQ_API_KEY` set,
//! questions go to the model; without it the server runs in demo mode and
//! answers from canned replies.
//!
//! # Usage
//!
//! ```bash
//! GROQ_API_KEY=gsk_... cargo run -p persona-web
//! cargo run -p persona-web -- --port 8080             # demo mode
//! cargo run -p persona-web -- --static-dir ./assets   # serve background.png etc.
//! ```
//!
//! Then open the printed URL in a browser, or drive the API with curl:
//!
//! ```bash
//! curl -s localhost:8501/api/ask -H 'content-type: application/json' \
//!   -d '{"personality":"sassy_fairy","question":"Why is the sky blue?"}'
//! ```

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use persona_rs::config::ClientConfig;
use persona_rs::showcase::Showcase;
use persona_rs::{API_KEY_ENV, DEFAULT_MODEL, GROQ_URL};
use persona_web::{WebConfig, spawn_web};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Browser UI for asking personalities questions.
#[derive(Parser)]
#[command(about = "AI Personalities Showcase with a browser-based UI")]
struct Args {
    /// Port for the web UI server.
    #[arg(long, default_value_t = 8501)]
    port: u16,

    /// Address to bind to.
    #[arg(long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Directory of static assets served alongside the page.
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// API key; without one the server runs in demo mode.
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,

    /// LLM model to use.
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Chat completions URL.
    #[arg(long, default_value = GROQ_URL)]
    endpoint: String,

    /// Time budget per completion call, in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // 1. Decide the mode once, from the credential.
    let config = ClientConfig::default()
        .with_endpoint(args.endpoint)
        .with_model(args.model)
        .with_timeout(Duration::from_secs(args.timeout_secs));
    let showcase = Arc::new(Showcase::new(args.api_key, config)?);

    // 2. Spawn the web server.
    let web_config = WebConfig {
        bind_addr: SocketAddr::new(args.bind, args.port),
        static_dir: args.static_dir,
    };
    let addr = spawn_web(showcase.clone(), web_config).await?;
    println!("Web UI: http://{addr} ({})", showcase.mode());

    // 3. Serve until interrupted.
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("failed to listen for shutdown signal: {e}"))?;
    info!("Shutting down");
    Ok(())
}
