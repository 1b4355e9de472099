//! Ask a personality a question from the terminal.
//!
//! Reads the API key from the `GROQ_API_KEY` environment variable (or
//! `--api-key`). Without one, answers come from the demo-mode table.
//!
//! # Examples
//!
//! ```sh
//! # Ask a built-in personality
//! persona --personality british_pub_chimp "Why do we yawn?"
//!
//! # Bring your own personality
//! persona --personality custom --role "You are a sarcastic historian" \
//!   --style "Respond in a playful and snarky manner." "How does the internet work?"
//!
//! # List personalities / check the API key
//! persona --list
//! persona --test-connection
//! ```

use std::process;
use std::time::Duration;

use clap::Parser;
use persona_rs::config::ClientConfig;
use persona_rs::personality::catalog;
use persona_rs::showcase::{AskRequest, ConnectionCheck, Showcase};
use persona_rs::{API_KEY_ENV, DEFAULT_MODEL, GROQ_URL};
use tracing_subscriber::EnvFilter;

/// Ask a personality a question and print its reply.
#[derive(Parser)]
#[command(name = "persona")]
struct Cli {
    /// The question to ask
    question: Option<String>,

    /// Personality id (see --list)
    #[arg(long, short, default_value = "cheshire_cat")]
    personality: String,

    /// Role for the custom personality, e.g. "You are a sarcastic historian"
    #[arg(long, default_value = "")]
    role: String,

    /// Style and instructions for the custom personality
    #[arg(long, default_value = "")]
    style: String,

    /// List the available personalities and exit
    #[arg(long)]
    list: bool,

    /// Send a fixed greeting to check the API key and exit
    #[arg(long)]
    test_connection: bool,

    // ── Endpoint ───────────────────────────────────────────────
    /// API key; without one every answer comes from demo mode
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,

    /// Model to use
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Chat completions URL
    #[arg(long, default_value = GROQ_URL)]
    endpoint: String,

    /// Time budget for the request, in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

fn list_personalities() -> String {
    catalog()
        .iter()
        .map(|p| format!("{:<22} {} {}: {}", p.id, p.emoji, p.name, p.description))
        .collect::<Vec<_>>()
        .join("\n")
}

async fn run(cli: Cli) -> Result<String, String> {
    if cli.list {
        return Ok(list_personalities());
    }

    let config = ClientConfig::default()
        .with_endpoint(cli.endpoint)
        .with_model(cli.model)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let showcase = Showcase::new(cli.api_key, config)?;

    if cli.test_connection {
        return match showcase.test_connection().await {
            ConnectionCheck::Failed(message) => Err(message),
            check => Ok(check.message()),
        };
    }

    let request = AskRequest {
        personality: cli.personality,
        question: cli.question.unwrap_or_default(),
        custom_role: cli.role,
        custom_style: cli.style,
    };
    let reply = showcase.ask(&request).await.map_err(|e| e.to_string())?;
    if !reply.ok {
        return Err(reply.text);
    }
    Ok(format!("{} {} says:\n> {}", reply.emoji, reply.name, reply.text))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
