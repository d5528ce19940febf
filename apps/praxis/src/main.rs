//! # Praxis - Directory Query Server
//!
//! The main binary for the Praxis query-serving layer.
//!
//! This application provides:
//! - HTTP API server (axum-based, single routing endpoint)
//! - CLI interface for one-shot resolver calls
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────┐
//! │              apps/praxis (THE BINARY)             │
//! │                                                   │
//! │  ┌─────────────┐           ┌─────────────┐        │
//! │  │   CLI       │           │   HTTP API  │        │
//! │  │  (clap)     │           │   (axum)    │        │
//! │  └──────┬──────┘           └──────┬──────┘        │
//! │         │                         │               │
//! │         └────────────┬────────────┘               │
//! │                      ▼                            │
//! │              ┌───────────────┐                    │
//! │              │  praxis-core  │                    │
//! │              │  (THE LOGIC)  │                    │
//! │              └───────────────┘                    │
//! └───────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! praxis serve --host 0.0.0.0 --port 4000
//!
//! # One-shot resolver calls
//! praxis doctors --specialities PSYCHOLOGIST --addresses
//! praxis doctor --id 1
//! praxis calc --a 10 --b 5 --operations ADD,MULTIPLY
//! praxis closest-color --hex '#FF5733'
//! ```

use clap::Parser;
use praxis::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing — PRAXIS_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("PRAXIS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "praxis=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Praxis startup banner.
fn print_banner() {
    println!(
        r#"
  ██████╗ ██████╗  █████╗ ██╗  ██╗██╗███████╗
  ██╔══██╗██╔══██╗██╔══██╗╚██╗██╔╝██║██╔════╝
  ██████╔╝██████╔╝███████║ ╚███╔╝ ██║███████╗
  ██╔═══╝ ██╔══██╗██╔══██║ ██╔██╗ ██║╚════██║
  ██║     ██║  ██║██║  ██║██╔╝ ██╗██║███████║
  ╚═╝     ╚═╝  ╚═╝╚═╝  ╚═╝╚═╝  ╚═╝╚═╝╚══════╝

  Directory Query Server v{}

  Typed • Deterministic • In-Memory
"#,
        env!("CARGO_PKG_VERSION")
    );
}
