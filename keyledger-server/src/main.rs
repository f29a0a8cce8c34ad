//! Keyledger license-validation server.
//!
//! Serves a public license status check plus a token-protected admin surface
//! over a single SQLite-backed store.
//!
//! Usage:
//!   keyledger-server --port 8080 --db licenses.db
//!
//! The admin token is read from `KEYLEDGER_ADMIN_TOKEN` at startup.

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use keyledger_server::{build_router, AppState, ServerConfig};
use keyledger_store::LicenseStore;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "keyledger-server")]
#[command(about = "License validation and admin API")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Path to the SQLite database file
    #[arg(long, default_value = "licenses.db")]
    db: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    info!("Keyledger server starting...");
    let store = LicenseStore::open(&args.db)
        .with_context(|| format!("Failed to open license store at {}", args.db.display()))?;
    info!("License store ready at {}", args.db.display());

    let config = ServerConfig::from_env();
    let state = Arc::new(AppState::new(store, &config));
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .await
        .context("HTTP server terminated")?;
    Ok(())
}
