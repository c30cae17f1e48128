//! Contacts service.
//!
//! Serves the `/contacts` resource over HTTP from an in-memory store. The
//! store is loaded from a JSON snapshot at startup (created empty if the
//! file is missing) and written back once on shutdown.
//!
//! Usage:
//!   contacts-server --port 8080 --data contacts.json

use std::{net::IpAddr, net::SocketAddr, path::PathBuf, sync::Arc};
use anyhow::{Context, Result};
use clap::Parser;
use contacts_server::{AppState, DEFAULT_MAX_AGE, ServerConfig, build_router};
use contacts_store::{ContactStore, SnapshotFile, TitleMatch};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "contacts-server")]
#[command(about = "HTTP contacts service with entity tags")]
struct Args {
    /// HTTP port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Path to the contacts snapshot file
    #[arg(short, long, default_value = "contacts.json")]
    data: PathBuf,

    /// Cache-Control max-age in seconds
    #[arg(long, default_value_t = DEFAULT_MAX_AGE)]
    max_age: u32,

    /// Title search policy: case-sensitive or case-insensitive
    #[arg(long, default_value = "case-sensitive")]
    title_match: TitleMatch,

    /// Prefix for Location headers (e.g. http://example.com)
    #[arg(long, default_value = "")]
    base_url: String,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("Contacts server starting...");
    let config = ServerConfig::new(SocketAddr::new(args.bind, args.port))
        .with_data_path(args.data)
        .with_max_age(args.max_age)
        .with_base_url(args.base_url)
        .with_title_match(args.title_match);

    let store = Arc::new(ContactStore::new(config.store_config()));
    let snapshot = SnapshotFile::new(&config.data_path);
    snapshot
        .restore(&store)
        .with_context(|| format!("Failed to load contacts from {}", config.data_path.display()))?;

    let bind_addr = config.bind_addr;
    let app = build_router(AppState::new(Arc::clone(&store), config));

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;

    println!("\n========================================");
    println!("  Contacts Server Running");
    println!("========================================");
    println!("  Listening:   http://{}", bind_addr);
    println!("  Snapshot:    {}", snapshot.path().display());
    println!("  Contacts:    {}", store.len());
    println!("  Title match: {}", store.title_match());
    println!("========================================\n");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Shutting down, flushing snapshot");
    snapshot
        .flush(&store)
        .with_context(|| format!("Failed to write contacts to {}", snapshot.path().display()))?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
