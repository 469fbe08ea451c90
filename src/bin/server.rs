//! TallyKV Server Binary
//!
//! Starts the HTTP server for TallyKV.

use std::sync::Arc;

use clap::Parser;
use tallykv::network::Server;
use tallykv::{Config, Dispatcher, Store};
use tracing_subscriber::{fmt, EnvFilter};

/// TallyKV Server
#[derive(Parser, Debug)]
#[command(name = "tallykv-server")]
#[command(about = "In-memory UUID-keyed numeric store")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "0.0.0.0:3000")]
    listen: String,

    /// Number of store shards (1 = single lock)
    #[arg(short, long, default_value = "16")]
    shards: usize,

    /// Maximum concurrently in-flight requests
    #[arg(short, long, default_value = "1024")]
    max_connections: usize,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tallykv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("TallyKV Server v{}", tallykv::VERSION);
    tracing::info!("Listen address: {}", args.listen);
    tracing::info!("Store shards: {}", args.shards);

    // Build config from args
    let config = Config::builder()
        .listen_addr(&args.listen)
        .shard_count(args.shards)
        .max_connections(args.max_connections)
        .build();

    let store = match Store::from_config(&config) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            tracing::error!("Failed to create store: {}", e);
            std::process::exit(1);
        }
    };

    let server = Server::new(config, Dispatcher::new(store));
    if let Err(e) = server.run(shutdown_signal()).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}

/// Resolves on Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        return;
    }
    tracing::info!("Received Ctrl+C, initiating shutdown...");
}
