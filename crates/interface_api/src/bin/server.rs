//! Healio Core - API Server Binary
//!
//! Starts the HTTP API server for the claims workflow.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin healio-api
//!
//! # Run with environment variables
//! API_HOST=0.0.0.0 API_PORT=3000 API_DATA_FILE=data.json cargo run --bin healio-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 3000)
//! * `API_JWT_SECRET` - Session token signing secret
//! * `API_JWT_EXPIRATION_SECS` - Token expiration in seconds (default: 3600)
//! * `API_DATA_FILE` - Snapshot file path (default: data.json)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interface_api::{config::ApiConfig, create_router, AppState};
use infra_store::Snapshot;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        data_file = %config.data_file,
        "Starting Healio Core API Server"
    );

    // Load the snapshot, seeding the demo data set on first start
    let data_path = Path::new(&config.data_file);
    let snapshot = match Snapshot::load(data_path).context("failed to load snapshot")? {
        Some(snapshot) => snapshot,
        None => {
            tracing::info!("no data file found, seeding demo data set");
            let demo = Snapshot::demo();
            demo.save(data_path).context("failed to seed data file")?;
            demo
        }
    };
    tracing::info!(
        records = snapshot.records.len(),
        claims = snapshot.claims.len(),
        "snapshot loaded"
    );

    let (records, claims) = snapshot.into_stores();
    let state = AppState::new(records, claims, config.clone());
    let app = create_router(state);

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("invalid server address")?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables, falling back to
/// defaults for anything unset
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|_| ApiConfig {
        host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        port: std::env::var("API_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000),
        jwt_secret: std::env::var("API_JWT_SECRET")
            .unwrap_or_else(|_| "dev-secret-change-in-production".to_string()),
        jwt_expiration_secs: std::env::var("API_JWT_EXPIRATION_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3600),
        data_file: std::env::var("API_DATA_FILE").unwrap_or_else(|_| "data.json".to_string()),
        log_level: std::env::var("API_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string()),
    })
}

/// Initializes the tracing subscriber for structured logging
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), enabling graceful
/// shutdown so in-flight requests complete before the process exits
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
