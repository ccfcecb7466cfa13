//! OBT HTTP Server Binary
//!
//! This is the main entry point for the OBT REST API server.
//! It loads configuration, builds the timing engine, sets up the HTTP
//! router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin obt-server --features "http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `OBT_CONFIG`: Path to the TOML config file (default: obt.toml)
//! - `HOST`: Server host (overrides config)
//! - `PORT`: Server port (overrides config)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use obt_rust::config::AppConfig;
use obt_rust::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting OBT HTTP Server");

    // Load configuration and build the engine once; the solar sample cache
    // and the geocoding cache live for the process lifetime.
    let config = AppConfig::load_from_env()?;
    let state = AppState::from_config(&config);
    info!("Timing engine initialized");

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address; environment wins over the config file
    let host = env::var("HOST").unwrap_or_else(|_| config.server.host.clone());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("API documentation: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
