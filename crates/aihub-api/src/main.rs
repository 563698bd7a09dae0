// AI Hub Auth API server
// Decision: All configuration from the environment (optionally seeded from .env)
// Decision: Fail fast at startup on a bad credential table; nothing is recoverable later

use aihub_api::{app_from_env, init_telemetry};
use anyhow::{Context, Result};

#[tokio::main]
async fn main() -> Result<()> {
    if let Ok(path) = dotenvy::dotenv() {
        eprintln!("Loaded environment from {}", path.display());
    }

    init_telemetry("aihub-api");
    tracing::info!("aihub-api starting...");

    let (app, server_config) = app_from_env()?;

    // Start HTTP server
    let addr = server_config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    tracing::info!("HTTP server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
