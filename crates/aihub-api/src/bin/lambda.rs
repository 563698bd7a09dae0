// AI Hub Auth API serverless entry point
// Decision: Same configuration and router as the HTTP server; only the transport differs

use aihub_api::{app_from_env, init_telemetry, lambda};
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry("aihub-lambda");
    tracing::info!("aihub-lambda starting...");

    let (app, _) = app_from_env()?;
    lambda::run(app).await
}
