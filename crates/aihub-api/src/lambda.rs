// Serverless handler
// Decision: One function invocation per request; the router is the one the HTTP server runs
// Decision: lambda_http translates API Gateway / function URL events to http::Request

use anyhow::Result;
use axum::Router;

/// Serve `app` from the function runtime until the runtime shuts down
pub async fn run(app: Router) -> Result<()> {
    lambda_http::run(app)
        .await
        .map_err(|e| anyhow::anyhow!("Lambda runtime error: {}", e))
}
