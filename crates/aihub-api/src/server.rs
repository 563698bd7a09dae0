// HTTP application assembly
// Decision: Router construction lives in the library so tests drive the exact production stack
// Decision: CORS is open to any origin unless CORS_ALLOWED_ORIGINS narrows it

use anyhow::{Context, Result};
use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa_swagger_ui::SwaggerUi;

use crate::{api, auth, auth::AuthState, openapi::ApiDoc};
use aihub_core::telemetry::{self, TelemetryConfig};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LOG_FILTER: &str = "aihub_api=debug,tower_http=debug";

/// Server configuration
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Optional prefix for every API route (e.g. "/api")
    pub api_prefix: String,
    /// Allowed CORS origins; empty means any origin
    pub cors_origins: Vec<HeaderValue>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        // Example: API_PREFIX="/api" results in routes like /api/public
        let api_prefix = normalize_api_prefix(&std::env::var("API_PREFIX").unwrap_or_default());

        // Example: CORS_ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
        let cors_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .ok()
            .filter(|s| !s.is_empty())
            .map(|s| s.split(',').filter_map(|s| s.trim().parse().ok()).collect())
            .unwrap_or_default();

        Self {
            host,
            port,
            api_prefix,
            cors_origins,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Normalize an API prefix to "" or "/segment[/segment...]" without a trailing slash.
///
/// `Router::nest` panics on "/" and on paths without a leading slash.
pub fn normalize_api_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// Initialize logging for a binary.
///
/// Configure via environment variables:
/// - RUST_LOG / LOG_LEVEL: Log filter (default: "aihub_api=debug,tower_http=debug")
/// - SERVICE_NAME: overrides `service_name`
pub fn init_telemetry(service_name: &str) {
    let mut config = TelemetryConfig::from_env();
    if config.service_name == "aihub" {
        config.service_name = service_name.to_string();
    }
    if config.log_filter.is_none() {
        config.log_filter = Some(DEFAULT_LOG_FILTER.to_string());
    }
    config.service_version = Some(env!("CARGO_PKG_VERSION").to_string());
    telemetry::init_telemetry(config);
}

/// Load auth and server configuration from the environment and build the router.
///
/// Shared by the HTTP server and the serverless handler.
pub fn app_from_env() -> Result<(Router, ServerConfig)> {
    let auth_config =
        auth::AuthConfig::from_env().context("Invalid authentication configuration")?;
    let auth_state =
        auth::AuthState::new(auth_config).context("Failed to build credential store")?;
    tracing::info!(
        users = auth_state.credentials.len(),
        api_key_header = %auth_state.config.api_key.header,
        "Authentication configured"
    );

    let server_config = ServerConfig::from_env();
    if !server_config.api_prefix.is_empty() {
        tracing::info!(prefix = %server_config.api_prefix, "API prefix configured");
    }
    if server_config.cors_origins.is_empty() {
        tracing::info!("CORS open to any origin");
    } else {
        tracing::info!(origins = ?server_config.cors_origins, "CORS origins configured");
    }

    let app = build_app(auth_state, &server_config);
    Ok((app, server_config))
}

/// Build the full application router
pub fn build_app(auth_state: AuthState, config: &ServerConfig) -> Router {
    let api_key_header = auth_state.config.api_key.header.clone();
    let api_prefix = normalize_api_prefix(&config.api_prefix);

    let api_routes = Router::new()
        .merge(api::info::routes(auth_state.clone()))
        .merge(auth::routes(auth_state));

    let app = Router::new()
        .merge(api::health::routes())
        .merge(build_router_with_prefix(api_routes, &api_prefix))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::with_prefix(&api_prefix)));

    app.layer(cors_layer(&config.cors_origins, &api_key_header))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[HeaderValue], api_key_header: &str) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let mut headers = vec![
        header::CONTENT_TYPE,
        header::AUTHORIZATION,
        header::ACCEPT,
        header::ORIGIN,
    ];
    if let Ok(name) = HeaderName::try_from(api_key_header) {
        headers.push(name);
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins.iter().cloned()))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(headers)
}

/// Build router with optional API prefix
fn build_router_with_prefix<S: Clone + Send + Sync + 'static>(
    api_routes: Router<S>,
    api_prefix: &str,
) -> Router<S> {
    if api_prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(api_prefix, api_routes)
    }
}
