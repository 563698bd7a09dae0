// Project info routes
// Decision: Same payload on every route; only the gate in front of it differs

use axum::{routing::get, Json, Router};

use super::common::{AccessResponse, AuthScheme, ErrorResponse};
use crate::auth::middleware::{ApiKeyAuth, AuthState, BasicUser, BearerUser, OAuth2User};

/// Create project info routes
pub fn routes(state: AuthState) -> Router {
    Router::new()
        .route("/public", get(public_info))
        .route("/apikey-protected", get(api_key_info))
        .route("/oauth2-protected", get(oauth2_info))
        .route("/bearer-protected", get(bearer_info))
        .route("/basic-protected", get(basic_info))
        .with_state(state)
}

/// GET /public - No auth
#[utoipa::path(
    get,
    path = "/public",
    responses(
        (status = 200, description = "Project info", body = AccessResponse)
    ),
    tag = "info"
)]
pub async fn public_info() -> Json<AccessResponse> {
    Json(AccessResponse::new(
        AuthScheme::None,
        "Publicly accessible AI Hub details",
    ))
}

/// GET /apikey-protected - API key auth
#[utoipa::path(
    get,
    path = "/apikey-protected",
    responses(
        (status = 200, description = "Project info", body = AccessResponse),
        (status = 403, description = "Missing or invalid API key", body = ErrorResponse)
    ),
    security(("api_key" = [])),
    tag = "info"
)]
pub async fn api_key_info(_auth: ApiKeyAuth) -> Json<AccessResponse> {
    Json(AccessResponse::new(
        AuthScheme::ApiKey,
        "You accessed AI Hub data with an API Key",
    ))
}

/// GET /oauth2-protected - OAuth2 password flow token
#[utoipa::path(
    get,
    path = "/oauth2-protected",
    responses(
        (status = 200, description = "Project info", body = AccessResponse),
        (status = 401, description = "No bearer token supplied", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse)
    ),
    security(("oauth2_password" = [])),
    tag = "info"
)]
pub async fn oauth2_info(user: OAuth2User) -> Json<AccessResponse> {
    Json(
        AccessResponse::new(AuthScheme::Oauth2, "You accessed AI Hub data with OAuth2")
            .with_user(user.username),
    )
}

/// GET /bearer-protected - Bearer token
#[utoipa::path(
    get,
    path = "/bearer-protected",
    responses(
        (status = 200, description = "Project info", body = AccessResponse),
        (status = 403, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer" = [])),
    tag = "info"
)]
pub async fn bearer_info(user: BearerUser) -> Json<AccessResponse> {
    Json(
        AccessResponse::new(
            AuthScheme::Bearer,
            "You accessed AI Hub data with Bearer token",
        )
        .with_user(user.username),
    )
}

/// GET /basic-protected - HTTP basic auth
#[utoipa::path(
    get,
    path = "/basic-protected",
    responses(
        (status = 200, description = "Project info", body = AccessResponse),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse)
    ),
    security(("basic" = [])),
    tag = "info"
)]
pub async fn basic_info(user: BasicUser) -> Json<AccessResponse> {
    let message = format!(
        "Hello {}, you accessed AI Hub data with Basic Auth",
        user.username
    );
    Json(AccessResponse::new(AuthScheme::Basic, message).with_user(user.username))
}
