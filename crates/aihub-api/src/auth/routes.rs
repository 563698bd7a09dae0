// Authentication HTTP routes
// Decision: OAuth2 password grant at POST /token with a form body, as OAuth2 clients expect
// Decision: No refresh tokens; the access token is the only credential issued

use axum::{
    extract::{rejection::FormRejection, State},
    routing::post,
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    jwt::Claims,
    middleware::{AuthError, AuthState},
};
use crate::api::common::ErrorResponse;

/// OAuth2 password grant form
#[derive(Debug, Deserialize, ToSchema)]
pub struct TokenRequest {
    #[schema(example = "admin")]
    pub username: String,
    #[schema(example = "password")]
    pub password: String,
}

/// Token response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    #[schema(example = "bearer")]
    pub token_type: String,
}

/// Create auth routes
pub fn routes(state: AuthState) -> Router {
    Router::new()
        .route("/token", post(login))
        .with_state(state)
}

/// POST /token - Exchange username and password for an access token
#[utoipa::path(
    post,
    path = "/token",
    request_body(content = TokenRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Access token issued", body = TokenResponse),
        (status = 401, description = "Invalid username or password", body = ErrorResponse),
        (status = 422, description = "Malformed form body", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AuthState>,
    form: Result<Form<TokenRequest>, FormRejection>,
) -> Result<Json<TokenResponse>, AuthError> {
    let Form(req) = form.map_err(|e| {
        tracing::debug!("Rejected token form: {}", e);
        AuthError::unprocessable("username and password form fields are required")
    })?;

    if !state.credentials.verify(&req.username, &req.password) {
        tracing::debug!(username = %req.username, "Login failed: invalid username or password");
        return Err(AuthError::unauthorized("Invalid username or password"));
    }

    let access_token = state
        .jwt_service
        .issue(&Claims::for_user(&req.username))
        .map_err(|e| {
            tracing::error!("Token signing error: {}", e);
            AuthError::unauthorized("Login failed")
        })?;

    tracing::info!(username = %req.username, "Issued access token");

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::config::{AuthConfig, UserEntry, UserSecret};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn test_state() -> AuthState {
        AuthState::new(AuthConfig {
            users: vec![UserEntry {
                username: "admin".to_string(),
                secret: UserSecret::Hashed(bcrypt::hash("password", 4).unwrap()),
            }],
            ..Default::default()
        })
        .unwrap()
    }

    fn form(username: &str, password: &str) -> Result<Form<TokenRequest>, FormRejection> {
        Ok(Form(TokenRequest {
            username: username.to_string(),
            password: password.to_string(),
        }))
    }

    #[tokio::test]
    async fn test_login_issues_bearer_token() {
        let Json(response) = login(State(test_state()), form("admin", "password"))
            .await
            .unwrap();
        assert_eq!(response.token_type, "bearer");
        assert!(!response.access_token.is_empty());
    }

    #[tokio::test]
    async fn test_failed_login_logged_at_debug() {
        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(logs.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let err = login(State(test_state()), form("admin", "not-the-password"))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);

        let output = logs.contents();
        assert!(output.contains("DEBUG"), "{}", output);
        assert!(output.contains("Login failed"), "{}", output);
        assert!(output.contains("username=admin"), "{}", output);
        assert!(!output.contains("not-the-password"), "{}", output);
    }
}
