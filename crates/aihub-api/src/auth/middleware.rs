// Authentication extractors
// Decision: One extractor per scheme; a handler opts into a scheme by taking its extractor
// Decision: Rejection status and message per scheme mirror the usual OAuth2/HTTP auth conventions:
//           missing OAuth2/Basic credentials -> 401 with a challenge, missing plain Bearer -> 403

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Serialize;
use std::sync::Arc;

use super::{
    config::AuthConfig,
    credentials::{CredentialError, CredentialStore},
    jwt::JwtService,
};

/// Authentication error
#[derive(Debug, Clone, Serialize)]
pub struct AuthError {
    pub error: String,
    #[serde(skip)]
    pub status: StatusCode,
    /// Scheme advertised in `WWW-Authenticate`
    #[serde(skip)]
    pub challenge: Option<&'static str>,
}

impl AuthError {
    pub fn unauthorized(message: &str) -> Self {
        Self {
            error: message.to_string(),
            status: StatusCode::UNAUTHORIZED,
            challenge: None,
        }
    }

    pub fn forbidden(message: &str) -> Self {
        Self {
            error: message.to_string(),
            status: StatusCode::FORBIDDEN,
            challenge: None,
        }
    }

    pub fn unprocessable(message: &str) -> Self {
        Self {
            error: message.to_string(),
            status: StatusCode::UNPROCESSABLE_ENTITY,
            challenge: None,
        }
    }

    pub fn with_challenge(mut self, scheme: &'static str) -> Self {
        self.challenge = Some(scheme);
        self
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let challenge = self.challenge;
        let mut response = (self.status, Json(self)).into_response();
        if let Some(scheme) = challenge {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static(scheme));
        }
        response
    }
}

/// Auth state shared across routes
#[derive(Clone)]
pub struct AuthState {
    pub config: Arc<AuthConfig>,
    pub jwt_service: Arc<JwtService>,
    pub credentials: Arc<CredentialStore>,
}

impl AuthState {
    /// Build state from configuration, hashing any plaintext passwords
    pub fn new(config: AuthConfig) -> Result<Self, CredentialError> {
        let credentials = CredentialStore::from_entries(&config.users)?;
        let jwt_service = JwtService::new(&config.jwt);
        Ok(Self {
            config: Arc::new(config),
            jwt_service: Arc::new(jwt_service),
            credentials: Arc::new(credentials),
        })
    }
}

/// Credentials of an `Authorization: <scheme> <credentials>` header.
///
/// Scheme comparison is case-insensitive. Returns `None` when the header
/// is absent, not valid ASCII, uses another scheme, or has no credentials.
fn authorization_credentials<'a>(parts: &'a Parts, scheme: &str) -> Option<&'a str> {
    let value = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (found, credentials) = value.trim().split_once(' ')?;
    if !found.eq_ignore_ascii_case(scheme) {
        return None;
    }
    let credentials = credentials.trim();
    (!credentials.is_empty()).then_some(credentials)
}

/// Request carried the configured API key
#[derive(Debug, Clone)]
pub struct ApiKeyAuth;

#[axum::async_trait]
impl<S> FromRequestParts<S> for ApiKeyAuth
where
    S: Send + Sync,
    AuthState: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);
        let api_key = &auth_state.config.api_key;

        let presented = parts
            .headers
            .get(api_key.header.as_str())
            .and_then(|v| v.to_str().ok());

        match presented {
            Some(key) if key == api_key.key => Ok(ApiKeyAuth),
            Some(_) => {
                tracing::debug!("API key mismatch");
                Err(AuthError::forbidden("Invalid API Key"))
            }
            None => {
                tracing::debug!(header = %api_key.header, "API key header missing");
                Err(AuthError::forbidden("Invalid API Key"))
            }
        }
    }
}

/// User identified by a token from the OAuth2 password flow
#[derive(Debug, Clone)]
pub struct OAuth2User {
    pub username: String,
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for OAuth2User
where
    S: Send + Sync,
    AuthState: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);

        let token = authorization_credentials(parts, "Bearer")
            .ok_or_else(|| AuthError::unauthorized("Not authenticated").with_challenge("Bearer"))?;

        let claims = auth_state.jwt_service.validate(token).map_err(|e| {
            tracing::debug!("OAuth2 token validation failed: {}", e);
            AuthError::forbidden("Invalid OAuth2 token")
        })?;

        Ok(OAuth2User {
            username: claims.sub,
        })
    }
}

/// User identified by a plain bearer token
#[derive(Debug, Clone)]
pub struct BearerUser {
    pub username: String,
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for BearerUser
where
    S: Send + Sync,
    AuthState: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);

        let token = authorization_credentials(parts, "Bearer")
            .ok_or_else(|| AuthError::forbidden("Not authenticated"))?;

        let claims = auth_state.jwt_service.validate(token).map_err(|e| {
            tracing::debug!("Bearer token validation failed: {}", e);
            AuthError::forbidden("Invalid Bearer token")
        })?;

        Ok(BearerUser {
            username: claims.sub,
        })
    }
}

/// User identified by HTTP Basic credentials
#[derive(Debug, Clone)]
pub struct BasicUser {
    pub username: String,
}

/// Decode base64 `username:password`
fn decode_basic(credentials: &str) -> Option<(String, String)> {
    let decoded = BASE64.decode(credentials).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for BasicUser
where
    S: Send + Sync,
    AuthState: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);

        let credentials = authorization_credentials(parts, "Basic")
            .ok_or_else(|| AuthError::unauthorized("Not authenticated").with_challenge("Basic"))?;

        let (username, password) = decode_basic(credentials).ok_or_else(|| {
            AuthError::unauthorized("Invalid authentication credentials").with_challenge("Basic")
        })?;

        if !auth_state.credentials.verify(&username, &password) {
            tracing::debug!(username = %username, "Basic auth rejected");
            return Err(
                AuthError::unauthorized("Invalid Basic Auth credentials").with_challenge("Basic"),
            );
        }

        Ok(BasicUser { username })
    }
}
