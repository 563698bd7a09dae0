// Common DTOs for public API
//
// These types are shared across multiple API endpoints.

use aihub_core::ProjectInfo;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard error response for API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message describing what went wrong.
    pub error: String,
}

/// Authentication scheme that admitted the request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuthScheme {
    None,
    ApiKey,
    Oauth2,
    Bearer,
    Basic,
}

/// Response returned by every project info route.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccessResponse {
    /// Scheme used to authenticate.
    pub auth: AuthScheme,
    /// Username, for schemes that identify one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Human readable greeting.
    pub message: String,
    /// The project document.
    pub data: ProjectInfo,
}

impl AccessResponse {
    pub fn new(auth: AuthScheme, message: impl Into<String>) -> Self {
        Self {
            auth,
            user: None,
            message: message.into(),
            data: aihub_core::project_info().clone(),
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_scheme_serialization() {
        assert_eq!(serde_json::to_value(AuthScheme::None).unwrap(), "none");
        assert_eq!(serde_json::to_value(AuthScheme::ApiKey).unwrap(), "api_key");
        assert_eq!(serde_json::to_value(AuthScheme::Oauth2).unwrap(), "oauth2");
        assert_eq!(serde_json::to_value(AuthScheme::Bearer).unwrap(), "bearer");
        assert_eq!(serde_json::to_value(AuthScheme::Basic).unwrap(), "basic");
    }

    #[test]
    fn test_access_response_omits_missing_user() {
        let json = serde_json::to_value(AccessResponse::new(AuthScheme::None, "hi")).unwrap();
        assert!(json.get("user").is_none());
        assert_eq!(json["auth"], "none");
        assert_eq!(json["message"], "hi");
        assert_eq!(json["data"]["project_name"], "AI Hub");
    }

    #[test]
    fn test_access_response_with_user() {
        let response = AccessResponse::new(AuthScheme::Basic, "hi").with_user("admin");
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["user"], "admin");
    }
}
