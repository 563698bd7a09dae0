// OpenAPI specification generation
//
// Used by the API server (Swagger UI) and the export-openapi binary.

use crate::api::{self, AccessResponse, AuthScheme, ErrorResponse};
use crate::auth::{
    config::DEFAULT_API_KEY_HEADER,
    routes::{TokenRequest, TokenResponse},
};
use aihub_core::{ProjectInfo, TeamMember};
use utoipa::openapi::security::{
    ApiKey, ApiKeyValue, Flow, Http, HttpAuthScheme, HttpBuilder, OAuth2, Password, Scopes,
    SecurityScheme,
};
use utoipa::{Modify, OpenApi};

/// OpenAPI documentation for the AI Hub auth API
#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::root,
        api::health::health,
        api::info::public_info,
        api::info::api_key_info,
        api::info::oauth2_info,
        api::info::bearer_info,
        api::info::basic_info,
        crate::auth::routes::login,
    ),
    components(
        schemas(
            AccessResponse, AuthScheme, ErrorResponse,
            ProjectInfo, TeamMember,
            TokenRequest, TokenResponse,
            api::health::RootResponse, api::health::HealthResponse,
        )
    ),
    modifiers(&SecuritySchemes),
    tags(
        (name = "info", description = "Project info behind each authentication style"),
        (name = "auth", description = "OAuth2 password flow"),
        (name = "health", description = "Liveness endpoints")
    ),
    info(
        title = "AI Hub Auth API",
        version = "1.0.0",
        description = "Test API for AI Hub project with different authentication methods",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;

/// Routes mounted at the root regardless of `API_PREFIX`
const UNPREFIXED_PATHS: [&str; 2] = ["/", "/health"];

impl ApiDoc {
    /// Generate the OpenAPI spec as a pretty-printed JSON string
    pub fn to_json() -> Result<String, serde_json::Error> {
        Self::openapi().to_pretty_json()
    }

    /// OpenAPI document whose API paths and token URL carry `prefix`.
    ///
    /// `prefix` must already be normalized ("" or "/segment").
    pub fn with_prefix(prefix: &str) -> utoipa::openapi::OpenApi {
        let mut doc = Self::openapi();
        if prefix.is_empty() {
            return doc;
        }

        let paths = std::mem::take(&mut doc.paths.paths);
        doc.paths.paths = paths
            .into_iter()
            .map(|(path, item)| {
                if UNPREFIXED_PATHS.contains(&path.as_str()) {
                    (path, item)
                } else {
                    (format!("{}{}", prefix, path), item)
                }
            })
            .collect();

        if let Some(components) = doc.components.as_mut() {
            components.add_security_scheme(
                "oauth2_password",
                oauth2_password_scheme(&format!("{}/token", prefix)),
            );
        }
        doc
    }
}

fn oauth2_password_scheme(token_url: &str) -> SecurityScheme {
    SecurityScheme::OAuth2(OAuth2::new([Flow::Password(Password::new(
        token_url,
        Scopes::new(),
    ))]))
}

/// Registers the four security schemes referenced by the info routes
struct SecuritySchemes;

impl Modify for SecuritySchemes {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let Some(components) = openapi.components.as_mut() else {
            return;
        };

        components.add_security_scheme(
            "api_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(DEFAULT_API_KEY_HEADER))),
        );
        components.add_security_scheme("oauth2_password", oauth2_password_scheme("/token"));
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
        components.add_security_scheme(
            "basic",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document() {
        let doc: serde_json::Value = serde_json::from_str(&ApiDoc::to_json().unwrap()).unwrap();

        assert_eq!(doc["info"]["title"], "AI Hub Auth API");
        assert_eq!(doc["info"]["version"], "1.0.0");

        for path in [
            "/public",
            "/apikey-protected",
            "/token",
            "/oauth2-protected",
            "/bearer-protected",
            "/basic-protected",
        ] {
            assert!(doc["paths"].get(path).is_some(), "missing path {}", path);
        }

        let schemes = &doc["components"]["securitySchemes"];
        assert_eq!(schemes["api_key"]["name"], "X-API-Key");
        assert_eq!(schemes["bearer"]["scheme"], "bearer");
        assert_eq!(schemes["basic"]["scheme"], "basic");
        assert_eq!(
            schemes["oauth2_password"]["flows"]["password"]["tokenUrl"],
            "/token"
        );
    }

    #[test]
    fn test_openapi_document_with_prefix() {
        let doc: serde_json::Value =
            serde_json::to_value(ApiDoc::with_prefix("/api")).unwrap();

        assert!(doc["paths"].get("/api/public").is_some());
        assert!(doc["paths"].get("/api/token").is_some());
        assert!(doc["paths"].get("/public").is_none());
        assert!(doc["paths"].get("/health").is_some());
        assert!(doc["paths"].get("/").is_some());
        assert_eq!(
            doc["components"]["securitySchemes"]["oauth2_password"]["flows"]["password"]
                ["tokenUrl"],
            "/api/token"
        );
    }

    #[test]
    fn test_openapi_document_without_prefix_is_unchanged() {
        let plain = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let prefixed = serde_json::to_value(ApiDoc::with_prefix("")).unwrap();
        assert_eq!(plain, prefixed);
    }
}
