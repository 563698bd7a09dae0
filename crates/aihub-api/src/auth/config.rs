// Authentication configuration loaded from environment variables.
// Decision: AUTH_ prefix for all auth config
// Decision: Defaults reproduce the demo credentials so the API works with zero setup

use axum::http::HeaderName;
use thiserror::Error;

pub const DEFAULT_API_KEY: &str = "test-api-key";
pub const DEFAULT_API_KEY_HEADER: &str = "X-API-Key";
pub const DEFAULT_JWT_SECRET: &str = "mysecretkey";
pub const DEFAULT_USERS: &str = "admin:password";

/// Prefixes identifying a precomputed password hash in `AUTH_USERS`
const HASH_PREFIXES: [&str; 4] = ["$argon2", "$2a$", "$2b$", "$2y$"];

/// Errors raised while parsing authentication configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid user entry {0:?}: expected username:password")]
    InvalidUserEntry(String),
    #[error("user entry {0:?} has an empty username")]
    EmptyUsername(String),
    #[error("AUTH_API_KEY must not be empty")]
    EmptyApiKey,
    #[error("AUTH_API_KEY_HEADER {0:?} is not a valid HTTP header name")]
    InvalidApiKeyHeader(String),
}

/// How a configured user's password is provided
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserSecret {
    /// Plaintext, hashed at startup
    Plain(String),
    /// Precomputed Argon2 PHC string or bcrypt hash
    Hashed(String),
}

impl UserSecret {
    fn parse(raw: &str) -> Self {
        if HASH_PREFIXES.iter().any(|p| raw.starts_with(p)) {
            UserSecret::Hashed(raw.to_string())
        } else {
            UserSecret::Plain(raw.to_string())
        }
    }
}

/// One entry of the static credential table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntry {
    pub username: String,
    pub secret: UserSecret,
}

/// Parse a `;`-separated list of `username:secret` entries.
///
/// Argon2 PHC strings contain commas, so entries cannot be comma-separated.
/// The username ends at the first `:`; the secret may contain colons.
pub fn parse_users(spec: &str) -> Result<Vec<UserEntry>, ConfigError> {
    spec.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (username, secret) = entry
                .split_once(':')
                .ok_or_else(|| ConfigError::InvalidUserEntry(entry.to_string()))?;
            let username = username.trim();
            if username.is_empty() {
                return Err(ConfigError::EmptyUsername(entry.to_string()));
            }
            Ok(UserEntry {
                username: username.to_string(),
                secret: UserSecret::parse(secret),
            })
        })
        .collect()
}

/// Validate the API key header name; blank falls back to the default.
pub fn parse_api_key_header(raw: Option<&str>) -> Result<String, ConfigError> {
    let name = match raw.map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => return Ok(DEFAULT_API_KEY_HEADER.to_string()),
    };
    HeaderName::try_from(name)
        .map_err(|_| ConfigError::InvalidApiKeyHeader(name.to_string()))?;
    Ok(name.to_string())
}

/// API key configuration
#[derive(Debug, Clone)]
pub struct ApiKeyConfig {
    /// Header carrying the key
    pub header: String,
    /// The single accepted key
    pub key: String,
}

impl Default for ApiKeyConfig {
    fn default() -> Self {
        Self {
            header: DEFAULT_API_KEY_HEADER.to_string(),
            key: DEFAULT_API_KEY.to_string(),
        }
    }
}

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing JWTs
    pub secret: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_JWT_SECRET.to_string(),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub api_key: ApiKeyConfig,
    pub jwt: JwtConfig,
    /// Static credential table
    pub users: Vec<UserEntry>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_key: ApiKeyConfig::default(),
            jwt: JwtConfig::default(),
            users: vec![UserEntry {
                username: "admin".to_string(),
                secret: UserSecret::Plain("password".to_string()),
            }],
        }
    }
}

impl AuthConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let key = std::env::var("AUTH_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string());
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }

        let header = parse_api_key_header(std::env::var("AUTH_API_KEY_HEADER").ok().as_deref())?;

        let secret = std::env::var("AUTH_JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                tracing::warn!("AUTH_JWT_SECRET not set, using insecure default");
                DEFAULT_JWT_SECRET.to_string()
            });

        let users_spec =
            std::env::var("AUTH_USERS").unwrap_or_else(|_| DEFAULT_USERS.to_string());
        let users = parse_users(&users_spec)?;

        Ok(Self {
            api_key: ApiKeyConfig { header, key },
            jwt: JwtConfig { secret },
            users,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();
        assert_eq!(config.api_key.header, "X-API-Key");
        assert_eq!(config.api_key.key, "test-api-key");
        assert_eq!(config.jwt.secret, "mysecretkey");
        assert_eq!(config.users.len(), 1);
        assert_eq!(config.users[0].username, "admin");
    }

    #[test]
    fn test_default_users_spec_matches_default_config() {
        let parsed = parse_users(DEFAULT_USERS).unwrap();
        assert_eq!(parsed, AuthConfig::default().users);
    }

    #[test]
    fn test_parse_users_plain_and_hashed() {
        let users = parse_users(
            "alice:wonderland; bob:$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA ;carol:$2b$04$abc",
        )
        .unwrap();

        assert_eq!(users.len(), 3);
        assert_eq!(users[0].username, "alice");
        assert_eq!(users[0].secret, UserSecret::Plain("wonderland".to_string()));
        assert_eq!(users[1].username, "bob");
        assert_eq!(
            users[1].secret,
            UserSecret::Hashed("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string())
        );
        assert_eq!(
            users[2].secret,
            UserSecret::Hashed("$2b$04$abc".to_string())
        );
    }

    #[test]
    fn test_parse_users_password_with_colon() {
        let users = parse_users("dave:pa:ss").unwrap();
        assert_eq!(users[0].username, "dave");
        assert_eq!(users[0].secret, UserSecret::Plain("pa:ss".to_string()));
    }

    #[test]
    fn test_parse_users_skips_empty_entries() {
        let users = parse_users("alice:one;;  ;bob:two;").unwrap();
        assert_eq!(users.len(), 2);
        assert!(parse_users("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_users_rejects_missing_separator() {
        assert_eq!(
            parse_users("alice"),
            Err(ConfigError::InvalidUserEntry("alice".to_string()))
        );
    }

    #[test]
    fn test_parse_users_rejects_empty_username() {
        assert_eq!(
            parse_users(":secret"),
            Err(ConfigError::EmptyUsername(":secret".to_string()))
        );
    }

    #[test]
    fn test_parse_api_key_header() {
        assert_eq!(parse_api_key_header(None).unwrap(), "X-API-Key");
        assert_eq!(parse_api_key_header(Some("   ")).unwrap(), "X-API-Key");
        assert_eq!(parse_api_key_header(Some(" X-Hub-Key ")).unwrap(), "X-Hub-Key");
    }

    #[test]
    fn test_parse_api_key_header_rejects_invalid_name() {
        assert_eq!(
            parse_api_key_header(Some("X API Key")),
            Err(ConfigError::InvalidApiKeyHeader("X API Key".to_string()))
        );
        assert!(matches!(
            parse_api_key_header(Some("X-Key:")),
            Err(ConfigError::InvalidApiKeyHeader(_))
        ));
    }
}
