// Authentication module
// Decision: Static credential table plus one shared JWT secret and one API key
// Decision: Each auth scheme is an axum extractor; handlers pick the one they need

pub mod config;
pub mod credentials;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod routes;

pub use config::AuthConfig;
pub use middleware::{AuthError, AuthState};
pub use routes::routes;
