// Public API routes and DTOs

pub mod common;
pub mod health;
pub mod info;

pub use common::{AccessResponse, AuthScheme, ErrorResponse};
