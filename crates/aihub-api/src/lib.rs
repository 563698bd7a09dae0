// AI Hub Auth API Library
// Decision: Shared library for binaries (API server, serverless handler, OpenAPI export) and integration tests

// API routes and types
pub mod api;

// Authentication module
pub mod auth;

// OpenAPI spec generation
pub mod openapi;

// Router assembly
pub mod server;

// Serverless handler
#[cfg(feature = "lambda")]
pub mod lambda;

pub use server::{app_from_env, build_app, init_telemetry, ServerConfig};
