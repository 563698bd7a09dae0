// Export OpenAPI specification as JSON
//
// Usage: cargo run --bin export-openapi > openapi.json
//
// Generates the spec without starting the server or reading any auth configuration.

use aihub_api::openapi::ApiDoc;
use anyhow::{Context, Result};

fn main() -> Result<()> {
    let json = ApiDoc::to_json().context("Failed to serialize OpenAPI spec")?;
    println!("{}", json);
    Ok(())
}
