//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for read endpoints that can embed referenced rows
/// (`?expand=true`).
#[derive(Debug, Default, Deserialize)]
pub struct ExpandParams {
    #[serde(default)]
    pub expand: bool,
}
