/// MCP tools for wellness tracking
///
/// This module contains all the MCP tools that external clients can call to
/// interact with the wellness store. Each tool takes a parameter struct that
/// doubles as the source of its advertised JSON schema.

pub mod mood;
pub mod journal;
pub mod prompts;
pub mod favorites;
pub mod settings;
pub mod insights;
pub mod backup;
pub mod breathing;

// Re-export tool functions for easy access
pub use mood::*;
pub use journal::*;
pub use prompts::*;
pub use favorites::*;
pub use settings::*;
pub use insights::*;
pub use backup::*;
pub use breathing::*;

use serde::{Deserialize, Serialize};
use schemars::JsonSchema;

/// Parameters for tools that take no arguments
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Parameters for tools that act on a single stored entry
#[derive(Debug, Deserialize, JsonSchema)]
pub struct EntryIdParams {
    /// Id of the entry
    pub id: String,
}

/// Result of a delete; `success` is false when nothing had that id
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}
