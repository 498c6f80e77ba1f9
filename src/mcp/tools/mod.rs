//! MCP tool implementations organized by entity.
//!
//! Each module contributes one `ToolRouter` that `McpServer::tool_router`
//! sums into the full catalogue.

pub mod api;
pub mod app_connection;
pub mod assessment;
pub mod component;
pub mod lesson;
pub mod lesson_phase;
pub mod reference;
pub mod task;
pub mod unit;

use rmcp::schemars::{self, JsonSchema};
use serde::Deserialize;

/// Parameters for `delete_*` tools.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct IdParams {
    /// ID of the record.
    pub id: String,
}

/// Parameters for `get_*` tools on collections without filters.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct GetParams {
    /// Optional record ID. Omit to get the whole collection.
    #[serde(default)]
    pub id: Option<String>,
}
