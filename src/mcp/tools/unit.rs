//! Unit tools.

use rmcp::{
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    tool, tool_router, ErrorData as McpError,
};
use serde::Deserialize;

use super::{GetParams, IdParams};
use crate::mcp::protocol::{created, deleted, updated, Response};
use crate::mcp::server::McpServer;
use crate::models::{All, Unit, UnitPatch, UnitStatus, UnitSummary};
use crate::repositories::RecordRepository;

// ============================================================================
// Parameter Types
// ============================================================================

/// Parameters for create_unit tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUnitParams {
    pub title: String,
    /// Position of the unit in the curriculum.
    pub sequence: i64,
    pub description: String,
    /// Why the unit exists and why it sits where it does.
    pub rationale: String,
    pub status: UnitStatus,
    /// ID of a unit that must come first.
    #[serde(default)]
    pub depends_on_unit_id: Option<String>,
}

impl CreateUnitParams {
    fn into_unit(self, id: String) -> Unit {
        Unit {
            id,
            title: self.title,
            sequence: self.sequence,
            description: self.description,
            rationale: self.rationale,
            status: self.status,
            depends_on_unit_id: self.depends_on_unit_id,
            extra: Default::default(),
        }
    }
}

/// Parameters for update_unit tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateUnitParams {
    /// ID of the unit to update.
    pub id: String,
    #[serde(flatten)]
    pub changes: UnitPatch,
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router(router = unit_tools, vis = "pub(crate)")]
impl McpServer {
    #[tool(description = "List all units with summary information (id, title, sequence, status)")]
    pub async fn list_units(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("Running list_units tool");

        let records = self.resolve::<RecordRepository>();
        let units: Vec<UnitSummary> = records.summaries::<Unit, _>(&All);

        tracing::debug!(count = units.len(), "Listed units");
        Response(units).into()
    }

    #[tool(description = "Get all units or a specific unit by ID")]
    pub async fn get_units(
        &self,
        Parameters(params): Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(id = ?params.id, "Running get_units tool");

        let records = self.resolve::<RecordRepository>();
        Response(records.lookup::<Unit>(params.id.as_deref(), &All)).into()
    }

    #[tool(description = "Create a new unit")]
    pub async fn create_unit(
        &self,
        Parameters(params): Parameters<CreateUnitParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(title = %params.title, "Running create_unit tool");

        let records = self.resolve::<RecordRepository>();
        let unit = records.create(|id| params.into_unit(id))?;

        tracing::info!(id = %unit.id, "Created unit");
        created(&unit)
    }

    #[tool(description = "Update an existing unit")]
    pub async fn update_unit(
        &self,
        Parameters(params): Parameters<UpdateUnitParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateUnitParams { id, changes } = params;
        tracing::info!(id = %id, "Running update_unit tool");

        let records = self.resolve::<RecordRepository>();
        let unit = records.update::<Unit>(&id, changes)?;

        updated(&unit)
    }

    #[tool(description = "Delete a unit by ID")]
    pub async fn delete_unit(
        &self,
        Parameters(params): Parameters<IdParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(id = %params.id, "Running delete_unit tool");

        let records = self.resolve::<RecordRepository>();
        records.delete::<Unit>(&params.id)?;

        deleted::<Unit>(&params.id)
    }
}
