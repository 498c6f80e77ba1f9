//! App connection tools: links from a lesson phase to a page, component, or
//! endpoint of the application.

use rmcp::{
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    tool, tool_router, ErrorData as McpError,
};
use serde::Deserialize;

use super::IdParams;
use crate::mcp::protocol::{created, deleted, updated, Response};
use crate::mcp::server::McpServer;
use crate::models::{
    AppConnection, AppConnectionFilter, AppConnectionKind, AppConnectionPatch,
    AppConnectionSummary,
};
use crate::repositories::RecordRepository;

// ============================================================================
// Parameter Types
// ============================================================================

/// Parameters for get_app_connections tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct GetAppConnectionsParams {
    /// Optional app connection ID.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub filter: AppConnectionFilter,
}

/// Parameters for create_app_connection tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppConnectionParams {
    pub lesson_phase_id: String,
    #[serde(rename = "type")]
    pub kind: AppConnectionKind,
    /// Route, component name, or endpoint path.
    pub resource_identifier: String,
    pub usage_description: String,
}

impl CreateAppConnectionParams {
    fn into_connection(self, id: String) -> AppConnection {
        AppConnection {
            id,
            lesson_phase_id: self.lesson_phase_id,
            kind: self.kind,
            resource_identifier: self.resource_identifier,
            usage_description: self.usage_description,
            extra: Default::default(),
        }
    }
}

/// Parameters for update_app_connection tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateAppConnectionParams {
    /// ID of the app connection to update.
    pub id: String,
    #[serde(flatten)]
    pub changes: AppConnectionPatch,
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router(router = app_connection_tools, vis = "pub(crate)")]
impl McpServer {
    #[tool(
        description = "List all app connections with summary information (id, lessonPhaseId, type, resourceIdentifier)"
    )]
    pub async fn list_app_connections(
        &self,
        Parameters(filter): Parameters<AppConnectionFilter>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(lesson_phase_id = ?filter.lesson_phase_id, "Running list_app_connections tool");

        let records = self.resolve::<RecordRepository>();
        let connections: Vec<AppConnectionSummary> = records.summaries::<AppConnection, _>(&filter);

        Response(connections).into()
    }

    #[tool(description = "Get all app connections or a specific app connection by ID")]
    pub async fn get_app_connections(
        &self,
        Parameters(params): Parameters<GetAppConnectionsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(id = ?params.id, "Running get_app_connections tool");

        let records = self.resolve::<RecordRepository>();
        Response(records.lookup::<AppConnection>(params.id.as_deref(), &params.filter)).into()
    }

    #[tool(description = "Create a new app connection")]
    pub async fn create_app_connection(
        &self,
        Parameters(params): Parameters<CreateAppConnectionParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            lesson_phase_id = %params.lesson_phase_id,
            "Running create_app_connection tool"
        );

        let records = self.resolve::<RecordRepository>();
        let connection = records.create(|id| params.into_connection(id))?;

        tracing::info!(id = %connection.id, "Created app connection");
        created(&connection)
    }

    #[tool(description = "Update an existing app connection")]
    pub async fn update_app_connection(
        &self,
        Parameters(params): Parameters<UpdateAppConnectionParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateAppConnectionParams { id, changes } = params;
        tracing::info!(id = %id, "Running update_app_connection tool");

        let records = self.resolve::<RecordRepository>();
        let connection = records.update::<AppConnection>(&id, changes)?;

        updated(&connection)
    }

    #[tool(description = "Delete an app connection by ID")]
    pub async fn delete_app_connection(
        &self,
        Parameters(params): Parameters<IdParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(id = %params.id, "Running delete_app_connection tool");

        let records = self.resolve::<RecordRepository>();
        records.delete::<AppConnection>(&params.id)?;

        deleted::<AppConnection>(&params.id)
    }
}
