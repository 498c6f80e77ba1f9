//! UI component tools.

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
use crate::models::{All, Component, ComponentPatch, ComponentSummary};
use crate::repositories::RecordRepository;

/// Parameters for create_component tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateComponentParams {
    pub name: String,
    pub description: String,
    pub file_path: String,
    #[serde(default)]
    pub usage_example: Option<String>,
}

impl CreateComponentParams {
    fn into_component(self, id: String) -> Component {
        Component {
            id,
            name: self.name,
            description: self.description,
            file_path: self.file_path,
            usage_example: self.usage_example,
            extra: Default::default(),
        }
    }
}

/// Parameters for update_component tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateComponentParams {
    /// ID of the component to update.
    pub id: String,
    #[serde(flatten)]
    pub changes: ComponentPatch,
}

#[tool_router(router = component_tools, vis = "pub(crate)")]
impl McpServer {
    #[tool(
        description = "List all components with summary information (id, name, description, filePath)"
    )]
    pub async fn list_components(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("Running list_components tool");

        let records = self.resolve::<RecordRepository>();
        let components: Vec<ComponentSummary> = records.summaries::<Component, _>(&All);

        Response(components).into()
    }

    #[tool(description = "Get all components or a specific component by ID")]
    pub async fn get_components(
        &self,
        Parameters(params): Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(id = ?params.id, "Running get_components tool");

        let records = self.resolve::<RecordRepository>();
        Response(records.lookup::<Component>(params.id.as_deref(), &All)).into()
    }

    #[tool(description = "Create a new component")]
    pub async fn create_component(
        &self,
        Parameters(params): Parameters<CreateComponentParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(name = %params.name, "Running create_component tool");

        let records = self.resolve::<RecordRepository>();
        let component = records.create(|id| params.into_component(id))?;

        tracing::info!(id = %component.id, "Created component");
        created(&component)
    }

    #[tool(description = "Update an existing component")]
    pub async fn update_component(
        &self,
        Parameters(params): Parameters<UpdateComponentParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateComponentParams { id, changes } = params;
        tracing::info!(id = %id, "Running update_component tool");

        let records = self.resolve::<RecordRepository>();
        let component = records.update::<Component>(&id, changes)?;

        updated(&component)
    }

    #[tool(description = "Delete a component by ID")]
    pub async fn delete_component(
        &self,
        Parameters(params): Parameters<IdParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(id = %params.id, "Running delete_component tool");

        let records = self.resolve::<RecordRepository>();
        records.delete::<Component>(&params.id)?;

        deleted::<Component>(&params.id)
    }
}
