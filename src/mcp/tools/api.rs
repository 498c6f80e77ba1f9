//! API endpoint documentation tools.

use rmcp::{
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    tool, tool_router, ErrorData as McpError,
};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::{GetParams, IdParams};
use crate::mcp::protocol::{created, deleted, updated, Response};
use crate::mcp::server::McpServer;
use crate::models::{All, Api, ApiPatch, ApiSummary, HttpMethod};
use crate::repositories::RecordRepository;

/// Parameters for create_api tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiParams {
    pub name: String,
    /// Path of the endpoint, e.g. `/api/lessons/:id`.
    pub endpoint: String,
    pub method: HttpMethod,
    pub description: String,
    /// Example or schema of the request body.
    #[serde(default)]
    pub request_body: Option<Map<String, Value>>,
    /// Example or schema of the response body.
    #[serde(default)]
    pub response_body: Option<Map<String, Value>>,
}

impl CreateApiParams {
    fn into_api(self, id: String) -> Api {
        Api {
            id,
            name: self.name,
            endpoint: self.endpoint,
            method: self.method,
            description: self.description,
            request_body: self.request_body,
            response_body: self.response_body,
            extra: Default::default(),
        }
    }
}

/// Parameters for update_api tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateApiParams {
    /// ID of the API to update.
    pub id: String,
    #[serde(flatten)]
    pub changes: ApiPatch,
}

#[tool_router(router = api_tools, vis = "pub(crate)")]
impl McpServer {
    #[tool(
        description = "List all APIs with summary information (id, name, endpoint, method, description)"
    )]
    pub async fn list_apis(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("Running list_apis tool");

        let records = self.resolve::<RecordRepository>();
        let apis: Vec<ApiSummary> = records.summaries::<Api, _>(&All);

        Response(apis).into()
    }

    #[tool(description = "Get all APIs or a specific API by ID")]
    pub async fn get_apis(
        &self,
        Parameters(params): Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(id = ?params.id, "Running get_apis tool");

        let records = self.resolve::<RecordRepository>();
        Response(records.lookup::<Api>(params.id.as_deref(), &All)).into()
    }

    #[tool(description = "Create a new API endpoint")]
    pub async fn create_api(
        &self,
        Parameters(params): Parameters<CreateApiParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            method = ?params.method,
            endpoint = %params.endpoint,
            "Running create_api tool"
        );

        let records = self.resolve::<RecordRepository>();
        let api = records.create(|id| params.into_api(id))?;

        tracing::info!(id = %api.id, "Created API");
        created(&api)
    }

    #[tool(description = "Update an existing API")]
    pub async fn update_api(
        &self,
        Parameters(params): Parameters<UpdateApiParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateApiParams { id, changes } = params;
        tracing::info!(id = %id, "Running update_api tool");

        let records = self.resolve::<RecordRepository>();
        let api = records.update::<Api>(&id, changes)?;

        updated(&api)
    }

    #[tool(description = "Delete an API by ID")]
    pub async fn delete_api(
        &self,
        Parameters(params): Parameters<IdParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(id = %params.id, "Running delete_api tool");

        let records = self.resolve::<RecordRepository>();
        records.delete::<Api>(&params.id)?;

        deleted::<Api>(&params.id)
    }
}
