//! Project reference tools: environment variables, style guide patterns,
//! state management, custom hooks, and conventions.
//!
//! These collections are mostly read-only. Environment variables and style
//! guide patterns can be created; none of them can be updated or deleted
//! through tools.

use rmcp::{
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    tool, tool_router, ErrorData as McpError,
};
use serde::Deserialize;

use super::GetParams;
use crate::mcp::protocol::{created, Response};
use crate::mcp::server::McpServer;
use crate::models::{
    All, Convention, ConventionSummary, CustomHook, CustomHookSummary, EnvironmentVariable,
    EnvironmentVariableSummary, StateManagement, StateManagementSummary, StyleGuidePattern,
    StyleGuidePatternSummary,
};
use crate::repositories::RecordRepository;

// ============================================================================
// Parameter Types
// ============================================================================

/// Parameters for create_environment tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnvironmentParams {
    /// Variable name, e.g. `NEXT_PUBLIC_API_URL`.
    pub name: String,
    pub description: String,
    /// Whether the value is exposed to the browser.
    pub is_public: bool,
}

impl CreateEnvironmentParams {
    fn into_variable(self, id: String) -> EnvironmentVariable {
        EnvironmentVariable {
            id,
            name: self.name,
            description: self.description,
            is_public: self.is_public,
            extra: Default::default(),
        }
    }
}

/// Parameters for create_style_guide tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStyleGuideParams {
    pub element: String,
    pub description: String,
    pub class_name: String,
    #[serde(default)]
    pub usage_example: Option<String>,
}

impl CreateStyleGuideParams {
    fn into_pattern(self, id: String) -> StyleGuidePattern {
        StyleGuidePattern {
            id,
            element: self.element,
            description: self.description,
            class_name: self.class_name,
            usage_example: self.usage_example,
            extra: Default::default(),
        }
    }
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router(router = reference_tools, vis = "pub(crate)")]
impl McpServer {
    // ------------------------------------------------------------------------
    // Environment
    // ------------------------------------------------------------------------

    #[tool(
        description = "List all environment variables with summary information (id, name, description, isPublic)"
    )]
    pub async fn list_environment(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("Running list_environment tool");

        let records = self.resolve::<RecordRepository>();
        let variables: Vec<EnvironmentVariableSummary> = records.summaries::<EnvironmentVariable, _>(&All);

        Response(variables).into()
    }

    #[tool(description = "Get all environment variables or a specific one by ID")]
    pub async fn get_environment(
        &self,
        Parameters(params): Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(id = ?params.id, "Running get_environment tool");

        let records = self.resolve::<RecordRepository>();
        Response(records.lookup::<EnvironmentVariable>(params.id.as_deref(), &All)).into()
    }

    #[tool(description = "Create a new environment variable")]
    pub async fn create_environment(
        &self,
        Parameters(params): Parameters<CreateEnvironmentParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(name = %params.name, "Running create_environment tool");

        let records = self.resolve::<RecordRepository>();
        let variable = records.create(|id| params.into_variable(id))?;

        tracing::info!(id = %variable.id, "Created environment variable");
        created(&variable)
    }

    // ------------------------------------------------------------------------
    // Style guide
    // ------------------------------------------------------------------------

    #[tool(
        description = "List all style guide patterns with summary information (id, element, description, className)"
    )]
    pub async fn list_style_guide(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("Running list_style_guide tool");

        let records = self.resolve::<RecordRepository>();
        let patterns: Vec<StyleGuidePatternSummary> = records.summaries::<StyleGuidePattern, _>(&All);

        Response(patterns).into()
    }

    #[tool(description = "Get all style guide patterns or a specific one by ID")]
    pub async fn get_style_guide(
        &self,
        Parameters(params): Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(id = ?params.id, "Running get_style_guide tool");

        let records = self.resolve::<RecordRepository>();
        Response(records.lookup::<StyleGuidePattern>(params.id.as_deref(), &All)).into()
    }

    #[tool(description = "Create a new style guide pattern")]
    pub async fn create_style_guide(
        &self,
        Parameters(params): Parameters<CreateStyleGuideParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(element = %params.element, "Running create_style_guide tool");

        let records = self.resolve::<RecordRepository>();
        let pattern = records.create(|id| params.into_pattern(id))?;

        tracing::info!(id = %pattern.id, "Created style guide pattern");
        created(&pattern)
    }

    // ------------------------------------------------------------------------
    // State management, hooks, conventions (read-only)
    // ------------------------------------------------------------------------

    #[tool(
        description = "List all state management configurations with summary information (id, library, storeDirectory)"
    )]
    pub async fn list_state(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("Running list_state tool");

        let records = self.resolve::<RecordRepository>();
        let configs: Vec<StateManagementSummary> = records.summaries::<StateManagement, _>(&All);

        Response(configs).into()
    }

    #[tool(description = "Get all state management configurations or a specific one by ID")]
    pub async fn get_state(
        &self,
        Parameters(params): Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(id = ?params.id, "Running get_state tool");

        let records = self.resolve::<RecordRepository>();
        Response(records.lookup::<StateManagement>(params.id.as_deref(), &All)).into()
    }

    #[tool(
        description = "List all custom hooks with summary information (id, name, filePath, description)"
    )]
    pub async fn list_hooks(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("Running list_hooks tool");

        let records = self.resolve::<RecordRepository>();
        let hooks: Vec<CustomHookSummary> = records.summaries::<CustomHook, _>(&All);

        Response(hooks).into()
    }

    #[tool(description = "Get all custom hooks or a specific one by ID")]
    pub async fn get_hooks(
        &self,
        Parameters(params): Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(id = ?params.id, "Running get_hooks tool");

        let records = self.resolve::<RecordRepository>();
        Response(records.lookup::<CustomHook>(params.id.as_deref(), &All)).into()
    }

    #[tool(description = "List all code conventions with summary information (id, rule, description)")]
    pub async fn list_conventions(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("Running list_conventions tool");

        let records = self.resolve::<RecordRepository>();
        let conventions: Vec<ConventionSummary> = records.summaries::<Convention, _>(&All);

        Response(conventions).into()
    }

    #[tool(description = "Get all code conventions or a specific one by ID")]
    pub async fn get_conventions(
        &self,
        Parameters(params): Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(id = ?params.id, "Running get_conventions tool");

        let records = self.resolve::<RecordRepository>();
        Response(records.lookup::<Convention>(params.id.as_deref(), &All)).into()
    }
}
