//! Assessment tools.
//!
//! Assessments hang off either a lesson or a unit. The list and get tools
//! filter on `parentId`, `parentType`, or both.

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
    Assessment, AssessmentFilter, AssessmentFormat, AssessmentKind, AssessmentPatch,
    AssessmentSummary, ParentType,
};
use crate::repositories::RecordRepository;

// ============================================================================
// Parameter Types
// ============================================================================

/// Parameters for get_assessments tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct GetAssessmentsParams {
    /// Optional assessment ID.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub filter: AssessmentFilter,
}

/// Parameters for create_assessment tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssessmentParams {
    /// ID of the owning lesson or unit.
    pub parent_id: String,
    pub parent_type: ParentType,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: AssessmentKind,
    pub format: AssessmentFormat,
    pub description: String,
    pub evaluation_criteria: Vec<String>,
}

impl CreateAssessmentParams {
    fn into_assessment(self, id: String) -> Assessment {
        Assessment {
            id,
            parent_id: self.parent_id,
            parent_type: self.parent_type,
            title: self.title,
            kind: self.kind,
            format: self.format,
            description: self.description,
            evaluation_criteria: self.evaluation_criteria,
            extra: Default::default(),
        }
    }
}

/// Parameters for update_assessment tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateAssessmentParams {
    /// ID of the assessment to update.
    pub id: String,
    #[serde(flatten)]
    pub changes: AssessmentPatch,
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router(router = assessment_tools, vis = "pub(crate)")]
impl McpServer {
    #[tool(
        description = "List all assessments with summary information (id, parentId, parentType, title, type)"
    )]
    pub async fn list_assessments(
        &self,
        Parameters(filter): Parameters<AssessmentFilter>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            parent_id = ?filter.parent_id,
            parent_type = ?filter.parent_type,
            "Running list_assessments tool"
        );

        let records = self.resolve::<RecordRepository>();
        let assessments: Vec<AssessmentSummary> = records.summaries::<Assessment, _>(&filter);

        Response(assessments).into()
    }

    #[tool(description = "Get all assessments or a specific assessment by ID")]
    pub async fn get_assessments(
        &self,
        Parameters(params): Parameters<GetAssessmentsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(id = ?params.id, "Running get_assessments tool");

        let records = self.resolve::<RecordRepository>();
        Response(records.lookup::<Assessment>(params.id.as_deref(), &params.filter)).into()
    }

    #[tool(description = "Create a new assessment")]
    pub async fn create_assessment(
        &self,
        Parameters(params): Parameters<CreateAssessmentParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            parent_id = %params.parent_id,
            title = %params.title,
            "Running create_assessment tool"
        );

        let records = self.resolve::<RecordRepository>();
        let assessment = records.create(|id| params.into_assessment(id))?;

        tracing::info!(id = %assessment.id, "Created assessment");
        created(&assessment)
    }

    #[tool(description = "Update an existing assessment")]
    pub async fn update_assessment(
        &self,
        Parameters(params): Parameters<UpdateAssessmentParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateAssessmentParams { id, changes } = params;
        tracing::info!(id = %id, "Running update_assessment tool");

        let records = self.resolve::<RecordRepository>();
        let assessment = records.update::<Assessment>(&id, changes)?;

        updated(&assessment)
    }

    #[tool(description = "Delete an assessment by ID")]
    pub async fn delete_assessment(
        &self,
        Parameters(params): Parameters<IdParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(id = %params.id, "Running delete_assessment tool");

        let records = self.resolve::<RecordRepository>();
        records.delete::<Assessment>(&params.id)?;

        deleted::<Assessment>(&params.id)
    }
}
