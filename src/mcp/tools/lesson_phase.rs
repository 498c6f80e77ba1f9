//! Lesson phase tools.

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
    LessonPhase, LessonPhaseFilter, LessonPhasePatch, LessonPhaseSummary, PhaseName,
};
use crate::repositories::RecordRepository;

// ============================================================================
// Parameter Types
// ============================================================================

/// Parameters for get_lesson_phases tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct GetLessonPhasesParams {
    /// Optional lesson phase ID.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub filter: LessonPhaseFilter,
}

/// Parameters for create_lesson_phase tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLessonPhaseParams {
    pub lesson_id: String,
    pub phase_name: PhaseName,
    pub sequence: i64,
    pub description: String,
    #[serde(default)]
    pub developer_notes: Option<String>,
}

impl CreateLessonPhaseParams {
    fn into_phase(self, id: String) -> LessonPhase {
        LessonPhase {
            id,
            lesson_id: self.lesson_id,
            phase_name: self.phase_name,
            sequence: self.sequence,
            description: self.description,
            developer_notes: self.developer_notes,
            extra: Default::default(),
        }
    }
}

/// Parameters for update_lesson_phase tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateLessonPhaseParams {
    /// ID of the lesson phase to update.
    pub id: String,
    #[serde(flatten)]
    pub changes: LessonPhasePatch,
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router(router = lesson_phase_tools, vis = "pub(crate)")]
impl McpServer {
    #[tool(
        description = "List all lesson phases with summary information (id, lessonId, phaseName, sequence)"
    )]
    pub async fn list_lesson_phases(
        &self,
        Parameters(filter): Parameters<LessonPhaseFilter>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(lesson_id = ?filter.lesson_id, "Running list_lesson_phases tool");

        let records = self.resolve::<RecordRepository>();
        let phases: Vec<LessonPhaseSummary> = records.summaries::<LessonPhase, _>(&filter);

        Response(phases).into()
    }

    #[tool(description = "Get all lesson phases or a specific lesson phase by ID")]
    pub async fn get_lesson_phases(
        &self,
        Parameters(params): Parameters<GetLessonPhasesParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(id = ?params.id, "Running get_lesson_phases tool");

        let records = self.resolve::<RecordRepository>();
        Response(records.lookup::<LessonPhase>(params.id.as_deref(), &params.filter)).into()
    }

    #[tool(description = "Create a new lesson phase")]
    pub async fn create_lesson_phase(
        &self,
        Parameters(params): Parameters<CreateLessonPhaseParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(lesson_id = %params.lesson_id, "Running create_lesson_phase tool");

        let records = self.resolve::<RecordRepository>();
        let phase = records.create(|id| params.into_phase(id))?;

        tracing::info!(id = %phase.id, "Created lesson phase");
        created(&phase)
    }

    #[tool(description = "Update an existing lesson phase")]
    pub async fn update_lesson_phase(
        &self,
        Parameters(params): Parameters<UpdateLessonPhaseParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateLessonPhaseParams { id, changes } = params;
        tracing::info!(id = %id, "Running update_lesson_phase tool");

        let records = self.resolve::<RecordRepository>();
        let phase = records.update::<LessonPhase>(&id, changes)?;

        updated(&phase)
    }

    #[tool(description = "Delete a lesson phase by ID")]
    pub async fn delete_lesson_phase(
        &self,
        Parameters(params): Parameters<IdParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(id = %params.id, "Running delete_lesson_phase tool");

        let records = self.resolve::<RecordRepository>();
        records.delete::<LessonPhase>(&params.id)?;

        deleted::<LessonPhase>(&params.id)
    }
}
