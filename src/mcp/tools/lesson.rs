//! Lesson tools.
//!
//! `list_lessons` and `get_lessons` narrow by `unitId` before projecting or
//! looking up an ID.

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
use crate::models::{Lesson, LessonFilter, LessonPatch, LessonStatus, LessonSummary};
use crate::repositories::RecordRepository;

// ============================================================================
// Parameter Types
// ============================================================================

/// Parameters for get_lessons tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct GetLessonsParams {
    /// Optional lesson ID.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub filter: LessonFilter,
}

/// Parameters for create_lesson tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLessonParams {
    /// ID of the owning unit. Not checked against existing units.
    pub unit_id: String,
    pub title: String,
    pub sequence: i64,
    pub status: LessonStatus,
    pub learning_objectives: Vec<String>,
    pub key_concepts: Vec<String>,
    pub pedagogical_approach: String,
    pub rationale: String,
    pub duration_estimate_minutes: u32,
    /// IDs of lessons that must come first.
    #[serde(default)]
    pub depends_on_lesson_ids: Option<Vec<String>>,
}

impl CreateLessonParams {
    fn into_lesson(self, id: String) -> Lesson {
        Lesson {
            id,
            unit_id: self.unit_id,
            title: self.title,
            sequence: self.sequence,
            status: self.status,
            learning_objectives: self.learning_objectives,
            key_concepts: self.key_concepts,
            pedagogical_approach: self.pedagogical_approach,
            rationale: self.rationale,
            duration_estimate_minutes: self.duration_estimate_minutes,
            depends_on_lesson_ids: self.depends_on_lesson_ids,
            extra: Default::default(),
        }
    }
}

/// Parameters for update_lesson tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateLessonParams {
    /// ID of the lesson to update.
    pub id: String,
    #[serde(flatten)]
    pub changes: LessonPatch,
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router(router = lesson_tools, vis = "pub(crate)")]
impl McpServer {
    #[tool(
        description = "List all lessons with summary information (id, unitId, title, sequence, status)"
    )]
    pub async fn list_lessons(
        &self,
        Parameters(filter): Parameters<LessonFilter>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(unit_id = ?filter.unit_id, "Running list_lessons tool");

        let records = self.resolve::<RecordRepository>();
        let lessons: Vec<LessonSummary> = records.summaries::<Lesson, _>(&filter);

        tracing::debug!(count = lessons.len(), "Listed lessons");
        Response(lessons).into()
    }

    #[tool(description = "Get all lessons or a specific lesson by ID")]
    pub async fn get_lessons(
        &self,
        Parameters(params): Parameters<GetLessonsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(id = ?params.id, "Running get_lessons tool");

        let records = self.resolve::<RecordRepository>();
        Response(records.lookup::<Lesson>(params.id.as_deref(), &params.filter)).into()
    }

    #[tool(description = "Create a new lesson")]
    pub async fn create_lesson(
        &self,
        Parameters(params): Parameters<CreateLessonParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(unit_id = %params.unit_id, title = %params.title, "Running create_lesson tool");

        let records = self.resolve::<RecordRepository>();
        let lesson = records.create(|id| params.into_lesson(id))?;

        tracing::info!(id = %lesson.id, "Created lesson");
        created(&lesson)
    }

    #[tool(description = "Update an existing lesson")]
    pub async fn update_lesson(
        &self,
        Parameters(params): Parameters<UpdateLessonParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateLessonParams { id, changes } = params;
        tracing::info!(id = %id, "Running update_lesson tool");

        let records = self.resolve::<RecordRepository>();
        let lesson = records.update::<Lesson>(&id, changes)?;

        updated(&lesson)
    }

    #[tool(description = "Delete a lesson by ID")]
    pub async fn delete_lesson(
        &self,
        Parameters(params): Parameters<IdParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(id = %params.id, "Running delete_lesson tool");

        let records = self.resolve::<RecordRepository>();
        records.delete::<Lesson>(&params.id)?;

        deleted::<Lesson>(&params.id)
    }
}
