//! Task tools.
//!
//! Tasks track development work against a unit, lesson, lesson phase, or
//! assessment. Filters on the related entity and on status combine with AND.

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
    RelatedEntityType, Task, TaskFilter, TaskPatch, TaskPriority, TaskStatus, TaskSummary,
};
use crate::repositories::RecordRepository;

// ============================================================================
// Parameter Types
// ============================================================================

/// Parameters for get_tasks tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct GetTasksParams {
    /// Optional task ID.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub filter: TaskFilter,
}

/// Parameters for create_task tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskParams {
    pub title: String,
    pub description: String,
    pub related_entity_id: String,
    pub related_entity_type: RelatedEntityType,
    #[serde(default)]
    pub assignee_id: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// What is blocking the task, if anything.
    #[serde(default)]
    pub blocker_description: Option<String>,
}

impl CreateTaskParams {
    fn into_task(self, id: String) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            related_entity_id: self.related_entity_id,
            related_entity_type: self.related_entity_type,
            assignee_id: self.assignee_id,
            status: self.status,
            priority: self.priority,
            blocker_description: self.blocker_description,
            extra: Default::default(),
        }
    }
}

/// Parameters for update_task tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    /// ID of the task to update.
    pub id: String,
    #[serde(flatten)]
    pub changes: TaskPatch,
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router(router = task_tools, vis = "pub(crate)")]
impl McpServer {
    #[tool(
        description = "List all tasks with summary information (id, title, relatedEntityId, relatedEntityType, status, priority)"
    )]
    pub async fn list_tasks(
        &self,
        Parameters(filter): Parameters<TaskFilter>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            related_entity_id = ?filter.related_entity_id,
            related_entity_type = ?filter.related_entity_type,
            status = ?filter.status,
            "Running list_tasks tool"
        );

        let records = self.resolve::<RecordRepository>();
        let tasks: Vec<TaskSummary> = records.summaries::<Task, _>(&filter);

        tracing::debug!(count = tasks.len(), "Listed tasks");
        Response(tasks).into()
    }

    #[tool(description = "Get all tasks or a specific task by ID")]
    pub async fn get_tasks(
        &self,
        Parameters(params): Parameters<GetTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(id = ?params.id, "Running get_tasks tool");

        let records = self.resolve::<RecordRepository>();
        Response(records.lookup::<Task>(params.id.as_deref(), &params.filter)).into()
    }

    #[tool(description = "Create a new task")]
    pub async fn create_task(
        &self,
        Parameters(params): Parameters<CreateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            related_entity_id = %params.related_entity_id,
            title = %params.title,
            "Running create_task tool"
        );

        let records = self.resolve::<RecordRepository>();
        let task = records.create(|id| params.into_task(id))?;

        tracing::info!(id = %task.id, "Created task");
        created(&task)
    }

    #[tool(description = "Update an existing task")]
    pub async fn update_task(
        &self,
        Parameters(params): Parameters<UpdateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateTaskParams { id, changes } = params;
        tracing::info!(id = %id, "Running update_task tool");

        let records = self.resolve::<RecordRepository>();
        let task = records.update::<Task>(&id, changes)?;

        updated(&task)
    }

    #[tool(description = "Delete a task by ID")]
    pub async fn delete_task(
        &self,
        Parameters(params): Parameters<IdParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(id = %params.id, "Running delete_task tool");

        let records = self.resolve::<RecordRepository>();
        records.delete::<Task>(&params.id)?;

        deleted::<Task>(&params.id)
    }
}
