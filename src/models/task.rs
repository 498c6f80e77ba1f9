//! Task model: development work tracked against any curriculum record.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{present, Filter};
use crate::store::Patchable;

/// Kind of record a task refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum RelatedEntityType {
    Unit,
    Lesson,
    LessonPhase,
    Assessment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum TaskStatus {
    Todo,
    #[serde(rename = "In Progress")]
    InProgress,
    Blocked,
    #[serde(rename = "In Review")]
    InReview,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub related_entity_id: String,
    pub related_entity_type: RelatedEntityType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocker_description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub id: String,
    pub title: String,
    pub related_entity_id: String,
    pub related_entity_type: RelatedEntityType,
    pub status: TaskStatus,
    pub priority: TaskPriority,
}

impl From<&Task> for TaskSummary {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            related_entity_id: task.related_entity_id.clone(),
            related_entity_type: task.related_entity_type,
            status: task.status,
            priority: task.priority,
        }
    }
}

/// Related-entity filter, narrowed further by status when one is given.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilter {
    /// Optional related entity ID to filter tasks.
    #[serde(default)]
    pub related_entity_id: Option<String>,
    /// Optional related entity type to filter tasks.
    #[serde(default)]
    pub related_entity_type: Option<RelatedEntityType>,
    /// Optional status to filter tasks.
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

impl Filter<Task> for TaskFilter {
    fn matches(&self, task: &Task) -> bool {
        let related = match (present(&self.related_entity_id), self.related_entity_type) {
            (Some(id), Some(kind)) => {
                task.related_entity_id == id && task.related_entity_type == kind
            }
            (Some(id), None) => task.related_entity_id == id,
            (None, Some(kind)) => task.related_entity_type == kind,
            (None, None) => true,
        };

        related && self.status.map_or(true, |status| task.status == status)
    }
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub related_entity_id: Option<String>,
    #[serde(default)]
    pub related_entity_type: Option<RelatedEntityType>,
    #[serde(default)]
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    pub blocker_description: Option<String>,
}

impl Patchable for Task {
    type Patch = TaskPatch;

    fn apply(&mut self, patch: TaskPatch) {
        merge_fields!(
            self,
            patch;
            title,
            description,
            related_entity_id,
            related_entity_type,
            status,
            priority,
        );
        merge_optional_fields!(self, patch; assignee_id, blocker_description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, related: &str, kind: RelatedEntityType, status: TaskStatus) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {id}"),
            description: "do it".to_string(),
            related_entity_id: related.to_string(),
            related_entity_type: kind,
            assignee_id: None,
            status,
            priority: TaskPriority::Medium,
            blocker_description: None,
            extra: Default::default(),
        }
    }

    #[test]
    fn test_id_and_type_must_both_match() {
        let tasks = [
            task("t1", "x", RelatedEntityType::Lesson, TaskStatus::Todo),
            task("t2", "x", RelatedEntityType::Unit, TaskStatus::Todo),
            task("t3", "y", RelatedEntityType::Lesson, TaskStatus::Todo),
        ];
        let filter = TaskFilter {
            related_entity_id: Some("x".to_string()),
            related_entity_type: Some(RelatedEntityType::Lesson),
            status: None,
        };

        let matched: Vec<_> = tasks.iter().filter(|t| filter.matches(t)).map(|t| &t.id).collect();
        assert_eq!(matched, vec!["t1"]);
    }

    #[test]
    fn test_status_narrows_related_filter() {
        let tasks = [
            task("t1", "x", RelatedEntityType::Lesson, TaskStatus::Todo),
            task("t2", "x", RelatedEntityType::Lesson, TaskStatus::Done),
            task("t3", "y", RelatedEntityType::Unit, TaskStatus::Done),
        ];
        let filter = TaskFilter {
            related_entity_id: Some("x".to_string()),
            related_entity_type: None,
            status: Some(TaskStatus::Done),
        };

        let matched: Vec<_> = tasks.iter().filter(|t| filter.matches(t)).map(|t| &t.id).collect();
        assert_eq!(matched, vec!["t2"]);

        let status_only = TaskFilter {
            status: Some(TaskStatus::Done),
            ..Default::default()
        };
        assert_eq!(tasks.iter().filter(|t| status_only.matches(t)).count(), 2);
    }

    #[test]
    fn test_patch_sets_optional_assignee() {
        let mut record = task("t1", "x", RelatedEntityType::Unit, TaskStatus::Todo);
        record.apply(TaskPatch {
            assignee_id: Some("dev-7".to_string()),
            status: Some(TaskStatus::InProgress),
            ..Default::default()
        });
        assert_eq!(record.assignee_id.as_deref(), Some("dev-7"));
        assert_eq!(record.status, TaskStatus::InProgress);
        assert_eq!(record.related_entity_id, "x");
    }
}
