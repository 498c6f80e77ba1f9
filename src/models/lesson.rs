//! Lesson model.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{present, Filter};
use crate::store::Patchable;

/// Development status of a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum LessonStatus {
    Draft,
    #[serde(rename = "Ready for Dev")]
    ReadyForDev,
    #[serde(rename = "In Development")]
    InDevelopment,
    #[serde(rename = "Needs Review")]
    NeedsReview,
    Complete,
}

/// A single lesson inside a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub unit_id: String,
    pub title: String,
    pub sequence: i64,
    pub status: LessonStatus,
    pub learning_objectives: Vec<String>,
    pub key_concepts: Vec<String>,
    pub pedagogical_approach: String,
    pub rationale: String,
    pub duration_estimate_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on_lesson_ids: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Lean projection returned by `list_lessons`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonSummary {
    pub id: String,
    pub unit_id: String,
    pub title: String,
    pub sequence: i64,
    pub status: LessonStatus,
}

impl From<&Lesson> for LessonSummary {
    fn from(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id.clone(),
            unit_id: lesson.unit_id.clone(),
            title: lesson.title.clone(),
            sequence: lesson.sequence,
            status: lesson.status,
        }
    }
}

/// Restricts lessons to one unit.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonFilter {
    /// Optional unit ID to filter lessons.
    #[serde(default)]
    pub unit_id: Option<String>,
}

impl Filter<Lesson> for LessonFilter {
    fn matches(&self, lesson: &Lesson) -> bool {
        present(&self.unit_id).map_or(true, |id| lesson.unit_id == id)
    }
}

/// Fields an `update_lesson` call may replace.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonPatch {
    #[serde(default)]
    pub unit_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sequence: Option<i64>,
    #[serde(default)]
    pub status: Option<LessonStatus>,
    #[serde(default)]
    pub learning_objectives: Option<Vec<String>>,
    #[serde(default)]
    pub key_concepts: Option<Vec<String>>,
    #[serde(default)]
    pub pedagogical_approach: Option<String>,
    #[serde(default)]
    pub rationale: Option<String>,
    #[serde(default)]
    pub duration_estimate_minutes: Option<u32>,
    #[serde(default)]
    pub depends_on_lesson_ids: Option<Vec<String>>,
}

impl Patchable for Lesson {
    type Patch = LessonPatch;

    fn apply(&mut self, patch: LessonPatch) {
        merge_fields!(
            self,
            patch;
            unit_id,
            title,
            sequence,
            status,
            learning_objectives,
            key_concepts,
            pedagogical_approach,
            rationale,
            duration_estimate_minutes,
        );
        merge_optional_fields!(self, patch; depends_on_lesson_ids);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: &str, unit_id: &str) -> Lesson {
        Lesson {
            id: id.to_string(),
            unit_id: unit_id.to_string(),
            title: format!("Lesson {id}"),
            sequence: 1,
            status: LessonStatus::ReadyForDev,
            learning_objectives: vec!["read".to_string()],
            key_concepts: vec![],
            pedagogical_approach: "direct".to_string(),
            rationale: "r".to_string(),
            duration_estimate_minutes: 45,
            depends_on_lesson_ids: None,
            extra: Default::default(),
        }
    }

    #[test]
    fn test_filter_by_unit() {
        let filter = LessonFilter {
            unit_id: Some("u1".to_string()),
        };
        assert!(filter.matches(&lesson("l1", "u1")));
        assert!(!filter.matches(&lesson("l2", "u2")));
    }

    #[test]
    fn test_empty_unit_filter_matches_everything() {
        let filter = LessonFilter {
            unit_id: Some(String::new()),
        };
        assert!(filter.matches(&lesson("l1", "u1")));
        assert!(LessonFilter::default().matches(&lesson("l2", "u2")));
    }

    #[test]
    fn test_deserialize_from_data_file_shape() {
        let json = serde_json::json!({
            "id": "l1",
            "unitId": "u1",
            "title": "Variables",
            "sequence": 2,
            "status": "Needs Review",
            "learningObjectives": ["declare"],
            "keyConcepts": ["binding"],
            "pedagogicalApproach": "worked examples",
            "rationale": "foundation",
            "durationEstimateMinutes": 30,
            "dependsOnLessonIds": ["l0"]
        });
        let lesson: Lesson = serde_json::from_value(json).unwrap();
        assert_eq!(lesson.status, LessonStatus::NeedsReview);
        assert_eq!(lesson.depends_on_lesson_ids, Some(vec!["l0".to_string()]));
    }

    #[test]
    fn test_patch_keeps_dependencies_when_omitted() {
        let mut record = lesson("l1", "u1");
        record.depends_on_lesson_ids = Some(vec!["l0".to_string()]);
        record.apply(LessonPatch {
            duration_estimate_minutes: Some(60),
            ..Default::default()
        });
        assert_eq!(record.duration_estimate_minutes, 60);
        assert_eq!(record.depends_on_lesson_ids, Some(vec!["l0".to_string()]));
    }
}
