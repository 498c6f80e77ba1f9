//! Lesson phase model: one step of a lesson's flow.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{present, Filter};
use crate::store::Patchable;

/// Named stage within a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum PhaseName {
    Hook,
    Introduction,
    #[serde(rename = "Guided Practice")]
    GuidedPractice,
    #[serde(rename = "Independent Practice")]
    IndependentPractice,
    Assessment,
    Closing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonPhase {
    pub id: String,
    pub lesson_id: String,
    pub phase_name: PhaseName,
    pub sequence: i64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_notes: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonPhaseSummary {
    pub id: String,
    pub lesson_id: String,
    pub phase_name: PhaseName,
    pub sequence: i64,
}

impl From<&LessonPhase> for LessonPhaseSummary {
    fn from(phase: &LessonPhase) -> Self {
        Self {
            id: phase.id.clone(),
            lesson_id: phase.lesson_id.clone(),
            phase_name: phase.phase_name,
            sequence: phase.sequence,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonPhaseFilter {
    /// Optional lesson ID to filter phases.
    #[serde(default)]
    pub lesson_id: Option<String>,
}

impl Filter<LessonPhase> for LessonPhaseFilter {
    fn matches(&self, phase: &LessonPhase) -> bool {
        present(&self.lesson_id).map_or(true, |id| phase.lesson_id == id)
    }
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonPhasePatch {
    #[serde(default)]
    pub lesson_id: Option<String>,
    #[serde(default)]
    pub phase_name: Option<PhaseName>,
    #[serde(default)]
    pub sequence: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub developer_notes: Option<String>,
}

impl Patchable for LessonPhase {
    type Patch = LessonPhasePatch;

    fn apply(&mut self, patch: LessonPhasePatch) {
        merge_fields!(self, patch; lesson_id, phase_name, sequence, description);
        merge_optional_fields!(self, patch; developer_notes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_names_round_trip_display_strings() {
        let name: PhaseName = serde_json::from_str("\"Independent Practice\"").unwrap();
        assert_eq!(name, PhaseName::IndependentPractice);
        assert_eq!(
            serde_json::to_string(&PhaseName::GuidedPractice).unwrap(),
            "\"Guided Practice\""
        );
    }

    #[test]
    fn test_unknown_phase_name_is_rejected() {
        let result: Result<PhaseName, _> = serde_json::from_str("\"Warmup\"");
        assert!(result.is_err());
    }
}
