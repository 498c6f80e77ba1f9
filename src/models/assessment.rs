//! Assessment model, attached to either a lesson or a unit.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{present, Filter};
use crate::store::Patchable;

/// Kind of record an assessment hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ParentType {
    Lesson,
    Unit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum AssessmentKind {
    Formative,
    Summative,
    Diagnostic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum AssessmentFormat {
    #[serde(rename = "Multiple Choice")]
    MultipleChoice,
    #[serde(rename = "Code Challenge")]
    CodeChallenge,
    #[serde(rename = "Short Answer")]
    ShortAnswer,
    Project,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: String,
    pub parent_id: String,
    pub parent_type: ParentType,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: AssessmentKind,
    pub format: AssessmentFormat,
    pub description: String,
    pub evaluation_criteria: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSummary {
    pub id: String,
    pub parent_id: String,
    pub parent_type: ParentType,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: AssessmentKind,
}

impl From<&Assessment> for AssessmentSummary {
    fn from(assessment: &Assessment) -> Self {
        Self {
            id: assessment.id.clone(),
            parent_id: assessment.parent_id.clone(),
            parent_type: assessment.parent_type,
            title: assessment.title.clone(),
            kind: assessment.kind,
        }
    }
}

/// Parent filter. Each combination of supplied fields is its own expression.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentFilter {
    /// Optional parent ID to filter assessments.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Optional parent type to filter assessments.
    #[serde(default)]
    pub parent_type: Option<ParentType>,
}

impl Filter<Assessment> for AssessmentFilter {
    fn matches(&self, assessment: &Assessment) -> bool {
        match (present(&self.parent_id), self.parent_type) {
            (Some(id), Some(kind)) => assessment.parent_id == id && assessment.parent_type == kind,
            (Some(id), None) => assessment.parent_id == id,
            (None, Some(kind)) => assessment.parent_type == kind,
            (None, None) => true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentPatch {
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub parent_type: Option<ParentType>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<AssessmentKind>,
    #[serde(default)]
    pub format: Option<AssessmentFormat>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub evaluation_criteria: Option<Vec<String>>,
}

impl Patchable for Assessment {
    type Patch = AssessmentPatch;

    fn apply(&mut self, patch: AssessmentPatch) {
        merge_fields!(
            self,
            patch;
            parent_id,
            parent_type,
            title,
            kind,
            format,
            description,
            evaluation_criteria,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assessment(id: &str, parent_id: &str, parent_type: ParentType) -> Assessment {
        Assessment {
            id: id.to_string(),
            parent_id: parent_id.to_string(),
            parent_type,
            title: "Quiz".to_string(),
            kind: AssessmentKind::Formative,
            format: AssessmentFormat::MultipleChoice,
            description: "check".to_string(),
            evaluation_criteria: vec!["accuracy".to_string()],
            extra: Default::default(),
        }
    }

    #[test]
    fn test_filter_combinations() {
        let on_lesson = assessment("a1", "x", ParentType::Lesson);
        let on_unit = assessment("a2", "x", ParentType::Unit);
        let elsewhere = assessment("a3", "y", ParentType::Lesson);

        let both = AssessmentFilter {
            parent_id: Some("x".to_string()),
            parent_type: Some(ParentType::Unit),
        };
        assert!(!both.matches(&on_lesson));
        assert!(both.matches(&on_unit));
        assert!(!both.matches(&elsewhere));

        let id_only = AssessmentFilter {
            parent_id: Some("x".to_string()),
            parent_type: None,
        };
        assert!(id_only.matches(&on_lesson));
        assert!(id_only.matches(&on_unit));
        assert!(!id_only.matches(&elsewhere));

        let type_only = AssessmentFilter {
            parent_id: None,
            parent_type: Some(ParentType::Lesson),
        };
        assert!(type_only.matches(&on_lesson));
        assert!(!type_only.matches(&on_unit));
        assert!(type_only.matches(&elsewhere));
    }

    #[test]
    fn test_format_display_strings() {
        let format: AssessmentFormat = serde_json::from_str("\"Code Challenge\"").unwrap();
        assert_eq!(format, AssessmentFormat::CodeChallenge);
    }
}
