//! App connection model: links a lesson phase to a page, component or endpoint.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{present, Filter};
use crate::store::Patchable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum AppConnectionKind {
    Page,
    Component,
    #[serde(rename = "API Endpoint")]
    ApiEndpoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConnection {
    pub id: String,
    pub lesson_phase_id: String,
    #[serde(rename = "type")]
    pub kind: AppConnectionKind,
    pub resource_identifier: String,
    pub usage_description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConnectionSummary {
    pub id: String,
    pub lesson_phase_id: String,
    #[serde(rename = "type")]
    pub kind: AppConnectionKind,
    pub resource_identifier: String,
}

impl From<&AppConnection> for AppConnectionSummary {
    fn from(conn: &AppConnection) -> Self {
        Self {
            id: conn.id.clone(),
            lesson_phase_id: conn.lesson_phase_id.clone(),
            kind: conn.kind,
            resource_identifier: conn.resource_identifier.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppConnectionFilter {
    /// Optional lesson phase ID to filter connections.
    #[serde(default)]
    pub lesson_phase_id: Option<String>,
}

impl Filter<AppConnection> for AppConnectionFilter {
    fn matches(&self, conn: &AppConnection) -> bool {
        present(&self.lesson_phase_id).map_or(true, |id| conn.lesson_phase_id == id)
    }
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppConnectionPatch {
    #[serde(default)]
    pub lesson_phase_id: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<AppConnectionKind>,
    #[serde(default)]
    pub resource_identifier: Option<String>,
    #[serde(default)]
    pub usage_description: Option<String>,
}

impl Patchable for AppConnection {
    type Patch = AppConnectionPatch;

    fn apply(&mut self, patch: AppConnectionPatch) {
        merge_fields!(self, patch; lesson_phase_id, kind, resource_identifier, usage_description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_as_type() {
        let conn = AppConnection {
            id: "c1".to_string(),
            lesson_phase_id: "p1".to_string(),
            kind: AppConnectionKind::ApiEndpoint,
            resource_identifier: "/api/progress".to_string(),
            usage_description: "saves progress".to_string(),
            extra: Default::default(),
        };
        let json = serde_json::to_value(&conn).unwrap();
        assert_eq!(json["type"], "API Endpoint");
        assert_eq!(json["lessonPhaseId"], "p1");

        let summary = serde_json::to_value(AppConnectionSummary::from(&conn)).unwrap();
        assert_eq!(summary["type"], "API Endpoint");
        assert!(summary.get("usageDescription").is_none());
    }
}
