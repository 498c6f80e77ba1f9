//! Unit model: the top level of the curriculum.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::store::Patchable;

/// Development status of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum UnitStatus {
    Draft,
    #[serde(rename = "In Development")]
    InDevelopment,
    Complete,
    Blocked,
}

/// A curriculum unit grouping a sequence of lessons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    pub title: String,
    pub sequence: i64,
    pub description: String,
    pub rationale: String,
    pub status: UnitStatus,
    /// Unit that must come before this one. Not checked for existence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on_unit_id: Option<String>,
    /// Fields not modelled here. Written back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Lean projection returned by `list_units`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitSummary {
    pub id: String,
    pub title: String,
    pub sequence: i64,
    pub status: UnitStatus,
}

impl From<&Unit> for UnitSummary {
    fn from(unit: &Unit) -> Self {
        Self {
            id: unit.id.clone(),
            title: unit.title.clone(),
            sequence: unit.sequence,
            status: unit.status,
        }
    }
}

/// Fields an `update_unit` call may replace.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnitPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sequence: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rationale: Option<String>,
    #[serde(default)]
    pub status: Option<UnitStatus>,
    #[serde(default)]
    pub depends_on_unit_id: Option<String>,
}

impl Patchable for Unit {
    type Patch = UnitPatch;

    fn apply(&mut self, patch: UnitPatch) {
        merge_fields!(self, patch; title, sequence, description, rationale, status);
        merge_optional_fields!(self, patch; depends_on_unit_id);
    }
}
