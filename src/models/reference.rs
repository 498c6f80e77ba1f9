//! Project reference records: environment variables, style guide patterns,
//! state management setup, custom hooks and code conventions.
//!
//! None of these support updates or deletes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentVariable {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Whether the variable is exposed to client-side code.
    pub is_public: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentVariableSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_public: bool,
}

impl From<&EnvironmentVariable> for EnvironmentVariableSummary {
    fn from(var: &EnvironmentVariable) -> Self {
        Self {
            id: var.id.clone(),
            name: var.name.clone(),
            description: var.description.clone(),
            is_public: var.is_public,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleGuidePattern {
    pub id: String,
    pub element: String,
    pub description: String,
    pub class_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_example: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleGuidePatternSummary {
    pub id: String,
    pub element: String,
    pub description: String,
    pub class_name: String,
}

impl From<&StyleGuidePattern> for StyleGuidePatternSummary {
    fn from(pattern: &StyleGuidePattern) -> Self {
        Self {
            id: pattern.id.clone(),
            element: pattern.element.clone(),
            description: pattern.description.clone(),
            class_name: pattern.class_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateManagement {
    pub id: String,
    pub library: String,
    pub store_directory: String,
    pub usage_pattern: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateManagementSummary {
    pub id: String,
    pub library: String,
    pub store_directory: String,
}

impl From<&StateManagement> for StateManagementSummary {
    fn from(state: &StateManagement) -> Self {
        Self {
            id: state.id.clone(),
            library: state.library.clone(),
            store_directory: state.store_directory.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomHook {
    pub id: String,
    pub name: String,
    pub file_path: String,
    pub description: String,
    pub usage: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomHookSummary {
    pub id: String,
    pub name: String,
    pub file_path: String,
    pub description: String,
}

impl From<&CustomHook> for CustomHookSummary {
    fn from(hook: &CustomHook) -> Self {
        Self {
            id: hook.id.clone(),
            name: hook.name.clone(),
            file_path: hook.file_path.clone(),
            description: hook.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Convention {
    pub id: String,
    pub rule: String,
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConventionSummary {
    pub id: String,
    pub rule: String,
    pub description: String,
}

impl From<&Convention> for ConventionSummary {
    fn from(convention: &Convention) -> Self {
        Self {
            id: convention.id.clone(),
            rule: convention.rule.clone(),
            description: convention.description.clone(),
        }
    }
}
