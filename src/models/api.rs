//! API endpoint documentation record.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::store::Patchable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Api {
    pub id: String,
    pub name: String,
    pub endpoint: String,
    pub method: HttpMethod,
    pub description: String,
    /// Example or schema of the request payload, kept as free-form JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_body: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiSummary {
    pub id: String,
    pub name: String,
    pub endpoint: String,
    pub method: HttpMethod,
    pub description: String,
}

impl From<&Api> for ApiSummary {
    fn from(api: &Api) -> Self {
        Self {
            id: api.id.clone(),
            name: api.name.clone(),
            endpoint: api.endpoint.clone(),
            method: api.method,
            description: api.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub method: Option<HttpMethod>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub request_body: Option<Map<String, Value>>,
    #[serde(default)]
    pub response_body: Option<Map<String, Value>>,
}

impl Patchable for Api {
    type Patch = ApiPatch;

    fn apply(&mut self, patch: ApiPatch) {
        merge_fields!(self, patch; name, endpoint, method, description);
        merge_optional_fields!(self, patch; request_body, response_body);
    }
}
