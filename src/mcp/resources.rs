//! Read-only MCP resources, one per collection.

use rmcp::model::{AnnotateAble, RawResource, Resource};

use crate::error::AppError;
use crate::store::Collection;

/// URI scheme shared by every collection resource.
pub const RESOURCE_SCHEME: &str = "curriculum-mcp://";

/// `curriculum-mcp://<collection>`.
pub fn resource_uri(collection: Collection) -> String {
    format!("{}{}", RESOURCE_SCHEME, collection.name())
}

/// One resource per collection, in listing order.
pub fn resource_catalogue() -> Vec<Resource> {
    Collection::all()
        .iter()
        .map(|&collection| {
            let mut resource = RawResource::new(resource_uri(collection), collection.title());
            resource.description = Some(collection.description().to_string());
            resource.mime_type = Some("application/json".to_string());
            resource.no_annotation()
        })
        .collect()
}

/// Maps a resource URI back to its collection.
pub fn parse_resource_uri(uri: &str) -> Result<Collection, AppError> {
    uri.strip_prefix(RESOURCE_SCHEME)
        .and_then(|name| name.parse().ok())
        .ok_or_else(|| AppError::InvalidRequest(format!("Unknown resource: {}", uri)))
}
