//! MCP server implementation for the curriculum catalogue.

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, ServerHandler},
    model::{
        Implementation, ListResourcesResult, PaginatedRequestParam, ProtocolVersion,
        ReadResourceRequestParam, ReadResourceResult, ResourceContents, ServerCapabilities,
        ServerInfo, Tool,
    },
    service::RequestContext,
    tool_handler, ErrorData as McpError, RoleServer,
};

use crate::context::Context;
use crate::di::FromRef;
use crate::error::AppError;
use crate::mcp::resources::{parse_resource_uri, resource_catalogue};

/// Curriculum MCP server.
///
/// Exposes every collection of the data file as a read-only resource and as
/// a set of tools:
/// - Full CRUD over units, lessons, lesson phases, app connections,
///   assessments, tasks, components and APIs
/// - List, get and create for environment variables and style guide patterns
/// - List and get for state management, custom hooks and conventions
#[derive(Clone)]
pub struct McpServer {
    pub(crate) ctx: Arc<Context>,
    tool_router: ToolRouter<McpServer>,
}

impl McpServer {
    /// Create a new curriculum MCP server with the given context.
    pub fn new(ctx: Context) -> Self {
        tracing::info!("Initializing curriculum MCP server");

        Self {
            ctx: Arc::new(ctx),
            tool_router: Self::tool_router(),
        }
    }

    /// Build the combined tool router from all tool modules.
    pub(crate) fn tool_router() -> ToolRouter<Self> {
        Self::unit_tools()
            + Self::lesson_tools()
            + Self::lesson_phase_tools()
            + Self::app_connection_tools()
            + Self::assessment_tools()
            + Self::task_tools()
            + Self::component_tools()
            + Self::api_tools()
            + Self::reference_tools()
    }

    /// Every tool the server exposes, sorted by name.
    pub fn tool_catalogue() -> Vec<Tool> {
        let mut tools = Self::tool_router().list_all();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    /// Resolve a dependency from the context.
    ///
    /// This enables compile-time dependency injection for repositories
    /// and other services that implement `FromRef<Context>`.
    pub fn resolve<T: FromRef<Context>>(&self) -> T {
        T::from_ref(&self.ctx)
    }

    /// Get direct access to the context.
    pub fn context(&self) -> &Context {
        &self.ctx
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(format!(
                r#"Curriculum MCP - curriculum catalogue server

Data file: {path}

## Resources

Each collection is readable as `curriculum-mcp://<collection>`
(units, lessons, lessonPhases, appConnections, assessments, tasks,
components, apis, environment, style-guide, state, hooks, conventions).

## Curriculum Tools

- **units** - list_units, get_units, create_unit, update_unit, delete_unit
- **lessons** - list_lessons, get_lessons, create_lesson, update_lesson, delete_lesson (filter by unitId)
- **lesson phases** - list_lesson_phases, get_lesson_phases, create/update/delete_lesson_phase (filter by lessonId)
- **app connections** - list_app_connections, get_app_connections, create/update/delete_app_connection (filter by lessonPhaseId)
- **assessments** - list_assessments, get_assessments, create/update/delete_assessment (filter by parentId, parentType)
- **tasks** - list_tasks, get_tasks, create/update/delete_task (filter by relatedEntityId, relatedEntityType, status)

## Application Tools

- **components** - list_components, get_components, create/update/delete_component
- **apis** - list_apis, get_apis, create/update/delete_api
- **environment** - list_environment, get_environment, create_environment
- **style guide** - list_style_guide, get_style_guide, create_style_guide
- **state, hooks, conventions** - list_* and get_* only

list_* tools return summaries; get_* tools return full records, or null for an unknown ID.
IDs are generated on create. References between records are not checked and deletes do not cascade.
"#,
                path = self.ctx.store.path().display()
            )),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        tracing::debug!("Listing resources");
        Ok(ListResourcesResult::with_all_items(resource_catalogue()))
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        tracing::info!(uri = %uri, "Reading resource");

        let collection = parse_resource_uri(&uri)?;
        let json = self
            .ctx
            .store
            .collection_json(collection)
            .map_err(AppError::from)?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(json, uri)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use tempfile::TempDir;

    fn server() -> (TempDir, McpServer) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path().join("db.json")).unwrap();
        (dir, McpServer::new(Context::new(store)))
    }

    #[test]
    fn test_catalogue_has_52_tools() {
        assert_eq!(McpServer::tool_catalogue().len(), 52);
    }

    #[test]
    fn test_operation_sets_per_entity() {
        let names: Vec<String> = McpServer::tool_catalogue()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();

        for expected in [
            "list_units",
            "delete_lesson_phase",
            "update_app_connection",
            "get_assessments",
            "create_task",
            "delete_api",
            "create_environment",
            "create_style_guide",
            "get_state",
            "list_hooks",
            "get_conventions",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }

        for absent in ["update_environment", "delete_style_guide", "create_state", "create_hooks"] {
            assert!(!names.iter().any(|n| n == absent), "unexpected {absent}");
        }
    }

    #[test]
    fn test_info_advertises_resources_and_data_file() {
        let (dir, server) = server();
        let info = server.get_info();

        assert_eq!(info.server_info.name, "curriculum-mcp");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        let instructions = info.instructions.unwrap();
        assert!(instructions.contains(&dir.path().join("db.json").display().to_string()));
    }
}
