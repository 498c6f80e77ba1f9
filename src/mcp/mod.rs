//! MCP server exposing the curriculum catalogue as tools and resources.

pub mod protocol;
pub mod resources;
pub mod server;
pub mod tools;

pub use server::McpServer;
