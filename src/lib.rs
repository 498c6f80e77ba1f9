//! Curriculum MCP - curriculum catalogue MCP server
//!
//! Serves units, lessons, lesson phases, assessments, tasks and application
//! reference records from a single JSON data file.

pub mod cli;
pub mod config;
pub mod context;
pub mod di;
pub mod error;
pub mod mcp;
pub mod models;
pub mod repositories;
pub mod store;

// Re-export FromRef at crate root for di-macros generated code
pub use di::FromRef;
