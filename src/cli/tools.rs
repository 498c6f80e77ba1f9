//! Tools command handler.

use color_eyre::Result;

use crate::mcp::McpServer;

use super::App;

impl App {
    /// Print the tool catalogue without opening the data file.
    pub fn run_tools(&self) -> Result<()> {
        let tools = McpServer::tool_catalogue();

        for tool in &tools {
            println!(
                "{:<24} {}",
                tool.name,
                tool.description.as_deref().unwrap_or_default()
            );
        }
        println!("\nTotal tools: {}", tools.len());

        Ok(())
    }
}
