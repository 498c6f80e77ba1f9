//! CLI module for curriculum-mcp.
//!
//! Subcommands:
//! - `mcp`: Run the MCP server (stdio transport)
//! - `init`: Create or reconcile the data file and print collection counts
//! - `tools`: Print the tool catalogue

mod init;
mod mcp;
mod tools;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

/// Curriculum MCP - curriculum catalogue over a JSON data file
#[derive(Parser)]
#[command(name = "curriculum-mcp")]
#[command(about = "Curriculum catalogue - MCP server backed by a single JSON file")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path of the JSON data file (overrides config and environment)
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the data file if missing and print per-collection counts
    Init,

    /// Run the MCP server (stdio transport for local use)
    Mcp,

    /// List every tool the server exposes
    Tools,
}

impl App {
    /// Run the CLI application.
    pub async fn run(self) -> color_eyre::Result<()> {
        match self.command {
            Command::Init => self.run_init(),
            Command::Mcp => self.run_mcp().await,
            Command::Tools => self.run_tools(),
        }
    }

    /// Layered config with the `--data` override applied.
    fn config(&self) -> color_eyre::Result<Config> {
        let config = Config::load()?;
        Ok(match &self.data {
            Some(path) => config.with_store_path(path),
            None => config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let app = App::try_parse_from(["curriculum-mcp", "mcp", "--data", "x.json", "-v"]).unwrap();
        assert!(app.verbose);
        assert_eq!(app.data, Some(PathBuf::from("x.json")));
        assert!(matches!(app.command, Command::Mcp));
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(App::try_parse_from(["curriculum-mcp", "serve"]).is_err());
    }
}
