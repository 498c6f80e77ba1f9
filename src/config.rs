//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. Built-in defaults
//! 2. User config: `~/.config/curriculum-mcp/config.toml` (XDG) or platform config dir
//! 3. Project config: `.curriculum-mcp.toml` in the working directory
//! 4. Environment variables: `CURRICULUM_MCP_*` (`CURRICULUM_MCP_STORE_PATH` sets `store.path`)
//!
//! The CLI `--data` flag overrides the result.
//!
//! ```toml
//! [store]
//! path = "data/db.json"
//! ```

use std::ops::Deref;
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Default location of the data file, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "data/db.json";

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".curriculum-mcp.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
}

/// Data file configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path of the JSON data file. Created on first start if missing.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

impl Config {
    /// Load config with layered resolution (defaults → user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// The layered provider stack used by `load`.
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Toml::file(Self::user_config_path()))
            .merge(Toml::file(PROJECT_CONFIG_FILE))
            .merge(Env::prefixed("CURRICULUM_MCP_").split("_"))
    }

    /// Replaces the data file path, e.g. from a CLI flag.
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store.path = path.into();
        self
    }

    /// User config path: ~/.config/curriculum-mcp/config.toml (XDG) or platform config dir.
    fn user_config_path() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home
                .join(".config")
                .join("curriculum-mcp")
                .join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        dirs::config_dir()
            .map(|p| p.join("curriculum-mcp").join("config.toml"))
            .unwrap_or_default()
    }
}
