//! Application context providing dependency injection root.

use std::sync::Arc;

use crate::config::Config;
use crate::di::Context as ContextDerive;
use crate::store::{Store, StoreError};

/// Shared handle to the collection store.
pub type AppStore = Arc<Store>;

/// Root application context for dependency injection.
///
/// Built once at startup and handed to the MCP server; there is no
/// process-wide store instance. Configuration is consumed while opening
/// and is not carried afterwards.
#[derive(ContextDerive, Clone)]
pub struct Context {
    /// The collection store backing every tool.
    pub store: AppStore,
}

impl Context {
    /// Creates a new context around an open store.
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Opens the store named by the configuration.
    ///
    /// Fails when the data file exists but cannot be read or parsed.
    pub fn open(config: &Config) -> Result<Self, StoreError> {
        let store = Store::open(&config.store.path)?;
        tracing::info!(
            path = %store.path().display(),
            "Opened curriculum data file"
        );
        Ok(Self::new(store))
    }
}
