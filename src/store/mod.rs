//! JSON collection store.
//!
//! A single JSON file holds every collection. The store loads it once,
//! reconciles it against the fixed collection schema, and rewrites the whole
//! file after every mutation.
//!
//! ## Modules
//!
//! - `collection`: collection identifiers and the typed snapshot
//! - `record`: `Record`/`Patchable` traits mapping record types to collections
//! - `file_store`: the `Store` itself

mod collection;
mod file_store;
mod record;

use std::path::PathBuf;

use thiserror::Error;

pub use collection::{Collection, Collections};
pub use file_store::Store;
pub use record::{sentence_case, Patchable, Record};

/// Errors raised while loading or persisting the data file.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize collections: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Item with ID {id} already exists in {collection}")]
    AlreadyExists { collection: Collection, id: String },
}
