//! The file-backed collection store.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tempfile::NamedTempFile;

use super::{Collection, Collections, Patchable, Record, StoreError};
use crate::models::{generate_ulid, Filter};

/// Owner of the data file and its in-memory snapshot.
///
/// Reads return owned copies. Each mutation runs under one lock: the snapshot
/// is changed, the whole file is rewritten, and the change is rolled back if
/// the write fails, so memory never drifts from disk.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    state: Mutex<Collections>,
}

impl Store {
    /// Opens the data file, creating it with empty collections if absent.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let state = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|source| StoreError::Read {
                path: path.clone(),
                source,
            })?;
            let value = serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?;
            let state = Collections::reconcile(value);
            tracing::debug!(path = %path.display(), "Loaded data file");
            state
        } else {
            if let Some(dir) = parent_dir(&path) {
                fs::create_dir_all(dir).map_err(|source| StoreError::Write {
                    path: path.clone(),
                    source,
                })?;
            }
            let state = Collections::default();
            write_snapshot(&path, &state)?;
            tracing::info!(path = %path.display(), "Created empty data file");
            state
        };

        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Generates a fresh record identifier.
    pub fn generate_id(&self) -> String {
        generate_ulid()
    }

    /// All records of a collection, in insertion order.
    pub fn all<T: Record>(&self) -> Vec<T> {
        T::slot(&self.lock()).clone()
    }

    /// Records matching a filter, in insertion order.
    pub fn select<T: Record>(&self, filter: &impl Filter<T>) -> Vec<T> {
        T::slot(&self.lock())
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect()
    }

    /// First record with the given id, if any.
    pub fn find<T: Record>(&self, id: &str) -> Option<T> {
        T::slot(&self.lock())
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    /// Appends a record and persists.
    ///
    /// Fails with `AlreadyExists` when the id is taken.
    pub fn add<T: Record>(&self, record: T) -> Result<T, StoreError> {
        let mut state = self.lock();

        if T::slot(&state).iter().any(|r| r.id() == record.id()) {
            return Err(StoreError::AlreadyExists {
                collection: T::COLLECTION,
                id: record.id().to_string(),
            });
        }

        T::slot_mut(&mut state).push(record.clone());
        if let Err(err) = write_snapshot(&self.path, &state) {
            T::slot_mut(&mut state).pop();
            return Err(err);
        }

        tracing::debug!(collection = %T::COLLECTION, id = %record.id(), "Added record");
        Ok(record)
    }

    /// Merges a patch into the record with the given id and persists.
    ///
    /// Returns `Ok(None)` when no record has that id; callers decide whether
    /// that is an error.
    pub fn update<T: Patchable>(&self, id: &str, patch: T::Patch) -> Result<Option<T>, StoreError> {
        let mut state = self.lock();

        let Some(index) = T::slot(&state).iter().position(|r| r.id() == id) else {
            return Ok(None);
        };

        let previous = T::slot(&state)[index].clone();
        T::slot_mut(&mut state)[index].apply(patch);
        if let Err(err) = write_snapshot(&self.path, &state) {
            T::slot_mut(&mut state)[index] = previous;
            return Err(err);
        }

        tracing::debug!(collection = %T::COLLECTION, id = %id, "Updated record");
        Ok(Some(T::slot(&state)[index].clone()))
    }

    /// Removes the record with the given id and persists.
    ///
    /// Returns `false` when nothing was removed. Records referring to the
    /// removed one are left as they are.
    pub fn delete<T: Record>(&self, id: &str) -> Result<bool, StoreError> {
        let mut state = self.lock();

        let Some(index) = T::slot(&state).iter().position(|r| r.id() == id) else {
            return Ok(false);
        };

        let removed = T::slot_mut(&mut state).remove(index);
        if let Err(err) = write_snapshot(&self.path, &state) {
            T::slot_mut(&mut state).insert(index, removed);
            return Err(err);
        }

        tracing::debug!(collection = %T::COLLECTION, id = %id, "Deleted record");
        Ok(true)
    }

    /// Pretty-printed JSON of one collection, for resource reads.
    pub fn collection_json(&self, collection: Collection) -> Result<String, StoreError> {
        self.lock()
            .to_pretty_json(collection)
            .map_err(StoreError::Serialize)
    }

    /// Record count per collection, in listing order.
    pub fn counts(&self) -> Vec<(Collection, usize)> {
        let state = self.lock();
        Collection::all()
            .iter()
            .map(|c| (*c, state.len(*c)))
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Collections> {
        // A panic mid-mutation cannot leave a half-applied change behind:
        // rollbacks run before any error is returned.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

/// Rewrites the whole data file through a temp file in the same directory.
fn write_snapshot(path: &Path, state: &Collections) -> Result<(), StoreError> {
    let json = state
        .to_value()
        .and_then(|value| serde_json::to_string_pretty(&value))
        .map_err(StoreError::Serialize)?;
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = parent_dir(path).unwrap_or_else(|| Path::new("."));
    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(json.as_bytes()).map_err(write_err)?;
    file.as_file().sync_all().map_err(write_err)?;
    file.persist(path).map_err(|err| write_err(err.error))?;

    Ok(())
}
