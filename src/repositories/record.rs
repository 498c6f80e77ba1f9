//! Generic record repository: list, lookup, create, update, delete.

use serde::Serialize;

use crate::context::{AppStore, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::models::Filter;
use crate::store::{sentence_case, Patchable, Record};

/// Result of a `get_*` tool: a single record (or null) when an id was given,
/// otherwise every record that passed the filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Lookup<T> {
    One(Option<T>),
    Many(Vec<T>),
}

/// Repository for CRUD operations on any record type.
#[derive(FromContext, Clone)]
pub struct RecordRepository {
    store: AppStore,
}

impl RecordRepository {
    /// Records passing the filter, in insertion order.
    pub fn list<T: Record>(&self, filter: &impl Filter<T>) -> Vec<T> {
        self.store.select(filter)
    }

    /// Summary projections of the records passing the filter.
    pub fn summaries<T, S>(&self, filter: &impl Filter<T>) -> Vec<S>
    where
        T: Record,
        S: for<'a> From<&'a T>,
    {
        self.list(filter).iter().map(S::from).collect()
    }

    /// Find a record by ID.
    pub fn find<T: Record>(&self, id: &str) -> Option<T> {
        self.store.find(id)
    }

    /// Filters first, then picks `id` out of the filtered records if given.
    ///
    /// An empty id counts as absent. A missing record is `One(None)`, not an error.
    pub fn lookup<T: Record>(&self, id: Option<&str>, filter: &impl Filter<T>) -> Lookup<T> {
        let records = self.list(filter);
        match id.filter(|id| !id.is_empty()) {
            Some(id) => Lookup::One(records.into_iter().find(|r| r.id() == id)),
            None => Lookup::Many(records),
        }
    }

    /// Create a record under a freshly generated ID.
    ///
    /// The caller never supplies the ID: `build` receives it and returns the
    /// record to insert.
    pub fn create<T: Record>(&self, build: impl FnOnce(String) -> T) -> Result<T, AppError> {
        let record = build(self.store.generate_id());
        Ok(self.store.add(record)?)
    }

    /// Apply a partial update, failing with `NotFound` for an unknown ID.
    pub fn update<T: Patchable>(&self, id: &str, patch: T::Patch) -> Result<T, AppError> {
        self.store
            .update::<T>(id, patch)?
            .ok_or_else(|| not_found::<T>(id))
    }

    /// Delete a record, failing with `NotFound` for an unknown ID.
    ///
    /// Records that reference the deleted one are not touched.
    pub fn delete<T: Record>(&self, id: &str) -> Result<(), AppError> {
        if self.store.delete::<T>(id)? {
            Ok(())
        } else {
            Err(not_found::<T>(id))
        }
    }
}

fn not_found<T: Record>(id: &str) -> AppError {
    AppError::NotFound {
        kind: sentence_case(T::LABEL),
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::di::FromRef;
    use crate::models::{
        All, Lesson, LessonFilter, LessonStatus, LessonSummary, Unit, UnitPatch, UnitStatus,
    };
    use crate::store::Store;
    use tempfile::TempDir;

    fn repository() -> (TempDir, RecordRepository) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path().join("db.json")).unwrap();
        let ctx = Context::new(store);
        (dir, RecordRepository::from_ref(&ctx))
    }

    fn new_unit(id: String) -> Unit {
        Unit {
            id,
            title: "Intro".to_string(),
            sequence: 1,
            description: "d".to_string(),
            rationale: "r".to_string(),
            status: UnitStatus::Draft,
            depends_on_unit_id: None,
            extra: Default::default(),
        }
    }

    fn new_lesson(id: String, unit_id: &str) -> Lesson {
        Lesson {
            id,
            unit_id: unit_id.to_string(),
            title: "Variables".to_string(),
            sequence: 1,
            status: LessonStatus::Draft,
            learning_objectives: vec!["declare a variable".to_string()],
            key_concepts: vec!["binding".to_string()],
            pedagogical_approach: "live coding".to_string(),
            rationale: "everything builds on it".to_string(),
            duration_estimate_minutes: 40,
            depends_on_lesson_ids: None,
            extra: Default::default(),
        }
    }

    #[test]
    fn test_create_assigns_fresh_ids() {
        let (_dir, repo) = repository();
        let a = repo.create(new_unit).unwrap();
        let b = repo.create(new_unit).unwrap();

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert_eq!(repo.find::<Unit>(&a.id), Some(a));
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let (_dir, repo) = repository();
        let err = repo
            .update::<Unit>("missing", UnitPatch::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "Unit with ID missing not found");
    }

    #[test]
    fn test_delete_unknown_id_is_not_found() {
        let (_dir, repo) = repository();
        let err = repo.delete::<Lesson>("missing").unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn test_lookup_by_id_within_filter() {
        let (_dir, repo) = repository();
        let lesson = repo.create(|id| new_lesson(id, "u1")).unwrap();

        let in_unit = LessonFilter {
            unit_id: Some("u1".to_string()),
        };
        let other_unit = LessonFilter {
            unit_id: Some("u2".to_string()),
        };

        assert_eq!(
            repo.lookup::<Lesson>(Some(&lesson.id), &in_unit),
            Lookup::One(Some(lesson.clone()))
        );
        assert_eq!(repo.lookup::<Lesson>(Some(&lesson.id), &other_unit), Lookup::One(None));
        assert_eq!(repo.lookup::<Lesson>(None, &All), Lookup::Many(vec![lesson]));
    }

    #[test]
    fn test_lookup_serializes_missing_record_as_null() {
        let (_dir, repo) = repository();
        let json = serde_json::to_string(&repo.lookup::<Unit>(Some("nope"), &All)).unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn test_summaries_follow_filter() {
        let (_dir, repo) = repository();
        let unit = repo.create(new_unit).unwrap();
        repo.create(|id| new_lesson(id, &unit.id)).unwrap();
        repo.create(|id| new_lesson(id, "elsewhere")).unwrap();

        let summaries: Vec<LessonSummary> = repo.summaries::<Lesson, _>(&LessonFilter {
            unit_id: Some(unit.id.clone()),
        });
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].unit_id, unit.id);
    }
}
