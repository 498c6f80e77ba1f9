//! Integration tests for the collection store and record repository.
//!
//! Each test works on its own temporary data file.

use curriculum_mcp::context::Context;
use curriculum_mcp::error::AppError;
use curriculum_mcp::models::{
    All, Lesson, LessonFilter, LessonPatch, LessonStatus, LessonSummary, RelatedEntityType, Task,
    TaskFilter, TaskPriority, TaskStatus, Unit, UnitPatch, UnitStatus,
};
use curriculum_mcp::repositories::{Lookup, RecordRepository};
use curriculum_mcp::store::Store;
use curriculum_mcp::FromRef;
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
    repo: RecordRepository,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let repo = Self::open(&dir);
        Self { dir, repo }
    }

    fn open(dir: &TempDir) -> RecordRepository {
        let store = Store::open(dir.path().join("db.json")).unwrap();
        RecordRepository::from_ref(&Context::new(store))
    }

    /// Simulates a restart by opening a fresh store on the same file.
    fn reopen(&self) -> RecordRepository {
        Self::open(&self.dir)
    }
}

fn intro_unit(id: String) -> Unit {
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

fn lesson_in(unit_id: &str, title: &str) -> impl FnOnce(String) -> Lesson {
    let unit_id = unit_id.to_string();
    let title = title.to_string();
    move |id| Lesson {
        id,
        unit_id,
        title,
        sequence: 1,
        status: LessonStatus::Draft,
        learning_objectives: vec!["read a stack trace".to_string()],
        key_concepts: vec!["call stack".to_string()],
        pedagogical_approach: "worked examples".to_string(),
        rationale: "debugging comes first".to_string(),
        duration_estimate_minutes: 45,
        depends_on_lesson_ids: None,
        extra: Default::default(),
    }
}

fn task_for(
    entity_id: &str,
    kind: RelatedEntityType,
    status: TaskStatus,
) -> impl FnOnce(String) -> Task {
    let entity_id = entity_id.to_string();
    move |id| Task {
        id,
        title: format!("Review {entity_id}"),
        description: "check the draft".to_string(),
        related_entity_id: entity_id,
        related_entity_type: kind,
        assignee_id: None,
        status,
        priority: TaskPriority::Medium,
        blocker_description: None,
        extra: Default::default(),
    }
}

#[test]
fn test_created_unit_reads_back_equal() {
    let fx = Fixture::new();
    let unit = fx.repo.create(intro_unit).unwrap();

    assert_eq!(
        fx.repo.lookup::<Unit>(Some(&unit.id), &All),
        Lookup::One(Some(unit.clone()))
    );
    assert_eq!(fx.repo.list::<Unit>(&All), vec![unit]);
}

#[test]
fn test_lessons_listed_by_unit() {
    let fx = Fixture::new();
    let unit = fx.repo.create(intro_unit).unwrap();
    let lesson = fx.repo.create(lesson_in(&unit.id, "Variables")).unwrap();
    fx.repo.create(lesson_in("other-unit", "Loops")).unwrap();

    let summaries: Vec<LessonSummary> = fx.repo.summaries::<Lesson, _>(&LessonFilter {
        unit_id: Some(unit.id.clone()),
    });

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].id, lesson.id);
    assert_eq!(summaries[0].title, "Variables");
}

#[test]
fn test_deleting_unit_leaves_lessons_untouched() {
    let fx = Fixture::new();
    let unit = fx.repo.create(intro_unit).unwrap();
    let lesson = fx.repo.create(lesson_in(&unit.id, "Variables")).unwrap();

    fx.repo.delete::<Unit>(&unit.id).unwrap();

    assert_eq!(fx.repo.find::<Unit>(&unit.id), None);
    assert_eq!(fx.repo.find::<Lesson>(&lesson.id), Some(lesson));
}

#[test]
fn test_update_replaces_only_supplied_fields() {
    let fx = Fixture::new();
    let unit = fx.repo.create(intro_unit).unwrap();

    let updated = fx
        .repo
        .update::<Unit>(
            &unit.id,
            UnitPatch {
                status: Some(UnitStatus::InDevelopment),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.id, unit.id);
    assert_eq!(updated.status, UnitStatus::InDevelopment);
    assert_eq!(updated.title, unit.title);
    assert_eq!(updated.rationale, unit.rationale);
}

#[test]
fn test_update_unknown_id_leaves_collection_unchanged() {
    let fx = Fixture::new();
    let lesson = fx.repo.create(lesson_in("u1", "Variables")).unwrap();

    let err = fx
        .repo
        .update::<Lesson>(
            "missing",
            LessonPatch {
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound { .. }));
    assert_eq!(err.to_string(), "Lesson with ID missing not found");
    assert_eq!(fx.repo.list::<Lesson>(&All), vec![lesson]);
}

#[test]
fn test_delete_shrinks_collection_by_one() {
    let fx = Fixture::new();
    let first = fx.repo.create(intro_unit).unwrap();
    fx.repo.create(intro_unit).unwrap();

    fx.repo.delete::<Unit>(&first.id).unwrap();

    assert_eq!(fx.repo.list::<Unit>(&All).len(), 1);
    assert_eq!(fx.repo.lookup::<Unit>(Some(&first.id), &All), Lookup::One(None));
    assert!(matches!(
        fx.repo.delete::<Unit>(&first.id),
        Err(AppError::NotFound { .. })
    ));
}

#[test]
fn test_restart_preserves_records_and_order() {
    let fx = Fixture::new();
    let units: Vec<Unit> = (0..3).map(|_| fx.repo.create(intro_unit).unwrap()).collect();
    let lesson = fx.repo.create(lesson_in(&units[1].id, "Variables")).unwrap();

    let reopened = fx.reopen();

    assert_eq!(reopened.list::<Unit>(&All), units);
    assert_eq!(reopened.list::<Lesson>(&All), vec![lesson]);
}

#[test]
fn test_task_filter_requires_id_and_type_together() {
    let fx = Fixture::new();
    let wanted = fx
        .repo
        .create(task_for("x1", RelatedEntityType::Lesson, TaskStatus::Todo))
        .unwrap();
    fx.repo
        .create(task_for("x1", RelatedEntityType::Unit, TaskStatus::Todo))
        .unwrap();
    fx.repo
        .create(task_for("x2", RelatedEntityType::Lesson, TaskStatus::Todo))
        .unwrap();

    let tasks = fx.repo.list::<Task>(&TaskFilter {
        related_entity_id: Some("x1".to_string()),
        related_entity_type: Some(RelatedEntityType::Lesson),
        status: None,
    });

    assert_eq!(tasks, vec![wanted]);
}

#[test]
fn test_task_status_filter_combines_with_entity() {
    let fx = Fixture::new();
    fx.repo
        .create(task_for("x1", RelatedEntityType::Lesson, TaskStatus::Todo))
        .unwrap();
    let done = fx
        .repo
        .create(task_for("x1", RelatedEntityType::Lesson, TaskStatus::Done))
        .unwrap();

    let tasks = fx.repo.list::<Task>(&TaskFilter {
        related_entity_id: Some("x1".to_string()),
        related_entity_type: None,
        status: Some(TaskStatus::Done),
    });

    assert_eq!(tasks, vec![done]);
}
