//! Domain models for the curriculum catalogue.
//!
//! Every record type comes with a summary projection used by list tools, and
//! the updatable ones with a patch type holding the fields a partial update
//! may replace. Field names serialize in camelCase, matching the data file.

/// Copies every `Some` field of a patch onto the target.
macro_rules! merge_fields {
    ($target:expr, $patch:expr; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )+
    };
}

/// Like `merge_fields!`, for fields that are themselves optional on the record.
macro_rules! merge_optional_fields {
    ($target:expr, $patch:expr; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = Some(value);
            }
        )+
    };
}

mod api;
mod app_connection;
mod assessment;
mod component;
mod lesson;
mod lesson_phase;
mod reference;
mod task;
mod unit;

pub use api::{Api, ApiPatch, ApiSummary, HttpMethod};
pub use app_connection::{
    AppConnection, AppConnectionFilter, AppConnectionKind, AppConnectionPatch,
    AppConnectionSummary,
};
pub use assessment::{
    Assessment, AssessmentFilter, AssessmentFormat, AssessmentKind, AssessmentPatch,
    AssessmentSummary, ParentType,
};
pub use component::{Component, ComponentPatch, ComponentSummary};
pub use lesson::{Lesson, LessonFilter, LessonPatch, LessonStatus, LessonSummary};
pub use lesson_phase::{
    LessonPhase, LessonPhaseFilter, LessonPhasePatch, LessonPhaseSummary, PhaseName,
};
pub use reference::{
    Convention, ConventionSummary, CustomHook, CustomHookSummary, EnvironmentVariable,
    EnvironmentVariableSummary, StateManagement, StateManagementSummary, StyleGuidePattern,
    StyleGuidePatternSummary,
};
pub use task::{
    RelatedEntityType, Task, TaskFilter, TaskPatch, TaskPriority, TaskStatus, TaskSummary,
};
pub use unit::{Unit, UnitPatch, UnitStatus, UnitSummary};

use ulid::Ulid;

/// Generates a new ULID string.
pub fn generate_ulid() -> String {
    Ulid::new().to_string()
}

/// A predicate over records of one kind, applied before projecting.
pub trait Filter<T> {
    fn matches(&self, record: &T) -> bool;
}

/// Accepts every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct All;

impl<T> Filter<T> for All {
    fn matches(&self, _record: &T) -> bool {
        true
    }
}

/// Treats an empty filter string the same as an absent one.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
