//! Typed access from a record type to its collection.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::collection::{Collection, Collections};
use crate::models::{
    Api, AppConnection, Assessment, Component, Convention, CustomHook, EnvironmentVariable,
    Lesson, LessonPhase, StateManagement, StyleGuidePattern, Task, Unit,
};

/// A record stored in exactly one collection, keyed by its `id`.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The collection holding records of this type.
    const COLLECTION: Collection;
    /// Lowercase label used in tool messages ("lesson phase", "API").
    const LABEL: &'static str;

    fn id(&self) -> &str;

    fn slot(state: &Collections) -> &Vec<Self>;

    fn slot_mut(state: &mut Collections) -> &mut Vec<Self>;
}

/// A record that supports partial updates.
pub trait Patchable: Record {
    type Patch;

    /// Shallow merge: supplied fields replace, omitted fields are kept.
    fn apply(&mut self, patch: Self::Patch);
}

macro_rules! impl_record {
    ($($ty:ty => $collection:ident, $field:ident, $label:literal;)+) => {
        $(
            impl Record for $ty {
                const COLLECTION: Collection = Collection::$collection;
                const LABEL: &'static str = $label;

                fn id(&self) -> &str {
                    &self.id
                }

                fn slot(state: &Collections) -> &Vec<Self> {
                    &state.$field
                }

                fn slot_mut(state: &mut Collections) -> &mut Vec<Self> {
                    &mut state.$field
                }
            }
        )+
    };
}

impl_record! {
    Unit => Units, units, "unit";
    Lesson => Lessons, lessons, "lesson";
    LessonPhase => LessonPhases, lesson_phases, "lesson phase";
    AppConnection => AppConnections, app_connections, "app connection";
    Assessment => Assessments, assessments, "assessment";
    Task => Tasks, tasks, "task";
    Component => Components, components, "component";
    Api => Apis, apis, "API";
    EnvironmentVariable => Environment, environment, "environment variable";
    StyleGuidePattern => StyleGuide, style_guide, "style guide pattern";
    StateManagement => State, state, "state management configuration";
    CustomHook => Hooks, hooks, "custom hook";
    Convention => Conventions, conventions, "convention";
}

/// Capitalizes a record label for the start of a sentence.
pub fn sentence_case(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_case() {
        assert_eq!(sentence_case("lesson phase"), "Lesson phase");
        assert_eq!(sentence_case("API"), "API");
        assert_eq!(sentence_case(""), "");
    }

    #[test]
    fn test_labels_point_at_matching_collections() {
        assert_eq!(<LessonPhase as Record>::COLLECTION.name(), "lessonPhases");
        assert_eq!(<StyleGuidePattern as Record>::COLLECTION.name(), "style-guide");
        assert_eq!(<Api as Record>::LABEL, "API");
    }
}
