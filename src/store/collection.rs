//! Collection identifiers and the typed snapshot backing them.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::record::Record;
use crate::models::{
    Api, AppConnection, Assessment, Component, Convention, CustomHook, EnvironmentVariable,
    Lesson, LessonPhase, StateManagement, StyleGuidePattern, Task, Unit,
};

/// The fixed set of named collections in the data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Units,
    Lessons,
    LessonPhases,
    AppConnections,
    Assessments,
    Tasks,
    Components,
    Apis,
    Environment,
    StyleGuide,
    State,
    Hooks,
    Conventions,
}

impl Collection {
    /// Returns every collection, in resource listing order.
    pub fn all() -> &'static [Collection] {
        &[
            Collection::Units,
            Collection::Lessons,
            Collection::LessonPhases,
            Collection::AppConnections,
            Collection::Assessments,
            Collection::Tasks,
            Collection::Components,
            Collection::Apis,
            Collection::Environment,
            Collection::StyleGuide,
            Collection::State,
            Collection::Hooks,
            Collection::Conventions,
        ]
    }

    /// Top-level key in the data file, also the resource URI path.
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Units => "units",
            Collection::Lessons => "lessons",
            Collection::LessonPhases => "lessonPhases",
            Collection::AppConnections => "appConnections",
            Collection::Assessments => "assessments",
            Collection::Tasks => "tasks",
            Collection::Components => "components",
            Collection::Apis => "apis",
            Collection::Environment => "environment",
            Collection::StyleGuide => "style-guide",
            Collection::State => "state",
            Collection::Hooks => "hooks",
            Collection::Conventions => "conventions",
        }
    }

    /// Human-readable resource name.
    pub fn title(&self) -> &'static str {
        match self {
            Collection::Units => "All units",
            Collection::Lessons => "All lessons",
            Collection::LessonPhases => "All lesson phases",
            Collection::AppConnections => "All app connections",
            Collection::Assessments => "All assessments",
            Collection::Tasks => "All tasks",
            Collection::Components => "All components",
            Collection::Apis => "All APIs",
            Collection::Environment => "Environment variables",
            Collection::StyleGuide => "Style guide",
            Collection::State => "State management",
            Collection::Hooks => "Custom hooks",
            Collection::Conventions => "Code conventions",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Collection::Units => "All curriculum units",
            Collection::Lessons => "All curriculum lessons",
            Collection::LessonPhases => "All lesson phases",
            Collection::AppConnections => "All app connections",
            Collection::Assessments => "All assessments",
            Collection::Tasks => "All tasks",
            Collection::Components => "All UI components",
            Collection::Apis => "All API endpoints",
            Collection::Environment => "Environment variable documentation",
            Collection::StyleGuide => "Style guide patterns",
            Collection::State => "State management configurations",
            Collection::Hooks => "Custom React hooks",
            Collection::Conventions => "Coding standards and conventions",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::all()
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| format!("Unknown collection '{}'", s))
    }
}

/// In-memory snapshot of the whole data file.
///
/// Each collection has its own typed container. Top-level keys that are not
/// collections are kept in `extra`, and records that do not decode into
/// their type are kept in `rejected`; both are written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collections {
    pub components: Vec<Component>,
    pub apis: Vec<Api>,
    pub environment: Vec<EnvironmentVariable>,
    #[serde(rename = "style-guide")]
    pub style_guide: Vec<StyleGuidePattern>,
    pub state: Vec<StateManagement>,
    pub hooks: Vec<CustomHook>,
    pub conventions: Vec<Convention>,
    pub units: Vec<Unit>,
    pub lessons: Vec<Lesson>,
    pub lesson_phases: Vec<LessonPhase>,
    pub app_connections: Vec<AppConnection>,
    pub assessments: Vec<Assessment>,
    pub tasks: Vec<Task>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// Raw records per collection that failed typed decoding.
    #[serde(skip)]
    pub rejected: HashMap<Collection, Vec<Value>>,
}

impl Collections {
    /// Number of decoded records held by a collection.
    pub fn len(&self, collection: Collection) -> usize {
        match collection {
            Collection::Units => self.units.len(),
            Collection::Lessons => self.lessons.len(),
            Collection::LessonPhases => self.lesson_phases.len(),
            Collection::AppConnections => self.app_connections.len(),
            Collection::Assessments => self.assessments.len(),
            Collection::Tasks => self.tasks.len(),
            Collection::Components => self.components.len(),
            Collection::Apis => self.apis.len(),
            Collection::Environment => self.environment.len(),
            Collection::StyleGuide => self.style_guide.len(),
            Collection::State => self.state.len(),
            Collection::Hooks => self.hooks.len(),
            Collection::Conventions => self.conventions.len(),
        }
    }

    /// Number of raw records a collection carries without decoding them.
    pub fn rejected_len(&self, collection: Collection) -> usize {
        self.rejected.get(&collection).map_or(0, Vec::len)
    }

    /// Pretty-printed JSON array of a collection's records, rejected ones last.
    pub fn to_pretty_json(&self, collection: Collection) -> Result<String, serde_json::Error> {
        let mut records = match collection {
            Collection::Units => serde_json::to_value(&self.units),
            Collection::Lessons => serde_json::to_value(&self.lessons),
            Collection::LessonPhases => serde_json::to_value(&self.lesson_phases),
            Collection::AppConnections => serde_json::to_value(&self.app_connections),
            Collection::Assessments => serde_json::to_value(&self.assessments),
            Collection::Tasks => serde_json::to_value(&self.tasks),
            Collection::Components => serde_json::to_value(&self.components),
            Collection::Apis => serde_json::to_value(&self.apis),
            Collection::Environment => serde_json::to_value(&self.environment),
            Collection::StyleGuide => serde_json::to_value(&self.style_guide),
            Collection::State => serde_json::to_value(&self.state),
            Collection::Hooks => serde_json::to_value(&self.hooks),
            Collection::Conventions => serde_json::to_value(&self.conventions),
        }?;
        if let (Value::Array(slot), Some(raw)) = (&mut records, self.rejected.get(&collection)) {
            slot.extend(raw.iter().cloned());
        }
        serde_json::to_string_pretty(&records)
    }

    /// The whole file as JSON, with rejected records appended to their
    /// collections.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        let mut value = serde_json::to_value(self)?;
        if let Value::Object(root) = &mut value {
            for (collection, raw) in &self.rejected {
                if let Some(Value::Array(slot)) = root.get_mut(collection.name()) {
                    slot.extend(raw.iter().cloned());
                }
            }
        }
        Ok(value)
    }

    /// Builds a snapshot from a parsed data file.
    ///
    /// A non-object root is treated as an empty file. Every collection key
    /// whose value is missing or not an array is reset to an empty array.
    /// Records that do not decode are logged and carried in `rejected`.
    pub fn reconcile(value: Value) -> Self {
        let mut root = match value {
            Value::Object(map) => map,
            other => {
                tracing::warn!(found = %kind_of(&other), "Data file root is not an object, starting empty");
                Map::new()
            }
        };

        let mut state = Collections::default();
        take::<Unit>(&mut root, &mut state);
        take::<Lesson>(&mut root, &mut state);
        take::<LessonPhase>(&mut root, &mut state);
        take::<AppConnection>(&mut root, &mut state);
        take::<Assessment>(&mut root, &mut state);
        take::<Task>(&mut root, &mut state);
        take::<Component>(&mut root, &mut state);
        take::<Api>(&mut root, &mut state);
        take::<EnvironmentVariable>(&mut root, &mut state);
        take::<StyleGuidePattern>(&mut root, &mut state);
        take::<StateManagement>(&mut root, &mut state);
        take::<CustomHook>(&mut root, &mut state);
        take::<Convention>(&mut root, &mut state);
        state.extra = root;
        state
    }
}

/// Moves one collection out of the raw root into the snapshot.
fn take<T: Record>(root: &mut Map<String, Value>, state: &mut Collections) {
    let collection = T::COLLECTION;
    let records = match root.remove(collection.name()) {
        Some(Value::Array(records)) => records,
        None => Vec::new(),
        Some(other) => {
            tracing::warn!(
                collection = %collection,
                found = %kind_of(&other),
                "Collection is not an array, resetting to empty"
            );
            Vec::new()
        }
    };

    for (index, raw) in records.into_iter().enumerate() {
        match T::deserialize(&raw) {
            Ok(record) => T::slot_mut(state).push(record),
            Err(error) => {
                tracing::warn!(
                    collection = %collection,
                    index,
                    error = %error,
                    "Record does not decode, keeping it as-is"
                );
                state.rejected.entry(collection).or_default().push(raw);
            }
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_names_round_trip() {
        for collection in Collection::all() {
            assert_eq!(collection.name().parse::<Collection>(), Ok(*collection));
        }
        assert!("widgets".parse::<Collection>().is_err());
    }

    #[test]
    fn test_all_has_thirteen_distinct_collections() {
        let mut names: Vec<_> = Collection::all().iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 13);
    }

    #[test]
    fn test_reconcile_resets_malformed_collections() {
        let snapshot = Collections::reconcile(json!({
            "units": "oops",
            "conventions": [{ "id": "c1", "rule": "no any", "description": "strict types" }],
            "lessons": null
        }));

        assert!(snapshot.units.is_empty());
        assert!(snapshot.lessons.is_empty());
        assert_eq!(snapshot.conventions.len(), 1);
        assert_eq!(snapshot.len(Collection::Conventions), 1);
    }

    #[test]
    fn test_reconcile_keeps_unknown_keys() {
        let snapshot = Collections::reconcile(json!({ "version": 3, "notes": ["a"] }));
        assert_eq!(snapshot.extra.get("version"), Some(&json!(3)));

        let written = snapshot.to_value().unwrap();
        assert_eq!(written["notes"], json!(["a"]));
        assert_eq!(written["style-guide"], json!([]));
        assert_eq!(written["lessonPhases"], json!([]));
    }

    #[test]
    fn test_reconcile_non_object_root() {
        let snapshot = Collections::reconcile(json!([1, 2, 3]));
        assert_eq!(snapshot, Collections::default());
    }

    #[test]
    fn test_reconcile_sets_aside_records_that_do_not_decode() {
        let incomplete = json!({ "id": "h1", "name": "useX", "filePath": "a.ts", "description": "d" });
        let snapshot = Collections::reconcile(json!({
            "hooks": [incomplete.clone()],
            "conventions": [{ "id": "c1", "rule": "no any", "description": "strict types" }]
        }));

        assert!(snapshot.hooks.is_empty());
        assert_eq!(snapshot.rejected_len(Collection::Hooks), 1);
        assert_eq!(snapshot.conventions.len(), 1);

        let written = snapshot.to_value().unwrap();
        assert_eq!(written["hooks"], json!([incomplete]));
        assert_eq!(
            serde_json::from_str::<Value>(&snapshot.to_pretty_json(Collection::Hooks).unwrap()).unwrap(),
            json!([incomplete])
        );
    }

    #[test]
    fn test_empty_collection_serializes_as_empty_array() {
        let snapshot = Collections::default();
        assert_eq!(snapshot.to_pretty_json(Collection::Tasks).unwrap(), "[]");
    }
}
