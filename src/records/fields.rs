//! Per-kind field mapping: identifier, label, status and reference fields

use crate::graph::{EdgeKind, NodeId, NodeKind};
use serde_json::{Map, Value};

/// A reference-bearing field of a record kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationField {
    /// JSON field name on the source record
    pub field: &'static str,
    /// Tag given to every edge discovered through this field
    pub relation: EdgeKind,
}

const fn rel(field: &'static str, relation: EdgeKind) -> RelationField {
    RelationField { field, relation }
}

const PROJECT_FIELDS: &[RelationField] = &[
    rel("tasks", EdgeKind::ProjectTask),
    rel("notes", EdgeKind::ProjectNote),
    rel("people", EdgeKind::ProjectPerson),
];
const TASK_FIELDS: &[RelationField] = &[
    rel("notes", EdgeKind::TaskNote),
    rel("project", EdgeKind::TaskProject),
];
const NOTE_FIELDS: &[RelationField] = &[
    rel("tasks", EdgeKind::NoteTask),
    rel("project", EdgeKind::NoteProject),
    rel("people", EdgeKind::NotePerson),
];
const PERSON_FIELDS: &[RelationField] = &[
    rel("projects", EdgeKind::PersonProject),
    rel("tasks", EdgeKind::PersonTask),
    rel("notes", EdgeKind::PersonNote),
];
const GOAL_FIELDS: &[RelationField] = &[
    rel("projects", EdgeKind::GoalProject),
    rel("habits", EdgeKind::GoalHabit),
];
const HABIT_FIELDS: &[RelationField] = &[rel("goal", EdgeKind::HabitGoal)];

/// Reference fields of a kind, in the order their edges are emitted
pub fn relation_fields(kind: NodeKind) -> &'static [RelationField] {
    match kind {
        NodeKind::Project => PROJECT_FIELDS,
        NodeKind::Task => TASK_FIELDS,
        NodeKind::Note => NOTE_FIELDS,
        NodeKind::Person => PERSON_FIELDS,
        NodeKind::Goal => GOAL_FIELDS,
        NodeKind::Habit => HABIT_FIELDS,
    }
}

/// Why a record produced no node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The record is not a JSON object
    NotAnObject,
    /// `id` is absent, null, empty or not a scalar
    MissingId,
}

/// The parts of a record the graph is built from
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedRecord {
    pub id: NodeId,
    pub title: String,
    pub status: Option<String>,
    /// Discovered references with their relation, in emission order
    pub references: Vec<(NodeId, EdgeKind)>,
    /// Reference values that could not be read as an id
    pub ignored_references: usize,
}

/// Read one record of the given kind
pub fn extract(kind: NodeKind, record: &Value) -> Result<ExtractedRecord, SkipReason> {
    let object = record.as_object().ok_or(SkipReason::NotAnObject)?;
    let id = object
        .get("id")
        .and_then(scalar_id)
        .ok_or(SkipReason::MissingId)?;

    let mut references = Vec::new();
    let mut ignored_references = 0;
    for field in relation_fields(kind) {
        match object.get(field.field) {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) => {
                for item in items {
                    match reference_id(item) {
                        Some(target) => references.push((target, field.relation)),
                        None => ignored_references += 1,
                    }
                }
            }
            Some(single) => match reference_id(single) {
                Some(target) => references.push((target, field.relation)),
                None => ignored_references += 1,
            },
        }
    }

    Ok(ExtractedRecord {
        id: NodeId::from_string(id),
        title: title(kind, object),
        status: status(kind, object),
        references,
        ignored_references,
    })
}

fn title(kind: NodeKind, object: &Map<String, Value>) -> String {
    match kind {
        NodeKind::Person => {
            let first = text(object, "firstName").unwrap_or_default();
            let last = text(object, "lastName").unwrap_or_default();
            format!("{} {}", first, last).trim().to_string()
        }
        _ => text(object, "title").unwrap_or_default(),
    }
}

fn status(kind: NodeKind, object: &Map<String, Value>) -> Option<String> {
    match kind {
        NodeKind::Project | NodeKind::Task | NodeKind::Goal => text(object, "status"),
        NodeKind::Note => text(object, "type"),
        NodeKind::Person => text(object, "relationship"),
        NodeKind::Habit => match object.get("isActive") {
            Some(Value::Bool(true)) => Some("active".to_string()),
            Some(Value::Bool(false)) => Some("inactive".to_string()),
            _ => None,
        },
    }
}

fn text(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A string or integer identifier; empty strings do not count
fn scalar_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}

/// A reference is a bare id or an embedded record carrying one
fn reference_id(value: &Value) -> Option<NodeId> {
    match value {
        Value::Object(embedded) => embedded.get("id").and_then(scalar_id),
        other => scalar_id(other),
    }
    .map(NodeId::from_string)
}
