//! Source records as delivered by the per-kind record adapters
//!
//! Records are loosely-typed JSON objects. The graph only needs an
//! identifier, a label, a status and the reference fields of each kind;
//! everything else rides along untouched as the node payload.

mod fields;

pub use fields::{extract, relation_fields, ExtractedRecord, RelationField, SkipReason};

use crate::graph::NodeKind;
use crate::ParalinkResult;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::Path;

/// The six record collections, one array per kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceCollections {
    #[serde(deserialize_with = "null_as_empty")]
    pub projects: Vec<Value>,
    #[serde(deserialize_with = "null_as_empty")]
    pub tasks: Vec<Value>,
    #[serde(deserialize_with = "null_as_empty")]
    pub notes: Vec<Value>,
    #[serde(deserialize_with = "null_as_empty")]
    pub people: Vec<Value>,
    #[serde(deserialize_with = "null_as_empty")]
    pub goals: Vec<Value>,
    #[serde(deserialize_with = "null_as_empty")]
    pub habits: Vec<Value>,
}

/// A collection given as `null` is treated like a missing one
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl SourceCollections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse collections from a JSON object keyed by plural kind name
    pub fn from_json_str(json: &str) -> ParalinkResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load collections from a JSON file
    pub fn load(path: impl AsRef<Path>) -> ParalinkResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Records of one kind
    pub fn get(&self, kind: NodeKind) -> &[Value] {
        match kind {
            NodeKind::Project => &self.projects,
            NodeKind::Task => &self.tasks,
            NodeKind::Note => &self.notes,
            NodeKind::Person => &self.people,
            NodeKind::Goal => &self.goals,
            NodeKind::Habit => &self.habits,
        }
    }

    /// Replace the records of one kind
    pub fn set(&mut self, kind: NodeKind, records: Vec<Value>) {
        match kind {
            NodeKind::Project => self.projects = records,
            NodeKind::Task => self.tasks = records,
            NodeKind::Note => self.notes = records,
            NodeKind::Person => self.people = records,
            NodeKind::Goal => self.goals = records,
            NodeKind::Habit => self.habits = records,
        }
    }

    /// Builder-style variant of [`SourceCollections::set`]
    pub fn with(mut self, kind: NodeKind, records: Vec<Value>) -> Self {
        self.set(kind, records);
        self
    }

    /// Total number of records across all kinds
    pub fn record_count(&self) -> usize {
        NodeKind::ALL.iter().map(|k| self.get(*k).len()).sum()
    }
}
