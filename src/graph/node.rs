//! Node representation in the relationship graph

use crate::error::ParalinkError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifier of a node, taken verbatim from the source record
///
/// Serializes as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a NodeId from a string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The six record collections a node can originate from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Project,
    Task,
    Note,
    Person,
    Goal,
    Habit,
}

impl NodeKind {
    /// All kinds, in the order the builder ingests their collections
    pub const ALL: [NodeKind; 6] = [
        NodeKind::Project,
        NodeKind::Task,
        NodeKind::Note,
        NodeKind::Person,
        NodeKind::Goal,
        NodeKind::Habit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Project => "project",
            NodeKind::Task => "task",
            NodeKind::Note => "note",
            NodeKind::Person => "person",
            NodeKind::Goal => "goal",
            NodeKind::Habit => "habit",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = ParalinkError;

    /// Accepts singular and plural names, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "project" | "projects" => Ok(NodeKind::Project),
            "task" | "tasks" => Ok(NodeKind::Task),
            "note" | "notes" => Ok(NodeKind::Note),
            "person" | "people" => Ok(NodeKind::Person),
            "goal" | "goals" => Ok(NodeKind::Goal),
            "habit" | "habits" => Ok(NodeKind::Habit),
            _ => Err(ParalinkError::UnknownKind(s.to_string())),
        }
    }
}

/// A node in the relationship graph: one per source record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Identifier of the source record
    pub id: NodeId,
    /// Collection the record came from
    pub kind: NodeKind,
    /// Human-readable label
    pub title: String,
    /// Free-form status or category; its meaning depends on the kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Outgoing references in discovery order, duplicates kept
    pub reference_ids: Vec<NodeId>,
    /// The source record, untouched
    pub payload: serde_json::Value,
}

impl Node {
    /// Create a node with no status, references or payload
    pub fn new(id: impl Into<NodeId>, kind: NodeKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            status: None,
            reference_ids: Vec::new(),
            payload: serde_json::Value::Null,
        }
    }

    /// Set the status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Attach the source record
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }

    /// Number of outgoing references
    pub fn degree(&self) -> usize {
        self.reference_ids.len()
    }
}
