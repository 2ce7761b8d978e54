//! GraphSnapshot: one immutable, fully-built relationship graph

use super::edge::Edge;
use super::node::{Node, NodeId, NodeKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Data-quality counters collected while building a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    /// Records dropped because they had no usable identifier
    pub skipped_records: usize,
    /// Skipped records per kind
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub skipped_by_kind: BTreeMap<NodeKind, usize>,
    /// Records dropped because an earlier record already used their id
    pub duplicate_ids: usize,
    /// Reference values that were neither an id nor an embedded record
    pub ignored_references: usize,
}

impl BuildReport {
    /// True when the build saw no malformed input
    pub fn is_clean(&self) -> bool {
        self.skipped_records == 0 && self.duplicate_ids == 0 && self.ignored_references == 0
    }
}

/// An immutable graph built from one set of source collections
///
/// Nodes keep build order; an id index gives direct lookup. A snapshot is
/// never modified after construction: a refresh builds a new one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "SnapshotParts")]
pub struct GraphSnapshot {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    built_at: DateTime<Utc>,
    generation: u64,
    report: BuildReport,
    #[serde(skip)]
    index: HashMap<NodeId, usize>,
}

/// Serialized form of a snapshot, without the derived index
#[derive(Deserialize)]
struct SnapshotParts {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    built_at: DateTime<Utc>,
    generation: u64,
    #[serde(default)]
    report: BuildReport,
}

impl From<SnapshotParts> for GraphSnapshot {
    fn from(parts: SnapshotParts) -> Self {
        Self::from_parts(
            parts.nodes,
            parts.edges,
            parts.built_at,
            parts.generation,
            parts.report,
        )
    }
}

impl GraphSnapshot {
    /// The snapshot served before the first build: no nodes, no edges
    pub fn empty() -> Self {
        Self::from_parts(Vec::new(), Vec::new(), Utc::now(), 0, BuildReport::default())
    }

    /// Assemble a snapshot, indexing nodes by id
    ///
    /// Node ids are expected to be unique; the builder guarantees it.
    pub(crate) fn from_parts(
        nodes: Vec<Node>,
        edges: Vec<Edge>,
        built_at: DateTime<Utc>,
        generation: u64,
        report: BuildReport,
    ) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(pos, node)| (node.id.clone(), pos))
            .collect();
        Self {
            nodes,
            edges,
            built_at,
            generation,
            report,
            index,
        }
    }

    /// Get a node by ID
    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).map(|&pos| &self.nodes[pos])
    }

    /// Whether an id resolves to a node
    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// Nodes in build order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in build order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Outgoing edges of a node, in reference order
    pub fn outgoing(&self, id: &NodeId) -> impl Iterator<Item = &Edge> + '_ {
        let id = id.clone();
        self.edges.iter().filter(move |e| e.from == id)
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// When the snapshot was built
    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    /// Build sequence number; 0 for the initial empty snapshot
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }
}

impl Default for GraphSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
