//! Connectivity ranking and aggregate statistics
//!
//! Everything here is a pure function of one [`GraphSnapshot`] and is
//! recomputed whole whenever a new snapshot is published.

mod degree;

pub use degree::{degree, degree_table, in_degree, top_connected, weighted_degree, NodeDegree};

use crate::graph::{GraphSnapshot, NodeId, NodeKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Dashboard figures for one snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    /// Node count for every kind, zero included
    pub counts_by_kind: BTreeMap<NodeKind, usize>,
    /// Ids of the most connected nodes, best first
    ///
    /// Resolve them against the snapshot the stats were computed from, e.g.
    /// with `PublishedGraph::top_connected_nodes`.
    pub top_connected: Vec<NodeId>,
    /// Edges whose target is not a node of the snapshot
    pub dangling_references: usize,
    /// Source records dropped by the builder
    pub skipped_records: usize,
    pub built_at: DateTime<Utc>,
    pub generation: u64,
}

impl GraphStats {
    /// Compute stats, ranking the `top_k` most connected nodes
    pub fn compute(snapshot: &GraphSnapshot, top_k: usize) -> Self {
        Self {
            total_nodes: snapshot.node_count(),
            total_edges: snapshot.edge_count(),
            counts_by_kind: counts_by_kind(snapshot),
            top_connected: top_connected(snapshot, top_k)
                .into_iter()
                .map(|n| n.id.clone())
                .collect(),
            dangling_references: dangling_references(snapshot),
            skipped_records: snapshot.report().skipped_records,
            built_at: snapshot.built_at(),
            generation: snapshot.generation(),
        }
    }
}

/// Node count per kind; every kind has an entry
pub fn counts_by_kind(snapshot: &GraphSnapshot) -> BTreeMap<NodeKind, usize> {
    let mut counts: BTreeMap<NodeKind, usize> = NodeKind::ALL.iter().map(|k| (*k, 0)).collect();
    for node in snapshot.nodes() {
        *counts.entry(node.kind).or_insert(0) += 1;
    }
    counts
}

/// Number of edges whose target id does not resolve
pub fn dangling_references(snapshot: &GraphSnapshot) -> usize {
    snapshot
        .edges()
        .iter()
        .filter(|e| !snapshot.contains(&e.to))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use crate::records::SourceCollections;
    use serde_json::json;

    #[test]
    fn empty_snapshot_stats() {
        let stats = GraphStats::compute(&GraphSnapshot::empty(), 5);
        assert_eq!(stats.total_nodes, 0);
        assert_eq!(stats.total_edges, 0);
        assert!(stats.top_connected.is_empty());
        assert_eq!(stats.counts_by_kind.len(), 6);
        assert!(stats.counts_by_kind.values().all(|c| *c == 0));
    }

    #[test]
    fn counts_and_dangling() {
        let input = SourceCollections::new()
            .with(
                NodeKind::Task,
                vec![
                    json!({"id": "t1", "project": "p1"}),
                    json!({"id": "t2", "project": "ghost", "notes": ["n1"]}),
                ],
            )
            .with(NodeKind::Project, vec![json!({"id": "p1", "title": "P"})]);
        let snapshot = build_graph(&input);
        let stats = GraphStats::compute(&snapshot, 1);

        assert_eq!(stats.total_nodes, 3);
        assert_eq!(stats.total_edges, 3);
        assert_eq!(stats.counts_by_kind[&NodeKind::Task], 2);
        assert_eq!(stats.counts_by_kind[&NodeKind::Project], 1);
        assert_eq!(stats.counts_by_kind[&NodeKind::Habit], 0);
        // "ghost" and "n1" do not resolve
        assert_eq!(stats.dangling_references, 2);
        assert_eq!(stats.top_connected, vec![NodeId::from("t2")]);
        assert_eq!(stats.generation, 1);
    }
}
