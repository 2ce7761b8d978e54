//! Degree measures over a snapshot

use crate::graph::{GraphSnapshot, Node, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outgoing reference count of a node; 0 for unknown ids
///
/// Incoming references are deliberately not included. See [`in_degree`].
pub fn degree(snapshot: &GraphSnapshot, id: &NodeId) -> usize {
    snapshot.get_node(id).map(Node::degree).unwrap_or(0)
}

/// Number of edges in the snapshot pointing at `id`
pub fn in_degree(snapshot: &GraphSnapshot, id: &NodeId) -> usize {
    snapshot.edges().iter().filter(|e| &e.to == id).count()
}

/// Sum of the weights of a node's outgoing edges
pub fn weighted_degree(snapshot: &GraphSnapshot, id: &NodeId) -> u32 {
    snapshot.outgoing(id).map(|e| e.weight).sum()
}

/// The `k` nodes with the most outgoing references
///
/// Ties keep build order.
pub fn top_connected(snapshot: &GraphSnapshot, k: usize) -> Vec<&Node> {
    let mut ranked: Vec<&Node> = snapshot.nodes().iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.degree().cmp(&a.degree()));
    ranked.truncate(k);
    ranked
}

/// Both directions of a node's connectivity, reported separately
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDegree {
    pub id: NodeId,
    pub out_degree: usize,
    pub in_degree: usize,
    pub weighted_degree: u32,
}

/// Degrees of every node, in build order
///
/// One pass over the edges; cheaper than calling [`in_degree`] per node.
pub fn degree_table(snapshot: &GraphSnapshot) -> Vec<NodeDegree> {
    let mut incoming: HashMap<&NodeId, usize> = HashMap::new();
    let mut weighted: HashMap<&NodeId, u32> = HashMap::new();
    for edge in snapshot.edges() {
        *incoming.entry(&edge.to).or_insert(0) += 1;
        *weighted.entry(&edge.from).or_insert(0) += edge.weight;
    }

    snapshot
        .nodes()
        .iter()
        .map(|node| NodeDegree {
            id: node.id.clone(),
            out_degree: node.degree(),
            in_degree: incoming.get(&node.id).copied().unwrap_or(0),
            weighted_degree: weighted.get(&node.id).copied().unwrap_or(0),
        })
        .collect()
}
