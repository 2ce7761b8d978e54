//! One-hop neighbor expansion

use super::types::NeighborList;
use crate::graph::{GraphSnapshot, NodeId};

/// Neighbors shown before "+N more"
pub const DEFAULT_NEIGHBOR_LIMIT: usize = 5;

/// Query resolving a node's outgoing references to nodes
///
/// References that do not resolve are dropped silently and only counted;
/// upstream collections drift and the explorer has to tolerate it.
#[derive(Debug, Clone)]
pub struct NeighborQuery {
    /// Node whose references are expanded
    pub origin: NodeId,
    /// Maximum number of neighbors returned
    pub limit: usize,
}

impl NeighborQuery {
    /// Create a neighbor query for a node
    pub fn of(origin: impl Into<NodeId>) -> Self {
        Self {
            origin: origin.into(),
            limit: DEFAULT_NEIGHBOR_LIMIT,
        }
    }

    /// Set the maximum number of neighbors
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Execute the query against a snapshot
    pub fn execute<'a>(&self, snapshot: &'a GraphSnapshot) -> NeighborList<'a> {
        let Some(origin) = snapshot.get_node(&self.origin) else {
            return NeighborList::empty();
        };

        let mut result = NeighborList::empty();
        for id in &origin.reference_ids {
            match snapshot.get_node(id) {
                Some(node) if result.nodes.len() < self.limit => result.nodes.push(node),
                Some(_) => result.remaining += 1,
                None => result.dangling += 1,
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build_graph, NodeKind};
    use crate::records::SourceCollections;
    use serde_json::json;

    fn create_test_snapshot() -> GraphSnapshot {
        let input = SourceCollections::new()
            .with(
                NodeKind::Project,
                vec![json!({
                    "id": "A",
                    "title": "Hub",
                    "tasks": ["t1", "ghost", "t2", "t3"],
                    "notes": ["n1", "n2", "n3"]
                })],
            )
            .with(
                NodeKind::Task,
                vec![
                    json!({"id": "t1", "title": "one"}),
                    json!({"id": "t2", "title": "two"}),
                    json!({"id": "t3", "title": "three"}),
                ],
            )
            .with(
                NodeKind::Note,
                vec![
                    json!({"id": "n1", "title": "a"}),
                    json!({"id": "n2", "title": "b"}),
                    json!({"id": "n3", "title": "c"}),
                ],
            );
        build_graph(&input)
    }

    fn ids(list: &NeighborList<'_>) -> Vec<String> {
        list.nodes.iter().map(|n| n.id.to_string()).collect()
    }

    #[test]
    fn dangling_references_are_dropped_in_order() {
        let snapshot = create_test_snapshot();
        let result = NeighborQuery::of("A").limit(10).execute(&snapshot);
        assert_eq!(ids(&result), vec!["t1", "t2", "t3", "n1", "n2", "n3"]);
        assert_eq!(result.dangling, 1);
        assert_eq!(result.remaining, 0);
    }

    #[test]
    fn default_limit_reports_remainder() {
        let snapshot = create_test_snapshot();
        let result = NeighborQuery::of("A").execute(&snapshot);
        assert_eq!(ids(&result), vec!["t1", "t2", "t3", "n1", "n2"]);
        assert_eq!(result.remaining, 1);
        assert_eq!(result.total(), 6);
    }

    #[test]
    fn unknown_origin_has_no_neighbors() {
        let snapshot = create_test_snapshot();
        let result = NeighborQuery::of("nope").execute(&snapshot);
        assert!(result.is_empty());
        assert_eq!(result, NeighborList::empty());
    }

    #[test]
    fn zero_limit_counts_everything_as_remaining() {
        let snapshot = create_test_snapshot();
        let result = NeighborQuery::of("A").limit(0).execute(&snapshot);
        assert!(result.is_empty());
        assert_eq!(result.remaining, 6);
    }

    #[test]
    fn leaf_node_has_no_neighbors() {
        let snapshot = create_test_snapshot();
        assert!(NeighborQuery::of("t1").execute(&snapshot).is_empty());
    }
}
