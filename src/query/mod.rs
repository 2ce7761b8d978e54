//! Read-only queries for the explorer panel
//!
//! Title search, one-hop neighbor expansion and direct lookup. All of them
//! borrow from a single snapshot and never modify it.

mod neighbors;
mod search;
mod types;

pub use neighbors::{NeighborQuery, DEFAULT_NEIGHBOR_LIMIT};
pub use search::SearchQuery;
pub use types::{KindFilter, NeighborList};

use crate::graph::{GraphSnapshot, Node, NodeId};

impl GraphSnapshot {
    /// Nodes whose title contains `text`, case-insensitively
    pub fn search(&self, text: &str, filter: KindFilter) -> Vec<&Node> {
        SearchQuery::new(text).with_filter(filter).execute(self)
    }

    /// Resolved outgoing references of `id`, at most `limit`
    pub fn neighbors(&self, id: &NodeId, limit: usize) -> NeighborList<'_> {
        NeighborQuery::of(id.clone()).limit(limit).execute(self)
    }

    /// Direct lookup
    pub fn get(&self, id: &NodeId) -> Option<&Node> {
        self.get_node(id)
    }
}
