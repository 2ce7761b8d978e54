//! Title search over snapshot nodes

use super::types::KindFilter;
use crate::graph::{GraphSnapshot, Node, NodeKind};

/// Case-insensitive substring search on node titles
///
/// Results keep snapshot order; there is no relevance ranking.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Lowercased needle
    needle: String,
    /// Kind restriction
    pub kind: KindFilter,
}

impl SearchQuery {
    /// Create a query matching titles that contain `text`
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            needle: text.as_ref().to_lowercase(),
            kind: KindFilter::Any,
        }
    }

    /// Restrict results to one kind
    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = KindFilter::Only(kind);
        self
    }

    /// Set the kind filter, wildcard included
    pub fn with_filter(mut self, filter: KindFilter) -> Self {
        self.kind = filter;
        self
    }

    /// Execute the search against a snapshot
    pub fn execute<'a>(&self, snapshot: &'a GraphSnapshot) -> Vec<&'a Node> {
        snapshot
            .nodes()
            .iter()
            .filter(|node| self.matches(node))
            .collect()
    }

    fn matches(&self, node: &Node) -> bool {
        if !self.kind.matches(node.kind) {
            return false;
        }
        self.needle.is_empty() || node.title.to_lowercase().contains(&self.needle)
    }
}
