//! Query types and result structures

use crate::error::ParalinkError;
use crate::graph::{Node, NodeKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind restriction for search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "filter", content = "kind")]
pub enum KindFilter {
    /// Wildcard: every kind matches
    #[default]
    Any,
    /// Only nodes of this kind match
    Only(NodeKind),
}

impl KindFilter {
    pub fn matches(&self, kind: NodeKind) -> bool {
        match self {
            KindFilter::Any => true,
            KindFilter::Only(expected) => *expected == kind,
        }
    }
}

impl From<NodeKind> for KindFilter {
    fn from(kind: NodeKind) -> Self {
        KindFilter::Only(kind)
    }
}

impl From<Option<NodeKind>> for KindFilter {
    fn from(kind: Option<NodeKind>) -> Self {
        kind.map(KindFilter::Only).unwrap_or(KindFilter::Any)
    }
}

impl FromStr for KindFilter {
    type Err = ParalinkError;

    /// `""`, `"*"` and `"all"` are the wildcard; otherwise a kind name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "*" | "all" | "any" => Ok(KindFilter::Any),
            other => other.parse::<NodeKind>().map(KindFilter::Only).map_err(|_| {
                ParalinkError::UnknownKind(s.to_string())
            }),
        }
    }
}

/// Resolved one-hop neighbors of a node
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborList<'a> {
    /// Resolved neighbors, in reference order, at most `limit`
    pub nodes: Vec<&'a Node>,
    /// Resolvable neighbors past the limit, for "+N more"
    pub remaining: usize,
    /// References that did not resolve and were dropped
    pub dangling: usize,
}

impl<'a> NeighborList<'a> {
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            remaining: 0,
            dangling: 0,
        }
    }

    /// Every resolvable neighbor, shown or not
    pub fn total(&self) -> usize {
        self.nodes.len() + self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
