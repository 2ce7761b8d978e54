//! Core graph data structures and the snapshot builder

mod builder;
mod edge;
mod node;
mod snapshot;


pub use builder::{build_graph, GraphBuilder};
pub use edge::{Edge, EdgeKind, DEFAULT_WEIGHT, GOAL_PROJECT_WEIGHT};
pub use node::{Node, NodeId, NodeKind};
pub use snapshot::{BuildReport, GraphSnapshot};
