//! Paralink: Cross-Entity Relationship Graph
//!
//! Builds a typed, directed graph from the six record collections of a
//! PARA-style productivity suite (projects, tasks, notes, people, goals,
//! habits) and answers connectivity queries over it.
//!
//! # Core Concepts
//!
//! - **Nodes**: one per source record, keyed by the record's own id
//! - **Edges**: one per reference a record holds, typed by the field it came
//!   from; targets may dangle
//! - **Snapshots**: immutable, fully-built graphs, replaced whole on refresh
//!
//! # Example
//!
//! ```
//! use paralink::{build_graph, KindFilter, NodeKind, SourceCollections};
//! use serde_json::json;
//!
//! let collections = SourceCollections::new()
//!     .with(NodeKind::Project, vec![json!({"id": "p1", "title": "Garden", "tasks": ["t1"]})])
//!     .with(NodeKind::Task, vec![json!({"id": "t1", "title": "Buy seeds"})]);
//!
//! let snapshot = build_graph(&collections);
//! let hits = snapshot.search("garden", KindFilter::Any);
//! assert_eq!(hits[0].id.as_str(), "p1");
//! assert_eq!(snapshot.neighbors(&hits[0].id, 5).nodes[0].title, "Buy seeds");
//! ```

pub mod config;
mod error;
pub mod graph;
pub mod query;
pub mod records;
pub mod refresh;
pub mod stats;

pub use config::ExplorerConfig;
pub use error::{ParalinkError, ParalinkResult};
pub use graph::{
    build_graph, BuildReport, Edge, EdgeKind, GraphBuilder, GraphSnapshot, Node, NodeId, NodeKind,
};
pub use query::{KindFilter, NeighborList, NeighborQuery, SearchQuery};
pub use records::SourceCollections;
pub use refresh::{
    CollectionVersion, PublishedGraph, RecordSource, RefreshController, RefreshState,
    SourceUpdate,
};
pub use stats::{GraphStats, NodeDegree};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
