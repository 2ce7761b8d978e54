//! Graph builder: one linear pass over the six source collections

use super::edge::Edge;
use super::node::{Node, NodeId, NodeKind};
use super::snapshot::{BuildReport, GraphSnapshot};
use crate::records::{self, SourceCollections};
use chrono::Utc;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Builds snapshots from source collections
///
/// Collections are ingested in [`NodeKind::ALL`] order (projects, tasks,
/// notes, people, goals, habits) and records in source order, so identical
/// input always yields identical node and edge sequences. Reference targets
/// are not resolved here; dangling ids are handled at query time.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBuilder {
    generation: u64,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence number stamped on the built snapshot
    pub fn generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    /// Build a snapshot. Never fails: malformed records are skipped and counted.
    pub fn build(&self, collections: &SourceCollections) -> GraphSnapshot {
        let mut nodes = Vec::with_capacity(collections.record_count());
        let mut edges = Vec::new();
        let mut seen: HashSet<NodeId> = HashSet::with_capacity(collections.record_count());
        let mut report = BuildReport::default();

        for kind in NodeKind::ALL {
            for (position, record) in collections.get(kind).iter().enumerate() {
                let extracted = match records::extract(kind, record) {
                    Ok(extracted) => extracted,
                    Err(reason) => {
                        warn!(%kind, position, ?reason, "skipping record without usable id");
                        report.skipped_records += 1;
                        *report.skipped_by_kind.entry(kind).or_insert(0) += 1;
                        continue;
                    }
                };

                if !seen.insert(extracted.id.clone()) {
                    warn!(%kind, id = %extracted.id, "skipping record with duplicate id");
                    report.duplicate_ids += 1;
                    continue;
                }

                report.ignored_references += extracted.ignored_references;

                let mut reference_ids = Vec::with_capacity(extracted.references.len());
                for (target, relation) in extracted.references {
                    edges.push(Edge::new(extracted.id.clone(), target.clone(), relation));
                    reference_ids.push(target);
                }

                nodes.push(Node {
                    id: extracted.id,
                    kind,
                    title: extracted.title,
                    status: extracted.status,
                    reference_ids,
                    payload: record.clone(),
                });
            }
        }

        debug!(
            generation = self.generation,
            nodes = nodes.len(),
            edges = edges.len(),
            skipped = report.skipped_records,
            duplicates = report.duplicate_ids,
            "built relationship graph"
        );

        GraphSnapshot::from_parts(nodes, edges, Utc::now(), self.generation, report)
    }
}

/// Build a snapshot with generation 1
pub fn build_graph(collections: &SourceCollections) -> GraphSnapshot {
    GraphBuilder::new().generation(1).build(collections)
}
