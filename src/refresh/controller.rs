//! RefreshController: owns the current snapshot and decides when to rebuild

use super::{CollectionVersion, RefreshState, SourceUpdate};
use crate::config::ExplorerConfig;
use crate::graph::{GraphBuilder, GraphSnapshot, Node, NodeKind};
use crate::records::SourceCollections;
use crate::stats::GraphStats;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{debug, info, trace};

/// A snapshot and the stats computed from it, published together
#[derive(Debug)]
pub struct PublishedGraph {
    pub snapshot: GraphSnapshot,
    pub stats: GraphStats,
}

impl PublishedGraph {
    fn new(snapshot: GraphSnapshot, top_k: usize) -> Self {
        let stats = GraphStats::compute(&snapshot, top_k);
        Self { snapshot, stats }
    }

    /// The most connected nodes, best first, resolved against the snapshot
    pub fn top_connected_nodes(&self) -> Vec<&Node> {
        self.stats
            .top_connected
            .iter()
            .filter_map(|id| self.snapshot.get_node(id))
            .collect()
    }
}

/// Latest collection delivered for one kind
#[derive(Debug)]
struct SourceSlot {
    version: CollectionVersion,
    records: Vec<Value>,
}

/// Holds the six latest source collections and the published graph
///
/// Deliveries only mark the graph stale; [`RefreshController::refresh`]
/// rebuilds once all six kinds are present. Readers take an
/// `Arc<PublishedGraph>` and keep a consistent snapshot/stats pair for as
/// long as they hold it, regardless of later publications.
#[derive(Debug)]
pub struct RefreshController {
    config: ExplorerConfig,
    sources: DashMap<NodeKind, SourceSlot>,
    /// Set by deliveries, cleared when a rebuild starts reading the slots
    dirty: AtomicBool,
    generation: AtomicU64,
    /// Serializes rebuilds so an older build never replaces a newer one
    build_lock: Mutex<()>,
    published: RwLock<Arc<PublishedGraph>>,
}

impl Default for RefreshController {
    fn default() -> Self {
        Self::new(ExplorerConfig::default())
    }
}

impl RefreshController {
    /// Create a controller serving the empty snapshot
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            config,
            sources: DashMap::new(),
            dirty: AtomicBool::new(false),
            generation: AtomicU64::new(0),
            build_lock: Mutex::new(()),
            published: RwLock::new(Arc::new(PublishedGraph::new(
                GraphSnapshot::empty(),
                config.top_k,
            ))),
        }
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// The currently published graph
    pub fn current(&self) -> Arc<PublishedGraph> {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn state(&self) -> RefreshState {
        if self.dirty.load(Ordering::Acquire) || self.current().snapshot.generation() == 0 {
            RefreshState::Stale
        } else {
            RefreshState::Ready
        }
    }

    /// Kinds that have not delivered a collection yet
    pub fn missing_kinds(&self) -> Vec<NodeKind> {
        NodeKind::ALL
            .into_iter()
            .filter(|kind| !self.sources.contains_key(kind))
            .collect()
    }

    /// Store a collection. Returns false when the slot already holds this version.
    pub fn deliver(&self, update: SourceUpdate) -> bool {
        let SourceUpdate {
            kind,
            version,
            records,
        } = update;

        match self.sources.entry(kind) {
            Entry::Occupied(mut slot) => {
                if slot.get().version == version {
                    trace!(%kind, %version, "collection unchanged");
                    return false;
                }
                slot.insert(SourceSlot { version, records });
            }
            Entry::Vacant(slot) => {
                slot.insert(SourceSlot { version, records });
            }
        }

        self.dirty.store(true, Ordering::Release);
        debug!(%kind, "collection changed, graph is stale");
        true
    }

    /// Deliver several updates, then rebuild at most once
    ///
    /// The refresh runs even when no update changed anything: earlier
    /// single deliveries may have left the graph stale.
    pub fn deliver_batch(
        &self,
        updates: impl IntoIterator<Item = SourceUpdate>,
    ) -> Option<Arc<PublishedGraph>> {
        let changed = updates
            .into_iter()
            .fold(0usize, |n, update| n + usize::from(self.deliver(update)));
        trace!(changed, "batch delivered");
        self.refresh()
    }

    /// Deliver all six collections, fingerprinted by content, and rebuild once
    pub fn deliver_all(&self, collections: SourceCollections) -> Option<Arc<PublishedGraph>> {
        let SourceCollections {
            projects,
            tasks,
            notes,
            people,
            goals,
            habits,
        } = collections;
        self.deliver_batch([
            SourceUpdate::fingerprinted(NodeKind::Project, projects),
            SourceUpdate::fingerprinted(NodeKind::Task, tasks),
            SourceUpdate::fingerprinted(NodeKind::Note, notes),
            SourceUpdate::fingerprinted(NodeKind::Person, people),
            SourceUpdate::fingerprinted(NodeKind::Goal, goals),
            SourceUpdate::fingerprinted(NodeKind::Habit, habits),
        ])
    }

    /// Rebuild and publish if stale and every kind has delivered
    ///
    /// Returns the new publication, or `None` when nothing was rebuilt.
    pub fn refresh(&self) -> Option<Arc<PublishedGraph>> {
        let _build = self.build_lock.lock().unwrap_or_else(PoisonError::into_inner);

        if !self.dirty.load(Ordering::Acquire) {
            return None;
        }
        let missing = self.missing_kinds();
        if !missing.is_empty() {
            debug!(?missing, "waiting for collections before rebuilding");
            return None;
        }

        // Cleared before reading: a delivery racing this build marks it dirty again
        self.dirty.store(false, Ordering::Release);
        let collections = self.collect_sources();

        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        let snapshot = GraphBuilder::new().generation(generation).build(&collections);
        let published = Arc::new(PublishedGraph::new(snapshot, self.config.top_k));

        *self.published.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&published);

        info!(
            generation,
            nodes = published.stats.total_nodes,
            edges = published.stats.total_edges,
            dangling = published.stats.dangling_references,
            "published relationship graph"
        );
        Some(published)
    }

    fn collect_sources(&self) -> SourceCollections {
        let mut collections = SourceCollections::new();
        for kind in NodeKind::ALL {
            if let Some(slot) = self.sources.get(&kind) {
                collections.set(kind, slot.records.clone());
            }
        }
        collections
    }
}
