//! Record source seam: the per-kind fetchers feeding the controller

use super::{CollectionVersion, SourceUpdate};
use crate::error::{ParalinkError, ParalinkResult};
use crate::graph::NodeKind;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

/// A fetcher for one record collection
///
/// Implementations typically wrap a REST endpoint; the graph only sees the
/// resulting [`SourceUpdate`].
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Kind of records this source returns
    fn kind(&self) -> NodeKind;

    /// Fetch the current collection
    async fn fetch(&self) -> ParalinkResult<SourceUpdate>;
}

/// A fixed in-memory collection
#[derive(Debug, Clone)]
pub struct StaticSource {
    kind: NodeKind,
    version: CollectionVersion,
    records: Vec<Value>,
}

impl StaticSource {
    /// Source versioned by the content fingerprint of `records`
    pub fn new(kind: NodeKind, records: Vec<Value>) -> Self {
        Self {
            kind,
            version: CollectionVersion::fingerprint(&records),
            records,
        }
    }

    pub fn with_version(mut self, version: impl Into<CollectionVersion>) -> Self {
        self.version = version.into();
        self
    }
}

#[async_trait]
impl RecordSource for StaticSource {
    fn kind(&self) -> NodeKind {
        self.kind
    }

    async fn fetch(&self) -> ParalinkResult<SourceUpdate> {
        Ok(SourceUpdate {
            kind: self.kind,
            version: self.version.clone(),
            records: self.records.clone(),
        })
    }
}

/// Results of fetching several sources
#[derive(Debug, Default)]
pub struct FetchOutcome {
    /// Successful fetches, in source order
    pub updates: Vec<SourceUpdate>,
    /// Failed fetches; the previously delivered collection stays in effect
    pub failures: Vec<ParalinkError>,
}

impl FetchOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Fetch every source concurrently
///
/// The updates are meant to be handed to
/// [`RefreshController::deliver_batch`](super::RefreshController::deliver_batch)
/// together, so that one combined readiness signal triggers one rebuild.
pub async fn fetch_all(sources: &[Arc<dyn RecordSource>]) -> FetchOutcome {
    let handles: Vec<_> = sources
        .iter()
        .map(|source| {
            let source = Arc::clone(source);
            let kind = source.kind();
            (kind, tokio::spawn(async move { source.fetch().await }))
        })
        .collect();

    let mut outcome = FetchOutcome::default();
    for (kind, handle) in handles {
        match handle.await {
            Ok(Ok(update)) => outcome.updates.push(update),
            Ok(Err(err)) => {
                warn!(%kind, error = %err, "record fetch failed");
                outcome.failures.push(err);
            }
            Err(join_err) => {
                warn!(%kind, error = %join_err, "record fetch task aborted");
                outcome.failures.push(ParalinkError::Source {
                    kind,
                    message: join_err.to_string(),
                });
            }
        }
    }
    outcome
}
