//! Coalescing refresh loop

use super::{RefreshController, SourceUpdate};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

/// Apply queued source updates to `controller`, one rebuild per burst
///
/// After each received update the loop yields once, then drains everything
/// already queued before rebuilding, so updates sent in the same tick share a
/// single rebuild. Returns the number of rebuilds once the channel closes.
pub async fn run_refresh_loop(
    controller: Arc<RefreshController>,
    mut updates: mpsc::Receiver<SourceUpdate>,
) -> usize {
    let mut rebuilds = 0;
    while let Some(first) = updates.recv().await {
        tokio::task::yield_now().await;

        let mut batch = vec![first];
        while let Ok(next) = updates.try_recv() {
            batch.push(next);
        }

        debug!(updates = batch.len(), "coalescing source updates");
        if controller.deliver_batch(batch).is_some() {
            rebuilds += 1;
        }
    }
    rebuilds
}
