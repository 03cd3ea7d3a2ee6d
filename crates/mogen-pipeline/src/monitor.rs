//! Periodic queue-depth logging, scoped to a pipeline run.

use crate::queue::BatchReceiver;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Log the queue depth every `interval` until `stop` is cancelled.
pub(crate) async fn watch_queue(queue: BatchReceiver, interval: Duration, stop: CancellationToken) {
    let mut ticker = tokio::time::interval(interval);
    loop {
        tokio::select! {
            _ = stop.cancelled() => {
                debug!("Queue monitor stopped");
                return;
            }
            _ = ticker.tick() => {
                debug!("Batch queue status: {}/{}", queue.len(), queue.capacity());
            }
        }
    }
}
