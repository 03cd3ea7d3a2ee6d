//! Bulk-insert workers.

use crate::error::InsertError;
use crate::queue::BatchReceiver;
use crate::sink::BatchSink;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

/// Counters shared by all workers of one run.
#[derive(Debug, Default)]
pub(crate) struct WorkerCounters {
    pub bulk_writes_issued: AtomicU64,
    pub batches_written: AtomicU64,
    pub records_written: AtomicU64,
}

/// A failed bulk write, reported by the worker that issued it.
#[derive(Debug)]
pub(crate) struct WorkerFailure {
    pub worker: usize,
    pub sequence: u64,
    pub error: InsertError,
}

/// One consumer of the batch queue.
pub(crate) struct Worker<S: BatchSink + ?Sized> {
    pub id: usize,
    pub queue: BatchReceiver,
    pub sink: Arc<S>,
    pub insert_timeout: Duration,
    pub cancel: CancellationToken,
    pub counters: Arc<WorkerCounters>,
}

impl<S: BatchSink + ?Sized> Worker<S> {
    /// Pop and write batches until the queue is drained or the run is cancelled.
    ///
    /// A failed or timed-out write cancels the run and closes the queue before
    /// returning, so the producer and the other workers stop too.
    pub async fn run(self) -> Result<(), WorkerFailure> {
        debug!("Worker {} started", self.id);
        loop {
            let batch = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    debug!("Worker {} cancelled", self.id);
                    break;
                }
                batch = self.queue.pop() => match batch {
                    Some(batch) => batch,
                    None => break,
                },
            };

            self.counters
                .bulk_writes_issued
                .fetch_add(1, Ordering::Relaxed);

            let write = tokio::time::timeout(self.insert_timeout, self.sink.insert_batch(&batch));
            match write.await {
                Ok(Ok(inserted)) => {
                    self.counters.batches_written.fetch_add(1, Ordering::Relaxed);
                    self.counters
                        .records_written
                        .fetch_add(inserted, Ordering::Relaxed);
                    debug!(
                        "Worker {}: insert successful for batch {} ({} records)",
                        self.id, batch.sequence, inserted
                    );
                }
                Ok(Err(e)) => return Err(self.fail(batch.sequence, InsertError::Store(e))),
                Err(_) => {
                    return Err(self.fail(batch.sequence, InsertError::Timeout(self.insert_timeout)))
                }
            }
        }
        debug!("Worker {} finished", self.id);
        Ok(())
    }

    fn fail(&self, sequence: u64, error: InsertError) -> WorkerFailure {
        error!("Worker {}: batch {} failed: {}", self.id, sequence, error);
        self.cancel.cancel();
        self.queue.close();
        WorkerFailure {
            worker: self.id,
            sequence,
            error,
        }
    }
}
