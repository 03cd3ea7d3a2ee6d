//! Pipeline assembly and the completion coordinator.
//!
//! ```text
//!                      ┌──────────────┐
//!  RecordGenerator ──▶ │   Producer   │  (one blocking thread)
//!                      └──────┬───────┘
//!                             │ push (waits when full)
//!                      ┌──────▼───────┐
//!                      │ BatchQueue(Q)│ ◀── queue monitor (debug log)
//!                      └──────┬───────┘
//!                             │ pop
//!              ┌──────────────┼──────────────┐
//!         ┌────▼────┐    ┌────▼────┐    ┌────▼────┐
//!         │Worker 0 │    │Worker 1 │ .. │Worker W │ ──▶ BatchSink
//!         └────┬────┘    └────┬────┘    └────┬────┘
//!              └──────────────┼──────────────┘
//!                      ┌──────▼───────┐
//!                      │ Coordinator  │ ──▶ done (oneshot)
//!                      └──────────────┘
//! ```

use crate::error::PipelineError;
use crate::monitor::watch_queue;
use crate::plan::BatchPlan;
use crate::producer::{Producer, ProducerSummary};
use crate::queue::{bounded_queue, BatchReceiver};
use crate::report::PipelineReport;
use crate::settings::PipelineSettings;
use crate::sink::BatchSink;
use crate::worker::{Worker, WorkerCounters, WorkerFailure};
use mogen_generator::RecordGenerator;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::oneshot;
use tokio::task::{JoinHandle, JoinSet};
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, info, warn};

/// One configured run: what to generate, how much, and where to write it.
pub struct Pipeline<S: BatchSink + ?Sized + 'static> {
    settings: PipelineSettings,
    records: RecordGenerator,
    total_rows: u64,
    sink: Arc<S>,
}

impl<S: BatchSink + ?Sized + 'static> Pipeline<S> {
    pub fn new(
        settings: PipelineSettings,
        records: RecordGenerator,
        total_rows: u64,
        sink: Arc<S>,
    ) -> Self {
        Self {
            settings,
            records,
            total_rows,
            sink,
        }
    }

    /// Start the producer, the workers and the coordinator.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn(self) -> Result<PipelineHandle, PipelineError> {
        self.settings.validate()?;
        let plan = BatchPlan::new(self.total_rows, self.settings.batch_size)?;

        info!(
            "Generating {} records in {} batches of up to {} ({} workers, queue capacity {})",
            plan.total_rows(),
            plan.batch_count(),
            plan.batch_size(),
            self.settings.workers,
            self.settings.queue_capacity
        );

        let started = Instant::now();
        let (tx, rx) = bounded_queue(self.settings.queue_capacity);
        let cancel = CancellationToken::new();
        let counters = Arc::new(WorkerCounters::default());

        let producer = Producer::new(self.records, plan, tx);
        let producer = tokio::task::spawn_blocking(move || producer.run());

        let mut workers = JoinSet::new();
        for id in 0..self.settings.workers {
            let worker = Worker {
                id,
                queue: rx.clone(),
                sink: Arc::clone(&self.sink),
                insert_timeout: self.settings.insert_timeout,
                cancel: cancel.clone(),
                counters: Arc::clone(&counters),
            };
            workers.spawn(worker.run());
        }

        let monitor_stop = cancel.child_token();
        let monitor = self
            .settings
            .monitor_interval
            .map(|interval| tokio::spawn(watch_queue(rx.clone(), interval, monitor_stop.clone())));

        let (done_tx, done_rx) = oneshot::channel();
        let coordinator = CompletionCoordinator {
            plan,
            started,
            queue: rx.clone(),
            cancel: cancel.clone(),
            counters,
            workers,
            producer,
            monitor,
            monitor_stop,
        };
        tokio::spawn(async move {
            let outcome = coordinator.run().await;
            // The caller may have dropped its handle; nobody left to notify.
            let _ = done_tx.send(outcome);
        });

        Ok(PipelineHandle {
            done: done_rx,
            cancel_on_drop: cancel.clone().drop_guard(),
            canceller: Canceller { cancel, queue: rx },
        })
    }

    /// Run the pipeline to completion.
    pub async fn run(self) -> Result<PipelineReport, PipelineError> {
        self.spawn()?.wait().await
    }
}

/// Caller's side of a running pipeline.
///
/// Dropping the handle before [`wait`](Self::wait) returns cancels the run.
pub struct PipelineHandle {
    done: oneshot::Receiver<Result<PipelineReport, PipelineError>>,
    canceller: Canceller,
    cancel_on_drop: DropGuard,
}

impl PipelineHandle {
    /// Wait for the done signal.
    ///
    /// It fires once, after every worker has exited and the producer and
    /// monitor have been joined. Dropping this future before then cancels
    /// the run.
    pub async fn wait(self) -> Result<PipelineReport, PipelineError> {
        let outcome = self.done.await;
        let _ = self.cancel_on_drop.disarm();
        outcome.map_err(|_| {
            PipelineError::Task("completion coordinator exited without reporting".to_string())
        })?
    }

    /// Stop the run. See [`Canceller::cancel`].
    pub fn cancel(&self) {
        self.canceller.cancel();
    }

    /// A cloneable handle that can stop the run from another task.
    pub fn canceller(&self) -> Canceller {
        self.canceller.clone()
    }
}

/// Stops a running pipeline.
#[derive(Debug, Clone)]
pub struct Canceller {
    cancel: CancellationToken,
    queue: BatchReceiver,
}

impl Canceller {
    /// No new batches are generated or popped. Writes already in flight
    /// finish before the done signal fires.
    pub fn cancel(&self) {
        self.cancel.cancel();
        self.queue.close();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Joins every task of a run and turns the result into one outcome.
struct CompletionCoordinator {
    plan: BatchPlan,
    started: Instant,
    queue: BatchReceiver,
    cancel: CancellationToken,
    counters: Arc<WorkerCounters>,
    workers: JoinSet<Result<(), WorkerFailure>>,
    producer: JoinHandle<ProducerSummary>,
    monitor: Option<JoinHandle<()>>,
    monitor_stop: CancellationToken,
}

impl CompletionCoordinator {
    async fn run(self) -> Result<PipelineReport, PipelineError> {
        let CompletionCoordinator {
            plan,
            started,
            queue,
            cancel,
            counters,
            mut workers,
            producer,
            monitor,
            monitor_stop,
        } = self;

        let mut failure: Option<WorkerFailure> = None;
        let mut task_error: Option<String> = None;

        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok(Ok(())) => {}
                Ok(Err(f)) if failure.is_none() => failure = Some(f),
                Ok(Err(f)) => warn!(
                    "Worker {}: batch {} also failed: {}",
                    f.worker, f.sequence, f.error
                ),
                Err(e) => {
                    // A lost worker must not leave the producer parked on a full queue.
                    cancel.cancel();
                    queue.close();
                    task_error.get_or_insert_with(|| format!("worker task: {e}"));
                }
            }
        }

        // No consumers remain; release a producer parked on a full queue.
        queue.close();

        monitor_stop.cancel();
        if let Some(monitor) = monitor {
            if let Err(e) = monitor.await {
                warn!("Queue monitor task failed: {}", e);
            }
        }

        let producer = producer
            .await
            .map_err(|e| PipelineError::Producer(e.to_string()))?;
        debug!(
            "Producer queued {} batches ({} records)",
            producer.batches_sent, producer.records_sent
        );

        let report = PipelineReport {
            batches_planned: plan.batch_count(),
            bulk_writes_issued: counters.bulk_writes_issued.load(Ordering::Relaxed),
            batches_written: counters.batches_written.load(Ordering::Relaxed),
            records_written: counters.records_written.load(Ordering::Relaxed),
            duration: started.elapsed(),
        };

        if let Some(f) = failure {
            return Err(PipelineError::Insert {
                sequence: f.sequence,
                worker: f.worker,
                source: f.error,
                report: Box::new(report),
            });
        }
        if let Some(msg) = task_error {
            return Err(PipelineError::Task(msg));
        }
        if producer.stopped_early || (cancel.is_cancelled() && !report.is_complete()) {
            warn!(
                "Pipeline cancelled: {}/{} batches written",
                report.batches_written, report.batches_planned
            );
            return Err(PipelineError::Cancelled {
                report: Box::new(report),
            });
        }

        info!(
            "Data pump complete: {} records in {:?} ({:.2} docs/sec)",
            report.records_written,
            report.duration,
            report.rows_per_second()
        );
        Ok(report)
    }
}
