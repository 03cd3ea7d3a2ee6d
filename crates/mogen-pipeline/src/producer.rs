//! The single batch producer.

use crate::plan::BatchPlan;
use crate::queue::{BatchSender, QueueClosed};
use mogen_core::Batch;
use mogen_generator::RecordGenerator;
use tracing::{debug, warn};

/// What the producer managed to hand to the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProducerSummary {
    pub batches_sent: u64,
    pub records_sent: u64,
    /// The queue was closed by someone else before the last batch
    pub stopped_early: bool,
}

/// Builds every batch of a [`BatchPlan`] and pushes it onto the queue.
pub struct Producer {
    records: RecordGenerator,
    plan: BatchPlan,
    queue: BatchSender,
}

impl Producer {
    pub fn new(records: RecordGenerator, plan: BatchPlan, queue: BatchSender) -> Self {
        Self {
            records,
            plan,
            queue,
        }
    }

    /// Generate and enqueue all batches, then close the queue.
    ///
    /// This blocks the calling thread while the queue is full; run it on a
    /// dedicated thread (`spawn_blocking`). If the queue is closed from the
    /// consumer side, production stops at the next push.
    pub fn run(mut self) -> ProducerSummary {
        let mut summary = ProducerSummary::default();
        let batch_count = self.plan.batch_count();

        for (sequence, size) in self.plan.sizes().enumerate() {
            let records = self.records.records(size as u64).collect();
            let batch = Batch::new(sequence as u64, records);

            if let Err(QueueClosed(rejected)) = self.queue.push_blocking(batch) {
                warn!(
                    "Batch queue closed, stopping producer at batch {}/{}",
                    rejected.sequence, batch_count
                );
                summary.stopped_early = true;
                break;
            }

            summary.batches_sent += 1;
            summary.records_sent += size as u64;
            debug!("Queued batch {}/{} ({} records)", sequence + 1, batch_count, size);
        }

        self.queue.close();
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::bounded_queue;
    use mogen_generator::generators::{BoolGenerator, FieldGenerator};

    fn records() -> RecordGenerator {
        RecordGenerator::new(
            vec![FieldGenerator::Bool(BoolGenerator::new("ok", 50).unwrap())],
            Some(42),
        )
    }

    #[tokio::test]
    async fn test_produces_planned_batches_then_closes() {
        let (tx, rx) = bounded_queue(8);
        let plan = BatchPlan::new(25, 10).unwrap();

        let summary = Producer::new(records(), plan, tx).run();

        assert_eq!(summary.batches_sent, 3);
        assert_eq!(summary.records_sent, 25);
        assert!(!summary.stopped_early);

        let mut sizes = Vec::new();
        while let Some(batch) = rx.pop().await {
            sizes.push((batch.sequence, batch.len()));
        }
        assert_eq!(sizes, vec![(0, 10), (1, 10), (2, 5)]);
    }

    #[tokio::test]
    async fn test_stops_when_queue_closed() {
        let (tx, rx) = bounded_queue(1);
        rx.close();
        let plan = BatchPlan::new(100, 10).unwrap();

        let summary = Producer::new(records(), plan, tx).run();

        assert_eq!(summary.batches_sent, 0);
        assert!(summary.stopped_early);
    }
}
