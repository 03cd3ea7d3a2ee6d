//! Destination for generated batches.

use async_trait::async_trait;
use mogen_core::Batch;
use std::sync::atomic::{AtomicU64, Ordering};

/// A store that accepts one bulk write per batch.
///
/// Implementations are shared by every worker and called concurrently, so
/// they must be safe for concurrent use. Ordering between calls is not
/// guaranteed.
#[async_trait]
pub trait BatchSink: Send + Sync {
    /// Write every record of `batch` in one round trip.
    ///
    /// Returns the number of records the store acknowledged.
    async fn insert_batch(&self, batch: &Batch) -> anyhow::Result<u64>;
}

/// Sink that counts batches and drops them. Used for dry runs.
#[derive(Debug, Default)]
pub struct DiscardSink {
    batches: AtomicU64,
    records: AtomicU64,
}

impl DiscardSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn batches(&self) -> u64 {
        self.batches.load(Ordering::Relaxed)
    }

    pub fn records(&self) -> u64 {
        self.records.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl BatchSink for DiscardSink {
    async fn insert_batch(&self, batch: &Batch) -> anyhow::Result<u64> {
        self.batches.fetch_add(1, Ordering::Relaxed);
        self.records.fetch_add(batch.len() as u64, Ordering::Relaxed);
        Ok(batch.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mogen_core::Record;

    #[tokio::test]
    async fn test_discard_sink_counts() {
        let sink = DiscardSink::new();
        let batch = Batch::new(0, vec![Record::new(), Record::new()]);

        assert_eq!(sink.insert_batch(&batch).await.unwrap(), 2);
        assert_eq!(sink.insert_batch(&batch).await.unwrap(), 2);

        assert_eq!(sink.batches(), 2);
        assert_eq!(sink.records(), 4);
    }
}
