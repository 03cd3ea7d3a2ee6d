//! Bounded FIFO of batches between the producer and the workers.
//!
//! `push_blocking` parks the producer thread while the queue is full, which is
//! what keeps generation from running ahead of insertion: at most `capacity`
//! batches are ever buffered.
//! `pop` waits while the queue is empty and returns `None` once the queue has
//! been closed and fully drained.

use async_channel::{Receiver, Sender};
use mogen_core::Batch;

/// Returned by `push_blocking` when the queue was closed; carries the rejected batch.
#[derive(Debug, thiserror::Error)]
#[error("Batch queue is closed")]
pub struct QueueClosed(pub Batch);

/// Create a bounded batch queue.
///
/// # Panics
///
/// Panics if `capacity` is 0. `PipelineSettings::validate` rejects that first.
pub fn bounded_queue(capacity: usize) -> (BatchSender, BatchReceiver) {
    let (tx, rx) = async_channel::bounded(capacity);
    (BatchSender { inner: tx }, BatchReceiver { inner: rx })
}

/// Producer side of the queue.
#[derive(Debug, Clone)]
pub struct BatchSender {
    inner: Sender<Batch>,
}

impl BatchSender {
    /// Push a batch from a blocking thread, parking it while the queue is full.
    pub fn push_blocking(&self, batch: Batch) -> Result<(), QueueClosed> {
        self.inner
            .send_blocking(batch)
            .map_err(|e| QueueClosed(e.into_inner()))
    }

    /// Close the queue. Batches already queued can still be popped.
    ///
    /// Returns `false` if the queue was already closed.
    pub fn close(&self) -> bool {
        self.inner.close()
    }
}

/// Consumer side of the queue. Clones share the same FIFO; each batch is
/// delivered to exactly one receiver.
#[derive(Debug, Clone)]
pub struct BatchReceiver {
    inner: Receiver<Batch>,
}

impl BatchReceiver {
    /// Pop the next batch, or `None` once the queue is closed and empty.
    pub async fn pop(&self) -> Option<Batch> {
        self.inner.recv().await.ok()
    }

    /// Close the queue from the consumer side.
    ///
    /// Pending and future pushes fail, which unblocks a producer waiting on a
    /// full queue.
    pub fn close(&self) -> bool {
        self.inner.close()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity().unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn batch(sequence: u64) -> Batch {
        Batch::new(sequence, Vec::new())
    }

    #[tokio::test]
    async fn test_fifo_order() {
        let (tx, rx) = bounded_queue(4);
        for i in 0..4 {
            tx.push_blocking(batch(i)).unwrap();
        }
        tx.close();

        let mut order = Vec::new();
        while let Some(b) = rx.pop().await {
            order.push(b.sequence);
        }
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[tokio::test]
    async fn test_push_waits_when_full() {
        let (tx, rx) = bounded_queue(1);
        tx.push_blocking(batch(0)).unwrap();
        assert_eq!(rx.len(), 1);

        let producer = tokio::task::spawn_blocking(move || tx.push_blocking(batch(1)));
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!producer.is_finished(), "push should wait while the queue is full");

        assert_eq!(rx.pop().await.map(|b| b.sequence), Some(0));
        producer.await.unwrap().unwrap();
        assert_eq!(rx.pop().await.map(|b| b.sequence), Some(1));
    }

    #[tokio::test]
    async fn test_pop_drains_after_close() {
        let (tx, rx) = bounded_queue(2);
        tx.push_blocking(batch(0)).unwrap();
        tx.close();

        assert!(rx.pop().await.is_some());
        assert!(rx.pop().await.is_none());
        assert!(matches!(tx.push_blocking(batch(1)), Err(QueueClosed(b)) if b.sequence == 1));
    }

    #[tokio::test]
    async fn test_consumer_close_unblocks_producer() {
        let (tx, rx) = bounded_queue(1);
        tx.push_blocking(batch(0)).unwrap();

        let producer = tokio::task::spawn_blocking(move || tx.push_blocking(batch(1)));
        tokio::time::sleep(Duration::from_millis(10)).await;
        rx.close();

        let result = producer.await.unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_capacity() {
        let (_tx, rx) = bounded_queue(3);
        assert_eq!(rx.capacity(), 3);
        assert!(rx.is_empty());
    }
}
