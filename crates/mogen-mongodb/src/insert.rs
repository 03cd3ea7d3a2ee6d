//! Bulk inserts into a MongoDB collection.

use crate::convert::record_to_document;
use async_trait::async_trait;
use bson::Document;
use mogen_core::Batch;
use mogen_pipeline::BatchSink;
use mongodb::Collection;

/// Writes each batch with one `insertMany`.
///
/// The underlying client is pooled and safe to share between workers.
#[derive(Debug, Clone)]
pub struct MongoSink {
    collection: Collection<Document>,
}

impl MongoSink {
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl BatchSink for MongoSink {
    async fn insert_batch(&self, batch: &Batch) -> anyhow::Result<u64> {
        if batch.is_empty() {
            return Ok(0);
        }

        let documents: Vec<Document> = batch.records.iter().map(record_to_document).collect();
        let result = self.collection.insert_many(documents).await?;

        Ok(result.inserted_ids.len() as u64)
    }
}
