//! Error types for the MongoDB store.

use thiserror::Error;

/// Errors that can occur while talking to MongoDB.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Building the client or the initial ping failed.
    #[error("Failed to connect to MongoDB at {uri}: {source}")]
    Connection {
        uri: String,
        #[source]
        source: mongodb::error::Error,
    },

    /// Index creation failed.
    #[error("Failed to create indexes on '{collection}': {source}")]
    Index {
        collection: String,
        #[source]
        source: mongodb::error::Error,
    },

    /// Any other MongoDB error.
    #[error("MongoDB error: {0}")]
    MongoDB(#[from] mongodb::error::Error),
}
