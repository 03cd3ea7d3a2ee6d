//! MongoDB store client for mogen.
//!
//! - [`connect`] builds a pooled client from [`StoreSettings`] and pings it
//! - [`create_indexes`] submits all requested ascending indexes in one call
//! - [`MongoSink`] implements [`BatchSink`](mogen_pipeline::BatchSink) with `insertMany`

pub mod connect;
pub mod convert;
pub mod error;
pub mod index;
pub mod insert;

pub use connect::{connect, disconnect, ping, StoreSettings};
pub use convert::{record_to_document, BsonValue};
pub use error::StoreError;
pub use index::{create_indexes, index_models};
pub use insert::MongoSink;
