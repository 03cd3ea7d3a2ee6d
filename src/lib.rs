//! mogen
//!
//! Generates configurable volumes of fake documents and bulk-loads them into
//! MongoDB.
//!
//! # Workspace crates
//!
//! - `mogen_core` - Config document, validation, records and batches
//! - `mogen_generator` - Field generators and record assembly
//! - `mogen_pipeline` - Bounded queue, producer, worker pool, completion signal
//! - `mogen_mongodb` - Connection, index creation and the `insertMany` sink
//!
//! # Config
//!
//! ```yaml
//! host: localhost
//! port: "27017"
//! dbName: mogen
//! collectionName: mogenDocuments
//! nRows: 20000
//! fields:
//!   - generator: name
//!     name: firstName
//!     index: true
//!   - generator: bool
//!     name: active
//!     data:
//!       trueWeight: 80
//! ```

pub mod app;
pub mod error;

pub use app::{run, run_with_config, RunOptions, DEFAULT_CONFIG_PATH};
pub use error::AppError;
