//! Batch generation and bulk-loading pipeline.
//!
//! A single producer turns a [`RecordGenerator`](mogen_generator::RecordGenerator)
//! and a row count into batches and pushes them onto a bounded queue. A fixed
//! pool of workers pops batches and issues one bulk write per batch to a
//! [`BatchSink`]. A coordinator waits for every worker to exit and then fires
//! a single done notification carrying the [`PipelineReport`].
//!
//! # Failure semantics
//!
//! The first failed or timed-out bulk write aborts the run. The failing worker
//! cancels the run and closes the queue, the producer stops at its next push,
//! the other workers finish the write they have in flight and exit, and the
//! done notification carries [`PipelineError::Insert`] with the partial
//! report. Nothing is retried.
//!
//! Dropping the [`PipelineHandle`] before the run finishes cancels it the same
//! way [`Canceller::cancel`] does: in-flight writes finish, then every task exits.
//!
//! # Example
//!
//! ```rust,no_run
//! use mogen_generator::RecordGenerator;
//! use mogen_pipeline::{DiscardSink, Pipeline, PipelineSettings};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), mogen_pipeline::PipelineError> {
//! let records = RecordGenerator::new(Vec::new(), Some(42));
//! let settings = PipelineSettings::default().with_batch_size(100);
//! let report = Pipeline::new(settings, records, 1_000, Arc::new(DiscardSink::new()))
//!     .run()
//!     .await?;
//! assert_eq!(report.batches_written, 10);
//! # Ok(())
//! # }
//! ```

pub mod error;
mod monitor;
pub mod pipeline;
pub mod plan;
pub mod producer;
pub mod queue;
pub mod report;
pub mod settings;
pub mod sink;
mod worker;

pub use error::{InsertError, PipelineError};
pub use pipeline::{Canceller, Pipeline, PipelineHandle};
pub use plan::{BatchPlan, PlanError};
pub use producer::{Producer, ProducerSummary};
pub use queue::{bounded_queue, BatchReceiver, BatchSender, QueueClosed};
pub use report::PipelineReport;
pub use settings::PipelineSettings;
pub use sink::{BatchSink, DiscardSink};
