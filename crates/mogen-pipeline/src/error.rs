//! Error types for pipeline runs.

use crate::plan::PlanError;
use crate::report::PipelineReport;
use std::time::Duration;
use thiserror::Error;

/// Why a single bulk write failed.
#[derive(Error, Debug)]
pub enum InsertError {
    /// The bulk write did not finish within the per-insert timeout.
    #[error("Bulk write timed out after {0:?}")]
    Timeout(Duration),

    /// The store rejected the bulk write.
    #[error("Bulk write failed: {0:#}")]
    Store(anyhow::Error),
}

/// Errors that end a pipeline run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Settings rejected before anything started.
    #[error("Invalid pipeline settings: {0}")]
    InvalidSettings(String),

    /// Batch planning failed.
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// A bulk write failed and the run was aborted.
    ///
    /// `report` holds what was written before the abort took effect.
    #[error("Batch {sequence} failed on worker {worker}: {source}")]
    Insert {
        sequence: u64,
        worker: usize,
        #[source]
        source: InsertError,
        report: Box<PipelineReport>,
    },

    /// The run was cancelled through its handle.
    #[error(
        "Pipeline cancelled after {} of {} batches",
        .report.batches_written,
        .report.batches_planned
    )]
    Cancelled { report: Box<PipelineReport> },

    /// The producer thread failed.
    #[error("Producer failed: {0}")]
    Producer(String),

    /// A pipeline task panicked or was lost.
    #[error("Pipeline task failed: {0}")]
    Task(String),
}

impl PipelineError {
    /// Progress made before the run ended, when known.
    pub fn report(&self) -> Option<&PipelineReport> {
        match self {
            PipelineError::Insert { report, .. } | PipelineError::Cancelled { report } => {
                Some(report)
            }
            _ => None,
        }
    }
}
