//! Outcome of a pipeline run.

use std::time::Duration;

/// Counters collected over one pipeline run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineReport {
    /// Number of batches in the plan.
    pub batches_planned: u64,
    /// Number of bulk writes started by workers.
    pub bulk_writes_issued: u64,
    /// Number of bulk writes that succeeded.
    pub batches_written: u64,
    /// Number of records the store acknowledged.
    pub records_written: u64,
    /// Total time taken.
    pub duration: Duration,
}

impl PipelineReport {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.records_written as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Every planned batch was written.
    pub fn is_complete(&self) -> bool {
        self.batches_written == self.batches_planned
    }
}
