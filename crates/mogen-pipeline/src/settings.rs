//! Tuning knobs for one pipeline run.

use crate::error::PipelineError;
use mogen_core::config::{
    Config, DEFAULT_BATCH_SIZE, DEFAULT_INSERT_TIMEOUT_SECS, DEFAULT_MONITOR_INTERVAL_MS,
    DEFAULT_QUEUE_CAPACITY, DEFAULT_WORKERS,
};
use std::time::Duration;

/// Pipeline settings. Read-only once the pipeline starts.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSettings {
    /// Records per batch (and per bulk write)
    pub batch_size: usize,
    /// Number of concurrent bulk-insert workers
    pub workers: usize,
    /// Maximum number of batches buffered between producer and workers
    pub queue_capacity: usize,
    /// Timeout for each bulk write
    pub insert_timeout: Duration,
    /// Interval of the queue-depth debug log; `None` disables it
    pub monitor_interval: Option<Duration>,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            workers: DEFAULT_WORKERS,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            insert_timeout: Duration::from_secs(DEFAULT_INSERT_TIMEOUT_SECS),
            monitor_interval: Some(Duration::from_millis(DEFAULT_MONITOR_INTERVAL_MS)),
        }
    }
}

impl From<&Config> for PipelineSettings {
    fn from(config: &Config) -> Self {
        Self {
            batch_size: config.batch_size,
            workers: config.workers,
            queue_capacity: config.queue_capacity,
            insert_timeout: Duration::from_secs(config.insert_timeout_secs),
            monitor_interval: (config.monitor_interval_ms > 0)
                .then(|| Duration::from_millis(config.monitor_interval_ms)),
        }
    }
}

impl PipelineSettings {
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_queue_capacity(mut self, queue_capacity: usize) -> Self {
        self.queue_capacity = queue_capacity;
        self
    }

    pub fn with_insert_timeout(mut self, insert_timeout: Duration) -> Self {
        self.insert_timeout = insert_timeout;
        self
    }

    pub fn with_monitor_interval(mut self, monitor_interval: Option<Duration>) -> Self {
        self.monitor_interval = monitor_interval;
        self
    }

    /// Check that every setting is usable.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.batch_size == 0 {
            return Err(PipelineError::InvalidSettings(
                "batch size must be greater than 0".to_string(),
            ));
        }
        if self.workers == 0 {
            return Err(PipelineError::InvalidSettings(
                "worker count must be at least 1".to_string(),
            ));
        }
        if self.queue_capacity == 0 {
            return Err(PipelineError::InvalidSettings(
                "queue capacity must be at least 1".to_string(),
            ));
        }
        if self.insert_timeout.is_zero() {
            return Err(PipelineError::InvalidSettings(
                "insert timeout must be greater than 0".to_string(),
            ));
        }
        if self.monitor_interval.is_some_and(|i| i.is_zero()) {
            return Err(PipelineError::InvalidSettings(
                "monitor interval must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let config = Config {
            batch_size: 10,
            workers: 2,
            queue_capacity: 4,
            insert_timeout_secs: 7,
            monitor_interval_ms: 0,
            ..Config::default()
        };

        let settings = PipelineSettings::from(&config);

        assert_eq!(settings.batch_size, 10);
        assert_eq!(settings.workers, 2);
        assert_eq!(settings.queue_capacity, 4);
        assert_eq!(settings.insert_timeout, Duration::from_secs(7));
        assert_eq!(settings.monitor_interval, None);
    }

    #[test]
    fn test_defaults_match_config_defaults() {
        assert_eq!(
            PipelineSettings::from(&Config::default()),
            PipelineSettings::default()
        );
    }

    #[test]
    fn test_validate() {
        assert!(PipelineSettings::default().validate().is_ok());
        assert!(PipelineSettings::default().with_batch_size(0).validate().is_err());
        assert!(PipelineSettings::default().with_workers(0).validate().is_err());
        assert!(PipelineSettings::default().with_queue_capacity(0).validate().is_err());
        assert!(PipelineSettings::default()
            .with_insert_timeout(Duration::ZERO)
            .validate()
            .is_err());
        assert!(PipelineSettings::default()
            .with_monitor_interval(Some(Duration::ZERO))
            .validate()
            .is_err());
    }
}
