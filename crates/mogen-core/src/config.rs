//! Configuration document for a mogen run.
//!
//! The configuration is a YAML document with camelCase keys. Every key is
//! optional; missing keys fall back to the defaults below, and an empty
//! document yields [`Config::default`].
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

use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: &str = "27017";
pub const DEFAULT_DB_NAME: &str = "mogen";
pub const DEFAULT_COLLECTION_NAME: &str = "mogenDocuments";
pub const DEFAULT_N_ROWS: u64 = 20_000;
pub const DEFAULT_BATCH_SIZE: usize = 10_000;
pub const DEFAULT_WORKERS: usize = 5;
pub const DEFAULT_QUEUE_CAPACITY: usize = 30;
pub const DEFAULT_INSERT_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_MAX_POOL_SIZE: u32 = 30;
pub const DEFAULT_MONITOR_INTERVAL_MS: u64 = 100;

/// Error type for loading a configuration document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Top-level configuration for a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Store host name
    pub host: String,

    /// Store port. Accepts either a YAML string or an integer.
    #[serde(deserialize_with = "deserialize_port")]
    pub port: String,

    /// Target database name
    pub db_name: String,

    /// Target collection name
    pub collection_name: String,

    /// Total number of records to generate
    pub n_rows: u64,

    /// Records per bulk write
    pub batch_size: usize,

    /// Number of concurrent bulk-insert workers
    pub workers: usize,

    /// Maximum number of batches waiting between generation and insertion
    pub queue_capacity: usize,

    /// Timeout applied to each bulk write, in seconds
    pub insert_timeout_secs: u64,

    /// Maximum size of the store connection pool
    pub max_pool_size: u32,

    /// Connect with TLS (certificate verification disabled)
    pub tls: bool,

    /// Optional RNG seed; the same seed and fields reproduce the same data
    pub seed: Option<u64>,

    /// Interval of the queue-depth debug log, in milliseconds. 0 disables it.
    pub monitor_interval_ms: u64,

    /// Ordered field definitions
    pub fields: Vec<FieldConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT.to_string(),
            db_name: DEFAULT_DB_NAME.to_string(),
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            n_rows: DEFAULT_N_ROWS,
            batch_size: DEFAULT_BATCH_SIZE,
            workers: DEFAULT_WORKERS,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            insert_timeout_secs: DEFAULT_INSERT_TIMEOUT_SECS,
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
            tls: false,
            seed: None,
            monitor_interval_ms: DEFAULT_MONITOR_INTERVAL_MS,
            fields: Vec::new(),
        }
    }
}

/// A single output field as written in the configuration document.
///
/// The generator name and its `data` map are kept untyped here so that
/// validation can report every problem at once instead of stopping at the
/// first bad field. See [`Config::validate`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FieldConfig {
    /// Generator kind (`name`, `bool`, `int`)
    #[serde(default)]
    pub generator: String,

    /// Output field name
    #[serde(default)]
    pub name: String,

    /// Generator-specific parameters
    #[serde(default)]
    pub data: serde_yaml::Mapping,

    /// Create an ascending index on this field before loading
    #[serde(default)]
    pub index: bool,
}

impl FieldConfig {
    /// Create a field definition without generator data.
    pub fn new(generator: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            generator: generator.into(),
            name: name.into(),
            data: serde_yaml::Mapping::new(),
            index: false,
        }
    }

    /// Add a `data` entry.
    pub fn with_data(mut self, key: &str, value: impl Into<serde_yaml::Value>) -> Self {
        self.data
            .insert(serde_yaml::Value::String(key.to_string()), value.into());
        self
    }

    /// Mark the field as indexed.
    pub fn indexed(mut self) -> Self {
        self.index = true;
        self
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if is_blank_document(yaml) {
            return Ok(Self::default());
        }
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_value(value)?)
    }

    /// Names of the fields flagged with `index: true`, in configured order.
    pub fn index_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.index)
            .map(|f| f.name.as_str())
            .collect()
    }
}

fn is_blank_document(yaml: &str) -> bool {
    yaml.lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#') || line == "---")
}

fn deserialize_port<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Text(String),
        Number(u64),
    }

    Ok(match Port::deserialize(deserializer)? {
        Port::Text(s) => s,
        Port::Number(n) => n.to_string(),
    })
}
