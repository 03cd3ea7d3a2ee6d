//! Top-level error classification.

use mogen_core::{ConfigError, ValidationErrors};
use mogen_generator::GeneratorError;
use mogen_mongodb::StoreError;
use mogen_pipeline::PipelineError;
use thiserror::Error;

/// Every way a run can fail, grouped by the stage that failed.
#[derive(Error, Debug)]
pub enum AppError {
    /// The config file could not be read or parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The config parsed but failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// A generator could not be built from a validated field.
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    /// Connecting to or pinging the store failed.
    #[error(transparent)]
    Connection(StoreError),

    /// Creating indexes failed before loading started.
    #[error(transparent)]
    Index(StoreError),

    /// The load itself failed or was cancelled.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl AppError {
    /// Short stage name for log output.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config",
            AppError::Validation(_) => "validation",
            AppError::Generator(_) => "generator",
            AppError::Connection(_) => "connection",
            AppError::Index(_) => "index",
            AppError::Pipeline(_) => "pipeline",
        }
    }

    /// Process exit code: 2 for configuration problems, 3 for store setup,
    /// 4 for failures during the load.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) | AppError::Validation(_) | AppError::Generator(_) => 2,
            AppError::Connection(_) | AppError::Index(_) => 3,
            AppError::Pipeline(_) => 4,
        }
    }
}
