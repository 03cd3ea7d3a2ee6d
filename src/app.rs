//! One mogen run: load config, build generators, connect, index, load.

use crate::error::AppError;
use bson::Document;
use mogen_core::Config;
use mogen_generator::{build_generators, RecordGenerator};
use mogen_mongodb::{connect, create_indexes, disconnect, MongoSink, StoreSettings};
use mogen_pipeline::{BatchSink, DiscardSink, Pipeline, PipelineReport, PipelineSettings};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "./config.yaml";

/// Options for a single run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Path to the YAML config file
    pub config_path: PathBuf,
    /// Generate everything but discard it instead of writing to the store
    pub dry_run: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            dry_run: false,
        }
    }
}

/// Load the config at `options.config_path` and run the whole load.
pub async fn run(options: &RunOptions) -> Result<PipelineReport, AppError> {
    info!("Reading config file {:?}", options.config_path);
    let config = Config::from_file(&options.config_path)?;
    run_with_config(&config, options.dry_run).await
}

/// Run the whole load for an already-parsed config.
///
/// Nothing touches the store until validation and generator construction
/// have succeeded. The store connection is closed on every exit path after
/// it has been opened.
pub async fn run_with_config(config: &Config, dry_run: bool) -> Result<PipelineReport, AppError> {
    let specs = config.validate()?;
    let generators = build_generators(&specs)?;
    info!("Config valid: {} field(s), {} rows", specs.len(), config.n_rows);

    let records = RecordGenerator::new(generators, config.seed);
    let settings = PipelineSettings::from(config);

    if dry_run {
        info!("Dry run: generated batches will be discarded");
        return load(settings, records, config.n_rows, Arc::new(DiscardSink::new())).await;
    }

    let store = StoreSettings::from(config);
    let client = connect(&store).await.map_err(AppError::Connection)?;
    let collection = client
        .database(&store.db_name)
        .collection::<Document>(&store.collection_name);

    let outcome = async {
        create_indexes(&collection, &config.index_fields())
            .await
            .map_err(AppError::Index)?;
        load(settings, records, config.n_rows, Arc::new(MongoSink::new(collection.clone()))).await
    }
    .await;

    disconnect(client).await;
    outcome
}

async fn load<S: BatchSink + 'static>(
    settings: PipelineSettings,
    records: RecordGenerator,
    n_rows: u64,
    sink: Arc<S>,
) -> Result<PipelineReport, AppError> {
    let handle = Pipeline::new(settings, records, n_rows, sink).spawn()?;

    let canceller = handle.canceller();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, stopping after in-flight writes");
            canceller.cancel();
        }
    });

    let outcome = handle.wait().await;
    interrupt.abort();
    Ok(outcome?)
}
