//! Command-line interface for mogen
//!
//! # Usage Examples
//!
//! ```bash
//! # Load using ./config.yaml
//! mogen
//!
//! # Use another config file
//! mogen --config loadtest.yaml
//!
//! # Validate and generate without writing to MongoDB
//! RUST_LOG=debug mogen --dry-run
//! ```

use clap::Parser;
use mogen::{AppError, RunOptions, DEFAULT_CONFIG_PATH};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mogen")]
#[command(about = "Generate fake documents and bulk-load them into MongoDB")]
#[command(long_about = None)]
struct Cli {
    /// Path to the YAML config file
    #[arg(long, short = 'c', default_value = DEFAULT_CONFIG_PATH, env = "MOGEN_CONFIG")]
    config: PathBuf,

    /// Validate the config and generate all batches without writing them
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let options = RunOptions {
        config_path: cli.config,
        dry_run: cli.dry_run,
    };

    info!("Initializing");
    match mogen::run(&options).await {
        Ok(report) => {
            info!(
                "Data pump completed successfully: {} documents in {} batches ({:.2} docs/sec)",
                report.records_written,
                report.batches_written,
                report.rows_per_second()
            );
        }
        Err(e) => {
            log_error(&e);
            std::process::exit(e.exit_code());
        }
    }
}

fn log_error(err: &AppError) {
    match err {
        AppError::Validation(errors) => {
            error!("Config validation error");
            for (i, e) in errors.errors().iter().enumerate() {
                error!("Error {}: {}", i, e);
            }
        }
        AppError::Pipeline(e) => {
            error!("Load failed: {}", e);
            if let Some(report) = e.report() {
                error!(
                    "{} of {} batches written ({} documents) before the load stopped",
                    report.batches_written, report.batches_planned, report.records_written
                );
            }
        }
        other => error!("{} error: {}", other.kind(), other),
    }
}
