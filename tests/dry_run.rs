//! End-to-end runs of the binary's library entry point without a database.

use mogen::{run, run_with_config, AppError, RunOptions};
use mogen_core::{Config, FieldConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn test_dry_run_from_file() {
    let file = write_config(
        r#"
nRows: 25
batchSize: 10
workers: 2
queueCapacity: 1
seed: 7
fields:
  - generator: name
    name: firstName
    index: true
  - generator: bool
    name: active
    data:
      trueWeight: 50
"#,
    );

    let options = RunOptions {
        config_path: file.path().to_path_buf(),
        dry_run: true,
    };
    let report = run(&options).await.unwrap();

    assert_eq!(report.batches_planned, 3);
    assert_eq!(report.batches_written, 3);
    assert_eq!(report.records_written, 25);
    assert!(report.is_complete());
}

#[tokio::test]
async fn test_missing_config_file_is_config_error() {
    let options = RunOptions {
        config_path: "/nonexistent/mogen/config.yaml".into(),
        dry_run: true,
    };

    let err = run(&options).await.unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_malformed_yaml_is_config_error() {
    let file = write_config("fields: [unterminated");
    let options = RunOptions {
        config_path: file.path().to_path_buf(),
        dry_run: true,
    };

    let err = run(&options).await.unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[tokio::test]
async fn test_all_validation_errors_reported() {
    let config = Config {
        fields: vec![
            FieldConfig::new("bogus", "a"),
            FieldConfig::new("bool", "b"),
        ],
        ..Config::default()
    };

    // Validation fails before any connection attempt, even without dry run.
    match run_with_config(&config, false).await {
        Err(AppError::Validation(errors)) => assert_eq!(errors.len(), 2),
        other => panic!("expected validation errors, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_options_is_generator_error() {
    let config = Config {
        fields: vec![FieldConfig::new("name", "who").with_data("options", Vec::<String>::new())],
        ..Config::default()
    };

    let err = run_with_config(&config, true).await.unwrap_err();
    assert_eq!(err.kind(), "generator");
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_default_config_dry_run_generates_defaults() {
    let config = Config {
        n_rows: 1_000,
        batch_size: 300,
        fields: vec![FieldConfig::new("int", "n").with_data("min", 0).with_data("max", 10)],
        ..Config::default()
    };

    let report = run_with_config(&config, true).await.unwrap();
    assert_eq!(report.batches_planned, 4);
    assert_eq!(report.records_written, 1_000);
}
