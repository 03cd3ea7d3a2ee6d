//! MongoDB load integration test.
//!
//! Requires a running MongoDB. Host and port come from `MONGODB_HOST` and
//! `MONGODB_PORT` (default `localhost:27017`). Run with `--ignored`.

use bson::{doc, Document};
use mogen_core::{Config, FieldConfig};
use mogen_generator::{build_generators, RecordGenerator};
use mogen_mongodb::{connect, create_indexes, disconnect, MongoSink, StoreSettings};
use mogen_pipeline::{Pipeline, PipelineSettings};
use std::sync::Arc;

fn test_config() -> Config {
    Config {
        host: std::env::var("MONGODB_HOST").unwrap_or_else(|_| "localhost".to_string()),
        port: std::env::var("MONGODB_PORT").unwrap_or_else(|_| "27017".to_string()),
        db_name: "mogen_test".to_string(),
        collection_name: format!("load_{}", std::process::id()),
        n_rows: 250,
        batch_size: 100,
        workers: 3,
        queue_capacity: 2,
        seed: Some(42),
        fields: vec![
            FieldConfig::new("name", "firstName").indexed(),
            FieldConfig::new("bool", "active").with_data("trueWeight", 100),
            FieldConfig::new("int", "age")
                .with_data("min", 18)
                .with_data("max", 99),
        ],
        ..Config::default()
    }
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_mongodb_load_small_scale() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("mogen_pipeline=debug,mogen_mongodb=debug")
        .try_init()
        .ok();

    let config = test_config();
    let specs = config.validate()?;
    let store = StoreSettings::from(&config);

    let client = connect(&store).await?;
    let collection = client
        .database(&store.db_name)
        .collection::<Document>(&store.collection_name);
    collection.drop().await.ok();

    let created = create_indexes(&collection, &config.index_fields()).await?;
    assert_eq!(created, 1);

    let records = RecordGenerator::new(build_generators(&specs)?, config.seed);
    let sink = Arc::new(MongoSink::new(collection.clone()));
    let report = Pipeline::new(PipelineSettings::from(&config), records, config.n_rows, sink)
        .run()
        .await?;

    assert_eq!(report.batches_written, 3);
    assert_eq!(report.records_written, 250);
    assert_eq!(collection.count_documents(doc! {}).await?, 250);
    assert_eq!(collection.count_documents(doc! { "active": true }).await?, 250);

    collection.drop().await?;
    disconnect(client).await;
    Ok(())
}
