//! Building and verifying the MongoDB connection.

use crate::error::StoreError;
use bson::doc;
use mogen_core::Config;
use mongodb::options::{ClientOptions, Tls, TlsOptions};
use mongodb::Client;
use std::time::Duration;
use tracing::{debug, info};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

/// Where to connect and which collection to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    pub host: String,
    pub port: String,
    pub db_name: String,
    pub collection_name: String,
    pub max_pool_size: u32,
    /// Enable TLS without certificate verification
    pub tls: bool,
}

impl From<&Config> for StoreSettings {
    fn from(config: &Config) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port.clone(),
            db_name: config.db_name.clone(),
            collection_name: config.collection_name.clone(),
            max_pool_size: config.max_pool_size,
            tls: config.tls,
        }
    }
}

impl StoreSettings {
    /// Build the connection string, e.g. `mongodb://localhost:27017/mogen`.
    pub fn connection_uri(&self) -> String {
        let mut uri = format!("mongodb://{}:{}/{}", self.host, self.port, self.db_name);
        if self.tls {
            uri.push_str("?tls=true");
        }
        uri
    }
}

/// Connect to MongoDB and verify the server answers a ping.
pub async fn connect(settings: &StoreSettings) -> Result<Client, StoreError> {
    let uri = settings.connection_uri();
    info!("Connecting to MongoDB at {}", uri);

    let connection_error = |source| StoreError::Connection {
        uri: uri.clone(),
        source,
    };

    let mut options = ClientOptions::parse(&uri).await.map_err(connection_error)?;
    options.max_pool_size = Some(settings.max_pool_size);
    options.direct_connection = Some(true);
    options.connect_timeout = Some(CONNECT_TIMEOUT);
    options.server_selection_timeout = Some(CONNECT_TIMEOUT);
    if settings.tls {
        options.tls = Some(Tls::Enabled(
            TlsOptions::builder()
                .allow_invalid_certificates(true)
                .build(),
        ));
    }

    let client = Client::with_options(options).map_err(connection_error)?;
    ping(&client, &settings.db_name)
        .await
        .map_err(connection_error)?;

    debug!("MongoDB ping successful");
    Ok(client)
}

/// Run the `ping` command against `db_name`.
pub async fn ping(client: &Client, db_name: &str) -> Result<(), mongodb::error::Error> {
    client
        .database(db_name)
        .run_command(doc! { "ping": 1 })
        .await?;
    Ok(())
}

/// Close every pooled connection.
pub async fn disconnect(client: Client) {
    client.shutdown().await;
    info!("Disconnected from MongoDB");
}
