//! MongoDB-backed status source.

use async_trait::async_trait;
use bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use relay_models::ServiceStatus;
use tracing::{debug, info};

use crate::config::{StoreConfig, DEFAULT_DATABASE};
use crate::document::StatusDocument;
use crate::error::{Result, StoreError};
use crate::source::StatusSource;

/// Reads the status document from a MongoDB collection.
///
/// Creating the store does not contact the server; the driver connects
/// lazily on the first operation.
#[derive(Clone)]
pub struct MongoStatusStore {
    database: Database,
    collection: Collection<StatusDocument>,
}

impl MongoStatusStore {
    /// Parse the connection string and create a client.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        if config.uri.trim().is_empty() {
            return Err(StoreError::InvalidConfig("connection string is empty".into()));
        }

        let mut options = ClientOptions::parse(&config.uri).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.server_selection_timeout = Some(config.server_selection_timeout);

        let client = Client::with_options(options)?;
        let database = match &config.database {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
        };
        let collection = database.collection::<StatusDocument>(&config.collection);

        info!(
            database = %database.name(),
            collection = %config.collection,
            "status store configured"
        );

        Ok(Self {
            database,
            collection,
        })
    }

    /// Name of the database being read.
    pub fn database_name(&self) -> &str {
        self.database.name()
    }
}

#[async_trait]
impl StatusSource for MongoStatusStore {
    async fn fetch_status(&self) -> Result<Option<ServiceStatus>> {
        let document = self.collection.find_one(doc! {}).await?;
        debug!(found = document.is_some(), "fetched status document");
        Ok(document.map(ServiceStatus::from))
    }

    async fn ping(&self) -> Result<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
