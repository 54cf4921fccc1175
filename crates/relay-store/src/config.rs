//! Store configuration.

use std::time::Duration;

/// Collection written by the external status service.
pub const DEFAULT_COLLECTION: &str = "servicestatuses";

/// Database used when neither the config nor the URI names one.
pub const DEFAULT_DATABASE: &str = "test";

/// Connection settings for the status store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Connection string.
    pub uri: String,
    /// Database name; falls back to the URI's default database.
    pub database: Option<String>,
    /// Collection holding the status document.
    pub collection: String,
    /// How long a single operation waits for a usable server.
    pub server_selection_timeout: Duration,
}

impl StoreConfig {
    /// Creates a config for the given connection string with default names.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: None,
            collection: DEFAULT_COLLECTION.to_string(),
            server_selection_timeout: Duration::from_secs(5),
        }
    }

    /// Sets the database name.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Sets the collection name.
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Sets the server selection timeout.
    pub fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_config_defaults() {
        let config = StoreConfig::new("mongodb://localhost:27017");
        assert_eq!(config.uri, "mongodb://localhost:27017");
        assert!(config.database.is_none());
        assert_eq!(config.collection, "servicestatuses");
        assert_eq!(config.server_selection_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_store_config_builder() {
        let config = StoreConfig::new("mongodb://db")
            .with_database("status")
            .with_collection("statuses")
            .with_server_selection_timeout(Duration::from_secs(2));
        assert_eq!(config.database.as_deref(), Some("status"));
        assert_eq!(config.collection, "statuses");
        assert_eq!(config.server_selection_timeout, Duration::from_secs(2));
    }
}
