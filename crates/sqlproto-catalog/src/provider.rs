//! Provider trait for fetching catalog column metadata

use sqlproto_core::ColumnDescriptor;

/// Errors that can occur while retrieving catalog metadata
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Catalog query failed: {0}")]
    Query(String),

    #[error("Malformed catalog row: {0}")]
    InvalidRow(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Trait for databases that can supply column metadata for a schema
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Provider name (e.g. "MySQL")
    fn name(&self) -> &'static str;

    /// Fetch all column descriptors for the named schema, ordered by
    /// table name and then ordinal position. That ordering is a
    /// precondition of the translation engine, so providers must request
    /// it from the catalog rather than relying on server defaults.
    async fn fetch_columns(&self, schema: &str) -> Result<Vec<ColumnDescriptor>, CatalogError>;

    /// Validate the connection before attempting a fetch
    async fn test_connection(&self) -> Result<(), CatalogError>;
}
