//! Mock catalog provider for testing
//!
//! Returns a predefined column list without connecting to any database.
//! Useful for unit testing the translation pipeline, CI runs without
//! credentials, and simulating retrieval failures.

use crate::provider::{CatalogError, CatalogProvider};
use sqlproto_core::ColumnDescriptor;

/// In-memory catalog provider
///
/// Columns are returned in insertion order, which stands in for the
/// `ORDER BY TABLE_NAME, ORDINAL_POSITION` guarantee of real providers;
/// fixtures should be listed in that order.
///
/// ```rust,ignore
/// let catalog = MockCatalog::new()
///     .with_column(ColumnDescriptor::new("users", "id", "int"))
///     .with_column(ColumnDescriptor::new("users", "name", "varchar"));
/// let columns = catalog.fetch_columns("app").await?;
/// ```
#[derive(Default)]
pub struct MockCatalog {
    columns: Vec<ColumnDescriptor>,
    fetch_error: Option<CatalogError>,
    fail_connection: bool,
}

impl MockCatalog {
    /// Create an empty mock catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one column descriptor
    pub fn with_column(mut self, column: ColumnDescriptor) -> Self {
        self.columns.push(column);
        self
    }

    /// Replace the column list wholesale
    pub fn with_columns(mut self, columns: Vec<ColumnDescriptor>) -> Self {
        self.columns = columns;
        self
    }

    /// Make `fetch_columns` fail with the given error
    pub fn with_fetch_error(mut self, error: CatalogError) -> Self {
        self.fetch_error = Some(error);
        self
    }

    /// Make `test_connection` fail
    pub fn with_connection_failure(mut self) -> Self {
        self.fail_connection = true;
        self
    }
}

#[async_trait::async_trait]
impl CatalogProvider for MockCatalog {
    fn name(&self) -> &'static str {
        "Mock"
    }

    async fn fetch_columns(&self, _schema: &str) -> Result<Vec<ColumnDescriptor>, CatalogError> {
        if let Some(error) = &self.fetch_error {
            return Err(error.clone());
        }
        Ok(self.columns.clone())
    }

    async fn test_connection(&self) -> Result<(), CatalogError> {
        if self.fail_connection {
            Err(CatalogError::Connection(
                "simulated connection failure".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}
