//! Catalog metadata providers
//!
//! A [`CatalogProvider`] fetches the ordered column descriptors for one
//! database schema from INFORMATION_SCHEMA.COLUMNS. The translation engine
//! in `sqlproto-core` requires the rows ordered by table name, then ordinal
//! position; every provider here guarantees that ordering.
//!
//! Enable database support via Cargo features:
//! - `mysql` - MySQL/MariaDB support via `mysql_async`
//!
//! [`MockCatalog`] is always available and needs no connection, for tests
//! and demos.

pub mod mock;
pub mod provider;

#[cfg(feature = "mysql")]
pub mod mysql;

pub use mock::MockCatalog;
pub use provider::{CatalogError, CatalogProvider};

#[cfg(feature = "mysql")]
pub use mysql::MySqlCatalog;
