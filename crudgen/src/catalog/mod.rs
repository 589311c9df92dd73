//! Database catalog access
//!
//! A [`SchemaCatalog`] answers five questions about a schema: does a table
//! exist, what are its columns, which foreign keys does it declare, which
//! tables exist at all, and which indexes does a table carry. Nothing else
//! in the crate talks to a database.
//!
//! Backends:
//! - [`DatabaseCatalog`]: a live `PostgreSQL`, `MySQL` or `SQLite` connection
//! - [`SchemaSnapshot`]: an offline JSON document, captured from any catalog

pub(crate) mod database;
mod mysql;
mod postgres;
mod snapshot;
mod sqlite;
mod types;

pub use database::{Backend, DatabaseCatalog};
pub use snapshot::{SchemaSnapshot, TableSnapshot};
pub use types::{normalize_type, ColumnMetadata, ForeignKeyConstraint, IndexMetadata};

use crate::error::Result;

/// Read-only view of a database catalog
///
/// Implementations must return rows in a deterministic order: columns in
/// catalog order, foreign keys in declaration order, tables in listing order.
/// Relationship output order is derived directly from these.
#[cfg_attr(test, mockall::automock)]
pub trait SchemaCatalog {
    /// Returns `true` if `table` exists
    fn table_exists(&self, table: &str) -> Result<bool>;

    /// Columns of `table` in catalog order
    fn columns(&self, table: &str) -> Result<Vec<ColumnMetadata>>;

    /// Foreign keys declared on `table`, in declaration order
    fn foreign_keys(&self, table: &str) -> Result<Vec<ForeignKeyConstraint>>;

    /// Every table in the catalog
    fn tables(&self) -> Result<Vec<String>>;

    /// Indexes declared on `table`
    fn indexes(&self, table: &str) -> Result<Vec<IndexMetadata>>;
}
