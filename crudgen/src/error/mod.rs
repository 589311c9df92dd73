//! Error types and error handling

use thiserror::Error;

/// Result alias used throughout the introspection and inference layers
pub type Result<T> = std::result::Result<T, Error>;

/// Introspection error type
///
/// Every variant is fatal for the current run. Nothing here is retried;
/// retry policy belongs to whoever owns the database connection.
#[derive(Debug, Error)]
pub enum Error {
    /// The subject table does not exist in the catalog
    #[error("Table not found: `{table}`")]
    TableNotFound {
        /// Table name as given by the caller
        table: String,
    },

    /// A catalog query failed (connectivity, permissions, bad SQL)
    #[error("Schema error: {0}")]
    Schema(#[from] sqlx::Error),

    /// The database could not be reached
    #[error("Failed to connect to {url}: {source}")]
    Connect {
        /// Connection URL with the password redacted
        url: String,
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },

    /// The connection URL names a database we have no catalog for
    #[error("Unsupported database URL: {0} (expected postgres://, mysql:// or sqlite:)")]
    UnsupportedDatabase(String),

    /// The blocking runtime could not be started
    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),

    /// A schema snapshot could not be parsed or serialized
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// A schema snapshot file could not be read
    #[error("Failed to read snapshot {}: {source}", path.display())]
    SnapshotRead {
        /// Snapshot file path
        path: std::path::PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a table-not-found error
    #[must_use]
    pub fn table_not_found(table: impl Into<String>) -> Self {
        Self::TableNotFound {
            table: table.into(),
        }
    }

    /// Returns `true` if this error reports a missing table
    #[must_use]
    pub const fn is_table_not_found(&self) -> bool {
        matches!(self, Self::TableNotFound { .. })
    }
}
