//! Offline schema snapshots
//!
//! A snapshot is a JSON document holding everything a [`SchemaCatalog`]
//! reports, so inference can run without a live database.
//!
//! ```json
//! {
//!   "tables": [
//!     {
//!       "name": "orders",
//!       "columns": [{ "name": "id", "nullable": false, "type": "int8" }],
//!       "foreign_keys": [],
//!       "indexes": [{ "columns": ["id"], "is_unique": true, "is_primary": true }]
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ColumnMetadata, ForeignKeyConstraint, IndexMetadata, SchemaCatalog};
use crate::error::{Error, Result};

/// One table inside a [`SchemaSnapshot`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    /// Table name as the catalog lists it
    pub name: String,
    /// Columns in catalog order
    #[serde(default)]
    pub columns: Vec<ColumnMetadata>,
    /// Outbound foreign keys in declaration order
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKeyConstraint>,
    /// Indexes
    #[serde(default)]
    pub indexes: Vec<IndexMetadata>,
}

impl TableSnapshot {
    /// Create an empty table
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a column
    #[must_use]
    pub fn column(mut self, column: ColumnMetadata) -> Self {
        self.columns.push(column);
        self
    }

    /// Append a foreign key
    #[must_use]
    pub fn foreign_key(mut self, constraint: ForeignKeyConstraint) -> Self {
        self.foreign_keys.push(constraint);
        self
    }

    /// Append an index
    #[must_use]
    pub fn index(mut self, index: IndexMetadata) -> Self {
        self.indexes.push(index);
        self
    }
}

/// A serialized catalog
///
/// Table order in the document is the listing order the catalog reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    /// Tables in listing order
    #[serde(default)]
    pub tables: Vec<TableSnapshot>,
}

impl SchemaSnapshot {
    /// Create an empty snapshot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a table built by `build`
    ///
    /// # Example
    ///
    /// ```rust
    /// use crudgen::catalog::{ColumnMetadata, SchemaSnapshot};
    ///
    /// let snapshot = SchemaSnapshot::new()
    ///     .table("tags", |t| t.column(ColumnMetadata::new("label", false, "text")));
    /// assert_eq!(snapshot.tables[0].columns.len(), 1);
    /// ```
    #[must_use]
    pub fn table<F>(mut self, name: &str, build: F) -> Self
    where
        F: FnOnce(TableSnapshot) -> TableSnapshot,
    {
        self.tables.push(build(TableSnapshot::new(name)));
        self
    }

    /// Parse a snapshot from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::SnapshotRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded schema snapshot");
        Self::from_json(&json)
    }

    /// Render the snapshot as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Capture every table of `catalog` into a snapshot
    pub fn capture<C: SchemaCatalog + ?Sized>(catalog: &C) -> Result<Self> {
        let mut snapshot = Self::new();
        for name in catalog.tables()? {
            debug!(table = %name, "Capturing table");
            snapshot.tables.push(TableSnapshot {
                columns: catalog.columns(&name)?,
                foreign_keys: catalog.foreign_keys(&name)?,
                indexes: catalog.indexes(&name)?,
                name,
            });
        }
        Ok(snapshot)
    }

    fn find(&self, table: &str) -> Option<&TableSnapshot> {
        self.tables.iter().find(|t| t.name == table)
    }
}

impl SchemaCatalog for SchemaSnapshot {
    fn table_exists(&self, table: &str) -> Result<bool> {
        Ok(self.find(table).is_some())
    }

    fn columns(&self, table: &str) -> Result<Vec<ColumnMetadata>> {
        Ok(self.find(table).map(|t| t.columns.clone()).unwrap_or_default())
    }

    fn foreign_keys(&self, table: &str) -> Result<Vec<ForeignKeyConstraint>> {
        Ok(self
            .find(table)
            .map(|t| t.foreign_keys.clone())
            .unwrap_or_default())
    }

    fn tables(&self) -> Result<Vec<String>> {
        Ok(self.tables.iter().map(|t| t.name.clone()).collect())
    }

    fn indexes(&self, table: &str) -> Result<Vec<IndexMetadata>> {
        Ok(self.find(table).map(|t| t.indexes.clone()).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn shop() -> SchemaSnapshot {
        SchemaSnapshot::new()
            .table("customers", |t| {
                t.column(ColumnMetadata::new("id", false, "int8"))
                    .index(IndexMetadata::primary(&["id"]))
            })
            .table("orders", |t| {
                t.column(ColumnMetadata::new("id", false, "int8"))
                    .column(ColumnMetadata::new("customer_id", false, "int8"))
                    .foreign_key(ForeignKeyConstraint::new(
                        "orders",
                        &["customer_id"],
                        "customers",
                        &["id"],
                    ))
            })
    }

    #[test]
    fn test_catalog_answers_from_document() {
        let snapshot = shop();
        assert!(snapshot.table_exists("orders").unwrap());
        assert!(!snapshot.table_exists("invoices").unwrap());
        assert_eq!(snapshot.tables().unwrap(), vec!["customers", "orders"]);
        assert_eq!(snapshot.foreign_keys("orders").unwrap().len(), 1);
        assert!(snapshot.foreign_keys("customers").unwrap().is_empty());
        assert!(snapshot.indexes("invoices").unwrap().is_empty());
    }

    #[test]
    fn test_json_round_trip_keeps_table_order() {
        let snapshot = shop();
        let json = snapshot.to_json_pretty().unwrap();
        let parsed = SchemaSnapshot::from_json(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_capture_copies_every_table() {
        let original = shop();
        let captured = SchemaSnapshot::capture(&original).unwrap();
        assert_eq!(captured, original);
    }

    #[test]
    fn test_from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"tables":[{{"name":"tags","columns":[{{"name":"label","nullable":true,"type":"text"}}]}}]}}"#
        )
        .unwrap();

        let snapshot = SchemaSnapshot::from_path(file.path()).unwrap();
        assert_eq!(snapshot.tables[0].name, "tags");
        assert!(snapshot.tables[0].columns[0].nullable);
        assert!(snapshot.tables[0].foreign_keys.is_empty());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SchemaSnapshot::from_path("/nonexistent/schema.json").unwrap_err();
        assert!(matches!(err, Error::SnapshotRead { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = SchemaSnapshot::from_json("{\"tables\": 3}").unwrap_err();
        assert!(matches!(err, Error::Snapshot(_)));
    }
}
