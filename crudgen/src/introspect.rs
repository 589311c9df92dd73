//! Per-run schema introspection
//!
//! [`Introspector`] sits between the inference engine and a
//! [`SchemaCatalog`]. It performs no naming or cardinality logic; its only
//! state is the column cache, which lives exactly as long as the run that
//! created it.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use crate::catalog::{ColumnMetadata, ForeignKeyConstraint, IndexMetadata, SchemaCatalog};
use crate::error::{Error, Result};

/// Catalog reader with a per-run column cache
///
/// # Example
///
/// ```rust
/// use crudgen::testing::shop_snapshot;
/// use crudgen::Introspector;
///
/// # fn main() -> crudgen::Result<()> {
/// let snapshot = shop_snapshot();
/// let mut introspector = Introspector::new(&snapshot);
///
/// let columns = introspector.columns("orders")?;
/// assert_eq!(columns[0].name, "id");
/// assert!(introspector.columns("missing").is_err());
/// # Ok(())
/// # }
/// ```
pub struct Introspector<'a, C: SchemaCatalog + ?Sized> {
    catalog: &'a C,
    columns: HashMap<String, Vec<ColumnMetadata>>,
}

impl<'a, C: SchemaCatalog + ?Sized> Introspector<'a, C> {
    /// Start a run against `catalog` with an empty cache
    pub fn new(catalog: &'a C) -> Self {
        Self {
            catalog,
            columns: HashMap::new(),
        }
    }

    /// Columns of `table` in catalog order
    ///
    /// The first call for a table verifies that it exists and queries the
    /// catalog; later calls return the cached columns without touching it.
    ///
    /// # Errors
    ///
    /// [`Error::TableNotFound`] if the table does not exist, or any catalog
    /// error unchanged.
    pub fn columns(&mut self, table: &str) -> Result<&[ColumnMetadata]> {
        match self.columns.entry(table.to_string()) {
            Entry::Occupied(entry) => {
                debug!(table, "Column cache hit");
                Ok(entry.into_mut().as_slice())
            }
            Entry::Vacant(entry) => {
                if !self.catalog.table_exists(table)? {
                    return Err(Error::table_not_found(table));
                }
                let columns = self.catalog.columns(table)?;
                debug!(table, count = columns.len(), "Cached columns");
                Ok(entry.insert(columns).as_slice())
            }
        }
    }

    /// Foreign keys declared on `table`, in declaration order (uncached)
    pub fn outbound_foreign_keys(&self, table: &str) -> Result<Vec<ForeignKeyConstraint>> {
        self.catalog.foreign_keys(table)
    }

    /// Every table in the catalog, in listing order (uncached)
    pub fn list_all_tables(&self) -> Result<Vec<String>> {
        self.catalog.tables()
    }

    /// Indexes declared on `table` (uncached)
    pub fn indexes(&self, table: &str) -> Result<Vec<IndexMetadata>> {
        self.catalog.indexes(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MockSchemaCatalog;
    use mockall::predicate::eq;

    #[test]
    fn test_columns_are_cached_per_run() {
        let mut catalog = MockSchemaCatalog::new();
        catalog
            .expect_table_exists()
            .with(eq("orders"))
            .times(1)
            .returning(|_| Ok(true));
        catalog
            .expect_columns()
            .with(eq("orders"))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    ColumnMetadata::new("id", false, "int8"),
                    ColumnMetadata::new("customer_id", false, "int8"),
                ])
            });

        let mut introspector = Introspector::new(&catalog);
        let first = introspector.columns("orders").unwrap().to_vec();
        let second = introspector.columns("orders").unwrap().to_vec();

        assert_eq!(first, second);
        assert_eq!(first[1].name, "customer_id");
    }

    #[test]
    fn test_missing_table_fails_without_querying_columns() {
        let mut catalog = MockSchemaCatalog::new();
        catalog.expect_table_exists().returning(|_| Ok(false));
        catalog.expect_columns().never();

        let mut introspector = Introspector::new(&catalog);
        let err = introspector.columns("ghosts").unwrap_err();
        assert!(err.is_table_not_found());
    }

    #[test]
    fn test_missing_table_is_not_cached() {
        let mut catalog = MockSchemaCatalog::new();
        catalog
            .expect_table_exists()
            .times(2)
            .returning(|_| Ok(false));

        let mut introspector = Introspector::new(&catalog);
        assert!(introspector.columns("ghosts").is_err());
        assert!(introspector.columns("ghosts").is_err());
    }

    #[test]
    fn test_catalog_errors_pass_through() {
        let mut catalog = MockSchemaCatalog::new();
        catalog
            .expect_table_exists()
            .returning(|_| Err(Error::Schema(sqlx::Error::PoolClosed)));

        let mut introspector = Introspector::new(&catalog);
        let err = introspector.columns("orders").unwrap_err();
        assert!(matches!(err, Error::Schema(sqlx::Error::PoolClosed)));
    }

    #[test]
    fn test_pass_through_queries_are_uncached() {
        let mut catalog = MockSchemaCatalog::new();
        catalog.expect_tables().times(2).returning(|| Ok(vec!["orders".to_string()]));
        catalog.expect_indexes().times(2).returning(|_| Ok(Vec::new()));
        catalog.expect_foreign_keys().times(2).returning(|_| Ok(Vec::new()));

        let introspector = Introspector::new(&catalog);
        for _ in 0..2 {
            assert_eq!(introspector.list_all_tables().unwrap(), vec!["orders"]);
            assert!(introspector.indexes("orders").unwrap().is_empty());
            assert!(introspector.outbound_foreign_keys("orders").unwrap().is_empty());
        }
    }
}
