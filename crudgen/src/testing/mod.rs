//! Testing utilities
//!
//! Fixture schemas for exercising inference without a database server:
//! - [`sqlite_catalog`] builds an in-memory `SQLite` [`DatabaseCatalog`] from DDL
//! - the `*_snapshot` functions build equivalent offline [`SchemaSnapshot`]s
//!
//! # Example
//!
//! ```rust
//! use crudgen::testing::{sqlite_catalog, SHOP_DDL};
//! use crudgen::SchemaCatalog;
//!
//! # fn main() -> crudgen::Result<()> {
//! let catalog = sqlite_catalog(SHOP_DDL)?;
//! assert!(catalog.table_exists("orders")?);
//! # Ok(())
//! # }
//! ```

use tokio::runtime::Builder;

use crate::catalog::database::sqlite_pool_options;
use crate::catalog::{
    ColumnMetadata, DatabaseCatalog, ForeignKeyConstraint, IndexMetadata, SchemaSnapshot,
};
use crate::error::Result;

/// Customers, their orders and the orders' line items
pub const SHOP_DDL: &str = r"
CREATE TABLE customers (
    id INTEGER PRIMARY KEY,
    name VARCHAR(120) NOT NULL,
    email TEXT NOT NULL UNIQUE,
    active BOOLEAN NOT NULL DEFAULT 1
);
CREATE TABLE orders (
    id INTEGER PRIMARY KEY,
    customer_id INTEGER NOT NULL REFERENCES customers (id),
    reference TEXT,
    created_at TIMESTAMP,
    updated_at TIMESTAMP,
    deleted_at TIMESTAMP
);
CREATE TABLE line_items (
    id INTEGER PRIMARY KEY,
    order_id INTEGER NOT NULL REFERENCES orders (id),
    sku VARCHAR(64) NOT NULL,
    quantity INTEGER NOT NULL
);
";

/// Employees reporting to other employees
pub const EMPLOYEES_DDL: &str = r"
CREATE TABLE employees (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    manager_id INTEGER REFERENCES employees (id)
);
";

/// Create an in-memory `SQLite` catalog and run `ddl` against it
///
/// Statements are split on `;`; empty fragments are skipped.
pub fn sqlite_catalog(ddl: &str) -> Result<DatabaseCatalog> {
    let runtime = Builder::new_current_thread().enable_all().build()?;

    let pool = runtime.block_on(async {
        let pool = sqlite_pool_options().connect("sqlite::memory:").await?;
        for statement in ddl.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            sqlx::query(statement).execute(&pool).await?;
        }
        Ok::<_, sqlx::Error>(pool)
    })?;

    Ok(DatabaseCatalog::from_sqlite(runtime, pool))
}

/// Offline equivalent of [`SHOP_DDL`]
#[must_use]
pub fn shop_snapshot() -> SchemaSnapshot {
    SchemaSnapshot::new()
        .table("customers", |t| {
            t.column(ColumnMetadata::new("id", false, "integer"))
                .column(ColumnMetadata::new("name", false, "varchar(120)"))
                .column(ColumnMetadata::new("email", false, "text"))
                .column(ColumnMetadata::new("active", false, "boolean"))
                .index(IndexMetadata::new(&["email"], true))
                .index(IndexMetadata::primary(&["id"]))
        })
        .table("line_items", |t| {
            t.column(ColumnMetadata::new("id", false, "integer"))
                .column(ColumnMetadata::new("order_id", false, "integer"))
                .column(ColumnMetadata::new("sku", false, "varchar(64)"))
                .column(ColumnMetadata::new("quantity", false, "integer"))
                .foreign_key(ForeignKeyConstraint::new(
                    "line_items",
                    &["order_id"],
                    "orders",
                    &["id"],
                ))
                .index(IndexMetadata::primary(&["id"]))
        })
        .table("orders", |t| {
            t.column(ColumnMetadata::new("id", false, "integer"))
                .column(ColumnMetadata::new("customer_id", false, "integer"))
                .column(ColumnMetadata::new("reference", true, "text"))
                .column(ColumnMetadata::new("created_at", true, "timestamp"))
                .column(ColumnMetadata::new("updated_at", true, "timestamp"))
                .column(ColumnMetadata::new("deleted_at", true, "timestamp"))
                .foreign_key(ForeignKeyConstraint::new(
                    "orders",
                    &["customer_id"],
                    "customers",
                    &["id"],
                ))
                .index(IndexMetadata::primary(&["id"]))
        })
}

/// Offline equivalent of [`EMPLOYEES_DDL`]
#[must_use]
pub fn employees_snapshot() -> SchemaSnapshot {
    SchemaSnapshot::new().table("employees", |t| {
        t.column(ColumnMetadata::new("id", false, "integer"))
            .column(ColumnMetadata::new("name", false, "text"))
            .column(ColumnMetadata::new("manager_id", true, "integer"))
            .foreign_key(ForeignKeyConstraint::new(
                "employees",
                &["manager_id"],
                "employees",
                &["id"],
            ))
            .index(IndexMetadata::primary(&["id"]))
    })
}
