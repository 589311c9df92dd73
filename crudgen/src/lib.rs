//! crudgen: schema introspection and relationship inference for CRUD scaffolding
//!
//! The crate reads a relational database catalog and turns it into the
//! association accessors and documentation properties a generated data model
//! needs. Everything that writes files lives in `crudgen-cli`; this crate only
//! reads.
//!
//! # Layers
//!
//! 1. [`catalog`]: raw catalog facts behind the [`SchemaCatalog`] trait, with
//!    `PostgreSQL`, `MySQL`, `SQLite` and JSON snapshot backends
//! 2. [`introspect`]: the per-run [`Introspector`] with its column cache
//! 3. [`relations`]: the two-pass inference engine producing
//!    [`RelationshipDescriptor`]s
//!
//! # Quick Start
//!
//! ```rust
//! use crudgen::catalog::{ColumnMetadata, ForeignKeyConstraint, IndexMetadata, SchemaSnapshot};
//! use crudgen::{infer_relationships, Introspector, RelationKind};
//!
//! # fn main() -> crudgen::Result<()> {
//! let snapshot = SchemaSnapshot::new()
//!     .table("customers", |t| {
//!         t.column(ColumnMetadata::new("id", false, "integer"))
//!             .index(IndexMetadata::primary(&["id"]))
//!     })
//!     .table("orders", |t| {
//!         t.column(ColumnMetadata::new("id", false, "integer"))
//!             .column(ColumnMetadata::new("customer_id", false, "integer"))
//!             .foreign_key(ForeignKeyConstraint::new("orders", &["customer_id"], "customers", &["id"]))
//!     });
//!
//! let mut introspector = Introspector::new(&snapshot);
//! let source = infer_relationships(&mut introspector, "orders", "App\\Models")?;
//!
//! assert_eq!(source.descriptors.len(), 1);
//! assert_eq!(source.descriptors[0].kind, RelationKind::BelongsTo);
//! assert_eq!(source.descriptors[0].accessor_name, "customer");
//! # Ok(())
//! # }
//! ```

#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod introspect;
pub mod naming;
pub mod observability;
pub mod relations;
pub mod testing;

pub use catalog::{DatabaseCatalog, SchemaCatalog};
pub use error::{Error, Result};
pub use introspect::Introspector;
pub use relations::{
    infer_relationships, DocumentationLines, RelationKind, RelationshipDescriptor,
    RelationshipSource,
};
