//! Relationship inference
//!
//! Two passes over the catalog, both driven through an [`Introspector`]:
//!
//! 1. **Outbound**: every single-column foreign key declared on the subject
//!    becomes a [`RelationKind::BelongsTo`].
//! 2. **Inbound**: every single-column foreign key, on any table, that
//!    references the subject becomes a [`RelationKind::HasOne`] when the
//!    referencing column carries a single-column unique index, and a
//!    [`RelationKind::HasMany`] otherwise.
//!
//! Outbound results come first in declaration order, then inbound results
//! grouped by table in listing order. Composite foreign keys are skipped in
//! both passes. Accessor names are never de-duplicated, so a self-referencing
//! table can produce two accessors that refer to the same class.

mod descriptor;
mod render;

pub use descriptor::{DocumentationLines, RelationKind, RelationshipDescriptor};
pub use render::{render_accessor, render_accessors};

use tracing::debug;

use crate::catalog::{ForeignKeyConstraint, SchemaCatalog};
use crate::error::Result;
use crate::introspect::Introspector;
use crate::naming::Naming;

/// Everything the templating layer needs about a table's relations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipSource {
    /// Descriptors in discovery order
    pub descriptors: Vec<RelationshipDescriptor>,
    /// Concatenated accessor methods, one per descriptor
    pub accessors: String,
    /// Doc-comment body: column lines, then relationship lines
    pub documentation: String,
}

/// Infer the relations of `table` and render them
///
/// `model_namespace` qualifies related classes inside accessor bodies and is
/// passed through verbatim.
///
/// # Errors
///
/// Fails with [`crate::Error::TableNotFound`] before producing anything if
/// `table` does not exist. Catalog errors propagate unchanged.
pub fn infer_relationships<C: SchemaCatalog + ?Sized>(
    introspector: &mut Introspector<'_, C>,
    table: &str,
    model_namespace: &str,
) -> Result<RelationshipSource> {
    let mut documentation = DocumentationLines::new();
    for column in introspector.columns(table)? {
        documentation.push_column(column);
    }

    let descriptors = discover(introspector, table)?;
    for descriptor in &descriptors {
        documentation.push_relation(descriptor);
    }

    Ok(RelationshipSource {
        accessors: render_accessors(&descriptors, model_namespace),
        documentation: documentation.render(),
        descriptors,
    })
}

/// Run both passes and return the descriptors in discovery order
pub fn discover<C: SchemaCatalog + ?Sized>(
    introspector: &Introspector<'_, C>,
    table: &str,
) -> Result<Vec<RelationshipDescriptor>> {
    let mut descriptors = outbound(introspector, table)?;
    descriptors.extend(inbound(introspector, table)?);
    debug!(table, count = descriptors.len(), "Inferred relationships");
    Ok(descriptors)
}

fn outbound<C: SchemaCatalog + ?Sized>(
    introspector: &Introspector<'_, C>,
    table: &str,
) -> Result<Vec<RelationshipDescriptor>> {
    let mut descriptors = Vec::new();
    for constraint in introspector.outbound_foreign_keys(table)? {
        let Some((column, referenced_column)) = constraint.single_column() else {
            skip_composite(&constraint);
            continue;
        };

        let related_table = Naming::short_table_name(&constraint.referenced_table);
        descriptors.push(RelationshipDescriptor {
            kind: RelationKind::BelongsTo,
            related_table: related_table.to_string(),
            related_entity_name: Naming::class_name(related_table),
            accessor_name: Naming::belongs_to_accessor(column, related_table),
            foreign_key_column: column.to_string(),
            owner_key_column: referenced_column.to_string(),
        });
    }
    Ok(descriptors)
}

fn inbound<C: SchemaCatalog + ?Sized>(
    introspector: &Introspector<'_, C>,
    table: &str,
) -> Result<Vec<RelationshipDescriptor>> {
    let mut descriptors = Vec::new();
    for referencing_table in introspector.list_all_tables()? {
        let mut references = Vec::new();
        for constraint in introspector.outbound_foreign_keys(&referencing_table)? {
            if constraint.referenced_table != table {
                continue;
            }
            match constraint.single_column() {
                Some((column, referenced_column)) => {
                    references.push((column.to_string(), referenced_column.to_string()));
                }
                None => skip_composite(&constraint),
            }
        }
        if references.is_empty() {
            continue;
        }

        let indexes = introspector.indexes(&referencing_table)?;
        let related_table = Naming::short_table_name(&referencing_table);
        for (column, referenced_column) in references {
            let (kind, accessor_name) = if indexes.iter().any(|index| index.is_unique_on(&column)) {
                (RelationKind::HasOne, Naming::singular_accessor(related_table))
            } else {
                (RelationKind::HasMany, Naming::plural_accessor(related_table))
            };

            descriptors.push(RelationshipDescriptor {
                kind,
                related_table: related_table.to_string(),
                related_entity_name: Naming::class_name(related_table),
                accessor_name,
                foreign_key_column: column,
                owner_key_column: referenced_column,
            });
        }
    }
    Ok(descriptors)
}

fn skip_composite(constraint: &ForeignKeyConstraint) {
    debug!(
        constraint = %constraint.label(),
        columns = constraint.columns.len(),
        "Skipping composite foreign key"
    );
}
