//! Relationship descriptors and documentation lines

use std::fmt;

use serde::Serialize;

use crate::catalog::ColumnMetadata;

/// Kind of association between the subject table and a related table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationKind {
    /// The subject holds a foreign key to the related table
    BelongsTo,
    /// The related table holds a uniquely indexed foreign key to the subject
    HasOne,
    /// The related table holds a non-unique foreign key to the subject
    HasMany,
}

impl RelationKind {
    /// Method name used to declare the relation (`belongsTo`, `hasOne`, `hasMany`)
    #[must_use]
    pub const fn method(self) -> &'static str {
        match self {
            Self::BelongsTo => "belongsTo",
            Self::HasOne => "hasOne",
            Self::HasMany => "hasMany",
        }
    }

    /// Relation class name (`BelongsTo`, `HasOne`, `HasMany`)
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::BelongsTo => "BelongsTo",
            Self::HasOne => "HasOne",
            Self::HasMany => "HasMany",
        }
    }

    /// Returns `true` if the accessor yields a collection
    #[must_use]
    pub const fn is_plural(self) -> bool {
        match self {
            Self::BelongsTo | Self::HasOne => false,
            Self::HasMany => true,
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

/// One inferred association
///
/// For [`RelationKind::BelongsTo`] the foreign key column lives on the
/// subject table and the owner key on the related table. For `HasOne` and
/// `HasMany` the foreign key column lives on the related table and the owner
/// key on the subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipDescriptor {
    /// Association kind
    pub kind: RelationKind,
    /// Unqualified name of the related table
    pub related_table: String,
    /// Singular class name of the related table
    pub related_entity_name: String,
    /// Accessor name, plural only for `HasMany`
    pub accessor_name: String,
    /// Column holding the foreign key value
    pub foreign_key_column: String,
    /// Column the foreign key references
    pub owner_key_column: String,
}

impl RelationshipDescriptor {
    /// The `@property` line documenting this relation's accessor
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::{RelationKind, RelationshipDescriptor};
    /// let descriptor = RelationshipDescriptor {
    ///     kind: RelationKind::HasMany,
    ///     related_table: "line_items".into(),
    ///     related_entity_name: "LineItem".into(),
    ///     accessor_name: "lineItems".into(),
    ///     foreign_key_column: "order_id".into(),
    ///     owner_key_column: "id".into(),
    /// };
    /// assert_eq!(descriptor.documentation_line(), "@property LineItem[] $lineItems");
    /// ```
    #[must_use]
    pub fn documentation_line(&self) -> String {
        let marker = if self.kind.is_plural() { "[]" } else { "" };
        format!(
            "@property {}{marker} ${}",
            self.related_entity_name, self.accessor_name
        )
    }
}

/// Ordered, append-only documentation lines
///
/// Column lines come first, then one line per relationship in discovery
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentationLines {
    lines: Vec<String>,
}

impl DocumentationLines {
    /// Create an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append a column line
    pub fn push_column(&mut self, column: &ColumnMetadata) {
        self.lines.push(format!("@property ${}", column.name));
    }

    /// Append a relationship line
    pub fn push_relation(&mut self, descriptor: &RelationshipDescriptor) {
        self.lines.push(descriptor.documentation_line());
    }

    /// Lines in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Number of lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if no lines were added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render as the inside of a doc-comment block, one ` * ` line per entry
    #[must_use]
    pub fn render(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!(" * {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn belongs_to_customer() -> RelationshipDescriptor {
        RelationshipDescriptor {
            kind: RelationKind::BelongsTo,
            related_table: "customers".to_string(),
            related_entity_name: "Customer".to_string(),
            accessor_name: "customer".to_string(),
            foreign_key_column: "customer_id".to_string(),
            owner_key_column: "id".to_string(),
        }
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(RelationKind::BelongsTo.method(), "belongsTo");
        assert_eq!(RelationKind::HasOne.class(), "HasOne");
        assert_eq!(RelationKind::HasMany.to_string(), "HasMany");
        assert!(RelationKind::HasMany.is_plural());
        assert!(!RelationKind::HasOne.is_plural());
    }

    #[test]
    fn test_singular_documentation_line() {
        assert_eq!(
            belongs_to_customer().documentation_line(),
            "@property Customer $customer"
        );
    }

    #[test]
    fn test_documentation_order_and_render() {
        let mut docs = DocumentationLines::new();
        docs.push_column(&ColumnMetadata::new("id", false, "int8"));
        docs.push_relation(&belongs_to_customer());

        assert_eq!(docs.len(), 2);
        assert_eq!(
            docs.iter().collect::<Vec<_>>(),
            vec!["@property $id", "@property Customer $customer"]
        );
        assert_eq!(
            docs.render(),
            " * @property $id\n * @property Customer $customer"
        );
    }

    #[test]
    fn test_empty_render() {
        let docs = DocumentationLines::new();
        assert!(docs.is_empty());
        assert_eq!(docs.render(), "");
    }

    #[test]
    fn test_descriptor_serializes_kind_in_camel_case() {
        let json = serde_json::to_value(belongs_to_customer()).unwrap();
        assert_eq!(json["kind"], "belongsTo");
        assert_eq!(json["accessor_name"], "customer");
    }
}
