//! Raw catalog facts
//!
//! These are plain records read straight out of a database catalog. No
//! naming or cardinality decisions happen here; see [`crate::relations`].

use serde::{Deserialize, Serialize};

/// A single column as reported by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    /// Column name
    pub name: String,
    /// Whether the column accepts NULL
    pub nullable: bool,
    /// Normalized type tag (`bool`, `uuid`, `text`, `varchar`, `int4`, ...)
    #[serde(rename = "type")]
    pub type_name: String,
}

impl ColumnMetadata {
    /// Create column metadata, normalizing the raw catalog type
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::catalog::ColumnMetadata;
    /// let column = ColumnMetadata::new("title", false, "VARCHAR(255)");
    /// assert_eq!(column.type_name, "varchar");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, nullable: bool, raw_type: &str) -> Self {
        Self {
            name: name.into(),
            nullable,
            type_name: normalize_type(raw_type),
        }
    }

    /// Returns `true` for boolean columns
    #[must_use]
    pub fn is_bool(&self) -> bool {
        self.type_name == "bool"
    }

    /// Returns `true` for UUID columns
    #[must_use]
    pub fn is_uuid(&self) -> bool {
        self.type_name == "uuid"
    }

    /// Returns `true` for character columns (`text` or `varchar`)
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self.type_name.as_str(), "text" | "varchar")
    }
}

/// A declared foreign key, one row per constraint
///
/// Column lists are ordered. Only constraints with exactly one column on
/// each side take part in relationship inference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyConstraint {
    /// Constraint name, when the catalog exposes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Table that declares the constraint
    pub owning_table: String,
    /// Referencing columns on the owning table
    pub columns: Vec<String>,
    /// Table being referenced (possibly `schema.table` qualified)
    pub referenced_table: String,
    /// Referenced columns on the referenced table
    pub referenced_columns: Vec<String>,
}

impl ForeignKeyConstraint {
    /// Create an unnamed constraint
    #[must_use]
    pub fn new(
        owning_table: impl Into<String>,
        columns: &[&str],
        referenced_table: impl Into<String>,
        referenced_columns: &[&str],
    ) -> Self {
        Self {
            name: None,
            owning_table: owning_table.into(),
            columns: columns.iter().map(ToString::to_string).collect(),
            referenced_table: referenced_table.into(),
            referenced_columns: referenced_columns.iter().map(ToString::to_string).collect(),
        }
    }

    /// The `(local, referenced)` column pair of a single-column constraint
    ///
    /// Returns `None` when either side has more or fewer than one column.
    #[must_use]
    pub fn single_column(&self) -> Option<(&str, &str)> {
        match (self.columns.as_slice(), self.referenced_columns.as_slice()) {
            ([local], [referenced]) => Some((local.as_str(), referenced.as_str())),
            _ => None,
        }
    }

    /// Human-readable label for log lines
    #[must_use]
    pub fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            format!(
                "{}({}) -> {}({})",
                self.owning_table,
                self.columns.join(", "),
                self.referenced_table,
                self.referenced_columns.join(", ")
            )
        })
    }
}

/// An index declared on a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexMetadata {
    /// Index name, when the catalog exposes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Indexed columns (or expressions) in key order
    pub columns: Vec<String>,
    /// Whether the index enforces uniqueness
    pub is_unique: bool,
    /// Whether the index backs the primary key
    #[serde(default)]
    pub is_primary: bool,
}

impl IndexMetadata {
    /// Create an unnamed index
    #[must_use]
    pub fn new(columns: &[&str], is_unique: bool) -> Self {
        Self {
            name: None,
            columns: columns.iter().map(ToString::to_string).collect(),
            is_unique,
            is_primary: false,
        }
    }

    /// Create a primary-key index
    #[must_use]
    pub fn primary(columns: &[&str]) -> Self {
        Self {
            is_primary: true,
            ..Self::new(columns, true)
        }
    }

    /// Returns `true` if this is a unique index on exactly `column`
    ///
    /// Multi-column unique indexes never qualify.
    #[must_use]
    pub fn is_unique_on(&self, column: &str) -> bool {
        self.is_unique && matches!(self.columns.as_slice(), [only] if only == column)
    }
}

/// Normalize a raw catalog type into a short lowercase tag
///
/// # Examples
///
/// ```
/// # use crudgen::catalog::normalize_type;
/// assert_eq!(normalize_type("BOOLEAN"), "bool");
/// assert_eq!(normalize_type("character varying(120)"), "varchar");
/// assert_eq!(normalize_type("tinyint(1)"), "bool");
/// assert_eq!(normalize_type("LONGTEXT"), "text");
/// assert_eq!(normalize_type("int4"), "int4");
/// ```
#[must_use]
pub fn normalize_type(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();

    // MySQL's boolean convention, checked before the length suffix is dropped
    if lower.starts_with("tinyint(1)") {
        return "bool".to_string();
    }

    let base = lower
        .split('(')
        .next()
        .unwrap_or(&lower)
        .trim_end_matches(" unsigned")
        .trim();

    match base {
        "bool" | "boolean" => "bool",
        "varchar" | "character varying" | "nvarchar" | "varchar2" => "varchar",
        "text" | "tinytext" | "mediumtext" | "longtext" | "clob" => "text",
        "char" | "character" | "bpchar" | "nchar" => "char",
        "uuid" | "uniqueidentifier" => "uuid",
        other => other,
    }
    .to_string()
}
