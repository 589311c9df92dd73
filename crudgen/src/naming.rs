//! Naming conventions for generated code
//!
//! Converts raw table and column identifiers into class names, accessor
//! names and route segments. All conversions go through `Inflector`.

use inflector::Inflector;

/// Naming helpers shared by inference and scaffolding
pub struct Naming;

impl Naming {
    /// Convert string to `snake_case`
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::naming::Naming;
    /// assert_eq!(Naming::to_snake_case("LineItem"), "line_item");
    /// ```
    #[must_use]
    pub fn to_snake_case(input: &str) -> String {
        input.to_snake_case()
    }

    /// Convert string to studly (`PascalCase`)
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::naming::Naming;
    /// assert_eq!(Naming::to_studly_case("line_item"), "LineItem");
    /// ```
    #[must_use]
    pub fn to_studly_case(input: &str) -> String {
        input.to_pascal_case()
    }

    /// Convert string to camelCase
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::naming::Naming;
    /// assert_eq!(Naming::to_camel_case("line_items"), "lineItems");
    /// ```
    #[must_use]
    pub fn to_camel_case(input: &str) -> String {
        input.to_camel_case()
    }

    /// Convert string to kebab-case
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::naming::Naming;
    /// assert_eq!(Naming::to_kebab_case("LineItem"), "line-item");
    /// ```
    #[must_use]
    pub fn to_kebab_case(input: &str) -> String {
        input.to_kebab_case()
    }

    /// Pluralize a word
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::naming::Naming;
    /// assert_eq!(Naming::pluralize("category"), "categories");
    /// assert_eq!(Naming::pluralize("line_item"), "line_items");
    /// ```
    #[must_use]
    pub fn pluralize(input: &str) -> String {
        input.to_plural()
    }

    /// Singularize a word
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::naming::Naming;
    /// assert_eq!(Naming::singularize("categories"), "category");
    /// assert_eq!(Naming::singularize("line_items"), "line_item");
    /// ```
    #[must_use]
    pub fn singularize(input: &str) -> String {
        input.to_singular()
    }

    /// Strip any `schema.` or `database.` qualifier and identifier quotes
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::naming::Naming;
    /// assert_eq!(Naming::short_table_name("shop.invoices"), "invoices");
    /// assert_eq!(Naming::short_table_name("\"Shop\".\"Invoices\""), "Invoices");
    /// assert_eq!(Naming::short_table_name("orders"), "orders");
    /// ```
    #[must_use]
    pub fn short_table_name(table: &str) -> &str {
        table
            .rsplit('.')
            .next()
            .unwrap_or(table)
            .trim_matches(['"', '`'])
    }

    /// Class name for a table: studly(singular(short name))
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::naming::Naming;
    /// assert_eq!(Naming::class_name("line_items"), "LineItem");
    /// assert_eq!(Naming::class_name("db.orders"), "Order");
    /// ```
    #[must_use]
    pub fn class_name(table: &str) -> String {
        Self::to_studly_case(&Self::singularize(Self::short_table_name(table)))
    }

    /// Singular accessor for a table: camel(singular(short name))
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::naming::Naming;
    /// assert_eq!(Naming::singular_accessor("shop.invoices"), "invoice");
    /// ```
    #[must_use]
    pub fn singular_accessor(table: &str) -> String {
        Self::to_camel_case(&Self::singularize(Self::short_table_name(table)))
    }

    /// Plural accessor for a table: camel(plural(singular(short name)))
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::naming::Naming;
    /// assert_eq!(Naming::plural_accessor("line_items"), "lineItems");
    /// assert_eq!(Naming::plural_accessor("employees"), "employees");
    /// ```
    #[must_use]
    pub fn plural_accessor(table: &str) -> String {
        Self::to_camel_case(&Self::pluralize(&Self::singularize(
            Self::short_table_name(table),
        )))
    }

    /// Accessor for a belongs-to relation
    ///
    /// Named after the foreign-key column minus its `_id` suffix, so that
    /// `manager_id -> employees.id` reads as `manager`. Columns without the
    /// suffix fall back to the referenced table's name.
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::naming::Naming;
    /// assert_eq!(Naming::belongs_to_accessor("customer_id", "customers"), "customer");
    /// assert_eq!(Naming::belongs_to_accessor("manager_id", "employees"), "manager");
    /// assert_eq!(Naming::belongs_to_accessor("owner", "users"), "user");
    /// ```
    #[must_use]
    pub fn belongs_to_accessor(column: &str, referenced_table: &str) -> String {
        match column.strip_suffix("_id") {
            Some(stem) if !stem.is_empty() => Self::to_camel_case(&Self::singularize(stem)),
            _ => Self::singular_accessor(referenced_table),
        }
    }

    /// Human-readable title
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::naming::Naming;
    /// assert_eq!(Naming::to_title("LineItem"), "Line Item");
    /// ```
    #[must_use]
    pub fn to_title(class: &str) -> String {
        class.to_title_case()
    }

    /// Human-readable plural title
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::naming::Naming;
    /// assert_eq!(Naming::to_plural_title("LineItem"), "Line Items");
    /// ```
    #[must_use]
    pub fn to_plural_title(class: &str) -> String {
        Self::plural_snake(class).to_title_case()
    }

    /// Default route segment for a class: kebab(plural(class))
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::naming::Naming;
    /// assert_eq!(Naming::to_route("LineItem"), "line-items");
    /// ```
    #[must_use]
    pub fn to_route(class: &str) -> String {
        Self::plural_snake(class).to_kebab_case()
    }

    /// Plural class name, e.g. `LineItems`
    #[must_use]
    pub fn to_plural_class(class: &str) -> String {
        Self::plural_snake(class).to_pascal_case()
    }

    /// Plural camel-case variable name, e.g. `lineItems`
    #[must_use]
    pub fn to_plural_variable(class: &str) -> String {
        Self::plural_snake(class).to_camel_case()
    }

    fn plural_snake(class: &str) -> String {
        Self::pluralize(&Self::to_snake_case(class))
    }
}
