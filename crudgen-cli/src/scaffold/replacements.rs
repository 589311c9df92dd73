//! Template context for one table
//!
//! Builds every value the stubs reference from the table's columns, its
//! inferred relations and the configuration.

use crudgen::catalog::ColumnMetadata;
use crudgen::config::CrudConfig;
use crudgen::naming::Naming;
use crudgen::RelationshipSource;
use serde_json::{json, Map, Value};

/// Replacement values for one scaffold run
#[derive(Debug, Clone)]
pub struct Replacements {
    /// Class name derived from the table
    pub model_name: String,
    context: Map<String, Value>,
}

impl Replacements {
    /// Build the replacements for `table`
    ///
    /// `route` overrides the default kebab-case plural route name.
    #[must_use]
    pub fn build(
        config: &CrudConfig,
        table: &str,
        columns: &[ColumnMetadata],
        relations: &RelationshipSource,
        route: Option<&str>,
    ) -> Self {
        let model_name = Naming::class_name(table);
        let model_variable = Naming::to_camel_case(&model_name);

        let mut context = Map::new();
        let mut insert = |key: &str, value: Value| {
            context.insert(key.to_string(), value);
        };

        insert("layout", json!(config.layout));
        insert("tableName", json!(table));
        insert("modelName", json!(model_name));
        insert("modelTitle", json!(Naming::to_title(&model_name)));
        insert("modelTitlePlural", json!(Naming::to_plural_title(&model_name)));
        insert("modelNamespace", json!(config.model.namespace));
        insert("controllerNamespace", json!(config.controller.namespace));
        insert("apiControllerNamespace", json!(config.controller.api_namespace));
        insert("resourceNamespace", json!(config.resources.namespace));
        insert("requestNamespace", json!(config.request.namespace));
        insert("livewireNamespace", json!(config.livewire.namespace));
        insert(
            "livewireFormNamespace",
            json!(qualify(&config.livewire.namespace, "Forms")),
        );
        insert(
            "modelNamePluralLowerCase",
            json!(Naming::to_plural_variable(&model_name)),
        );
        insert(
            "modelNamePluralUpperCase",
            json!(Naming::to_plural_class(&model_name)),
        );
        insert("modelNameLowerCase", json!(model_variable));
        insert(
            "modelRoute",
            json!(route.map_or_else(|| Naming::to_route(&model_name), str::to_string)),
        );
        insert("modelView", json!(Naming::to_kebab_case(&model_name)));

        insert("modelClass", json!(qualify(&config.model.namespace, &model_name)));
        insert(
            "requestClass",
            json!(qualify(&config.request.namespace, &format!("{model_name}Request"))),
        );
        insert(
            "resourceClass",
            json!(qualify(&config.resources.namespace, &format!("{model_name}Resource"))),
        );

        let wanted: Vec<&ColumnMetadata> = columns
            .iter()
            .filter(|column| !config.is_unwanted(&column.name))
            .collect();

        insert("fillable", json!(fillable(&wanted)));
        insert("rules", json!(rules(&wanted)));
        insert("relations", json!(relations.accessors));
        insert("properties", json!(relations.documentation));

        let soft_deletes = columns.iter().any(|column| column.name == "deleted_at");
        insert(
            "softDeletesNamespace",
            json!(if soft_deletes {
                "use Illuminate\\Database\\Eloquent\\SoftDeletes;\n"
            } else {
                ""
            }),
        );
        insert(
            "softDeletes",
            json!(if soft_deletes { "use SoftDeletes;\n" } else { "" }),
        );

        insert("livewireFormProperties", json!(livewire_properties(&wanted)));
        insert(
            "livewireFormSetValues",
            json!(livewire_set_values(&wanted, &model_variable)),
        );

        Self {
            model_name,
            context,
        }
    }

    /// Look up one value
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.context.get(key).and_then(Value::as_str)
    }

    /// The full Handlebars context
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.context.clone())
    }
}

/// Join a namespace and a class name with a backslash
pub(crate) fn qualify(namespace: &str, name: &str) -> String {
    let namespace = namespace.trim_end_matches('\\');
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}\\{name}")
    }
}

fn fillable(columns: &[&ColumnMetadata]) -> String {
    columns
        .iter()
        .map(|column| format!("'{}'", column.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn livewire_properties(columns: &[&ColumnMetadata]) -> String {
    columns
        .iter()
        .map(|column| format!("\n    public ${} = '';", column.name))
        .collect()
}

fn livewire_set_values(columns: &[&ColumnMetadata], model_variable: &str) -> String {
    columns
        .iter()
        .map(|column| {
            format!(
                "\n        $this->{name} = $this->{model_variable}Model->{name};",
                name = column.name
            )
        })
        .collect()
}

fn rules(columns: &[&ColumnMetadata]) -> String {
    columns
        .iter()
        .filter_map(|column| {
            let mut rules = Vec::new();
            if !column.nullable {
                rules.push("required");
            }
            if column.is_bool() {
                rules.push("boolean");
            }
            if column.is_uuid() {
                rules.push("uuid");
            }
            if column.is_string() {
                rules.push("string");
            }
            (!rules.is_empty())
                .then(|| format!("\n            '{}' => '{}',", column.name, rules.join("|")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crudgen::testing::shop_snapshot;
    use crudgen::{infer_relationships, Introspector};

    fn build(table: &str, route: Option<&str>) -> Replacements {
        let snapshot = shop_snapshot();
        let config = CrudConfig::default();
        let mut introspector = Introspector::new(&snapshot);
        let relations =
            infer_relationships(&mut introspector, table, &config.model.namespace).unwrap();
        let columns = introspector.columns(table).unwrap().to_vec();
        Replacements::build(&config, table, &columns, &relations, route)
    }

    #[test]
    fn test_names_for_multi_word_table() {
        let replacements = build("line_items", None);

        assert_eq!(replacements.model_name, "LineItem");
        assert_eq!(replacements.get("modelTitle"), Some("Line Item"));
        assert_eq!(replacements.get("modelTitlePlural"), Some("Line Items"));
        assert_eq!(replacements.get("modelNamePluralLowerCase"), Some("lineItems"));
        assert_eq!(replacements.get("modelNamePluralUpperCase"), Some("LineItems"));
        assert_eq!(replacements.get("modelNameLowerCase"), Some("lineItem"));
        assert_eq!(replacements.get("modelRoute"), Some("line-items"));
        assert_eq!(replacements.get("modelView"), Some("line-item"));
        assert_eq!(replacements.get("modelClass"), Some(r"App\Models\LineItem"));
        assert_eq!(replacements.get("livewireFormNamespace"), Some(r"App\Livewire\Forms"));
    }

    #[test]
    fn test_route_override() {
        let replacements = build("orders", Some("admin-orders"));
        assert_eq!(replacements.get("modelRoute"), Some("admin-orders"));
    }

    #[test]
    fn test_fillable_skips_unwanted_columns() {
        let replacements = build("orders", None);
        assert_eq!(
            replacements.get("fillable"),
            Some("'customer_id', 'reference'")
        );
    }

    #[test]
    fn test_rules_per_column() {
        let replacements = build("customers", None);
        assert_eq!(
            replacements.get("rules"),
            Some(
                "\n            'name' => 'required|string',\
                 \n            'email' => 'required|string',\
                 \n            'active' => 'required|boolean',"
            )
        );
    }

    #[test]
    fn test_columns_without_rules_are_omitted() {
        let replacements = build("orders", None);
        // reference is nullable text, customer_id is a required integer
        assert_eq!(
            replacements.get("rules"),
            Some("\n            'customer_id' => 'required',\n            'reference' => 'string',")
        );
    }

    #[test]
    fn test_soft_deletes_follow_deleted_at() {
        let orders = build("orders", None);
        assert_eq!(orders.get("softDeletes"), Some("use SoftDeletes;\n"));

        let customers = build("customers", None);
        assert_eq!(customers.get("softDeletes"), Some(""));
        assert_eq!(customers.get("softDeletesNamespace"), Some(""));
    }

    #[test]
    fn test_relations_and_properties_come_from_inference() {
        let replacements = build("orders", None);
        let relations = replacements.get("relations").unwrap();
        assert!(relations.contains("public function customer()"));
        assert!(relations.contains("public function lineItems()"));

        let properties = replacements.get("properties").unwrap();
        assert!(properties.starts_with(" * @property $id"));
        assert!(properties.ends_with(" * @property LineItem[] $lineItems"));
    }

    #[test]
    fn test_livewire_bindings() {
        let replacements = build("orders", None);
        assert_eq!(
            replacements.get("livewireFormProperties"),
            Some("\n    public $customer_id = '';\n    public $reference = '';")
        );
        assert!(replacements
            .get("livewireFormSetValues")
            .unwrap()
            .contains("$this->reference = $this->orderModel->reference;"));
    }

    #[test]
    fn test_qualify() {
        assert_eq!(qualify(r"App\Models", "Order"), r"App\Models\Order");
        assert_eq!(qualify("", "Order"), "Order");
    }
}
