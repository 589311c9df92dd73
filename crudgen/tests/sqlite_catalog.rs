//! End-to-end inference against in-memory SQLite databases

use crudgen::catalog::SchemaSnapshot;
use crudgen::testing::{sqlite_catalog, EMPLOYEES_DDL, SHOP_DDL};
use crudgen::{infer_relationships, Introspector, RelationKind, SchemaCatalog};

#[test]
fn reads_columns_in_declaration_order() {
    let catalog = sqlite_catalog(SHOP_DDL).unwrap();
    let columns = catalog.columns("customers").unwrap();

    let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["id", "name", "email", "active"]);

    assert!(!columns[0].nullable);
    assert_eq!(columns[1].type_name, "varchar");
    assert_eq!(columns[2].type_name, "text");
    assert!(columns[3].is_bool());
}

#[test]
fn reports_nullable_columns() {
    let catalog = sqlite_catalog(SHOP_DDL).unwrap();
    let columns = catalog.columns("orders").unwrap();

    let reference = columns.iter().find(|c| c.name == "reference").unwrap();
    assert!(reference.nullable);
    let customer_id = columns.iter().find(|c| c.name == "customer_id").unwrap();
    assert!(!customer_id.nullable);
}

#[test]
fn reads_foreign_keys_in_declaration_order() {
    let catalog = sqlite_catalog(
        r"
        CREATE TABLE users (id INTEGER PRIMARY KEY);
        CREATE TABLE teams (id INTEGER PRIMARY KEY);
        CREATE TABLE memberships (
            id INTEGER PRIMARY KEY,
            user_id INTEGER NOT NULL REFERENCES users (id),
            team_id INTEGER NOT NULL REFERENCES teams
        );
        ",
    )
    .unwrap();

    let keys = catalog.foreign_keys("memberships").unwrap();
    assert_eq!(keys.len(), 2);
    assert_eq!(keys[0].columns, vec!["user_id"]);
    assert_eq!(keys[0].referenced_table, "users");
    assert_eq!(keys[1].columns, vec!["team_id"]);
    assert_eq!(keys[1].referenced_table, "teams");
    // implicit target column resolves to the primary key
    assert_eq!(keys[1].referenced_columns, vec!["id"]);
}

#[test]
fn reads_composite_foreign_keys_as_one_constraint() {
    let catalog = sqlite_catalog(
        r"
        CREATE TABLE order_lines (
            order_id INTEGER NOT NULL,
            line_no INTEGER NOT NULL,
            PRIMARY KEY (order_id, line_no)
        );
        CREATE TABLE shipments (
            id INTEGER PRIMARY KEY,
            order_id INTEGER NOT NULL,
            line_no INTEGER NOT NULL,
            FOREIGN KEY (order_id, line_no) REFERENCES order_lines (order_id, line_no)
        );
        ",
    )
    .unwrap();

    let keys = catalog.foreign_keys("shipments").unwrap();
    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0].columns, vec!["order_id", "line_no"]);
    assert_eq!(keys[0].referenced_columns, vec!["order_id", "line_no"]);
    assert_eq!(keys[0].single_column(), None);

    let indexes = catalog.indexes("order_lines").unwrap();
    let primary = indexes.iter().find(|i| i.is_primary).unwrap();
    assert_eq!(primary.columns, vec!["order_id", "line_no"]);
    assert!(!primary.is_unique_on("order_id"));
}

#[test]
fn reports_unique_and_rowid_indexes() {
    let catalog = sqlite_catalog(SHOP_DDL).unwrap();
    let indexes = catalog.indexes("customers").unwrap();

    assert!(indexes.iter().any(|i| i.is_unique_on("email")));
    assert!(indexes.iter().any(|i| i.is_primary && i.is_unique_on("id")));
}

#[test]
fn orders_round_trip() {
    let catalog = sqlite_catalog(SHOP_DDL).unwrap();
    let mut introspector = Introspector::new(&catalog);
    let source = infer_relationships(&mut introspector, "orders", "App").unwrap();

    assert_eq!(source.descriptors.len(), 2);

    let customer = &source.descriptors[0];
    assert_eq!(customer.kind, RelationKind::BelongsTo);
    assert_eq!(customer.related_entity_name, "Customer");
    assert_eq!(customer.accessor_name, "customer");
    assert_eq!(customer.owner_key_column, "id");

    let line_items = &source.descriptors[1];
    assert_eq!(line_items.kind, RelationKind::HasMany);
    assert_eq!(line_items.related_entity_name, "LineItem");
    assert_eq!(line_items.accessor_name, "lineItems");
    assert_eq!(line_items.foreign_key_column, "order_id");
}

#[test]
fn unique_foreign_key_is_has_one() {
    let ddl = format!(
        "{SHOP_DDL};
        CREATE TABLE invoices (
            id INTEGER PRIMARY KEY,
            order_id INTEGER NOT NULL UNIQUE REFERENCES orders,
            total NUMERIC
        );"
    );
    let catalog = sqlite_catalog(&ddl).unwrap();
    let mut introspector = Introspector::new(&catalog);
    let source = infer_relationships(&mut introspector, "orders", "App\\Models").unwrap();

    let invoice = source
        .descriptors
        .iter()
        .find(|d| d.related_table == "invoices")
        .unwrap();
    assert_eq!(invoice.kind, RelationKind::HasOne);
    assert_eq!(invoice.accessor_name, "invoice");
    assert_eq!(invoice.owner_key_column, "id");
    assert!(source
        .accessors
        .contains(r"$this->hasOne('App\Models\Invoice', 'order_id', 'id')"));
}

#[test]
fn self_reference() {
    let catalog = sqlite_catalog(EMPLOYEES_DDL).unwrap();
    let mut introspector = Introspector::new(&catalog);
    let source = infer_relationships(&mut introspector, "employees", "App").unwrap();

    let kinds: Vec<(RelationKind, &str)> = source
        .descriptors
        .iter()
        .map(|d| (d.kind, d.accessor_name.as_str()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (RelationKind::BelongsTo, "manager"),
            (RelationKind::HasMany, "employees"),
        ]
    );
}

#[test]
fn reference_spelled_in_other_case_resolves_to_listed_table() {
    let catalog = sqlite_catalog(
        r"
        CREATE TABLE orders (id INTEGER PRIMARY KEY);
        CREATE TABLE line_items (
            id INTEGER PRIMARY KEY,
            order_id INTEGER NOT NULL REFERENCES Orders (id)
        );
        ",
    )
    .unwrap();

    let keys = catalog.foreign_keys("line_items").unwrap();
    assert_eq!(keys[0].referenced_table, "orders");

    let mut introspector = Introspector::new(&catalog);
    let source = infer_relationships(&mut introspector, "orders", "App").unwrap();
    assert_eq!(source.descriptors.len(), 1);
    assert_eq!(source.descriptors[0].kind, RelationKind::HasMany);
    assert_eq!(source.descriptors[0].accessor_name, "lineItems");
    assert_eq!(source.descriptors[0].foreign_key_column, "order_id");
}

#[test]
fn missing_table() {
    let catalog = sqlite_catalog(SHOP_DDL).unwrap();
    let mut introspector = Introspector::new(&catalog);
    let err = infer_relationships(&mut introspector, "refunds", "App").unwrap_err();
    assert!(err.is_table_not_found());
}

#[test]
fn snapshot_capture_matches_live_inference() {
    let catalog = sqlite_catalog(SHOP_DDL).unwrap();
    let snapshot = SchemaSnapshot::capture(&catalog).unwrap();
    let reloaded = SchemaSnapshot::from_json(&snapshot.to_json_pretty().unwrap()).unwrap();

    let mut live = Introspector::new(&catalog);
    let mut offline = Introspector::new(&reloaded);
    assert_eq!(
        infer_relationships(&mut live, "orders", "App").unwrap(),
        infer_relationships(&mut offline, "orders", "App").unwrap()
    );
}
