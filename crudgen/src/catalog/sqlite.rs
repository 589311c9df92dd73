//! `SQLite` catalog queries
//!
//! Uses `sqlite_master` and the `pragma_*` table-valued functions.
//! `pragma_foreign_key_list` numbers constraints in reverse declaration
//! order, so rows are read back by descending id. Referenced tables are
//! reported under the name `sqlite_master` lists them by.

use sqlx::SqlitePool;

use super::{ColumnMetadata, ForeignKeyConstraint, IndexMetadata};
use crate::error::Result;

pub(super) async fn table_exists(pool: &SqlitePool, table: &str) -> Result<bool> {
    let (count,): (i64,) = sqlx::query_as(
        r"
        SELECT COUNT(*) FROM sqlite_master
        WHERE type = 'table' AND name = ?
        ",
    )
    .bind(table)
    .fetch_one(pool)
    .await?;

    Ok(count > 0)
}

pub(super) async fn columns(pool: &SqlitePool, table: &str) -> Result<Vec<ColumnMetadata>> {
    let rows: Vec<(String, String, i64, i64)> = sqlx::query_as(
        r#"
        SELECT name, type, "notnull", pk FROM pragma_table_info(?)
        ORDER BY cid
        "#,
    )
    .bind(table)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(name, declared, not_null, pk)| {
            ColumnMetadata::new(name, not_null == 0 && pk == 0, &declared)
        })
        .collect())
}

pub(super) async fn foreign_keys(
    pool: &SqlitePool,
    table: &str,
) -> Result<Vec<ForeignKeyConstraint>> {
    let rows: Vec<(i64, String, String, Option<String>)> = sqlx::query_as(
        r#"
        SELECT id, "table", "from", "to" FROM pragma_foreign_key_list(?)
        ORDER BY id DESC, seq
        "#,
    )
    .bind(table)
    .fetch_all(pool)
    .await?;

    let mut constraints: Vec<(i64, ForeignKeyConstraint, bool)> = Vec::new();
    for (id, referenced_table, from, to) in rows {
        let implicit = to.is_none();
        match constraints.last_mut() {
            Some((last_id, constraint, last_implicit)) if *last_id == id => {
                constraint.columns.push(from);
                constraint.referenced_columns.extend(to);
                *last_implicit |= implicit;
            }
            _ => {
                constraints.push((
                    id,
                    ForeignKeyConstraint {
                        name: None,
                        owning_table: table.to_string(),
                        columns: vec![from],
                        referenced_table,
                        referenced_columns: to.into_iter().collect(),
                    },
                    implicit,
                ));
            }
        }
    }

    let mut resolved = Vec::with_capacity(constraints.len());
    for (_, mut constraint, implicit) in constraints {
        constraint.referenced_table = listed_name(pool, &constraint.referenced_table).await?;
        // `REFERENCES parent` without a column list targets the parent's primary key
        if implicit {
            constraint.referenced_columns =
                primary_key_columns(pool, &constraint.referenced_table).await?;
        }
        resolved.push(constraint);
    }
    Ok(resolved)
}

pub(super) async fn tables(pool: &SqlitePool) -> Result<Vec<String>> {
    let rows: Vec<(String,)> = sqlx::query_as(
        r"
        SELECT name FROM sqlite_master
        WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
        ORDER BY name
        ",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|(name,)| name).collect())
}

pub(super) async fn indexes(pool: &SqlitePool, table: &str) -> Result<Vec<IndexMetadata>> {
    let listed: Vec<(String, i64, String)> = sqlx::query_as(
        r#"
        SELECT name, "unique", origin FROM pragma_index_list(?)
        ORDER BY seq
        "#,
    )
    .bind(table)
    .fetch_all(pool)
    .await?;

    let mut indexes = Vec::with_capacity(listed.len() + 1);
    for (name, unique, origin) in listed {
        let columns: Vec<(Option<String>,)> = sqlx::query_as(
            r"
            SELECT name FROM pragma_index_info(?)
            ORDER BY seqno
            ",
        )
        .bind(&name)
        .fetch_all(pool)
        .await?;

        indexes.push(IndexMetadata {
            name: Some(name),
            columns: columns
                .into_iter()
                .map(|(column,)| column.unwrap_or_else(|| "<expression>".to_string()))
                .collect(),
            is_unique: unique != 0,
            is_primary: origin == "pk",
        });
    }

    // An INTEGER PRIMARY KEY aliases the rowid and has no index of its own
    if !indexes.iter().any(|index| index.is_primary) {
        let rowid: Vec<(String, String)> = sqlx::query_as(
            r"
            SELECT name, type FROM pragma_table_info(?)
            WHERE pk > 0
            ",
        )
        .bind(table)
        .fetch_all(pool)
        .await?;

        if let [(column, declared)] = rowid.as_slice() {
            if declared.eq_ignore_ascii_case("integer") {
                indexes.push(IndexMetadata::primary(&[column.as_str()]));
            }
        }
    }

    Ok(indexes)
}

/// The name `tables` lists for `table`
///
/// `pragma_foreign_key_list` reports the parent table as spelled in the
/// `REFERENCES` clause, while table names match case-insensitively. Parents
/// that do not exist keep their spelling.
async fn listed_name(pool: &SqlitePool, table: &str) -> Result<String> {
    let listed: Option<(String,)> = sqlx::query_as(
        r"
        SELECT name FROM sqlite_master
        WHERE type = 'table' AND name = ? COLLATE NOCASE
        ",
    )
    .bind(table)
    .fetch_optional(pool)
    .await?;

    Ok(listed.map_or_else(|| table.to_string(), |(name,)| name))
}

async fn primary_key_columns(pool: &SqlitePool, table: &str) -> Result<Vec<String>> {
    let rows: Vec<(String,)> = sqlx::query_as(
        r"
        SELECT name FROM pragma_table_info(?)
        WHERE pk > 0
        ORDER BY pk
        ",
    )
    .bind(table)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|(name,)| name).collect())
}
