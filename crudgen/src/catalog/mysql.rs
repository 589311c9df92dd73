//! `MySQL` / `MariaDB` catalog queries
//!
//! Everything is read from `INFORMATION_SCHEMA` scoped to `DATABASE()`.
//! Text columns there are declared with binary collations on some servers,
//! hence the `CAST(.. AS CHAR)` on every selected name.

use sqlx::MySqlPool;

use super::{ColumnMetadata, ForeignKeyConstraint, IndexMetadata};
use crate::error::Result;

pub(super) async fn table_exists(pool: &MySqlPool, table: &str) -> Result<bool> {
    let (count,): (i64,) = sqlx::query_as(
        r"
        SELECT COUNT(*) FROM INFORMATION_SCHEMA.TABLES
        WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ?
        ",
    )
    .bind(table)
    .fetch_one(pool)
    .await?;

    Ok(count > 0)
}

pub(super) async fn columns(pool: &MySqlPool, table: &str) -> Result<Vec<ColumnMetadata>> {
    let rows: Vec<(String, String, String)> = sqlx::query_as(
        r"
        SELECT CAST(COLUMN_NAME AS CHAR), CAST(IS_NULLABLE AS CHAR), CAST(COLUMN_TYPE AS CHAR)
        FROM INFORMATION_SCHEMA.COLUMNS
        WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ?
        ORDER BY ORDINAL_POSITION
        ",
    )
    .bind(table)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(name, nullable, column_type)| {
            ColumnMetadata::new(name, nullable.eq_ignore_ascii_case("yes"), &column_type)
        })
        .collect())
}

pub(super) async fn foreign_keys(
    pool: &MySqlPool,
    table: &str,
) -> Result<Vec<ForeignKeyConstraint>> {
    let rows: Vec<(String, String, String, String)> = sqlx::query_as(
        r"
        SELECT CAST(CONSTRAINT_NAME AS CHAR),
               CAST(COLUMN_NAME AS CHAR),
               CAST(CASE
                   WHEN REFERENCED_TABLE_SCHEMA = DATABASE() THEN REFERENCED_TABLE_NAME
                   ELSE CONCAT(REFERENCED_TABLE_SCHEMA, '.', REFERENCED_TABLE_NAME)
               END AS CHAR),
               CAST(REFERENCED_COLUMN_NAME AS CHAR)
        FROM INFORMATION_SCHEMA.KEY_COLUMN_USAGE
        WHERE TABLE_SCHEMA = DATABASE()
          AND TABLE_NAME = ?
          AND REFERENCED_TABLE_NAME IS NOT NULL
        ORDER BY CONSTRAINT_NAME, ORDINAL_POSITION
        ",
    )
    .bind(table)
    .fetch_all(pool)
    .await?;

    let mut constraints: Vec<ForeignKeyConstraint> = Vec::new();
    for (name, column, referenced_table, referenced_column) in rows {
        match constraints.last_mut() {
            Some(last) if last.name.as_deref() == Some(name.as_str()) => {
                last.columns.push(column);
                last.referenced_columns.push(referenced_column);
            }
            _ => constraints.push(ForeignKeyConstraint {
                name: Some(name),
                owning_table: table.to_string(),
                columns: vec![column],
                referenced_table,
                referenced_columns: vec![referenced_column],
            }),
        }
    }
    Ok(constraints)
}

pub(super) async fn tables(pool: &MySqlPool) -> Result<Vec<String>> {
    let rows: Vec<(String,)> = sqlx::query_as(
        r"
        SELECT CAST(TABLE_NAME AS CHAR) FROM INFORMATION_SCHEMA.TABLES
        WHERE TABLE_SCHEMA = DATABASE() AND TABLE_TYPE = 'BASE TABLE'
        ORDER BY TABLE_NAME
        ",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|(name,)| name).collect())
}

pub(super) async fn indexes(pool: &MySqlPool, table: &str) -> Result<Vec<IndexMetadata>> {
    let rows: Vec<(String, i64, Option<String>)> = sqlx::query_as(
        r"
        SELECT CAST(INDEX_NAME AS CHAR), CAST(NON_UNIQUE AS SIGNED), CAST(COLUMN_NAME AS CHAR)
        FROM INFORMATION_SCHEMA.STATISTICS
        WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ?
        ORDER BY INDEX_NAME, SEQ_IN_INDEX
        ",
    )
    .bind(table)
    .fetch_all(pool)
    .await?;

    let mut indexes: Vec<IndexMetadata> = Vec::new();
    for (name, non_unique, column) in rows {
        // Functional key parts have no column name
        let column = column.unwrap_or_else(|| "<expression>".to_string());
        match indexes.last_mut() {
            Some(last) if last.name.as_deref() == Some(name.as_str()) => last.columns.push(column),
            _ => indexes.push(IndexMetadata {
                is_primary: name == "PRIMARY",
                name: Some(name),
                columns: vec![column],
                is_unique: non_unique == 0,
            }),
        }
    }
    Ok(indexes)
}
