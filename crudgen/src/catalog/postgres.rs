//! `PostgreSQL` catalog queries
//!
//! Relations are resolved with `to_regclass`, so a missing table yields no
//! rows instead of an error. Tables outside the current schema are listed as
//! `schema.table`, unquoted, and referenced tables are reported the same way
//! so they compare equal to the listing.

use sqlx::PgPool;

use super::{ColumnMetadata, ForeignKeyConstraint, IndexMetadata};
use crate::error::Result;

pub(super) async fn table_exists(pool: &PgPool, table: &str) -> Result<bool> {
    let (exists,): (bool,) = sqlx::query_as("SELECT to_regclass($1) IS NOT NULL")
        .bind(quote_relation(table))
        .fetch_one(pool)
        .await?;

    Ok(exists)
}

pub(super) async fn columns(pool: &PgPool, table: &str) -> Result<Vec<ColumnMetadata>> {
    let rows: Vec<(String, bool, String)> = sqlx::query_as(
        r"
        SELECT a.attname::text, NOT a.attnotnull, t.typname::text
        FROM pg_attribute a
        JOIN pg_type t ON t.oid = a.atttypid
        WHERE a.attrelid = to_regclass($1)
          AND a.attnum > 0
          AND NOT a.attisdropped
        ORDER BY a.attnum
        ",
    )
    .bind(quote_relation(table))
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(name, nullable, type_name)| ColumnMetadata::new(name, nullable, &type_name))
        .collect())
}

pub(super) async fn foreign_keys(pool: &PgPool, table: &str) -> Result<Vec<ForeignKeyConstraint>> {
    let rows: Vec<(String, Vec<String>, String, Vec<String>)> = sqlx::query_as(
        r"
        SELECT con.conname::text,
               ARRAY(
                   SELECT a.attname::text
                   FROM unnest(con.conkey) WITH ORDINALITY AS k(attnum, ord)
                   JOIN pg_attribute a ON a.attrelid = con.conrelid AND a.attnum = k.attnum
                   ORDER BY k.ord
               ),
               CASE
                   WHEN n.nspname = current_schema() THEN c.relname::text
                   ELSE n.nspname::text || '.' || c.relname::text
               END,
               ARRAY(
                   SELECT a.attname::text
                   FROM unnest(con.confkey) WITH ORDINALITY AS k(attnum, ord)
                   JOIN pg_attribute a ON a.attrelid = con.confrelid AND a.attnum = k.attnum
                   ORDER BY k.ord
               )
        FROM pg_constraint con
        JOIN pg_class c ON c.oid = con.confrelid
        JOIN pg_namespace n ON n.oid = c.relnamespace
        WHERE con.contype = 'f'
          AND con.conrelid = to_regclass($1)
        ORDER BY con.oid
        ",
    )
    .bind(quote_relation(table))
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(
            |(name, columns, referenced_table, referenced_columns)| ForeignKeyConstraint {
                name: Some(name),
                owning_table: table.to_string(),
                columns,
                referenced_table,
                referenced_columns,
            },
        )
        .collect())
}

pub(super) async fn tables(pool: &PgPool) -> Result<Vec<String>> {
    let rows: Vec<(String,)> = sqlx::query_as(
        r"
        SELECT CASE
                   WHEN table_schema::text = current_schema() THEN table_name::text
                   ELSE table_schema::text || '.' || table_name::text
               END
        FROM information_schema.tables
        WHERE table_type = 'BASE TABLE'
          AND table_schema NOT IN ('pg_catalog', 'information_schema')
        ORDER BY table_schema::text = current_schema() DESC, table_schema, table_name
        ",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|(name,)| name).collect())
}

pub(super) async fn indexes(pool: &PgPool, table: &str) -> Result<Vec<IndexMetadata>> {
    let rows: Vec<(String, bool, bool, Vec<String>)> = sqlx::query_as(
        r"
        SELECT c.relname::text,
               i.indisunique,
               i.indisprimary,
               ARRAY(
                   SELECT pg_get_indexdef(i.indexrelid, k, true)
                   FROM generate_series(1, i.indnkeyatts::int) AS k
                   ORDER BY k
               )
        FROM pg_index i
        JOIN pg_class c ON c.oid = i.indexrelid
        WHERE i.indrelid = to_regclass($1)
        ORDER BY c.relname
        ",
    )
    .bind(quote_relation(table))
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(name, is_unique, is_primary, columns)| IndexMetadata {
            name: Some(name),
            columns,
            is_unique,
            is_primary,
        })
        .collect())
}

/// Quote a possibly schema-qualified relation name for `to_regclass`
fn quote_relation(table: &str) -> String {
    table
        .splitn(2, '.')
        .map(|part| format!("\"{}\"", part.trim_matches('"').replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(".")
}
