use std::collections::{HashMap, HashSet};

use fee_admin_api::{coerce_sample_value, IndexInfo, TableInfo};
use fee_admin_db::repository::error::{RepoResult, RepositoryError};
use serde_json::{Map, Value};
use sqlx::{PgConnection, Row};

use super::repo_impl::{quote_ident, RawColumn, SchemaRepositoryImpl};
use crate::utils::TryFromRow;

const TABLES_QUERY: &str = r#"
    SELECT table_name::text AS table_name
    FROM information_schema.tables
    WHERE table_schema = 'public' AND table_type = 'BASE TABLE'
    ORDER BY table_name
"#;

const COLUMNS_QUERY: &str = r#"
    SELECT column_name::text AS column_name,
           data_type::text AS data_type,
           is_nullable::text AS is_nullable,
           column_default::text AS column_default
    FROM information_schema.columns
    WHERE table_schema = 'public' AND table_name = $1
    ORDER BY ordinal_position
"#;

const PRIMARY_KEY_QUERY: &str = r#"
    SELECT a.attname::text AS column_name
    FROM pg_index i
    JOIN pg_attribute a ON a.attrelid = i.indrelid AND a.attnum = ANY(i.indkey)
    WHERE i.indrelid = format('public.%I', $1::text)::regclass AND i.indisprimary
"#;

const FOREIGN_KEYS_QUERY: &str = r#"
    SELECT kcu.column_name::text AS column_name,
           ccu.table_name::text AS ref_table,
           ccu.column_name::text AS ref_column
    FROM information_schema.table_constraints tc
    JOIN information_schema.key_column_usage kcu
      ON tc.constraint_name = kcu.constraint_name AND tc.table_schema = kcu.table_schema
    JOIN information_schema.constraint_column_usage ccu
      ON ccu.constraint_name = tc.constraint_name AND ccu.table_schema = tc.table_schema
    WHERE tc.constraint_type = 'FOREIGN KEY' AND tc.table_schema = 'public' AND tc.table_name = $1
"#;

const INDEXES_QUERY: &str = r#"
    SELECT ic.relname::text AS index_name,
           ix.indisunique AS is_unique,
           ARRAY(
               SELECT a.attname::text
               FROM unnest(ix.indkey) WITH ORDINALITY AS k(attnum, ord)
               JOIN pg_attribute a ON a.attrelid = ix.indrelid AND a.attnum = k.attnum
               ORDER BY k.ord
           ) AS column_names
    FROM pg_index ix
    JOIN pg_class ic ON ic.oid = ix.indexrelid
    WHERE ix.indrelid = format('public.%I', $1::text)::regclass AND NOT ix.indisprimary
    ORDER BY ic.relname
"#;

impl SchemaRepositoryImpl {
    pub(super) async fn describe_tables_impl(
        repo: &SchemaRepositoryImpl,
        sample_rows: usize,
    ) -> RepoResult<Vec<TableInfo>> {
        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or(RepositoryError::SessionClosed)?;

        let table_names: Vec<String> = sqlx::query_scalar(TABLES_QUERY)
            .fetch_all(&mut **transaction)
            .await?;

        let mut tables = Vec::with_capacity(table_names.len());
        for name in table_names {
            tables.push(describe_table(&mut **transaction, name, sample_rows).await?);
        }
        Ok(tables)
    }
}

async fn describe_table(conn: &mut PgConnection, name: String, sample_rows: usize) -> RepoResult<TableInfo> {
    let raw_columns = sqlx::query(COLUMNS_QUERY)
        .bind(&name)
        .fetch_all(&mut *conn)
        .await?
        .iter()
        .map(RawColumn::try_from_row)
        .collect::<RepoResult<Vec<_>>>()?;

    let primary_key: HashSet<String> = sqlx::query_scalar(PRIMARY_KEY_QUERY)
        .bind(&name)
        .fetch_all(&mut *conn)
        .await?
        .into_iter()
        .collect();

    let mut foreign_keys = HashMap::new();
    for row in sqlx::query(FOREIGN_KEYS_QUERY).bind(&name).fetch_all(&mut *conn).await? {
        let column: String = row.try_get("column_name")?;
        let ref_table: String = row.try_get("ref_table")?;
        let ref_column: String = row.try_get("ref_column")?;
        foreign_keys.insert(column, format!("{ref_table}.{ref_column}"));
    }

    let indexes = sqlx::query(INDEXES_QUERY)
        .bind(&name)
        .fetch_all(&mut *conn)
        .await?
        .iter()
        .map(IndexInfo::try_from_row)
        .collect::<RepoResult<Vec<_>>>()?;

    let quoted = quote_ident(&name);
    let row_count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {quoted}"))
        .fetch_one(&mut *conn)
        .await?;

    let samples: Vec<Value> =
        sqlx::query_scalar(&format!("SELECT row_to_json(t) FROM (SELECT * FROM {quoted} LIMIT $1) t"))
            .bind(sample_rows as i64)
            .fetch_all(&mut *conn)
            .await?;

    let col_names: Vec<String> = raw_columns.iter().map(|c| c.name.clone()).collect();
    let sample_rows = samples.into_iter().map(|row| sample_row(row, &col_names)).collect();

    let columns = raw_columns
        .into_iter()
        .map(|raw| {
            let is_pk = primary_key.contains(&raw.name);
            let fk_ref = foreign_keys.get(&raw.name).cloned();
            raw.into_column(is_pk, fk_ref)
        })
        .collect();

    Ok(TableInfo {
        name,
        columns,
        indexes,
        row_count,
        sample_rows,
        col_names,
    })
}

/// Orders a sampled row by column and coerces every value to a primitive.
fn sample_row(row: Value, col_names: &[String]) -> Map<String, Value> {
    let mut source = match row {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    col_names
        .iter()
        .map(|col| {
            let value = source.remove(col).unwrap_or(Value::Null);
            (col.clone(), coerce_sample_value(value))
        })
        .collect()
}
