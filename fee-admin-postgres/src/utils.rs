use std::str::FromStr;

use chrono::{DateTime, Utc};
use fee_admin_api::FeeConfig;
use fee_admin_db::models::soft_delete::Tombstone;
use fee_admin_db::repository::error::{RepoResult, RepositoryError};
use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, types::Json, Row};

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> RepoResult<Self>;
}

/// Predicate selecting rows without a tombstone.
///
/// Every read and every write path filters through this, qualified with the
/// table alias used by the query.
pub fn active(alias: &str) -> String {
    format!("{alias}.deleted_at IS NULL")
}

/// Tombstones the active row `$1` of `table`, recording `$2` as the actor.
pub fn soft_delete_sql(table: &str) -> String {
    format!(
        "UPDATE {table} t SET deleted_at = now(), deleted_by = $2, updated_at = now() \
         WHERE t.id = $1 AND {}",
        active("t")
    )
}

/// Escapes `search` for use as an ILIKE substring pattern.
pub fn like_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Maps a failed write onto `UniqueViolation` when a unique index rejected it.
pub fn map_write_error(error: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_error) = &error {
        if db_error.is_unique_violation() {
            let constraint = db_error.constraint().unwrap_or("unique").to_string();
            return RepositoryError::UniqueViolation(constraint);
        }
    }
    RepositoryError::Database(error)
}

/// Retrieves a required `HeaplessString` from a row.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    table: &'static str,
    col_name: &str,
) -> RepoResult<HeaplessString<N>> {
    let s: String = row.try_get(col_name)?;
    HeaplessString::from_str(&s).map_err(|_| too_long::<N>(table, col_name))
}

/// Retrieves an optional `HeaplessString` from a row.
pub fn get_optional_heapless_string<const N: usize>(
    row: &PgRow,
    table: &'static str,
    col_name: &str,
) -> RepoResult<Option<HeaplessString<N>>> {
    let s: Option<String> = row.try_get(col_name)?;
    s.map(|val| HeaplessString::from_str(&val))
        .transpose()
        .map_err(|_| too_long::<N>(table, col_name))
}

/// Retrieves a JSONB fee configuration payload.
pub fn get_fee_config(row: &PgRow, col_name: &str) -> RepoResult<FeeConfig> {
    let Json(config): Json<FeeConfig> = row.try_get(col_name)?;
    Ok(config)
}

/// Retrieves the `deleted_at` / `deleted_by` pair as a tombstone.
pub fn get_tombstone(row: &PgRow, table: &'static str) -> RepoResult<Option<Tombstone>> {
    let deleted_at: Option<DateTime<Utc>> = row.try_get("deleted_at")?;
    match deleted_at {
        Some(deleted_at) => Ok(Some(Tombstone {
            deleted_at,
            deleted_by: get_optional_heapless_string(row, table, "deleted_by")?,
        })),
        None => Ok(None),
    }
}

fn too_long<const N: usize>(table: &'static str, col_name: &str) -> RepositoryError {
    RepositoryError::InvalidRow {
        table,
        reason: format!("value for column '{col_name}' is too long (max {N} bytes)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_wraps_and_escapes() {
        assert_eq!(like_pattern("ann"), "%ann%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn active_is_qualified_by_alias() {
        assert_eq!(active("c"), "c.deleted_at IS NULL");
    }

    #[test]
    fn soft_delete_only_touches_active_rows() {
        let sql = soft_delete_sql("customers");
        assert!(sql.starts_with("UPDATE customers t SET deleted_at = now()"));
        assert!(sql.ends_with("WHERE t.id = $1 AND t.deleted_at IS NULL"));
    }
}
