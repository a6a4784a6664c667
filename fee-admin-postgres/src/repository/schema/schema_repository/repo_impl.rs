use async_trait::async_trait;
use fee_admin_api::{ColumnInfo, IndexInfo, TableInfo};
use fee_admin_db::repository::error::RepoResult;
use fee_admin_db::repository::schema_repository::SchemaRepository;
use sqlx::{postgres::PgRow, Row};

use crate::executor::Executor;
use crate::utils::TryFromRow;

/// Reflects the `public` schema through `information_schema` and `pg_catalog`
pub struct SchemaRepositoryImpl {
    pub executor: Executor,
}

impl SchemaRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl SchemaRepository for SchemaRepositoryImpl {
    async fn describe_tables(&self, sample_rows: usize) -> RepoResult<Vec<TableInfo>> {
        Self::describe_tables_impl(self, sample_rows).await
    }
}

/// Quotes an identifier for interpolation into SQL.
pub(super) fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Column row before primary and foreign key flags are attached
pub(super) struct RawColumn {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
    pub default: Option<String>,
}

impl RawColumn {
    pub(super) fn into_column(self, is_pk: bool, fk_ref: Option<String>) -> ColumnInfo {
        ColumnInfo {
            name: self.name,
            data_type: self.data_type.to_uppercase(),
            nullable: self.nullable,
            default: self.default,
            is_pk,
            fk_ref,
        }
    }
}

impl TryFromRow<PgRow> for RawColumn {
    fn try_from_row(row: &PgRow) -> RepoResult<Self> {
        let is_nullable: String = row.try_get("is_nullable")?;
        Ok(RawColumn {
            name: row.try_get("column_name")?,
            data_type: row.try_get("data_type")?,
            nullable: is_nullable == "YES",
            default: row.try_get("column_default")?,
        })
    }
}

impl TryFromRow<PgRow> for IndexInfo {
    fn try_from_row(row: &PgRow) -> RepoResult<Self> {
        Ok(IndexInfo {
            name: row.try_get("index_name")?,
            column_names: row.try_get("column_names")?,
            unique: row.try_get("is_unique")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_ident_escapes_quotes() {
        assert_eq!(quote_ident("customers"), "\"customers\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn data_type_is_reported_upper_case() {
        let raw = RawColumn {
            name: "id".to_string(),
            data_type: "character varying".to_string(),
            nullable: false,
            default: None,
        };
        let column = raw.into_column(true, None);
        assert_eq!(column.data_type, "CHARACTER VARYING");
        assert!(column.is_pk);
    }
}
