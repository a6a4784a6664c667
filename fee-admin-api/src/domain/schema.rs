//! Read-only description of the storage schema, served by the diagnostic endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Number of sample rows returned per table
pub const SCHEMA_SAMPLE_ROWS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub nullable: bool,
    pub default: Option<String>,
    pub is_pk: bool,
    /// `table.column` this column references, if it is a foreign key
    pub fk_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexInfo {
    pub name: Option<String>,
    pub column_names: Vec<String>,
    pub unique: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableInfo {
    pub name: String,
    pub columns: Vec<ColumnInfo>,
    pub indexes: Vec<IndexInfo>,
    pub row_count: i64,
    pub sample_rows: Vec<Map<String, Value>>,
    pub col_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaResponse {
    pub tables: Vec<TableInfo>,
    pub total_tables: usize,
    pub total_rows: i64,
    pub total_columns: usize,
}

impl SchemaResponse {
    /// Build the response and its totals from per-table descriptions
    pub fn from_tables(mut tables: Vec<TableInfo>) -> Self {
        tables.sort_by(|a, b| a.name.cmp(&b.name));
        let total_rows = tables.iter().map(|t| t.row_count).sum();
        let total_columns = tables.iter().map(|t| t.columns.len()).sum();
        Self {
            total_tables: tables.len(),
            total_rows,
            total_columns,
            tables,
        }
    }
}

/// Coerce a sampled value to a transport-safe primitive.
///
/// Null, booleans and numbers pass through; anything else becomes its string form.
pub fn coerce_sample_value(value: Value) -> Value {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => value,
        other => Value::String(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table(name: &str, columns: usize, rows: i64) -> TableInfo {
        TableInfo {
            name: name.to_string(),
            columns: (0..columns)
                .map(|i| ColumnInfo {
                    name: format!("c{i}"),
                    data_type: "TEXT".to_string(),
                    nullable: true,
                    default: None,
                    is_pk: i == 0,
                    fk_ref: None,
                })
                .collect(),
            indexes: Vec::new(),
            row_count: rows,
            sample_rows: Vec::new(),
            col_names: (0..columns).map(|i| format!("c{i}")).collect(),
        }
    }

    #[test]
    fn totals_and_ordering() {
        let response = SchemaResponse::from_tables(vec![table("b", 2, 5), table("a", 3, 1)]);
        assert_eq!(response.total_tables, 2);
        assert_eq!(response.total_rows, 6);
        assert_eq!(response.total_columns, 5);
        assert_eq!(response.tables[0].name, "a");
    }

    #[test]
    fn nested_values_become_strings() {
        assert_eq!(coerce_sample_value(json!(3)), json!(3));
        assert_eq!(coerce_sample_value(json!(null)), json!(null));
        assert_eq!(
            coerce_sample_value(json!({"fee_cents": 0})),
            json!(r#"{"fee_cents":0}"#)
        );
    }

    #[test]
    fn column_type_serializes_as_type() {
        let value = serde_json::to_value(&table("t", 1, 0).columns[0]).unwrap();
        assert_eq!(value["type"], "TEXT");
    }
}
