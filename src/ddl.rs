//! DDL rendering
//!
//! Renders the inferred schema as a Hive/Presto `CREATE EXTERNAL TABLE`
//! statement over JSON data. The statement shape is a fixed contract;
//! downstream tooling diffs this output, so the template never varies.

use crate::schema::Schema;

/// SerDe class declared in the generated statement
const JSON_SERDE_CLASS: &str = "org.openx.data.jsonserde.JsonSerDe";

/// Default placeholder for the operator-supplied table name
pub const TABLE_NAME_PLACEHOLDER: &str = "FIXME";

/// Partition columns appended to every generated table.
///
/// These describe the storage path layout, not the record contents, so
/// they are configuration and never inferred from data.
#[derive(Debug, Clone)]
pub struct PartitionSpec {
    columns: Vec<(String, String)>,
}

impl Default for PartitionSpec {
    fn default() -> Self {
        Self {
            columns: vec![
                ("year".to_string(), "int".to_string()),
                ("month".to_string(), "int".to_string()),
                ("day".to_string(), "int".to_string()),
            ],
        }
    }
}

impl PartitionSpec {
    /// Partition columns in declaration order
    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(|(name, ty)| (name.as_str(), ty.as_str()))
    }
}

/// Render the table-creation statement.
///
/// Always succeeds and always produces a well-formed statement, even for
/// an empty schema. Columns render alphabetically (the schema's natural
/// order); partitions render in their configured order after them.
pub fn render(
    schema: &Schema,
    partitions: &PartitionSpec,
    location: &str,
    table_name: &str,
) -> String {
    let columns = column_lines(schema.columns().map(|(name, ty)| (name, ty.to_string())));
    let partition_columns =
        column_lines(partitions.columns().map(|(name, ty)| (name, ty.to_string())));

    format!(
        "CREATE EXTERNAL TABLE IF NOT EXISTS {table_name} (
{columns}
) PARTITIONED BY (
{partition_columns}
)
ROW FORMAT SERDE '{JSON_SERDE_CLASS}'
WITH SERDEPROPERTIES (
  'serialization.format' = '1'
) LOCATION '{location}'
TBLPROPERTIES ('has_encrypted_data'='false');
"
    )
}

/// Format `  name type` lines, comma-separated.
fn column_lines<'a>(columns: impl Iterator<Item = (&'a str, String)>) -> String {
    columns
        .map(|(name, ty)| format!("  {name} {ty}"))
        .collect::<Vec<_>>()
        .join(",\n")
}
