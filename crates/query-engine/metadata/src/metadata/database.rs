//! Schema snapshot types for the tables the assistant may query.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A snapshot of the database schema, rebuilt for every request.
///
/// The rendering of this type is handed to the text generator as context, and
/// the set of table names is what query plans are validated against.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct SchemaDescription {
    pub tables: Vec<TableInfo>,
    /// Set when introspection failed. The rendering then carries only this
    /// note, so prompting is never left without schema context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A single table and its columns, in discovery order.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
pub struct TableInfo {
    pub name: String,
    pub columns: Vec<ColumnInfo>,
}

/// A column and its declared data type.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: String,
}

impl SchemaDescription {
    pub fn empty() -> Self {
        SchemaDescription {
            tables: vec![],
            error: None,
        }
    }

    /// A degraded description carrying only an error note.
    pub fn from_error(message: String) -> Self {
        SchemaDescription {
            tables: vec![],
            error: Some(message),
        }
    }

    /// Whether a table of this name was discovered.
    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.iter().any(|table| table.name == name)
    }

    /// Render the schema as the text block used for prompting.
    pub fn render(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Error fetching schema: {error}");
        }

        let mut rendered = String::new();
        for table in &self.tables {
            rendered.push_str(&format!("Table: {}\n", table.name));
            for column in &table.columns {
                rendered.push_str(&format!("  - {} ({})\n", column.name, column.data_type));
            }
            rendered.push('\n');
        }
        rendered
    }
}
