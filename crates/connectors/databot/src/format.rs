//! Turn tabular lookup results into a short human-readable summary.

use indexmap::IndexMap;
use serde_json::Value;

use query_engine_execution::query::Rows;
use query_engine_translation::translation::plan::Intent;

const NO_RECORDS: &str = "No records found";

/// Summarize rows according to the intent that produced them.
pub fn summarize(intent: Intent, rows: &Rows) -> String {
    match intent {
        Intent::CountRecords => rows
            .first()
            .and_then(|row| row.get("count"))
            .map(render_value)
            .unwrap_or_else(|| "0".to_string()),
        Intent::CheckExistence => rows
            .first()
            .map(flatten_row)
            .unwrap_or_else(|| NO_RECORDS.to_string()),
        Intent::GetDetails => match rows.as_slice() {
            [] => NO_RECORDS.to_string(),
            [row] => flatten_row(row),
            rows => {
                let mut result = format!("Found {} records:\n", rows.len());
                for (index, row) in rows.iter().enumerate() {
                    result.push_str(&format!("{}. {}\n", index + 1, flatten_row(row)));
                }
                result
            }
        },
    }
}

/// Flatten a row as `key: value, key: value`.
fn flatten_row(row: &IndexMap<String, Value>) -> String {
    row.iter()
        .map(|(column, value)| format!("{column}: {}", render_value(value)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Strings render bare; everything else uses its JSON text.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
