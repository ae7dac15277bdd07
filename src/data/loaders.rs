use crate::data::datatable::{CellValue, DataRow, DataTable};
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde_json::Value as JsonValue;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Load a CSV file into a DataTable. The first record supplies the headers.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<DataTable> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open CSV file: {:?}", path.as_ref()))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let values = record
            .iter()
            .map(|s| {
                if s.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::text(s)
                }
            })
            .collect();
        rows.push(DataRow::new(values));
    }

    info!(
        target: "table_view",
        "Loaded {} rows from CSV {:?}",
        rows.len(),
        path.as_ref()
    );

    // Ragged records are padded or truncated to the header width
    Ok(DataTable::new(headers, rows))
}

/// Load a JSON file holding an array of objects into a DataTable.
///
/// Headers come from the keys of the first object, in document order.
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<DataTable> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open JSON file: {:?}", path.as_ref()))?;
    let reader = BufReader::new(file);

    // Parse JSON - expect an array of objects
    let json_data: Vec<JsonValue> =
        serde_json::from_reader(reader).with_context(|| "Failed to parse JSON file")?;

    let table = json_values_to_table(&json_data)?;
    info!(
        target: "table_view",
        "Loaded {} rows from JSON {:?}",
        table.row_count(),
        path.as_ref()
    );
    Ok(table)
}

/// Convert already-parsed JSON records into a DataTable
pub fn json_values_to_table(data: &[JsonValue]) -> Result<DataTable> {
    let Some(first) = data.first() else {
        return Ok(DataTable::default());
    };

    let first_obj = first
        .as_object()
        .context("JSON data must be an array of objects")?;
    let headers: Vec<String> = first_obj.keys().cloned().collect();

    let mut rows = Vec::with_capacity(data.len());
    for (idx, item) in data.iter().enumerate() {
        let obj = item
            .as_object()
            .with_context(|| format!("JSON record {} is not an object", idx))?;
        let values = headers
            .iter()
            .map(|name| json_to_cell(obj.get(name)))
            .collect();
        rows.push(DataRow::new(values));
    }

    Ok(DataTable::new(headers, rows))
}

fn json_to_cell(value: Option<&JsonValue>) -> CellValue {
    match value {
        Some(JsonValue::Null) | None => CellValue::Empty,
        Some(JsonValue::Bool(b)) => CellValue::text(b.to_string()),
        Some(JsonValue::Number(n)) => CellValue::text(n.to_string()),
        Some(JsonValue::String(s)) => CellValue::text(s.clone()),
        // Nested values are shown as-is and never sorted
        Some(other @ (JsonValue::Array(_) | JsonValue::Object(_))) => {
            CellValue::content(other.to_string())
        }
    }
}
