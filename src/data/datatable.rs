use anyhow::{bail, Result};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};

/// A single cell value in the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    /// Plain string cell. The only kind that participates in sorting.
    Text(String),
    /// Opaque renderable content supplied by the host (pre-rendered text,
    /// links, decorated values). Rendered verbatim, never reordered by a sort.
    Content(String),
    /// Missing cell
    Empty,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn content(value: impl Into<String>) -> Self {
        CellValue::Content(value.into())
    }

    /// The string form used for sorting, or `None` when the cell is not a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// A cell is truthy when it has something to show. Empty strings and
    /// missing cells are not.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Text(s) => !s.is_empty(),
            CellValue::Content(_) => true,
            CellValue::Empty => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) | CellValue::Content(s) => write!(f, "{}", s),
            CellValue::Empty => write!(f, ""),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

/// A row of data in the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRow {
    pub values: Vec<CellValue>,
}

impl DataRow {
    pub fn new(values: Vec<CellValue>) -> Self {
        Self { values }
    }

    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|v| CellValue::Text(v.into()))
                .collect(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.values.get(index)
    }

    /// The status cell is, by convention, the last cell of the row
    pub fn status(&self) -> Option<&CellValue> {
        self.values.last()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Headers plus rows, with every row as wide as the header list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTable {
    headers: Vec<String>,
    rows: Vec<DataRow>,
}

impl DataTable {
    /// Build a table, padding short rows with `Empty`.
    ///
    /// Long rows drop their surplus middle cells but keep the last one, so
    /// the status cell survives. Duplicate headers are kept as given; lookups
    /// by name resolve to the first matching position.
    pub fn new(headers: Vec<String>, rows: Vec<DataRow>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(idx, mut row)| {
                if row.len() != width {
                    warn!(
                        target: "table_view",
                        "Row {} has {} cells but table has {} headers; adjusting",
                        idx,
                        row.len(),
                        width
                    );
                    fit_row(&mut row.values, width);
                }
                row
            })
            .collect::<Vec<_>>();

        debug!(
            target: "table_view",
            "Built table with {} headers and {} rows",
            width,
            rows.len()
        );

        Self { headers, rows }
    }

    /// Build a table, rejecting duplicate headers and rows of the wrong width
    pub fn try_new(headers: Vec<String>, rows: Vec<DataRow>) -> Result<Self> {
        let mut seen = HashSet::new();
        for header in &headers {
            if !seen.insert(header.as_str()) {
                bail!("Duplicate header '{}'", header);
            }
        }

        for (idx, row) in rows.iter().enumerate() {
            if row.len() != headers.len() {
                bail!(
                    "Row {} has {} values but table has {} columns",
                    idx,
                    row.len(),
                    headers.len()
                );
            }
        }

        Ok(Self { headers, rows })
    }

    /// Convenience constructor for all-text data
    pub fn from_string_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self::new(headers, rows.into_iter().map(DataRow::from_strings).collect())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    /// Position of the first header with this label
    pub fn header_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get_row(&self, row: usize) -> Option<&DataRow> {
        self.rows.get(row)
    }

    /// Get a value at specific row and column
    pub fn get_value(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row)?.get(col)
    }
}

/// Pad with `Empty`, or drop cells before the last one until the row fits
fn fit_row(values: &mut Vec<CellValue>, width: usize) {
    if values.len() < width {
        values.resize(width, CellValue::Empty);
    } else if width == 0 {
        values.clear();
    } else {
        let status = values.pop();
        values.truncate(width - 1);
        values.extend(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = DataTable::new(
            headers(&["A", "B", "C"]),
            vec![DataRow::from_strings(["x"])],
        );
        let row = table.get_row(0).unwrap();
        assert_eq!(row.len(), 3);
        assert_eq!(row.get(1), Some(&CellValue::Empty));
        assert_eq!(row.status(), Some(&CellValue::Empty));
    }

    #[test]
    fn test_long_rows_keep_status_cell() {
        let table = DataTable::new(
            headers(&["NAME", "STATUS"]),
            vec![DataRow::from_strings(["Alice", "extra", "Paid"])],
        );
        assert_eq!(
            table.get_row(0).unwrap().values,
            vec![CellValue::text("Alice"), CellValue::text("Paid")]
        );

        let single = DataTable::new(
            headers(&["STATUS"]),
            vec![DataRow::from_strings(["x", "y", "Failed"])],
        );
        assert_eq!(single.get_row(0).unwrap().values, vec![CellValue::text("Failed")]);
    }

    #[test]
    fn test_rows_without_headers_are_emptied() {
        let table = DataTable::new(Vec::new(), vec![DataRow::from_strings(["x"])]);
        assert!(table.get_row(0).unwrap().is_empty());
    }

    #[test]
    fn test_try_new_rejects_width_mismatch() {
        let err = DataTable::try_new(headers(&["A", "B"]), vec![DataRow::from_strings(["x"])])
            .unwrap_err();
        assert!(err.to_string().contains("Row 0 has 1 values"));
    }

    #[test]
    fn test_try_new_rejects_duplicate_headers() {
        let err = DataTable::try_new(headers(&["A", "A"]), vec![]).unwrap_err();
        assert!(err.to_string().contains("Duplicate header 'A'"));
    }

    #[test]
    fn test_header_index_uses_first_match() {
        let table = DataTable::new(headers(&["A", "B", "A"]), vec![]);
        assert_eq!(table.header_index("A"), Some(0));
        assert_eq!(table.header_index("missing"), None);
    }

    #[test]
    fn test_truthiness() {
        assert!(CellValue::text("Paid").is_truthy());
        assert!(!CellValue::text("").is_truthy());
        assert!(!CellValue::Empty.is_truthy());
        assert!(CellValue::content("<b>x</b>").is_truthy());
    }
}
