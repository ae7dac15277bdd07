use std::sync::Arc;
use tracing::trace;

use crate::data::datatable::{DataRow, DataTable};
use crate::data::value_compare::compare_optional_cells;
use crate::state::SortOrder;

/// A view over a DataTable that can sort, filter, and page rows
/// without modifying the underlying data
#[derive(Debug, Clone)]
pub struct DataView {
    /// The underlying immutable data source
    source: Arc<DataTable>,

    /// Row indices that are visible (after sorting and filtering)
    visible_rows: Vec<usize>,

    /// Limit and offset for pagination
    limit: Option<usize>,
    offset: usize,
}

impl DataView {
    /// Create a new view showing all data from the table
    pub fn new(source: Arc<DataTable>) -> Self {
        let row_count = source.row_count();

        Self {
            source,
            visible_rows: (0..row_count).collect(),
            limit: None,
            offset: 0,
        }
    }

    /// Stable sort of the visible rows by a column.
    ///
    /// Rows whose cells cannot be compared keep their relative order. An
    /// out-of-range column leaves the view untouched.
    pub fn sort_by(mut self, column_index: usize, order: SortOrder) -> Self {
        if column_index >= self.source.column_count() {
            trace!(target: "sort", "Column {} out of range, not sorting", column_index);
            return self;
        }

        let source = &self.source;
        self.visible_rows.sort_by(|&a, &b| {
            let val_a = source.get_value(a, column_index);
            let val_b = source.get_value(b, column_index);
            let cmp = compare_optional_cells(val_a, val_b);

            match order {
                SortOrder::Ascending => cmp,
                SortOrder::Descending => cmp.reverse(),
            }
        });

        self
    }

    /// Filter rows based on a predicate
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&DataRow) -> bool,
    {
        let source = &self.source;
        self.visible_rows.retain(|&row_idx| {
            source
                .get_row(row_idx)
                .map(|row| predicate(row))
                .unwrap_or(false)
        });
        self
    }

    /// Keep rows whose status cell, as text, equals `status` exactly.
    /// `None` keeps every row.
    pub fn filter_status(self, status: Option<&str>) -> Self {
        match status {
            None => self,
            Some(status) => self.filter(|row| {
                row.status()
                    .map(|cell| cell.to_string() == status)
                    .unwrap_or(false)
            }),
        }
    }

    /// Apply limit and offset
    pub fn with_limit(mut self, limit: usize, offset: usize) -> Self {
        self.limit = Some(limit);
        self.offset = offset;
        self
    }

    /// Restrict the view to one 1-based page of `page_size` rows
    pub fn with_page(self, page: usize, page_size: usize) -> Self {
        let offset = page.saturating_sub(1).saturating_mul(page_size);
        self.with_limit(page_size, offset)
    }

    /// Get the number of visible rows
    pub fn row_count(&self) -> usize {
        let available = self.visible_rows.len().saturating_sub(self.offset);

        // Apply limit if set
        match self.limit {
            Some(limit) => available.min(limit),
            None => available,
        }
    }

    /// Number of rows after sorting and filtering, ignoring the page window
    pub fn total_row_count(&self) -> usize {
        self.visible_rows.len()
    }

    /// Get a row by index (respecting limit/offset)
    pub fn get_row(&self, index: usize) -> Option<&DataRow> {
        if index >= self.row_count() {
            return None;
        }
        let row_idx = *self.visible_rows.get(index + self.offset)?;
        self.source.get_row(row_idx)
    }

    /// Get all visible rows (respecting limit/offset)
    pub fn get_rows(&self) -> Vec<&DataRow> {
        (0..self.row_count())
            .filter_map(|i| self.get_row(i))
            .collect()
    }

    /// Source indices of the rows in the current window
    pub fn window_row_indices(&self) -> &[usize] {
        let start = self.offset.min(self.visible_rows.len());
        let end = start + self.row_count();
        &self.visible_rows[start..end]
    }

    /// Get visible row indices (before limit/offset)
    pub fn visible_row_indices(&self) -> &[usize] {
        &self.visible_rows
    }
}
