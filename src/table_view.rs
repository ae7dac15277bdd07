//! The table view component
//!
//! A `TableView` owns its data and its `ViewState`. Every user interaction
//! arrives as an [`Action`] through [`TableView::dispatch`]; everything shown
//! on screen comes from [`TableView::derive`], which recomputes the sorted,
//! filtered and paged rows from scratch on each call.
//!
//! Pipeline order is fixed: sort, then filter, then paginate.

use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::data::data_view::DataView;
use crate::data::datatable::{DataRow, DataTable};
use crate::state::{SortOrder, ViewState};
use crate::ui::actions::Action;
use crate::ui::pagination::{page_strip, total_pages, PageStripItem};

/// Host-supplied configuration of one table
#[derive(Debug, Clone, Default)]
pub struct TableViewProps {
    pub headers: Vec<String>,
    pub rows: Vec<DataRow>,
    /// Title bar text; also enables the status filter selector
    pub caption: Option<String>,
    /// Header clicks sort when true
    pub sortable: bool,
    /// Rows are split into pages when true
    pub pagination: bool,
}

impl TableViewProps {
    pub fn new(headers: Vec<String>, rows: Vec<DataRow>) -> Self {
        Self {
            headers,
            rows,
            ..Default::default()
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn paginated(mut self, pagination: bool) -> Self {
        self.pagination = pagination;
        self
    }
}

/// Behaviour knobs that are not part of the data contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableViewOptions {
    /// Rows per page
    pub page_size: usize,
    /// Page buttons in the centred window
    pub max_visible_pages: usize,
    /// Header that shows the sort direction indicator
    pub sort_indicator_column: Option<String>,
    /// Values offered by the status filter, in order
    pub status_options: Vec<String>,
}

impl Default for TableViewOptions {
    fn default() -> Self {
        Self {
            page_size: 5,
            max_visible_pages: 4,
            sort_indicator_column: None,
            status_options: vec![
                "Failed".to_string(),
                "Waiting".to_string(),
                "Paid".to_string(),
            ],
        }
    }
}

/// Everything derived from data plus view state for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView {
    /// Source row indices after sort and filter
    pub filtered_rows: Vec<usize>,
    /// Source row indices shown in the body
    pub page_rows: Vec<usize>,
    /// Zero when pagination is off or nothing matches
    pub total_pages: usize,
    pub current_page: usize,
    pub page_strip: Vec<PageStripItem>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    /// Header position and direction for the sort indicator
    pub sort_indicator: Option<(usize, SortOrder)>,
}

#[derive(Debug, Clone)]
pub struct TableView {
    table: Arc<DataTable>,
    caption: Option<String>,
    sortable: bool,
    pagination: bool,
    options: TableViewOptions,
    state: ViewState,
}

impl TableView {
    /// Build a view, padding or truncating rows to the header width
    pub fn new(props: TableViewProps) -> Self {
        let TableViewProps {
            headers,
            rows,
            caption,
            sortable,
            pagination,
        } = props;

        Self {
            table: Arc::new(DataTable::new(headers, rows)),
            caption,
            sortable,
            pagination,
            options: TableViewOptions::default(),
            state: ViewState::default(),
        }
    }

    /// Build a view, failing on duplicate headers or mismatched row widths
    pub fn try_new(props: TableViewProps) -> Result<Self> {
        let TableViewProps {
            headers,
            rows,
            caption,
            sortable,
            pagination,
        } = props;

        Ok(Self {
            table: Arc::new(DataTable::try_new(headers, rows)?),
            caption,
            sortable,
            pagination,
            options: TableViewOptions::default(),
            state: ViewState::default(),
        })
    }

    pub fn with_options(mut self, options: TableViewOptions) -> Self {
        self.options = options;
        self.clamp_page();
        self
    }

    pub fn table(&self) -> &DataTable {
        &self.table
    }

    pub fn headers(&self) -> &[String] {
        self.table.headers()
    }

    pub fn row(&self, index: usize) -> Option<&DataRow> {
        self.table.get_row(index)
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn is_paginated(&self) -> bool {
        self.pagination
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Replace the row data. View state is kept; the page is clamped.
    pub fn set_rows(&mut self, rows: Vec<DataRow>) {
        let headers = self.table.headers().to_vec();
        self.table = Arc::new(DataTable::new(headers, rows));
        if self.clamp_page() {
            debug!(
                target: "pagination",
                "Rows replaced, page clamped to {}",
                self.state.current_page
            );
        }
    }

    /// Apply one user action. Returns true when view state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        trace!(target: "table_view", "Dispatching {:?}", action);
        match action {
            Action::SortBy(header) => self.sort_by(&header),
            Action::GoToPage(page) => self.go_to_page(page),
            Action::PreviousPage => self.previous_page(),
            Action::NextPage => self.next_page(),
            Action::SetStatusFilter(filter) => self.set_status_filter(filter),
            Action::SelectRow(row) => {
                debug!(target: "table_view", "Select pressed on row {}", row);
                false
            }
        }
    }

    fn sort_by(&mut self, header: &str) -> bool {
        if !self.sortable {
            return false;
        }
        if self.table.header_index(header).is_none() {
            debug!(target: "sort", "Ignoring sort on unknown header '{}'", header);
            return false;
        }

        self.state.sort.click(header);
        debug!(
            target: "sort",
            "Sorting on '{}' {}",
            header,
            self.state.sort.order
        );
        self.clamp_page();
        true
    }

    fn go_to_page(&mut self, page: usize) -> bool {
        if !self.pagination {
            return false;
        }
        let total = self.total_pages();
        let target = page.clamp(1, total.max(1));
        if target == self.state.current_page {
            return false;
        }
        debug!(target: "pagination", "Page {} -> {} of {}", self.state.current_page, target, total);
        self.state.current_page = target;
        true
    }

    fn previous_page(&mut self) -> bool {
        if !self.pagination || self.state.current_page <= 1 {
            return false;
        }
        self.state.current_page -= 1;
        true
    }

    fn next_page(&mut self) -> bool {
        if !self.pagination || self.state.current_page >= self.total_pages() {
            return false;
        }
        self.state.current_page += 1;
        true
    }

    fn set_status_filter(&mut self, filter: Option<String>) -> bool {
        // The "All" option arrives as an empty value
        let filter = filter.filter(|value| !value.is_empty());
        let changed = filter != self.state.status_filter || self.state.current_page != 1;

        debug!(target: "filter", "Status filter set to {:?}", filter);
        self.state.status_filter = filter;
        self.state.current_page = 1;
        changed
    }

    /// The filter value after the current one when cycling through
    /// "All" followed by each status option
    pub fn next_status_filter(&self) -> Option<String> {
        let options = &self.options.status_options;
        match &self.state.status_filter {
            None => options.first().cloned(),
            Some(current) => options
                .iter()
                .position(|option| option == current)
                .and_then(|idx| options.get(idx + 1))
                .cloned(),
        }
    }

    /// Sorted and filtered rows, unpaged
    fn filtered_view(&self) -> DataView {
        let mut view = DataView::new(Arc::clone(&self.table));

        if self.sortable {
            if let Some(key) = self.state.sort.key.as_deref() {
                if let Some(column) = self.table.header_index(key) {
                    view = view.sort_by(column, self.state.sort.order);
                }
            }
        }

        view.filter_status(self.state.status_filter.as_deref())
    }

    pub fn total_pages(&self) -> usize {
        if !self.pagination {
            return 0;
        }
        total_pages(
            self.filtered_view().total_row_count(),
            self.options.page_size,
        )
    }

    fn clamp_page(&mut self) -> bool {
        let total = self.total_pages();
        self.state.clamp_page(total)
    }

    /// Recompute everything the renderer needs
    pub fn derive(&self) -> DerivedView {
        let view = self.filtered_view();
        let filtered_rows = view.visible_row_indices().to_vec();
        let current_page = self.state.current_page;

        let (page_rows, total, strip) = if self.pagination {
            let total = total_pages(filtered_rows.len(), self.options.page_size);
            let paged = view.with_page(current_page, self.options.page_size);
            let strip = page_strip(current_page, total, self.options.max_visible_pages);
            (paged.window_row_indices().to_vec(), total, strip)
        } else {
            (filtered_rows.clone(), 0, Vec::new())
        };

        let sort_indicator = if self.sortable && self.state.sort.has_sorted {
            self.options
                .sort_indicator_column
                .as_deref()
                .and_then(|column| self.table.header_index(column))
                .map(|idx| (idx, self.state.sort.order))
        } else {
            None
        };

        DerivedView {
            filtered_rows,
            page_rows,
            total_pages: total,
            current_page,
            page_strip: strip,
            can_go_previous: self.pagination && current_page > 1,
            can_go_next: self.pagination && current_page < total,
            sort_indicator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(rows: usize) -> TableViewProps {
        let statuses = ["Failed", "Waiting", "Paid", "Paid"];
        TableViewProps::new(
            vec!["TIMESTAMP".into(), "NAME".into(), "STATUS".into()],
            (0..rows)
                .map(|i| {
                    DataRow::from_strings([
                        format!("2023-01-{:02}", 20 - i),
                        format!("user{}", i),
                        statuses[i % 4].to_string(),
                    ])
                })
                .collect(),
        )
        .with_caption("Bookings")
        .sortable(true)
        .paginated(true)
    }

    #[test]
    fn test_unsortable_ignores_header_clicks() {
        let mut view = TableView::new(props(3).sortable(false));
        assert!(!view.dispatch(Action::SortBy("NAME".into())));
        assert!(view.state().sort.key.is_none());
        assert_eq!(view.derive().filtered_rows, vec![0, 1, 2]);
    }

    #[test]
    fn test_unknown_header_is_ignored() {
        let mut view = TableView::new(props(3));
        assert!(!view.dispatch(Action::SortBy("NOPE".into())));
        assert!(!view.state().sort.has_sorted);
    }

    #[test]
    fn test_filter_resets_page() {
        let mut view = TableView::new(props(12));
        assert!(view.dispatch(Action::NextPage));
        assert_eq!(view.state().current_page, 2);

        assert!(view.dispatch(Action::SetStatusFilter(Some("Paid".into()))));
        assert_eq!(view.state().current_page, 1);

        // Same filter on page 1 is not a change
        assert!(!view.dispatch(Action::SetStatusFilter(Some("Paid".into()))));
    }

    #[test]
    fn test_empty_filter_means_all() {
        let mut view = TableView::new(props(4));
        view.dispatch(Action::SetStatusFilter(Some("Paid".into())));
        view.dispatch(Action::SetStatusFilter(Some(String::new())));
        assert!(view.state().status_filter.is_none());
        assert_eq!(view.derive().filtered_rows.len(), 4);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut view = TableView::new(props(12));
        assert!(view.dispatch(Action::GoToPage(99)));
        assert_eq!(view.state().current_page, 3);
        assert!(view.dispatch(Action::GoToPage(0)));
        assert_eq!(view.state().current_page, 1);
        assert!(!view.dispatch(Action::GoToPage(1)));
    }

    #[test]
    fn test_navigation_ignored_without_pagination() {
        let mut view = TableView::new(props(12).paginated(false));
        assert!(!view.dispatch(Action::NextPage));
        assert!(!view.dispatch(Action::GoToPage(2)));

        let derived = view.derive();
        assert_eq!(derived.page_rows.len(), 12);
        assert_eq!(derived.total_pages, 0);
        assert!(derived.page_strip.is_empty());
        assert!(!derived.can_go_previous);
        assert!(!derived.can_go_next);
    }

    #[test]
    fn test_set_rows_clamps_page() {
        let mut view = TableView::new(props(12));
        view.dispatch(Action::GoToPage(3));
        view.set_rows(props(6).rows);
        assert_eq!(view.state().current_page, 2);
        assert_eq!(view.derive().page_rows, vec![5]);
    }

    #[test]
    fn test_select_row_changes_nothing() {
        let mut view = TableView::new(props(3));
        let before = view.state().clone();
        assert!(!view.dispatch(Action::SelectRow(1)));
        assert_eq!(view.state(), &before);
    }

    #[test]
    fn test_sort_indicator_follows_configured_column() {
        let options = TableViewOptions {
            sort_indicator_column: Some("TIMESTAMP".into()),
            ..Default::default()
        };
        let mut view = TableView::new(props(3)).with_options(options);
        assert_eq!(view.derive().sort_indicator, None);

        // Indicator appears once any header has been sorted
        view.dispatch(Action::SortBy("NAME".into()));
        assert_eq!(view.derive().sort_indicator, Some((0, SortOrder::Ascending)));

        view.dispatch(Action::SortBy("NAME".into()));
        assert_eq!(
            view.derive().sort_indicator,
            Some((0, SortOrder::Descending))
        );
    }

    #[test]
    fn test_no_indicator_without_configured_column() {
        let mut view = TableView::new(props(3));
        view.dispatch(Action::SortBy("TIMESTAMP".into()));
        assert_eq!(view.derive().sort_indicator, None);
    }

    #[test]
    fn test_cycle_status_filter() {
        let mut view = TableView::new(props(4));
        let mut seen = Vec::new();
        for _ in 0..4 {
            let next = view.next_status_filter();
            seen.push(next.clone());
            view.dispatch(Action::SetStatusFilter(next));
        }
        assert_eq!(
            seen,
            vec![
                Some("Failed".to_string()),
                Some("Waiting".to_string()),
                Some("Paid".to_string()),
                None
            ]
        );
    }

    #[test]
    fn test_try_new_rejects_ragged_rows() {
        let mut bad = props(2);
        bad.rows.push(DataRow::from_strings(["only one"]));
        assert!(TableView::try_new(bad).is_err());
    }
}
