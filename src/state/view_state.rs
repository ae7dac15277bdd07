use crate::state::sort_state::SortState;

/// Ephemeral view state of one table instance.
///
/// Created with the component and dropped with it. Derived data (sorted,
/// filtered and paged rows) is never stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub sort: SortState,
    /// 1-based page index
    pub current_page: usize,
    /// Exact-match value for the status cell; `None` shows every row
    pub status_filter: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            sort: SortState::default(),
            current_page: 1,
            status_filter: None,
        }
    }
}

impl ViewState {
    /// Bring `current_page` back into `1..=max(total_pages, 1)`.
    /// Returns true if the page moved.
    pub fn clamp_page(&mut self, total_pages: usize) -> bool {
        let clamped = self.current_page.clamp(1, total_pages.max(1));
        let changed = clamped != self.current_page;
        self.current_page = clamped;
        changed
    }
}
