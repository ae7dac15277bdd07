// Action system for table view state transitions
// Every user interaction is expressed as one of these before it touches state

/// All state transitions a table view accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Header click: sort on this header, flipping direction if already sorted on it
    SortBy(String),

    // Pagination
    GoToPage(usize),
    PreviousPage,
    NextPage,

    /// Status filter selection. `None` is the "All" option.
    SetStatusFilter(Option<String>),

    /// The per-row "Select" button. Placeholder hook with no behaviour.
    SelectRow(usize),
}

/// Commands produced by the interactive host, wrapping table actions
/// together with the host's own navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Table(Action),
    FocusNextHeader,
    FocusPreviousHeader,
    SortFocusedHeader,
    CycleStatusFilter,
    FocusNextRow,
    FocusPreviousRow,
    SelectFocusedRow,
    ToggleLogPanel,
    Quit,
}
