//! State management components
//!
//! Per-instance view state owned by a `TableView`. Nothing here is shared
//! between instances or persisted.

pub mod sort_state;
pub mod view_state;

pub use sort_state::{SortOrder, SortState};
pub use view_state::ViewState;
