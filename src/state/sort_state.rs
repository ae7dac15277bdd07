use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "asc"),
            SortOrder::Descending => write!(f, "desc"),
        }
    }
}

/// Which header the rows are sorted on, and in which direction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    /// Header label currently sorted on
    pub key: Option<String>,
    pub order: SortOrder,
    /// Set by the first header click and never cleared; drives the
    /// direction indicator
    pub has_sorted: bool,
}

impl SortState {
    /// Apply a header click.
    ///
    /// Clicking the current key flips the direction. Clicking any other
    /// header makes it the key and resets to ascending.
    pub fn click(&mut self, header: &str) {
        self.has_sorted = true;
        if self.is_sorted_on(header) {
            self.order = self.order.toggle();
        } else {
            self.key = Some(header.to_string());
            self.order = SortOrder::Ascending;
        }
    }

    pub fn is_sorted_on(&self, header: &str) -> bool {
        self.key.as_deref() == Some(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_click_sorts_ascending() {
        let mut sort = SortState::default();
        assert!(!sort.has_sorted);

        sort.click("NAME");
        assert_eq!(sort.key.as_deref(), Some("NAME"));
        assert_eq!(sort.order, SortOrder::Ascending);
        assert!(sort.has_sorted);
    }

    #[test]
    fn test_second_click_flips_direction() {
        let mut sort = SortState::default();
        sort.click("NAME");
        sort.click("NAME");
        assert_eq!(sort.key.as_deref(), Some("NAME"));
        assert_eq!(sort.order, SortOrder::Descending);

        sort.click("NAME");
        assert_eq!(sort.order, SortOrder::Ascending);
    }

    #[test]
    fn test_new_key_resets_to_ascending() {
        let mut sort = SortState::default();
        sort.click("NAME");
        sort.click("NAME");
        sort.click("MAIL");
        assert_eq!(sort.key.as_deref(), Some("MAIL"));
        assert_eq!(sort.order, SortOrder::Ascending);
    }
}
