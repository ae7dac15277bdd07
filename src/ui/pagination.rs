//! Page-number strip for the pagination bar
//!
//! A window of at most `max_visible` page buttons is centred on the current
//! page. Page 1 and the last page get their own buttons when they fall
//! outside the window, with an ellipsis between an edge button and the
//! window when at least one page is skipped.

/// One entry of the pagination strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStripItem {
    Page { number: usize, is_current: bool },
    Ellipsis,
}

impl PageStripItem {
    pub fn page(number: usize, current: usize) -> Self {
        PageStripItem::Page {
            number,
            is_current: number == current,
        }
    }

    pub fn page_number(&self) -> Option<usize> {
        match self {
            PageStripItem::Page { number, .. } => Some(*number),
            PageStripItem::Ellipsis => None,
        }
    }
}

/// Total pages for `row_count` rows, `ceil(row_count / page_size)`
pub fn total_pages(row_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    row_count.div_ceil(page_size)
}

/// Inclusive `(start, end)` of the centred window.
///
/// With zero pages the window is `(1, 0)`, i.e. empty.
pub fn page_window(current: usize, total: usize, max_visible: usize) -> (usize, usize) {
    let max_visible = max_visible.max(1);
    if total <= max_visible {
        return (1, total);
    }

    let half = max_visible / 2;
    let mut start = current.saturating_sub(half).max(1);
    let mut end = start + max_visible - 1;

    // Re-anchor backwards when the window runs off the end
    if end > total {
        end = total;
        start = (end + 1).saturating_sub(max_visible).max(1);
    }

    (start, end)
}

/// Build the full strip: leading edge, window, trailing edge
pub fn page_strip(current: usize, total: usize, max_visible: usize) -> Vec<PageStripItem> {
    let (start, end) = page_window(current, total, max_visible);
    let mut items = Vec::new();

    if start > 1 {
        items.push(PageStripItem::page(1, current));
    }
    if start > 2 {
        items.push(PageStripItem::Ellipsis);
    }

    for number in start..=end {
        items.push(PageStripItem::page(number, current));
    }

    if end + 1 < total {
        items.push(PageStripItem::Ellipsis);
    }
    if end < total {
        items.push(PageStripItem::page(total, current));
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageStripItem::Ellipsis;

    fn render(items: &[PageStripItem]) -> String {
        items
            .iter()
            .map(|item| match item {
                PageStripItem::Page {
                    number,
                    is_current: true,
                } => format!("[{}]", number),
                PageStripItem::Page { number, .. } => number.to_string(),
                Ellipsis => "…".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(12, 5), 3);
        assert_eq!(total_pages(3, 0), 0);
    }

    #[test]
    fn test_few_pages_show_all() {
        assert_eq!(render(&page_strip(1, 3, 4)), "[1] 2 3");
        assert_eq!(render(&page_strip(2, 4, 4)), "1 [2] 3 4");
    }

    #[test]
    fn test_zero_pages_is_empty() {
        assert_eq!(page_window(1, 0, 4), (1, 0));
        assert!(page_strip(1, 0, 4).is_empty());
    }

    #[test]
    fn test_window_at_start() {
        assert_eq!(page_window(1, 12, 4), (1, 4));
        assert_eq!(render(&page_strip(1, 12, 4)), "[1] 2 3 4 … 12");
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(page_window(6, 12, 4), (4, 7));
        assert_eq!(render(&page_strip(6, 12, 4)), "1 … 4 5 [6] 7 … 12");
    }

    #[test]
    fn test_window_reanchors_at_end() {
        assert_eq!(page_window(12, 12, 4), (9, 12));
        assert_eq!(render(&page_strip(12, 12, 4)), "1 … 9 10 11 [12]");
        assert_eq!(render(&page_strip(11, 12, 4)), "1 … 9 10 [11] 12");
    }

    #[test]
    fn test_no_ellipsis_for_adjacent_edges() {
        // Window 2..=5 touches both edges
        assert_eq!(render(&page_strip(4, 6, 4)), "1 2 3 [4] 5 6");
        // Window 1..=4 of 5 pages: last page adjacent
        assert_eq!(render(&page_strip(3, 5, 4)), "1 2 [3] 4 5");
    }

    #[test]
    fn test_single_skipped_page_gets_ellipsis() {
        assert_eq!(render(&page_strip(3, 6, 4)), "1 2 [3] 4 … 6");
    }

    #[test]
    fn test_strip_size_is_bounded() {
        for total in 0..40 {
            for current in 1..=total.max(1) {
                let strip = page_strip(current, total, 4);
                let pages = strip.iter().filter(|i| i.page_number().is_some()).count();
                let ellipses = strip.len() - pages;
                assert!(pages <= 6, "total={} current={}", total, current);
                assert!(ellipses <= 2, "total={} current={}", total, current);
                assert_eq!(
                    strip
                        .iter()
                        .filter(|i| matches!(i, PageStripItem::Page { is_current: true, .. }))
                        .count(),
                    usize::from(total > 0)
                );
            }
        }
    }
}
