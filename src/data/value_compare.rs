use crate::data::datatable::CellValue;
use feruca::{Collator, Locale, Tailoring};
use std::cell::RefCell;
use std::cmp::Ordering;

/// Compare two cells for sorting.
///
/// Only string cells are ordered; any pair involving opaque content or a
/// missing cell compares as equal so a stable sort leaves those rows where
/// they were.
pub fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a.as_text(), b.as_text()) {
        (Some(a), Some(b)) => locale_compare(a, b),
        _ => Ordering::Equal,
    }
}

/// Compare optional cells (handling rows that are too short)
pub fn compare_optional_cells(a: Option<&CellValue>, b: Option<&CellValue>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare_cells(a, b),
        _ => Ordering::Equal,
    }
}

thread_local! {
    // Root collation with punctuation kept significant, so "user1@x" sorts
    // before "user10@x". Full ties fall back to code points.
    static COLLATOR: RefCell<Collator> =
        RefCell::new(Collator::new(Tailoring::Cldr(Locale::Root), false, true));
}

/// Locale-aware string comparison using the Unicode Collation Algorithm.
///
/// Accented letters sort with their base letter, punctuation sorts before
/// digits and digits before letters; strings that differ only in case put
/// lowercase first.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| collator.borrow_mut().collate(a, b))
}
