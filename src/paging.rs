//! Page-index mapping between document pages and flip-book spreads.
//!
//! The flip-book shows the cover on its own, then two pages per spread.
//! The two conversions are independent functions, not an inverse pair.
//! Odd pages round-trip exactly. Even pages fall one spread behind the
//! odd page before them, so mapping an even page to a spread and back
//! lands on an earlier odd page (or page 2 for page 4).
//!
//! ```text
//! page:    1   2   3   4   5   6   7   8
//! spread:  0   1   2   1   3   2   4   3
//! back:    1   2   3   2   5   3   7   5
//! ```

use crate::types::{DocumentPage, SpreadIndex};

/// Spread index showing `page`.
///
/// Callers must pass a page within `[1, total_pages]`.
#[inline]
pub fn to_spread_index(page: DocumentPage) -> SpreadIndex {
    if page <= 1 {
        return 0;
    }
    (page - 1) / 2 + if page % 2 == 1 { 1 } else { 0 }
}

/// Document page at the left of the spread at `spread`.
///
/// Saturates near `u32::MAX`; the result is then past any real document.
#[inline]
pub fn to_document_page(spread: SpreadIndex) -> DocumentPage {
    match spread {
        0 => 1,
        1 => 2,
        n => n.saturating_mul(2) - 1,
    }
}

/// Highest spread index any page of a `total_pages` document maps to.
///
/// The last page is not always the highest: an even last page sits one
/// spread behind the odd page before it.
pub fn spread_count(total_pages: u32) -> SpreadIndex {
    let last = to_spread_index(total_pages);
    let before_last = to_spread_index(total_pages.saturating_sub(1));
    last.max(before_last)
}
