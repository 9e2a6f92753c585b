//! Unit tests for paging module.

use flipbook::paging::{spread_count, to_document_page, to_spread_index};

#[test]
fn test_spread_index_bounded_by_spread_count() {
    for total in 1..60 {
        for page in 1..=total {
            let spread = to_spread_index(page);
            assert!(spread <= spread_count(total), "page {} of {}", page, total);
        }
    }
}

#[test]
fn test_cover_and_page_two_round_trip() {
    assert_eq!(to_spread_index(1), 0);
    assert_eq!(to_document_page(0), 1);
    assert_eq!(to_document_page(1), 2);
    assert_eq!(to_spread_index(2), 1);
}

#[test]
fn test_odd_pages_are_canonical() {
    for page in (3..=101).step_by(2) {
        assert_eq!(to_document_page(to_spread_index(page)), page);
    }
}

#[test]
fn test_even_pages_are_lossy() {
    for page in (4..=100).step_by(2) {
        let back = to_document_page(to_spread_index(page));
        assert!(back < page, "page {} mapped back to {}", page, back);
        assert!(back % 2 == 1 || back == 2);
    }
}
