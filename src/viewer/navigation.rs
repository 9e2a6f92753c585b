//! Page navigation - jumps, forward/back steps, page input and flip sync.
//!
//! Invalid requests are absorbed: an out-of-range page or unparsable input
//! leaves the state untouched and is only logged at debug level.
//!
//! Steps are asymmetric. Forward goes from the cover straight to page 6
//! and then by 4 pages; back goes by 2 pages, with page 2 returning to the
//! cover.

use super::state::{Viewer, ViewerEffect, ViewerPhase};
use crate::constants::{BACKWARD_STEP, COVER_PAGE, FIRST_STEP_FROM_COVER, FORWARD_STEP};
use crate::paging::{spread_count, to_document_page, to_spread_index};
use crate::types::{DocumentPage, SpreadIndex};
use tracing::debug;

/// Read a page number the way a typed-in value is read: leading
/// whitespace skipped, optional sign, then the leading run of digits.
/// Anything after the digits is ignored.
pub fn parse_page_number(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let value: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -value } else { value })
}

impl Viewer {
    fn contains_page(&self, page: i64) -> bool {
        page >= 1 && page <= i64::from(self.total_pages)
    }

    fn sync_page(&mut self, page: DocumentPage) {
        self.current_page = page;
        self.page_input = page.to_string();
    }

    /// Jump to `target` and turn the display to its spread.
    ///
    /// Returns false (and changes nothing) unless ready and in range.
    pub fn go_to_page(&mut self, target: DocumentPage) -> bool {
        if self.phase != ViewerPhase::Ready || !self.contains_page(i64::from(target)) {
            debug!(target, total = self.total_pages, "ignoring page jump");
            return false;
        }
        self.sync_page(target);
        self.effects.push(ViewerEffect::FlipTo {
            spread: to_spread_index(target),
        });
        true
    }

    /// Edit the page input buffer without navigating.
    pub fn set_page_input(&mut self, text: impl Into<String>) {
        self.page_input = text.into();
    }

    /// Submit typed page text. Rejected text stays in the buffer.
    pub fn submit_page_input(&mut self, text: &str) -> bool {
        self.page_input = text.to_string();
        match parse_page_number(text) {
            Some(page) if self.contains_page(page) => self.go_to_page(page as DocumentPage),
            _ => {
                debug!(input = text, "ignoring page input");
                false
            }
        }
    }

    /// Submit whatever is currently in the page input buffer.
    pub fn submit_current_input(&mut self) -> bool {
        let text = self.page_input.clone();
        self.submit_page_input(&text)
    }

    pub fn can_step_next(&self) -> bool {
        self.phase == ViewerPhase::Ready && self.current_page != self.total_pages
    }

    pub fn can_step_prev(&self) -> bool {
        self.phase == ViewerPhase::Ready && self.current_page != COVER_PAGE
    }

    pub fn step_next(&mut self) -> bool {
        if !self.can_step_next() {
            return false;
        }
        let target = if self.current_page == COVER_PAGE {
            FIRST_STEP_FROM_COVER
        } else {
            self.total_pages.min(self.current_page.saturating_add(FORWARD_STEP))
        };
        self.go_to_page(target)
    }

    pub fn step_prev(&mut self) -> bool {
        if !self.can_step_prev() {
            return false;
        }
        let target = if self.current_page == 2 {
            COVER_PAGE
        } else {
            self.current_page.saturating_sub(BACKWARD_STEP).max(COVER_PAGE)
        };
        self.go_to_page(target)
    }

    /// The display was flipped by the user directly on the book.
    ///
    /// Syncs page and input to the flipped-to spread without queuing a
    /// flip of our own.
    pub fn on_external_flip(&mut self, spread: SpreadIndex) -> bool {
        if self.phase != ViewerPhase::Ready {
            return false;
        }
        if spread > spread_count(self.total_pages) {
            debug!(spread, total = self.total_pages, "flip past last spread");
            return false;
        }
        let page = to_document_page(spread);
        if !self.contains_page(i64::from(page)) {
            debug!(spread, page, "flip past end of document");
            return false;
        }
        self.sync_page(page);
        true
    }
}
