//! Viewer lifecycle - creation, document load and platform notifications.

use super::state::{Viewer, ViewerPhase};
use crate::constants::COVER_PAGE;
use crate::layout::PageLayout;
use crate::settings::ViewerSettings;
use crate::source::DocumentLoadError;
use crate::types::PageSize;
use crate::viewport::Viewport;
use tracing::{debug, error, info};

impl Viewer {
    /// A freshly mounted viewer, waiting for its document.
    pub fn new(settings: &ViewerSettings) -> Self {
        Self {
            phase: ViewerPhase::Loading,
            current_page: COVER_PAGE,
            page_input: COVER_PAGE.to_string(),
            total_pages: 0,
            viewport: Viewport::new(),
            is_fullscreen: false,
            load_error: None,
            layout: PageLayout::new(settings),
            effects: Vec::new(),
        }
    }

    /// The source reported its page count.
    ///
    /// Only honored while loading. An empty document counts as a load
    /// failure since there would be no page to show.
    pub fn on_document_loaded(&mut self, total_pages: u32) {
        if self.phase == ViewerPhase::Ready {
            debug!(total_pages, "document already loaded, ignoring");
            return;
        }
        if total_pages == 0 {
            self.on_document_load_error(DocumentLoadError::EmptyDocument);
            return;
        }

        self.total_pages = total_pages;
        self.current_page = COVER_PAGE;
        self.page_input = COVER_PAGE.to_string();
        self.load_error = None;
        self.phase = ViewerPhase::Ready;
        info!(total_pages, "document loaded");
    }

    /// The source failed to load. The viewer stays in `Loading`.
    pub fn on_document_load_error(&mut self, reason: DocumentLoadError) {
        if self.phase == ViewerPhase::Ready {
            debug!(%reason, "load error after document loaded, ignoring");
            return;
        }
        if self.load_error.as_ref() == Some(&reason) {
            return;
        }
        error!(%reason, "failed to load document");
        self.load_error = Some(reason);
    }

    /// First page measured; size pages after its shape.
    pub fn on_page_measured(&mut self, natural: PageSize) {
        let size = self.layout.measure(natural);
        debug!(width = size.width, height = size.height, "page size set");
    }

    /// Platform confirmed a fullscreen change.
    pub fn on_fullscreen_change(&mut self, is_fullscreen: bool) {
        self.is_fullscreen = is_fullscreen;
    }

    /// Re-derive layout after settings changed, keeping the measured shape.
    pub fn apply_settings(&mut self, settings: &ViewerSettings) {
        self.layout = self.layout.relayout(settings);
    }
}
