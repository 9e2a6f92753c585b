//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestViewerBuilder` - Builder pattern for creating viewers in a given state
//! - `blank_session()` - A session over blank pages with a headless platform

use flipbook::fullscreen::{FullscreenNotifier, HeadlessFullscreen};
use flipbook::settings::ViewerSettings;
use flipbook::source::BlankSource;
use flipbook::{Viewer, ViewerSession};

// ============================================================================
// TestViewerBuilder - Builder pattern for creating test viewers
// ============================================================================

/// Builder for creating test viewers.
///
/// # Example
/// ```ignore
/// let viewer = TestViewerBuilder::new()
///     .with_pages(10)
///     .on_page(5)
///     .with_zoom_steps(2)
///     .build();
/// ```
pub struct TestViewerBuilder {
    total_pages: Option<u32>,
    page: Option<u32>,
    zoom_steps: i32,
    fullscreen: bool,
}

impl Default for TestViewerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestViewerBuilder {
    pub fn new() -> Self {
        Self {
            total_pages: None,
            page: None,
            zoom_steps: 0,
            fullscreen: false,
        }
    }

    /// Load a document with this many pages.
    pub fn with_pages(mut self, total_pages: u32) -> Self {
        self.total_pages = Some(total_pages);
        self
    }

    /// Jump to this page after loading.
    pub fn on_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Positive steps zoom in, negative steps zoom out.
    pub fn with_zoom_steps(mut self, steps: i32) -> Self {
        self.zoom_steps = steps;
        self
    }

    pub fn fullscreen(mut self) -> Self {
        self.fullscreen = true;
        self
    }

    /// Build the viewer with any setup effects already drained.
    pub fn build(self) -> Viewer {
        let mut viewer = Viewer::default();
        if let Some(total) = self.total_pages {
            viewer.on_document_loaded(total);
        }
        if let Some(page) = self.page {
            assert!(viewer.go_to_page(page), "builder page {} out of range", page);
        }
        for _ in 0..self.zoom_steps.max(0) {
            viewer.zoom_in();
        }
        for _ in 0..(-self.zoom_steps).max(0) {
            viewer.zoom_out();
        }
        viewer.on_fullscreen_change(self.fullscreen);
        viewer.take_effects();
        viewer
    }
}

/// A mounted session over `total_pages` blank pages, already loaded.
pub fn blank_session(
    total_pages: u32,
) -> (ViewerSession<BlankSource, HeadlessFullscreen>, FullscreenNotifier) {
    let notifier = FullscreenNotifier::new();
    let platform = HeadlessFullscreen::new(notifier.clone());
    let mut session = ViewerSession::mount(ViewerSettings::default(), &notifier, platform);
    session.load(Ok(BlankSource::new(total_pages)));
    (session, notifier)
}
