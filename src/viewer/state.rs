//! Viewer state - the Viewer struct, its phase and outbound effects.

use crate::layout::{Cursor, PageLayout, ViewTransform};
use crate::paging::to_spread_index;
use crate::settings::ViewerSettings;
use crate::source::DocumentLoadError;
use crate::types::{DocumentPage, PageSize, Point, SpreadIndex};
use crate::viewport::Viewport;
use serde::Serialize;

/// Coarse lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerPhase {
    /// Waiting for the document's page count
    #[default]
    Loading,
    /// Page count known, navigation allowed
    Ready,
}

/// Work the host must carry out on the viewer's behalf.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum ViewerEffect {
    /// Turn the flip-book display to this spread
    FlipTo { spread: SpreadIndex },
    /// Ask the platform to enter or leave fullscreen
    RequestFullscreen { enter: bool },
}

/// Session state of one mounted flip-book viewer.
#[derive(Clone, Debug)]
pub struct Viewer {
    pub(super) phase: ViewerPhase,
    /// Page considered active for display and input
    pub(super) current_page: DocumentPage,
    /// Free-text page number buffer, may diverge while typing
    pub(super) page_input: String,
    /// Zero until the document is loaded
    pub(super) total_pages: u32,
    pub(super) viewport: Viewport,
    /// Confirmed platform fullscreen state
    pub(super) is_fullscreen: bool,
    pub(super) load_error: Option<DocumentLoadError>,
    pub(super) layout: PageLayout,
    pub(super) effects: Vec<ViewerEffect>,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(&ViewerSettings::default())
    }
}

impl Viewer {
    pub fn phase(&self) -> ViewerPhase {
        self.phase
    }

    pub fn is_loaded(&self) -> bool {
        self.phase == ViewerPhase::Ready
    }

    pub fn current_page(&self) -> DocumentPage {
        self.current_page
    }

    /// Spread the current page sits on.
    pub fn current_spread(&self) -> SpreadIndex {
        to_spread_index(self.current_page)
    }

    pub fn page_input(&self) -> &str {
        &self.page_input
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn zoom(&self) -> f32 {
        self.viewport.zoom()
    }

    pub fn pan(&self) -> Point {
        self.viewport.pan()
    }

    pub fn is_dragging(&self) -> bool {
        self.viewport.is_dragging()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    pub fn load_error(&self) -> Option<&DocumentLoadError> {
        self.load_error.as_ref()
    }

    pub fn page_size(&self) -> PageSize {
        self.layout.page_size()
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Effects queued since the last call, oldest first.
    pub fn take_effects(&mut self) -> Vec<ViewerEffect> {
        std::mem::take(&mut self.effects)
    }

    pub fn pending_effects(&self) -> &[ViewerEffect] {
        &self.effects
    }

    pub fn snapshot(&self) -> ViewerSnapshot {
        ViewerSnapshot {
            phase: self.phase,
            current_page: self.current_page,
            page_input: self.page_input.clone(),
            total_pages: self.total_pages,
            spread: self.current_spread(),
            zoom: self.viewport.zoom(),
            zoom_percent: self.viewport.zoom_percent(),
            pan: self.viewport.pan(),
            is_dragging: self.viewport.is_dragging(),
            is_fullscreen: self.is_fullscreen,
            is_loaded: self.is_loaded(),
            load_error: self.load_error.as_ref().map(ToString::to_string),
            page_size: self.layout.page_size(),
            transform: ViewTransform::from_viewport(&self.viewport),
            cursor: Cursor::for_viewport(&self.viewport),
        }
    }
}

/// Everything a host needs to render one frame of the viewer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViewerSnapshot {
    pub phase: ViewerPhase,
    pub current_page: DocumentPage,
    pub page_input: String,
    pub total_pages: u32,
    pub spread: SpreadIndex,
    pub zoom: f32,
    pub zoom_percent: u32,
    pub pan: Point,
    pub is_dragging: bool,
    pub is_fullscreen: bool,
    pub is_loaded: bool,
    pub load_error: Option<String>,
    pub page_size: PageSize,
    pub transform: ViewTransform,
    pub cursor: Cursor,
}
