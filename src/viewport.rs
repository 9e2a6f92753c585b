//! Viewport transform - zoom level, pan offset and the drag-to-pan gesture.
//!
//! Pan only matters once the page is zoomed past 1.0; below that the
//! document fits on screen and drags are ignored.
//!
//! ## Drag States
//!
//! ```text
//! Idle    -> Panning   (begin_drag while zoom > 1.0)
//! Panning -> Panning   (continue_drag updates pan)
//! Any     -> Idle      (end_drag)
//! ```

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, PAN_ZOOM_THRESHOLD, ZOOM_STEP};
use crate::types::Point;
use serde::Serialize;

/// State of the pan gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragState {
    /// No pointer held down
    #[default]
    Idle,

    /// Pointer held down over a zoomed page
    Panning {
        /// Pointer position minus the pan offset at drag start
        anchor: Point,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    pub fn anchor(&self) -> Option<Point> {
        match self {
            Self::Panning { anchor } => Some(*anchor),
            Self::Idle => None,
        }
    }
}

/// Zoom and pan of the flip-book inside its container.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    zoom: f32,
    pan: Point,
    drag: DragState,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            pan: Point::ZERO,
            drag: DragState::Idle,
        }
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Raw pan offset, kept even when it is not applied.
    #[inline]
    pub fn pan(&self) -> Point {
        self.pan
    }

    #[inline]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Whether the page is zoomed far enough for panning.
    #[inline]
    pub fn is_pannable(&self) -> bool {
        self.zoom > PAN_ZOOM_THRESHOLD
    }

    /// Pan offset as it should be applied on screen.
    pub fn effective_pan(&self) -> Point {
        if self.is_pannable() { self.pan } else { Point::ZERO }
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
        self.pan = Point::ZERO;
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
        self.pan = Point::ZERO;
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom < MAX_ZOOM
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom > MIN_ZOOM
    }

    /// Zoom as a rounded percentage, e.g. 120 for 1.2.
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    /// Start panning from `pointer`. Ignored unless zoomed in.
    pub fn begin_drag(&mut self, pointer: Point) {
        if !self.is_pannable() {
            return;
        }
        self.drag = DragState::Panning {
            anchor: pointer - self.pan,
        };
    }

    /// Move the pan so the anchor stays under `pointer`.
    pub fn continue_drag(&mut self, pointer: Point) {
        if !self.is_pannable() {
            return;
        }
        if let Some(anchor) = self.drag.anchor() {
            self.pan = pointer - anchor;
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }
}
