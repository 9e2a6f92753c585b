//! Page layout and the on-screen transform of the flip-book.
//!
//! The flip-book lays pages out at a fixed display width; zoom and pan are
//! applied on top as a single scale-then-translate transform.

use crate::settings::ViewerSettings;
use crate::types::PageSize;
use crate::viewport::Viewport;
use serde::Serialize;
use std::fmt;

/// Display size of a single page, derived from the first page's shape.
#[derive(Clone, Debug, PartialEq)]
pub struct PageLayout {
    base_width: f32,
    width_bounds: (f32, f32),
    height_bounds: (f32, f32),
    size: PageSize,
    /// First page's own size, once measured
    natural: Option<PageSize>,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::new(&ViewerSettings::default())
    }
}

impl PageLayout {
    /// Layout bounded by `settings`. Values `clamp` cannot take are
    /// replaced by their defaults.
    pub fn new(settings: &ViewerSettings) -> Self {
        let settings = settings.clone().sanitized();
        Self {
            base_width: settings.page_width,
            width_bounds: (settings.min_page_width, settings.max_page_width),
            height_bounds: (settings.min_page_height, settings.max_page_height),
            size: PageSize::default(),
            natural: None,
        }
    }

    /// The same measured page, sized under new `settings`.
    pub fn relayout(&self, settings: &ViewerSettings) -> Self {
        let mut layout = Self::new(settings);
        if let Some(natural) = self.natural {
            layout.measure(natural);
        }
        layout
    }

    #[inline]
    pub fn page_size(&self) -> PageSize {
        self.size
    }

    /// Whether a real page has been measured yet.
    #[inline]
    pub fn is_measured(&self) -> bool {
        self.natural.is_some()
    }

    #[inline]
    pub fn natural_size(&self) -> Option<PageSize> {
        self.natural
    }

    /// Size pages after `natural`, the first page's size in any unit.
    pub fn measure(&mut self, natural: PageSize) -> PageSize {
        let width = self.base_width.clamp(self.width_bounds.0, self.width_bounds.1);
        let height = (width * natural.aspect_ratio()).clamp(self.height_bounds.0, self.height_bounds.1);
        self.size = PageSize::new(width, height);
        self.natural = Some(natural);
        self.size
    }

    /// Pixel width to render a page at so it stays sharp at `zoom`.
    pub fn render_width(&self, zoom: f32, render_scale: f32) -> u32 {
        (self.size.width * zoom * render_scale).round().max(1.0) as u32
    }
}

/// Scale-then-translate transform applied to the flip-book.
///
/// The translation is divided by the scale because it is applied inside
/// the scaled coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ViewTransform {
    pub scale: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl ViewTransform {
    pub fn from_viewport(viewport: &Viewport) -> Self {
        let scale = viewport.zoom();
        let pan = viewport.effective_pan();
        Self {
            scale,
            translate_x: pan.x / scale,
            translate_y: pan.y / scale,
        }
    }

    /// Map a point in page space to screen space, relative to the center.
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            (x + self.translate_x) * self.scale,
            (y + self.translate_y) * self.scale,
        )
    }
}

impl fmt::Display for ViewTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scale({}) translate({}px, {}px)",
            self.scale, self.translate_x, self.translate_y
        )
    }
}

/// Pointer cursor over the flip-book.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cursor {
    Default,
    Grab,
    Grabbing,
}

impl Cursor {
    pub fn for_viewport(viewport: &Viewport) -> Self {
        if !viewport.is_pannable() {
            Cursor::Default
        } else if viewport.is_dragging() {
            Cursor::Grabbing
        } else {
            Cursor::Grab
        }
    }
}
