//! Placeholder document made of blank pages.
//!
//! Used by hosts that want to lay out the flip-book before the real
//! document arrives, and by tests that need a source without pdfium.

use super::{DocumentSource, SourceResult};
use crate::types::{DocumentPage, PageSize};
use image::{Rgba, RgbaImage};

/// A document of `page_count` identical blank pages.
#[derive(Clone, Debug)]
pub struct BlankSource {
    page_count: u32,
    page_size: PageSize,
    fill: Rgba<u8>,
}

impl BlankSource {
    /// A4 portrait pages in PDF points.
    pub fn new(page_count: u32) -> Self {
        Self::with_page_size(page_count, PageSize::new(595.0, 842.0))
    }

    pub fn with_page_size(page_count: u32, page_size: PageSize) -> Self {
        Self {
            page_count,
            page_size,
            fill: Rgba([255, 255, 255, 255]),
        }
    }

    pub fn with_fill(mut self, fill: Rgba<u8>) -> Self {
        self.fill = fill;
        self
    }
}

impl DocumentSource for BlankSource {
    fn page_count(&self) -> u32 {
        self.page_count
    }

    fn page_size(&self, page: DocumentPage) -> SourceResult<PageSize> {
        self.check_page(page)?;
        Ok(self.page_size)
    }

    fn render_page(&self, page: DocumentPage, target_width: u32) -> SourceResult<RgbaImage> {
        self.check_page(page)?;
        let width = target_width.max(1);
        let height = ((width as f32) * self.page_size.aspect_ratio()).round().max(1.0) as u32;
        Ok(RgbaImage::from_pixel(width, height, self.fill))
    }
}
