//! PDF documents rendered through pdfium.

use super::{DocumentLoadError, DocumentSource, SourceError, SourceResult};
use crate::types::{DocumentPage, PageSize};
use image::RgbaImage;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// An open PDF document. Borrows the bound pdfium library for its lifetime.
pub struct PdfiumSource<'a> {
    document: PdfDocument<'a>,
    locator: String,
}

impl<'a> PdfiumSource<'a> {
    /// Open and parse the PDF at `path`.
    ///
    /// A document without pages is reported as `EmptyDocument` so the
    /// viewer never becomes ready with nothing to show.
    pub fn open(pdfium: &'a Pdfium, path: &Path) -> Result<Self, DocumentLoadError> {
        let locator = path.display().to_string();
        let document = pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| DocumentLoadError::Open {
                locator: locator.clone(),
                reason: format!("{:?}", e),
            })?;

        let source = Self { document, locator };
        if source.page_count() == 0 {
            return Err(DocumentLoadError::EmptyDocument);
        }
        info!(document = %source.locator, pages = source.page_count(), "opened PDF");
        Ok(source)
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }

    fn page(&self, page: DocumentPage) -> SourceResult<PdfPage<'a>> {
        self.check_page(page)?;
        let index = PdfPageIndex::try_from(page - 1).map_err(|_| SourceError::PageOutOfRange {
            page,
            total: self.page_count(),
        })?;
        Ok(self.document.pages().get(index)?)
    }
}

impl DocumentSource for PdfiumSource<'_> {
    fn page_count(&self) -> u32 {
        self.document.pages().len() as u32
    }

    fn page_size(&self, page: DocumentPage) -> SourceResult<PageSize> {
        let page = self.page(page)?;
        Ok(PageSize::new(page.width().value, page.height().value))
    }

    fn render_page(&self, page_number: DocumentPage, target_width: u32) -> SourceResult<RgbaImage> {
        let page = self.page(page_number)?;
        let target_width = target_width.max(1) as i32;

        // Text and annotation layers are not part of the flip-book
        let render_config = PdfRenderConfig::new()
            .set_target_width(target_width)
            .render_form_data(false)
            .render_annotations(false)
            .set_format(PdfBitmapFormat::BGRA);

        let bitmap = page.render_with_config(&render_config)?;
        let width = bitmap.width().max(0) as u32;
        let height = bitmap.height().max(0) as u32;
        debug!(page = page_number, width, height, "rendered page");

        let bgra = bitmap.as_raw_bytes();
        let pixels = bgra_to_rgba(&bgra, width as usize, height as usize);
        RgbaImage::from_raw(width, height, pixels)
            .ok_or_else(|| SourceError::Bitmap(format!("{}x{} bitmap too small", width, height)))
    }
}

/// Convert a BGRA bitmap whose rows may be padded into tight RGBA rows.
fn bgra_to_rgba(src: &[u8], width: usize, height: usize) -> Vec<u8> {
    let stride = if height == 0 { 0 } else { src.len() / height };
    let mut pixels = Vec::with_capacity(width.saturating_mul(height).saturating_mul(4));
    for y in 0..height {
        let row = y.saturating_mul(stride);
        for x in 0..width {
            let idx = row.saturating_add(x.saturating_mul(4));
            let b = src.get(idx).copied().unwrap_or(255);
            let g = src.get(idx + 1).copied().unwrap_or(255);
            let r = src.get(idx + 2).copied().unwrap_or(255);
            let a = src.get(idx + 3).copied().unwrap_or(255);
            pixels.extend_from_slice(&[r, g, b, a]);
        }
    }
    pixels
}
