//! Document sources - page count, page geometry and page rendering.
//!
//! The viewer never touches a document directly. It only needs the page
//! count (delivered as a load notification) and, for display, a way to
//! render one page at a given width:
//!
//! - `pdfium` - PDF documents rendered through pdfium
//! - `pdfium_loader` - Locating and binding the pdfium dynamic library
//! - `blank` - In-memory placeholder pages for previews and tests

mod blank;
mod error;
mod pdfium;
mod pdfium_loader;

pub use blank::BlankSource;
pub use error::*;
pub use pdfium::PdfiumSource;
pub use pdfium_loader::PdfiumLoader;

use crate::types::{DocumentPage, PageSize};
use image::RgbaImage;

/// A loaded document that can be measured and rendered page by page.
pub trait DocumentSource {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Natural size of `page`, in PDF points.
    fn page_size(&self, page: DocumentPage) -> SourceResult<PageSize>;

    /// Render `page` scaled to `target_width` pixels wide.
    fn render_page(&self, page: DocumentPage, target_width: u32) -> SourceResult<RgbaImage>;

    /// Reject pages outside `[1, page_count]`.
    fn check_page(&self, page: DocumentPage) -> SourceResult<()> {
        let total = self.page_count();
        if page == 0 || page > total {
            return Err(SourceError::PageOutOfRange { page, total });
        }
        Ok(())
    }
}
