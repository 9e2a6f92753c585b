//! Error types for document sources
//!
//! Load failures leave the viewer waiting in `Loading`; render failures
//! are returned to whoever asked for the page.

use crate::types::DocumentPage;
use thiserror::Error;

/// Errors that stop a document from loading
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentLoadError {
    /// The PDF rendering library could not be bound
    #[error("Failed to load pdfium: {0}")]
    Library(String),

    /// The document could not be opened or parsed
    #[error("Failed to open document {locator}: {reason}")]
    Open { locator: String, reason: String },

    /// The document opened but has no pages
    #[error("Document has no pages")]
    EmptyDocument,

    /// Reason reported by a host-side loader
    #[error("{0}")]
    Other(String),
}

impl From<String> for DocumentLoadError {
    fn from(s: String) -> Self {
        DocumentLoadError::Other(s)
    }
}

impl From<&str> for DocumentLoadError {
    fn from(s: &str) -> Self {
        DocumentLoadError::Other(s.to_string())
    }
}

/// Errors that can occur while measuring or rendering a page
#[derive(Error, Debug)]
pub enum SourceError {
    /// Page number outside `[1, total_pages]`
    #[error("Page {page} out of range (document has {total} pages)")]
    PageOutOfRange { page: DocumentPage, total: u32 },

    /// Error reported by pdfium
    #[error("pdfium error: {0}")]
    Pdfium(#[from] pdfium_render::prelude::PdfiumError),

    /// Rendered bitmap could not be turned into an image
    #[error("Invalid bitmap: {0}")]
    Bitmap(String),
}

/// Result type alias for source operations
pub type SourceResult<T> = Result<T, SourceError>;
