//! PDFium library loader with platform-specific search paths.
//!
//! This module centralizes the logic for locating and loading the PDFium
//! dynamic library across different deployment scenarios.

use super::DocumentLoadError;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct PdfiumLoader;

impl PdfiumLoader {
    /// Load the PDFium library from known search paths or system library.
    ///
    /// Search order:
    /// 1. `configured` path from settings, if any
    /// 2. `lib/` in current working directory (development)
    /// 3. `lib/` relative to executable
    /// 4. `Resources/lib/` in macOS bundle
    /// 5. System library fallback
    pub fn load(configured: Option<&Path>) -> Result<Pdfium, DocumentLoadError> {
        if let Some(path) = configured {
            return Pdfium::bind_to_library(path)
                .map(Pdfium::new)
                .map_err(|e| {
                    DocumentLoadError::Library(format!("{}: {:?}", path.display(), e))
                });
        }

        for path in Self::search_paths() {
            if path.exists() {
                debug!(path = %path.display(), "binding pdfium");
                if let Ok(bindings) = Pdfium::bind_to_library(&path) {
                    return Ok(Pdfium::new(bindings));
                }
            }
        }
        Pdfium::bind_to_system_library()
            .map(Pdfium::new)
            .map_err(|e| DocumentLoadError::Library(format!("{:?}", e)))
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Current working directory (development)
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(Pdfium::pdfium_platform_library_name_at_path(&cwd.join("lib")));
        }

        // Executable-relative path
        if let Ok(exe) = std::env::current_exe() {
            if let Some(parent) = exe.parent() {
                paths.push(Pdfium::pdfium_platform_library_name_at_path(&parent.join("lib")));

                // macOS bundle path
                if let Some(grandparent) = parent.parent() {
                    paths.push(Pdfium::pdfium_platform_library_name_at_path(
                        &grandparent.join("Resources/lib"),
                    ));
                }
            }
        }

        paths
    }
}
