//! Viewer settings loaded from a JSON file.
//!
//! Every field has a default, so a partial file only overrides what it
//! names. A missing file means defaults; a malformed one means defaults
//! plus a warning.

use crate::constants::{
    DEFAULT_PAGE_WIDTH, MAX_PAGE_HEIGHT, MAX_PAGE_WIDTH, MIN_PAGE_HEIGHT, MIN_PAGE_WIDTH,
    SETTINGS_DIR_NAME, SETTINGS_FILE_NAME,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while reading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// Display width of one page before zoom
    pub page_width: f32,
    pub min_page_width: f32,
    pub max_page_width: f32,
    pub min_page_height: f32,
    pub max_page_height: f32,
    /// Explicit pdfium library to bind instead of searching
    pub pdfium_library_path: Option<PathBuf>,
    /// Extra resolution multiplier for rendered pages (e.g. 2.0 on HiDPI)
    pub render_scale: f32,
    /// tracing filter directive, used when RUST_LOG is unset
    pub log_filter: Option<String>,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            page_width: DEFAULT_PAGE_WIDTH,
            min_page_width: MIN_PAGE_WIDTH,
            max_page_width: MAX_PAGE_WIDTH,
            min_page_height: MIN_PAGE_HEIGHT,
            max_page_height: MAX_PAGE_HEIGHT,
            pdfium_library_path: None,
            render_scale: 1.0,
            log_filter: None,
        }
    }
}

/// `<config_dir>/flipbook/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}

impl ViewerSettings {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        match default_settings_path() {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`, falling back to defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable settings");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        Ok(settings.sanitized())
    }

    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Repair values that would break layout math.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.render_scale.is_nan() || self.render_scale <= 0.0 {
            self.render_scale = defaults.render_scale;
        }
        if self.page_width.is_nan() || self.page_width <= 0.0 {
            self.page_width = defaults.page_width;
        }
        if !valid_bounds(self.min_page_width, self.max_page_width) {
            self.min_page_width = defaults.min_page_width;
            self.max_page_width = defaults.max_page_width;
        }
        if !valid_bounds(self.min_page_height, self.max_page_height) {
            self.min_page_height = defaults.min_page_height;
            self.max_page_height = defaults.max_page_height;
        }
        self
    }
}

fn valid_bounds(min: f32, max: f32) -> bool {
    !min.is_nan() && !max.is_nan() && min <= max
}
