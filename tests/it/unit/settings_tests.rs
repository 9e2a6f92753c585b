//! Unit tests for settings module.

use flipbook::settings::{default_settings_path, SettingsError, ViewerSettings};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_defaults() {
    let settings = ViewerSettings::default();
    assert_eq!(settings.page_width, 400.0);
    assert_eq!(settings.render_scale, 1.0);
    assert!(settings.pdfium_library_path.is_none());
}

#[test]
fn test_default_path() {
    // These should return Some on most systems
    let path = default_settings_path();
    assert!(path.is_some() || cfg!(target_os = "unknown"));
    if let Some(path) = path {
        assert!(path.ends_with("flipbook/settings.json"));
    }
}

#[test]
fn test_partial_file_overrides_named_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"page_width": 320, "pdfium_library_path": "/opt/pdfium/libpdfium.so"}"#)
        .unwrap();

    let settings = ViewerSettings::load_from(&path).unwrap();
    assert_eq!(settings.page_width, 320.0);
    assert_eq!(
        settings.pdfium_library_path,
        Some(PathBuf::from("/opt/pdfium/libpdfium.so"))
    );
    assert_eq!(settings.max_page_height, 1500.0);
}

#[test]
fn test_invalid_values_are_repaired() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"render_scale": 0, "min_page_width": 900, "max_page_width": 100}"#).unwrap();

    let settings = ViewerSettings::load_from(&path).unwrap();
    let defaults = ViewerSettings::default();
    assert_eq!(settings.render_scale, defaults.render_scale);
    assert_eq!(settings.min_page_width, defaults.min_page_width);
    assert_eq!(settings.max_page_width, defaults.max_page_width);
}

#[test]
fn test_sanitized_repairs_nan_and_inverted_bounds() {
    let settings = ViewerSettings {
        min_page_height: 2000.0,
        max_page_width: f32::NAN,
        render_scale: f32::NAN,
        ..ViewerSettings::default()
    }
    .sanitized();
    assert_eq!(settings, ViewerSettings::default());
}

#[test]
fn test_malformed_file_falls_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(ViewerSettings::load_from(&path), Err(SettingsError::Json(_))));
    assert_eq!(ViewerSettings::load_or_default(&path), ViewerSettings::default());
}

#[test]
fn test_missing_file_falls_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.json");
    assert_eq!(ViewerSettings::load_or_default(&path), ViewerSettings::default());
}

#[test]
fn test_save_and_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");
    let settings = ViewerSettings {
        render_scale: 2.0,
        log_filter: Some("flipbook=debug".to_string()),
        ..ViewerSettings::default()
    };

    settings.save_to(&path).unwrap();
    assert_eq!(ViewerSettings::load_from(&path).unwrap(), settings);
}
