//! Viewer-wide constants.
//!
//! Centralizes zoom bounds, paging steps and layout defaults so the
//! state machine and the layout helpers agree on the same numbers.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.5;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 3.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom step for the zoom-in / zoom-out buttons
pub const ZOOM_STEP: f32 = 0.2;

/// Pan is only applied (and dragging only allowed) above this zoom
pub const PAN_ZOOM_THRESHOLD: f32 = 1.0;

// ============================================================================
// Paging
// ============================================================================

/// The cover page, shown on its own
pub const COVER_PAGE: u32 = 1;

/// Page reached when stepping forward from the cover
pub const FIRST_STEP_FROM_COVER: u32 = 6;

/// Pages advanced by a forward step from anywhere but the cover
pub const FORWARD_STEP: u32 = 4;

/// Pages retreated by a backward step from anywhere past page 2
pub const BACKWARD_STEP: u32 = 2;

// ============================================================================
// Page Layout
// ============================================================================

/// Display width of a single page before zoom is applied
pub const DEFAULT_PAGE_WIDTH: f32 = 400.0;

/// Page size used until the first page has been measured
pub const DEFAULT_PAGE_SIZE: (f32, f32) = (400.0, 600.0);

/// Minimum display width of a page
pub const MIN_PAGE_WIDTH: f32 = 200.0;

/// Maximum display width of a page
pub const MAX_PAGE_WIDTH: f32 = 1000.0;

/// Minimum display height of a page
pub const MIN_PAGE_HEIGHT: f32 = 300.0;

/// Maximum display height of a page
pub const MAX_PAGE_HEIGHT: f32 = 1500.0;

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "flipbook";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Log filter used when neither RUST_LOG nor settings provide one
pub const DEFAULT_LOG_FILTER: &str = "flipbook=info";
