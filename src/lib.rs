//! Flipbook - a spread-paged document viewer core.
//!
//! Shows a multi-page document as a flip-book: the cover on its own, then
//! two-page spreads. Keeps the document page, the flip-book spread and the
//! zoom/pan transform consistent under navigation and gestures.
//!
//! - `paging` - Page/spread index mapping
//! - `viewport` - Zoom, pan and drag-to-pan
//! - `viewer` - The viewer state machine
//! - `source` - Document sources (pdfium, blank pages)
//! - `fullscreen` - Platform fullscreen state and subscriptions
//! - `layout` - Page display size and view transform
//! - `session` - A viewer mounted against a source and platform
//! - `settings` - JSON settings

pub mod constants;
pub mod fullscreen;
pub mod layout;
pub mod paging;
pub mod session;
pub mod settings;
pub mod source;
pub mod types;
pub mod viewer;
pub mod viewport;

pub use session::ViewerSession;
pub use types::{DocumentPage, PageSize, Point, SpreadIndex};
pub use viewer::{Viewer, ViewerCommand, ViewerEffect, ViewerEvent};
