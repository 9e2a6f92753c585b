//! The flip-book viewer state machine.
//!
//! A `Viewer` owns everything the host needs to draw the flip-book: the
//! current page, the page-number input buffer, the viewport and the
//! loading and fullscreen flags. It never draws or flips anything itself;
//! it queues `ViewerEffect`s for the host to carry out.
//!
//! ## States
//!
//! ```text
//! Loading -> Ready     (document loaded with at least one page)
//! Loading -> Loading   (load error: recorded, no retry)
//! ```
//!
//! Dragging and fullscreen are flags orthogonal to the phase.
//!
//! ## Modules
//!
//! - `state` - Viewer struct, phase, effects and snapshots
//! - `lifecycle` - Load, load-error and platform notifications
//! - `navigation` - Page jumps, steps, page input and flip sync
//! - `commands` - Command/event enums and their dispatch
//! - `toolbar` - Derived state of the navigation control bar

mod commands;
mod lifecycle;
mod navigation;
mod state;
mod toolbar;

pub use commands::{ParseCommandError, ViewerCommand, ViewerEvent};
pub use navigation::parse_page_number;
pub use state::{Viewer, ViewerEffect, ViewerPhase, ViewerSnapshot};
pub use toolbar::{FullscreenAction, ToolbarState};
