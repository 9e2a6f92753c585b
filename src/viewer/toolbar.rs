//! Navigation control bar state derived from the viewer.

use super::state::Viewer;
use serde::Serialize;

/// What the fullscreen button would do if pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FullscreenAction {
    Enter,
    Exit,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ToolbarState {
    /// Contents of the page number field
    pub page_input: String,
    /// e.g. "of 24"
    pub total_label: String,
    pub can_step_prev: bool,
    pub can_step_next: bool,
    pub can_zoom_out: bool,
    pub can_zoom_in: bool,
    /// e.g. "120%"
    pub zoom_label: String,
    pub fullscreen_action: FullscreenAction,
}

impl Viewer {
    pub fn toolbar(&self) -> ToolbarState {
        ToolbarState {
            page_input: self.page_input.clone(),
            total_label: format!("of {}", self.total_pages),
            can_step_prev: self.can_step_prev(),
            can_step_next: self.can_step_next(),
            can_zoom_out: self.viewport.can_zoom_out(),
            can_zoom_in: self.viewport.can_zoom_in(),
            zoom_label: format!("{}%", self.viewport.zoom_percent()),
            fullscreen_action: if self.is_fullscreen {
                FullscreenAction::Exit
            } else {
                FullscreenAction::Enter
            },
        }
    }
}
