//! Commands from the host and notifications from the outside world.
//!
//! Both are plain enums dispatched through one `match` each, so every
//! capability the viewer exposes is listed in exactly one place.

use super::state::{Viewer, ViewerEffect};
use crate::source::DocumentLoadError;
use crate::types::{DocumentPage, PageSize, Point, SpreadIndex};
use std::str::FromStr;
use thiserror::Error;

/// A user-initiated command.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewerCommand {
    GoToPage(DocumentPage),
    /// Edit the page input buffer
    SetPageInput(String),
    /// Submit page text, e.g. from the page input form
    SubmitPageInput(String),
    StepNext,
    StepPrev,
    ZoomIn,
    ZoomOut,
    BeginDrag(Point),
    ContinueDrag(Point),
    EndDrag,
    ToggleFullscreen,
}

/// A notification the viewer must accept.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewerEvent {
    DocumentLoaded { total_pages: u32 },
    DocumentLoadError(DocumentLoadError),
    /// The user flipped the book directly
    ExternalFlip { spread: SpreadIndex },
    FullscreenChange(bool),
    /// The first page's natural size became known
    PageMeasured(PageSize),
}

impl Viewer {
    pub fn execute(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::GoToPage(page) => {
                self.go_to_page(page);
            }
            ViewerCommand::SetPageInput(text) => self.set_page_input(text),
            ViewerCommand::SubmitPageInput(text) => {
                self.submit_page_input(&text);
            }
            ViewerCommand::StepNext => {
                self.step_next();
            }
            ViewerCommand::StepPrev => {
                self.step_prev();
            }
            ViewerCommand::ZoomIn => self.zoom_in(),
            ViewerCommand::ZoomOut => self.zoom_out(),
            ViewerCommand::BeginDrag(pointer) => self.begin_drag(pointer),
            ViewerCommand::ContinueDrag(pointer) => self.continue_drag(pointer),
            ViewerCommand::EndDrag => self.end_drag(),
            ViewerCommand::ToggleFullscreen => self.toggle_fullscreen(),
        }
    }

    pub fn handle_event(&mut self, event: ViewerEvent) {
        match event {
            ViewerEvent::DocumentLoaded { total_pages } => self.on_document_loaded(total_pages),
            ViewerEvent::DocumentLoadError(reason) => self.on_document_load_error(reason),
            ViewerEvent::ExternalFlip { spread } => {
                self.on_external_flip(spread);
            }
            ViewerEvent::FullscreenChange(is_fullscreen) => self.on_fullscreen_change(is_fullscreen),
            ViewerEvent::PageMeasured(size) => self.on_page_measured(size),
        }
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    pub fn begin_drag(&mut self, pointer: Point) {
        self.viewport.begin_drag(pointer);
    }

    pub fn continue_drag(&mut self, pointer: Point) {
        self.viewport.continue_drag(pointer);
    }

    pub fn end_drag(&mut self) {
        self.viewport.end_drag();
    }

    /// Ask for the opposite of the confirmed fullscreen state.
    pub fn toggle_fullscreen(&mut self) {
        self.effects.push(ViewerEffect::RequestFullscreen {
            enter: !self.is_fullscreen,
        });
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Invalid argument for {command}: {argument}")]
    InvalidArgument { command: String, argument: String },
}

fn parse_point(command: &str, argument: &str) -> Result<Point, ParseCommandError> {
    let invalid = || ParseCommandError::InvalidArgument {
        command: command.to_string(),
        argument: argument.to_string(),
    };
    let (x, y) = argument.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse().map_err(|_| invalid())?;
    let y = y.trim().parse().map_err(|_| invalid())?;
    Ok(Point::new(x, y))
}

/// Parses the script form used by the CLI:
/// `next`, `prev`, `zoom-in`, `zoom-out`, `fullscreen`, `end-drag`,
/// `goto:N`, `type:TEXT`, `input:TEXT`, `drag:X,Y`, `move:X,Y`.
impl FromStr for ViewerCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, argument) = match s.split_once(':') {
            Some((name, argument)) => (name, Some(argument)),
            None => (s, None),
        };

        match (name, argument) {
            ("next", None) => Ok(Self::StepNext),
            ("prev", None) => Ok(Self::StepPrev),
            ("zoom-in", None) => Ok(Self::ZoomIn),
            ("zoom-out", None) => Ok(Self::ZoomOut),
            ("fullscreen", None) => Ok(Self::ToggleFullscreen),
            ("end-drag", None) => Ok(Self::EndDrag),
            ("goto", Some(argument)) => argument
                .trim()
                .parse()
                .map(Self::GoToPage)
                .map_err(|_| ParseCommandError::InvalidArgument {
                    command: name.to_string(),
                    argument: argument.to_string(),
                }),
            ("type", Some(argument)) => Ok(Self::SetPageInput(argument.to_string())),
            ("input", Some(argument)) => Ok(Self::SubmitPageInput(argument.to_string())),
            ("drag", Some(argument)) => parse_point(name, argument).map(Self::BeginDrag),
            ("move", Some(argument)) => parse_point(name, argument).map(Self::ContinueDrag),
            _ => Err(ParseCommandError::Unknown(s.to_string())),
        }
    }
}
