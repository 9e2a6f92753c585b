//! A mounted viewer wired to its document source and the platform.
//!
//! The session is the host side of the viewer: it feeds load results and
//! fullscreen confirmations in, carries queued effects out, and renders
//! the active page on demand. It also stands in for the flip-book display
//! surface by tracking which spread is showing.

use crate::fullscreen::{FullscreenNotifier, FullscreenPlatform, FullscreenSubscription};
use crate::settings::ViewerSettings;
use crate::source::{DocumentLoadError, DocumentSource, SourceResult};
use crate::types::SpreadIndex;
use crate::viewer::{Viewer, ViewerCommand, ViewerEffect, ViewerEvent};
use image::RgbaImage;
use tracing::{debug, info, warn};

pub struct ViewerSession<S, P> {
    viewer: Viewer,
    source: Option<S>,
    platform: P,
    subscription: FullscreenSubscription,
    settings: ViewerSettings,
    /// Spread the display surface is showing
    displayed_spread: SpreadIndex,
}

impl<S, P> ViewerSession<S, P>
where
    S: DocumentSource,
    P: FullscreenPlatform,
{
    /// Mount a new viewer and subscribe it to fullscreen changes.
    ///
    /// Subscribes before reading the current flag, so a change confirmed
    /// in between is still delivered by the next `pump`.
    pub fn mount(settings: ViewerSettings, notifier: &FullscreenNotifier, platform: P) -> Self {
        let subscription = notifier.subscribe();
        let settings = settings.sanitized();
        let mut viewer = Viewer::new(&settings);
        viewer.on_fullscreen_change(notifier.is_fullscreen());
        debug!("viewer mounted");

        Self {
            viewer,
            source: None,
            platform,
            subscription,
            settings,
            displayed_spread: 0,
        }
    }

    /// Hand over the outcome of loading the document.
    pub fn load(&mut self, result: Result<S, DocumentLoadError>) {
        let source = match result {
            Ok(source) => source,
            Err(reason) => {
                self.handle_event(ViewerEvent::DocumentLoadError(reason));
                return;
            }
        };

        let total_pages = source.page_count();
        if total_pages > 0 {
            match source.page_size(1) {
                Ok(size) => self.viewer.on_page_measured(size),
                Err(e) => warn!(error = %e, "could not measure first page"),
            }
        }
        self.handle_event(ViewerEvent::DocumentLoaded { total_pages });
        if self.viewer.is_loaded() {
            self.source = Some(source);
        }
    }

    pub fn execute(&mut self, command: ViewerCommand) {
        self.viewer.execute(command);
        self.process_effects();
    }

    pub fn handle_event(&mut self, event: ViewerEvent) {
        self.viewer.handle_event(event);
        self.process_effects();
    }

    /// The user flipped the book on the display surface itself.
    pub fn flip_display(&mut self, spread: SpreadIndex) {
        self.displayed_spread = spread;
        self.handle_event(ViewerEvent::ExternalFlip { spread });
    }

    /// Apply confirmed fullscreen changes from the platform.
    pub fn pump(&mut self) {
        if let Some(is_fullscreen) = self.subscription.poll() {
            self.viewer.on_fullscreen_change(is_fullscreen);
        }
    }

    fn process_effects(&mut self) {
        for effect in self.viewer.take_effects() {
            match effect {
                ViewerEffect::FlipTo { spread } => {
                    debug!(spread, "flipping display");
                    self.displayed_spread = spread;
                }
                ViewerEffect::RequestFullscreen { enter: true } => self.platform.request_enter(),
                ViewerEffect::RequestFullscreen { enter: false } => self.platform.request_exit(),
            }
        }
        self.pump();
    }

    pub fn update_settings(&mut self, settings: ViewerSettings) {
        let settings = settings.sanitized();
        self.viewer.apply_settings(&settings);
        self.settings = settings;
    }

    /// Render the current page at the width the current zoom calls for.
    ///
    /// Returns `None` until a document is loaded.
    pub fn render_current_page(&self) -> SourceResult<Option<RgbaImage>> {
        let Some(ref source) = self.source else {
            return Ok(None);
        };
        let width = self
            .viewer
            .layout()
            .render_width(self.viewer.zoom(), self.settings.render_scale);
        source.render_page(self.viewer.current_page(), width).map(Some)
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn displayed_spread(&self) -> SpreadIndex {
        self.displayed_spread
    }

    /// Tear down, dropping the fullscreen subscription.
    pub fn unmount(self) -> Viewer {
        info!(page = self.viewer.current_page(), "viewer unmounted");
        self.viewer
    }
}
