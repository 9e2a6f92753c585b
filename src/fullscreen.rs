//! Platform fullscreen state with explicit subscriptions.
//!
//! Fullscreen is process-wide: one window, one flag. Viewers never read it
//! ambiently. A viewer subscribes when it mounts, drains confirmed changes
//! through its subscription, and unsubscribes by dropping it on unmount.
//!
//! Requests go the other way through a `FullscreenPlatform`. A request is
//! fire-and-forget; the flag only changes once the platform confirms it
//! via `FullscreenNotifier::notify`.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Weak};
use tracing::{debug, info};

#[derive(Default)]
struct NotifierState {
    is_fullscreen: bool,
    next_id: u64,
    subscribers: HashMap<u64, Sender<bool>>,
}

/// Shared fullscreen flag plus its subscribers. Cloning shares the state.
#[derive(Clone, Default)]
pub struct FullscreenNotifier {
    inner: Arc<Mutex<NotifierState>>,
}

impl FullscreenNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.inner.lock().is_fullscreen
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }

    /// Register for change notifications until the subscription is dropped.
    pub fn subscribe(&self) -> FullscreenSubscription {
        let (tx, rx) = channel();
        let mut state = self.inner.lock();
        let id = state.next_id;
        state.next_id += 1;
        state.subscribers.insert(id, tx);
        debug!(id, "fullscreen subscriber added");

        FullscreenSubscription {
            id,
            rx,
            notifier: Arc::downgrade(&self.inner),
        }
    }

    /// Platform confirmation that fullscreen was entered or exited.
    ///
    /// Repeating the current value is not a change and notifies nobody.
    pub fn notify(&self, is_fullscreen: bool) {
        let mut state = self.inner.lock();
        if state.is_fullscreen == is_fullscreen {
            return;
        }
        state.is_fullscreen = is_fullscreen;
        info!(is_fullscreen, "fullscreen changed");
        // Receivers that hung up without unsubscribing are pruned here
        state
            .subscribers
            .retain(|_, tx| tx.send(is_fullscreen).is_ok());
    }
}

/// A live fullscreen subscription. Dropping it unsubscribes.
pub struct FullscreenSubscription {
    id: u64,
    rx: Receiver<bool>,
    notifier: Weak<Mutex<NotifierState>>,
}

impl FullscreenSubscription {
    /// Drain pending changes, returning the most recent one.
    pub fn poll(&self) -> Option<bool> {
        self.rx.try_iter().last()
    }
}

impl Drop for FullscreenSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.notifier.upgrade() {
            inner.lock().subscribers.remove(&self.id);
            debug!(id = self.id, "fullscreen subscriber removed");
        }
    }
}

/// Where fullscreen enter/exit requests are sent.
pub trait FullscreenPlatform {
    fn request_enter(&mut self);
    fn request_exit(&mut self);
}

/// A platform without a window: every request is granted immediately.
pub struct HeadlessFullscreen {
    notifier: FullscreenNotifier,
}

impl HeadlessFullscreen {
    pub fn new(notifier: FullscreenNotifier) -> Self {
        Self { notifier }
    }
}

impl FullscreenPlatform for HeadlessFullscreen {
    fn request_enter(&mut self) {
        self.notifier.notify(true);
    }

    fn request_exit(&mut self) {
        self.notifier.notify(false);
    }
}
