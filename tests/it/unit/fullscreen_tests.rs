//! Unit tests for fullscreen module.

use flipbook::fullscreen::{FullscreenNotifier, FullscreenPlatform, HeadlessFullscreen};
use std::thread;

#[test]
fn test_each_subscriber_sees_change() {
    let notifier = FullscreenNotifier::new();
    let first = notifier.subscribe();
    let second = notifier.subscribe();

    notifier.notify(true);
    assert_eq!(first.poll(), Some(true));
    assert_eq!(second.poll(), Some(true));
}

#[test]
fn test_late_subscriber_misses_past_changes() {
    let notifier = FullscreenNotifier::new();
    notifier.notify(true);

    let late = notifier.subscribe();
    assert_eq!(late.poll(), None);
    assert!(notifier.is_fullscreen());
}

#[test]
fn test_notify_from_another_thread() {
    let notifier = FullscreenNotifier::new();
    let subscription = notifier.subscribe();

    let remote = notifier.clone();
    thread::spawn(move || {
        let mut platform = HeadlessFullscreen::new(remote);
        platform.request_enter();
    })
    .join()
    .unwrap();

    assert_eq!(subscription.poll(), Some(true));
}

#[test]
fn test_subscription_outliving_notifier() {
    let notifier = FullscreenNotifier::new();
    let subscription = notifier.subscribe();
    drop(notifier);

    assert_eq!(subscription.poll(), None);
    drop(subscription);
}
