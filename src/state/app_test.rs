use super::*;

// =============================================================
// Loading counter
// =============================================================

#[test]
fn loading_defaults_to_false() {
    assert!(!AppState::default().loading());
}

#[test]
fn loading_tracks_a_single_request() {
    let mut state = AppState::default();
    state.start_loading();
    assert!(state.loading());
    state.stop_loading();
    assert!(!state.loading());
}

#[test]
fn overlapping_requests_keep_loading_true() {
    let mut state = AppState::default();
    state.start_loading();
    state.start_loading();
    state.stop_loading();
    assert!(state.loading());
    state.stop_loading();
    assert!(!state.loading());
}

#[test]
fn stop_without_start_saturates() {
    let mut state = AppState::default();
    state.stop_loading();
    assert!(!state.loading());
    state.start_loading();
    assert!(state.loading());
}

// =============================================================
// Notification slot
// =============================================================

#[test]
fn notification_defaults_hidden() {
    let notification = Notification::default();
    assert!(!notification.show);
    assert_eq!(notification.color, Color::Success);
    assert!(notification.title.is_empty());
    assert!(notification.message.is_empty());
}

#[test]
fn create_overwrites_the_previous_notification() {
    let mut state = AppState::default();
    state.create_notification(Color::Warning, "first", "one");
    state.create_notification(Color::Error, "second", "two");

    assert!(state.notification.show);
    assert_eq!(state.notification.color, Color::Error);
    assert_eq!(state.notification.title, "second");
    assert_eq!(state.notification.message, "two");
}

#[test]
fn remove_resets_the_slot() {
    let mut state = AppState::default();
    state.create_notification(Color::Error, "t", "m");
    state.remove_notification();
    assert_eq!(state.notification, Notification::default());
}
