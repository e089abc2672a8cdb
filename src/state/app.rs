//! Global application state: the loading indicator and the notification
//! slot. Shared through an `RwSignal` context; the gateway and the domain
//! service write to it, the overlay and toast components read from it.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Notification severity, matching the design system's palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Color {
    Error,
    Primary,
    Secondary,
    #[default]
    Success,
    Info,
    Warning,
    Neutral,
}

/// Single-slot, last-write-wins notification consumed by the toast.
///
/// Each new notification overwrites the previous one whether or not it was
/// seen; there is no queue and no auto-expiry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notification {
    pub show: bool,
    pub color: Color,
    pub title: String,
    pub message: String,
}

/// Process-wide UI state.
///
/// `in_flight` counts pending gateway requests, so the loading indicator
/// stays up until the last overlapping request settles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    in_flight: u32,
    pub notification: Notification,
}

impl AppState {
    /// Whether at least one request is outstanding.
    pub fn loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Mark one request as started.
    pub fn start_loading(&mut self) {
        self.in_flight += 1;
    }

    /// Mark one request as settled.
    pub fn stop_loading(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Show a notification, replacing whatever was displayed before.
    pub fn create_notification(&mut self, color: Color, title: &str, message: &str) {
        self.notification = Notification {
            show: true,
            color,
            title: title.to_owned(),
            message: message.to_owned(),
        };
    }

    /// Hide the current notification and reset its contents.
    pub fn remove_notification(&mut self) {
        self.notification = Notification::default();
    }
}
