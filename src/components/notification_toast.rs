//! Global notification toast bound to the single notification slot.

use leptos::prelude::*;

use crate::state::app::{AppState, Color};

/// CSS modifier class for a notification color.
fn color_class(color: Color) -> &'static str {
    match color {
        Color::Error => "toast--error",
        Color::Primary => "toast--primary",
        Color::Secondary => "toast--secondary",
        Color::Success => "toast--success",
        Color::Info => "toast--info",
        Color::Warning => "toast--warning",
        Color::Neutral => "toast--neutral",
    }
}

/// Shows the current notification, if any; dismissing resets the slot.
#[component]
pub fn NotificationToast() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();

    view! {
        <Show when=move || app.get().notification.show>
            <div class=move || format!("toast {}", color_class(app.get().notification.color))>
                <strong class="toast__title">{move || app.get().notification.title.clone()}</strong>
                <p class="toast__message">{move || app.get().notification.message.clone()}</p>
                <button
                    class="toast__close"
                    on:click=move |_| app.update(AppState::remove_notification)
                >
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}
