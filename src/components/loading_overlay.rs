//! Full-screen loading indicator shown while any request is in flight.

use leptos::prelude::*;

use crate::state::app::AppState;

/// Overlay spinner driven by the shared loading counter.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();

    view! {
        <Show when=move || app.get().loading()>
            <div class="loading-overlay">
                <div class="loading-overlay__spinner"></div>
            </div>
        </Show>
    }
}
