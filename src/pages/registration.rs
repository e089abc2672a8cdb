//! Registration page. Picks up an inviter's referral code from the
//! `?reffer=` query parameter and forwards it with the sign-up request.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::app::ClientStore;
use crate::config::AppConfig;
use crate::net::types::RegisterRequest;

/// Registration page. A successful sign-up establishes a session and
/// navigates to the post-login route.
#[component]
pub fn RegistrationPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let store = expect_context::<ClientStore>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    let query = use_query_map();

    let login = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());

    let login_route = config.auth_rules.login_route.clone();
    let post_login = config.auth_rules.post_login_redirect;

    let submit = Callback::new(move |_| {
        let request = RegisterRequest {
            login: login.get(),
            password: password.get(),
            password_confirmation: confirmation.get(),
            reffer: query.get_untracked().get("reffer"),
        };
        if request.login.trim().is_empty() || request.password.is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            let destination = post_login.clone();
            leptos::task::spawn_local(async move {
                if store.register(&request).await.is_ok() {
                    navigate(&destination, NavigateOptions::default());
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&request, &store, &post_login);
        }
    });

    view! {
        <div class="registration-page">
            <h1>"Create an account"</h1>
            <label class="form__label">
                "Login"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || login.get()
                    on:input=move |ev| login.set(event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "Password"
                <input
                    class="form__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "Confirm password"
                <input
                    class="form__input"
                    type="password"
                    prop:value=move || confirmation.get()
                    on:input=move |ev| confirmation.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" on:click=move |_| submit.run(())>
                "Register"
            </button>
            <p class="registration-page__hint">
                "Already registered? " <A href=login_route>"Sign in"</A>
            </p>
        </div>
    }
}
