//! Login page with the credential form.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};
use leptos_router::components::A;

use crate::app::ClientStore;
use crate::config::AppConfig;
use crate::net::types::Credentials;

/// Login page. Successful sign-in navigates to the post-login route;
/// failures surface through the global notification toast.
#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let store = expect_context::<ClientStore>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let login = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let register_route = config.auth_rules.register_route.clone();
    let post_login = config.auth_rules.post_login_redirect;

    let submit = Callback::new(move |_| {
        let credentials = Credentials { login: login.get(), password: password.get() };
        if credentials.login.trim().is_empty() || credentials.password.is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            let destination = post_login.clone();
            leptos::task::spawn_local(async move {
                if store.login(&credentials).await.is_ok() {
                    navigate(&destination, NavigateOptions::default());
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&credentials, &store, &post_login);
        }
    });

    view! {
        <div class="login-page">
            <h1>"Sign in"</h1>
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
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>
            <button class="btn btn--primary" on:click=move |_| submit.run(())>
                "Sign in"
            </button>
            <p class="login-page__hint">
                "No account yet? " <A href=register_route>"Register"</A>
            </p>
        </div>
    }
}
