//! Account page: profile, referral link and tree, password change,
//! sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::ClientStore;
use crate::components::referral_tree::ReferralTree;
use crate::config::AppConfig;
use crate::net::types::ChangePassRequest;
use crate::state::session::SessionState;
use crate::util::referral::referral_url;

/// Account page for the signed-in user.
#[component]
pub fn AccountPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let store = expect_context::<ClientStore>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let login_route = config.auth_rules.login_route.clone();
    let link_config = StoredValue::new(config.clone());

    let sign_out = move |_| {
        store.clear_auth();
        navigate(&login_route, NavigateOptions::default());
    };

    view! {
        <div class="account-page">
            <header class="account-page__header">
                <h1>"My account"</h1>
                <button class="btn" on:click=sign_out>
                    "Sign out"
                </button>
            </header>

            <Show
                when=move || session.get().user.is_some()
                fallback=|| {
                    view! { <p class="account-page__empty">"Sign in to load your profile."</p> }
                }
            >
                {move || {
                    session
                        .get()
                        .user
                        .map(move |user| {
                            let link = link_config
                                .with_value(|config| referral_url(config, &user.data.referral_code));
                            view! {
                                <section class="account-page__profile">
                                    <p class="account-page__login">{user.data.login.clone()}</p>
                                    <p class="account-page__referral-link">
                                        "Invite link: " {link}
                                    </p>
                                    <ReferralTree node=user.data/>
                                </section>
                            }
                        })
                }}
            </Show>

            <ChangePasswordForm/>
        </div>
    }
}

/// Password change form; failures surface through the notification toast.
#[component]
fn ChangePasswordForm() -> impl IntoView {
    let store = expect_context::<ClientStore>();

    let current = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());

    let submit = Callback::new(move |_| {
        let passwords = ChangePassRequest {
            current_password: current.get(),
            password: password.get(),
            password_confirmation: confirmation.get(),
        };
        if passwords.current_password.is_empty() || passwords.password.is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            leptos::task::spawn_local(async move {
                if store.change_password(&passwords).await.is_ok() {
                    current.set(String::new());
                    password.set(String::new());
                    confirmation.set(String::new());
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&passwords, &store);
        }
    });

    view! {
        <section class="account-page__password">
            <h2>"Change password"</h2>
            <label class="form__label">
                "Current password"
                <input
                    class="form__input"
                    type="password"
                    prop:value=move || current.get()
                    on:input=move |ev| current.set(event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "New password"
                <input
                    class="form__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "Confirm new password"
                <input
                    class="form__input"
                    type="password"
                    prop:value=move || confirmation.get()
                    on:input=move |ev| confirmation.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" on:click=move |_| submit.run(())>
                "Update password"
            </button>
        </section>
    }
}
