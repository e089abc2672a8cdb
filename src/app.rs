//! Root application component with routing, context providers, and the
//! navigation guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::loading_overlay::LoadingOverlay;
use crate::components::notification_toast::NotificationToast;
use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::net::transport::FetchTransport;
use crate::net::user::UserService;
use crate::pages::{account::AccountPage, login::LoginPage, registration::RegistrationPage};
use crate::state::app::AppState;
use crate::state::session::SessionState;
use crate::state::user::UserStore;
use crate::util::route_guard;
use crate::util::token::BrowserTokenStore;

/// Session store wired to the browser transport and storage.
pub type ClientStore = UserStore<FetchTransport, BrowserTokenStore>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Wires the store stack (transport, token storage, gateway, service,
/// session orchestrator), provides the shared contexts, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_env();
    let app = RwSignal::new(AppState::default());
    let session = RwSignal::new(SessionState::default());

    let client = ApiClient::new(
        config.api_host.clone(),
        FetchTransport,
        BrowserTokenStore,
        app,
    );
    let service = UserService::new(client, app);
    let store = UserStore::new(service, BrowserTokenStore, session);

    provide_context(app);
    provide_context(session);
    provide_context(config);
    provide_context(store);

    view! {
        <Stylesheet id="leptos" href="/pkg/cabinet-client.css"/>
        <Title text="Cabinet"/>

        <Router>
            <RouteGuard/>
            <LoadingOverlay/>
            <NotificationToast/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/registration"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("registration") view=RegistrationPage/>
                <Route path=StaticSegment("account") view=AccountPage/>
            </Routes>
        </Router>
    }
}

/// Applies the guest-only/protected redirect rules on every navigation.
///
/// Renders nothing. Effects do not run during server rendering, so the
/// guard is active in the browser only; the server enforces nothing here.
#[component]
fn RouteGuard() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        let has_token = session.get().token.is_some();
        if let Some(destination) = route_guard::evaluate(&config.auth_rules, has_token, &path) {
            navigate(destination, NavigateOptions::default());
        }
    });
}
