use futures::executor::block_on;
use leptos::prelude::GetUntracked;

use super::*;
use crate::net::testing::StubTransport;
use crate::util::token::MemoryTokenStore;

fn service(transport: StubTransport) -> (UserService<StubTransport, MemoryTokenStore>, RwSignal<AppState>) {
    let app = RwSignal::new(AppState::default());
    let client = ApiClient::new(String::new(), transport, MemoryTokenStore::new(), app);
    (UserService::new(client, app), app)
}

fn credentials() -> Credentials {
    Credentials { login: "a".to_owned(), password: "b".to_owned() }
}

// =============================================================
// Success: no notification
// =============================================================

#[test]
fn successful_login_writes_no_notification() {
    let transport = StubTransport::new();
    transport.push_response(200, r#"{"user_id":1}"#);
    let (service, app) = service(transport);

    let response = block_on(service.login(&credentials())).expect("login response");
    assert_eq!(response.user_id, 1);
    assert!(!app.get_untracked().notification.show);
}

// =============================================================
// Failure: exactly one error notification, then re-raise
// =============================================================

#[test]
fn failed_login_notifies_with_flattened_messages() {
    let transport = StubTransport::new();
    transport.push_response(422, r#"{"login":["unknown user"],"password":["too short"]}"#);
    let (service, app) = service(transport);

    let err = block_on(service.login(&credentials())).unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 422, .. }));

    let notification = app.get_untracked().notification;
    assert!(notification.show);
    assert_eq!(notification.color, Color::Error);
    assert_eq!(notification.title, "Login failed");
    assert_eq!(notification.message, "unknown user\ntoo short");
}

#[test]
fn failure_without_payload_falls_back_to_the_error_message() {
    let transport = StubTransport::new();
    transport.push_response(500, "");
    let (service, app) = service(transport);

    block_on(service.register(&RegisterRequest {
        login: "a".to_owned(),
        password: "b".to_owned(),
        password_confirmation: "b".to_owned(),
        reffer: None,
    }))
    .unwrap_err();

    let notification = app.get_untracked().notification;
    assert_eq!(notification.title, "Registration failed");
    assert_eq!(notification.message, "API: 500");
}

#[test]
fn decode_failure_notifies_too() {
    let transport = StubTransport::new();
    transport.push_response(200, "not json");
    let (service, app) = service(transport);

    let err = block_on(service.get_account_info("a")).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));

    let notification = app.get_untracked().notification;
    assert!(notification.show);
    assert_eq!(notification.title, "Could not load profile");
}

#[test]
fn operations_hit_their_fixed_endpoints() {
    let transport = StubTransport::new();
    transport.push_response(200, r#"{"user_id":1}"#);
    transport.push_response(
        200,
        r#"{"data":{"id":"1","login":"alice","referral_code":"x","children":[]}}"#,
    );
    let (service, _) = service(transport.clone());

    let _ = block_on(service.change_password(
        "alice",
        &ChangePassRequest {
            current_password: "old".to_owned(),
            password: "new".to_owned(),
            password_confirmation: "new".to_owned(),
        },
    ))
    .expect("change password");
    let _ = block_on(service.get_account_info("alice")).expect("account info");

    let sent = transport.requests();
    assert_eq!(sent[0].url, "/api/account/user/alice/changepassword");
    assert_eq!(sent[0].method, crate::net::transport::Method::Patch);
    assert_eq!(sent[1].url, "/api/account/user/alice");
    assert_eq!(sent[1].method, crate::net::transport::Method::Get);
}

// =============================================================
// Token generation
// =============================================================

#[test]
fn generate_token_matches_the_encoder() {
    let (service, _) = service(StubTransport::new());
    assert_eq!(service.generate_token("a", "b"), "YTpi");
}
