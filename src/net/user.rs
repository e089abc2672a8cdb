//! Domain operations on the account API.
//!
//! Each operation pairs a gateway call with a fixed human-readable failure
//! title: on any error exactly one error-colored notification is written
//! (flattened validation messages when the server sent them, the error's
//! own message otherwise) and the original error is re-raised unchanged so
//! callers can react too.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{
    AccountResponse, ChangePassRequest, ChangePassResponse, Credentials, LoginResponse,
    RegisterRequest, RegisterResponse,
};
use crate::state::app::{AppState, Color};
use crate::util::token::{TokenStore, encode_credentials};

/// Account API operations with failure notifications.
#[derive(Clone, Debug)]
pub struct UserService<T, S> {
    client: ApiClient<T, S>,
    app: RwSignal<AppState>,
}

impl<T: Transport, S: TokenStore> UserService<T, S> {
    pub fn new(client: ApiClient<T, S>, app: RwSignal<AppState>) -> Self {
        Self { client, app }
    }

    /// Authenticate with the given credentials.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.notify_failure(
            "Login failed",
            self.client.post("account/login", credentials).await,
        )
    }

    /// Create a new account.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.notify_failure(
            "Registration failed",
            self.client.post("account/register", request).await,
        )
    }

    /// Fetch the referral profile for `login`.
    pub async fn get_account_info(&self, login: &str) -> Result<AccountResponse, ApiError> {
        self.notify_failure(
            "Could not load profile",
            self.client.get(&format!("account/user/{login}")).await,
        )
    }

    /// Change the password of `login`.
    pub async fn change_password(
        &self,
        login: &str,
        passwords: &ChangePassRequest,
    ) -> Result<ChangePassResponse, ApiError> {
        self.notify_failure(
            "Password change failed",
            self.client
                .patch(&format!("account/user/{login}/changepassword"), passwords)
                .await,
        )
    }

    /// Derive the `Basic` credential token for a login/password pair.
    /// Infallible.
    pub fn generate_token(&self, login: &str, password: &str) -> String {
        encode_credentials(login, password)
    }

    fn notify_failure<R>(&self, title: &str, result: Result<R, ApiError>) -> Result<R, ApiError> {
        if let Err(err) = &result {
            let message = err.describe();
            self.app
                .update(|app| app.create_notification(Color::Error, title, &message));
        }
        result
    }
}
