//! Auth session orchestrator.
//!
//! Sequences the multi-step flows (login, registration, profile fetch,
//! password change) against the session state, the token store, and the
//! account service.
//!
//! ROLLBACK
//! ========
//! Flows are all-or-nothing: any failed step clears the token store and
//! both session fields together before the error is re-raised, so the
//! session can never hold a profile without a token and never stays
//! half-established.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use leptos::prelude::{GetUntracked, RwSignal, Update};

use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{
    ChangePassRequest, ChangePassResponse, Credentials, LoginResponse, RegisterRequest,
    RegisterResponse,
};
use crate::net::user::UserService;
use crate::state::session::SessionState;
use crate::util::token::TokenStore;

/// Owns the session state and sequences the auth flows.
#[derive(Clone, Debug)]
pub struct UserStore<T, S> {
    service: UserService<T, S>,
    tokens: S,
    session: RwSignal<SessionState>,
}

impl<T: Transport, S: TokenStore> UserStore<T, S> {
    /// Build the store, seeding the session token from durable storage so a
    /// returning visitor starts out authenticated.
    pub fn new(service: UserService<T, S>, tokens: S, session: RwSignal<SessionState>) -> Self {
        if let Some(token) = tokens.get() {
            session.update(|state| state.set_token(token));
        }
        Self { service, tokens, session }
    }

    /// The shared session signal.
    pub fn session(&self) -> RwSignal<SessionState> {
        self.session
    }

    /// Sign in: derive and store the token, authenticate, load the profile.
    ///
    /// # Errors
    ///
    /// Re-raises the first failing step's error after rolling the session
    /// back to anonymous.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let flow = async {
            self.set_token(
                self.service
                    .generate_token(&credentials.login, &credentials.password),
            );
            let response = self.service.login(credentials).await?;
            self.load_profile(&credentials.login).await?;
            Ok(response)
        };
        self.rollback_on_error(flow.await)
    }

    /// Sign up, then establish a session exactly as a login would.
    ///
    /// # Errors
    ///
    /// Same rollback policy as [`UserStore::login`].
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let flow = async {
            let response = self.service.register(request).await?;
            self.set_token(
                self.service
                    .generate_token(&request.login, &request.password),
            );
            self.load_profile(&request.login).await?;
            Ok(response)
        };
        self.rollback_on_error(flow.await)
    }

    /// Reload the profile for `login` into the session.
    ///
    /// # Errors
    ///
    /// Clears the session and re-raises if the fetch fails.
    pub async fn fetch_user(&self, login: &str) -> Result<(), ApiError> {
        self.rollback_on_error(self.load_profile(login).await)
    }

    /// Change the signed-in user's password.
    ///
    /// # Errors
    ///
    /// [`ApiError::MissingLogin`] when no profile (and thus no login) is
    /// held; otherwise the service's error, re-raised unchanged.
    pub async fn change_password(
        &self,
        passwords: &ChangePassRequest,
    ) -> Result<ChangePassResponse, ApiError> {
        let session = self.session.get_untracked();
        let login = session.login().ok_or(ApiError::MissingLogin)?.to_owned();
        self.service.change_password(&login, passwords).await
    }

    /// Drop the session and the stored token. Idempotent.
    pub fn clear_auth(&self) {
        self.session.update(SessionState::clear);
        self.tokens.clear();
    }

    fn set_token(&self, token: String) {
        self.tokens.set(&token);
        self.session.update(|state| state.set_token(token));
    }

    async fn load_profile(&self, login: &str) -> Result<(), ApiError> {
        let account = self.service.get_account_info(login).await?;
        self.session.update(|state| state.set_user(account));
        Ok(())
    }

    fn rollback_on_error<R>(&self, result: Result<R, ApiError>) -> Result<R, ApiError> {
        if result.is_err() {
            self.clear_auth();
        }
        result
    }
}
