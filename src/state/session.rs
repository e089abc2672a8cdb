//! In-memory authentication session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::AccountResponse;

/// Current token and profile for this client.
///
/// Invariant: `user` is only ever present while `token` is present. The
/// profile fetch always follows token establishment, and failures reset
/// both fields together through [`SessionState::clear`], never one at a
/// time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<AccountResponse>,
}

impl SessionState {
    /// Replace the token, keeping any loaded profile.
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Store a freshly fetched profile wholesale.
    pub fn set_user(&mut self, user: AccountResponse) {
        self.user = Some(user);
    }

    /// Reset both fields together.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }

    /// Login of the signed-in user, if a profile is loaded.
    pub fn login(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.data.login.as_str())
    }
}
