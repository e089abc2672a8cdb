//! Credential token encoding and durable token storage.
//!
//! The backend authenticates with an HTTP `Basic` credential the client
//! derives itself: base64 of `login:password`. The token is recomputed from
//! credentials on every login rather than issued by the server, and lives in
//! `localStorage` under a fixed key between sessions.
//!
//! Browser storage access is gated behind `#[cfg(feature = "hydrate")]` with
//! inert stubs elsewhere, since it requires a `window`.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// `localStorage` key holding the authorization token.
pub const TOKEN_STORAGE_KEY: &str = "accessToken";

/// Encode a login/password pair into the `Basic` credential body.
///
/// Deterministic and infallible: the standard base64 encoding of the UTF-8
/// bytes of `login + ":" + password`, exactly what the server verifies.
pub fn encode_credentials(login: &str, password: &str) -> String {
    STANDARD.encode(format!("{login}:{password}"))
}

/// Durable storage for the single authorization token.
///
/// The gateway reads through this to attach the authorization header, and
/// the session flows write through it. Browser builds persist to
/// `localStorage`; tests inject a [`MemoryTokenStore`].
pub trait TokenStore {
    /// Currently stored token, if any.
    fn get(&self) -> Option<String>;
    /// Persist `token`, replacing any previous value.
    fn set(&self, token: &str);
    /// Remove the stored token. Idempotent.
    fn clear(&self);
}

/// Token store backed by the browser's `localStorage`.
///
/// Outside the hydrate build every read is `None` and writes are dropped,
/// matching the stubbed behavior of the other browser-only modules.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            storage.get_item(TOKEN_STORAGE_KEY).ok()?
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(TOKEN_STORAGE_KEY);
                }
            }
        }
    }
}

/// In-memory token store for tests and dependency injection.
///
/// Clones share the same slot, so a store handed to the gateway and one
/// handed to the session flows observe each other's writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore(std::rc::Rc<std::cell::RefCell<Option<String>>>);

impl MemoryTokenStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `token`, as if a previous session had left one.
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}
