//! Authorized request gateway.
//!
//! Every account API call funnels through [`ApiClient::request`]: it raises
//! the global loading indicator, attaches the `Basic` authorization header
//! when a token is stored, checks the response status, extracts the
//! structured error payload on failure, decodes JSON on success, and lowers
//! the loading indicator on every exit path.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Status`] with the server's
//! per-field messages (an unparseable error body collapses to an empty
//! mapping). Undecodable success bodies become [`ApiError::Decode`]. No
//! retries anywhere in this layer.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::{RwSignal, Update};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::error::{ApiError, FieldErrors};
use crate::net::transport::{Method, Transport, TransportRequest};
use crate::state::app::AppState;
use crate::util::token::TokenStore;

/// Gateway through which all account API calls pass.
#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    api_host: String,
    transport: T,
    tokens: S,
    app: RwSignal<AppState>,
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    pub fn new(api_host: String, transport: T, tokens: S, app: RwSignal<AppState>) -> Self {
        Self { api_host, transport, tokens, app }
    }

    /// GET `endpoint` and decode the response body as `R`.
    pub async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        self.request(Method::Get, endpoint, &[], None).await
    }

    /// POST `body` as JSON to `endpoint`.
    pub async fn post<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &impl Serialize,
    ) -> Result<R, ApiError> {
        self.request(Method::Post, endpoint, &[], Some(encode_body(body)?)).await
    }

    /// PATCH `body` as JSON to `endpoint`.
    pub async fn patch<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &impl Serialize,
    ) -> Result<R, ApiError> {
        self.request(Method::Patch, endpoint, &[], Some(encode_body(body)?)).await
    }

    /// Issue a request with explicit method, extra headers, and raw body.
    ///
    /// Holds the loading indicator for the whole call; it is released on
    /// every exit path, success or failure.
    ///
    /// # Errors
    ///
    /// See the module docs for the failure taxonomy.
    pub async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        extra_headers: &[(String, String)],
        body: Option<String>,
    ) -> Result<R, ApiError> {
        self.app.update(AppState::start_loading);
        let result = self.dispatch(method, endpoint, extra_headers, body).await;
        self.app.update(AppState::stop_loading);

        if let Err(err) = &result {
            leptos::logging::error!("auth API error: {err}");
        }
        result
    }

    async fn dispatch<R: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        extra_headers: &[(String, String)],
        body: Option<String>,
    ) -> Result<R, ApiError> {
        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        headers.extend(extra_headers.iter().cloned());
        // Requests without a stored token go out unauthenticated.
        if let Some(token) = self.tokens.get() {
            headers.push(("Authorization".to_owned(), format!("Basic {token}")));
        }

        let response = self
            .transport
            .send(TransportRequest {
                method,
                url: format!("{}/api/{endpoint}", self.api_host),
                headers,
                body,
            })
            .await?;

        if !response.ok() {
            let field_errors =
                serde_json::from_str::<FieldErrors>(&response.body).unwrap_or_default();
            return Err(ApiError::Status { status: response.status, field_errors });
        }

        serde_json::from_str(&response.body).map_err(|err| ApiError::Decode(err.to_string()))
    }
}

fn encode_body(body: &impl Serialize) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|err| ApiError::Decode(err.to_string()))
}
