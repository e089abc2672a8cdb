//! HTTP transport boundary.
//!
//! The gateway is generic over [`Transport`] so native unit tests can drive
//! it with canned responses while the browser build goes through `gloo-net`
//! fetch. A transport only moves bytes: status checking and JSON decoding
//! stay in the gateway.

use crate::net::error::TransportError;

/// HTTP method subset the account API uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    /// Wire name of the method.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
        }
    }
}

/// A fully prepared outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Raw response: status plus undecoded body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    /// Whether the status is in the 2xx success range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Opaque request/response function the gateway talks through.
// Client-side only; these futures never need to be Send.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Issue the request and collect the response body as text.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

/// Browser fetch transport backed by `gloo-net`.
///
/// Outside the hydrate build every send fails with a transport error,
/// mirroring the stubs of the other browser-only modules.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::RequestBuilder;

            let method = match request.method {
                Method::Get => gloo_net::http::Method::GET,
                Method::Post => gloo_net::http::Method::POST,
                Method::Patch => gloo_net::http::Method::PATCH,
            };

            let mut builder = RequestBuilder::new(&request.url).method(method);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|err| TransportError(err.to_string()))?;

            let response = prepared
                .send()
                .await
                .map_err(|err| TransportError(err.to_string()))?;

            let status = response.status();
            // An empty or unreadable body surfaces as a decode error upstream.
            let body = response.text().await.unwrap_or_default();
            Ok(TransportResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(TransportError(format!(
                "no transport outside the browser ({} {})",
                request.method.as_str(),
                request.url
            )))
        }
    }
}
