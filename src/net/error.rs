//! Error taxonomy for the gateway and the auth flows.
//!
//! Failures carry structure instead of ad-hoc payloads: a non-2xx response
//! becomes [`ApiError::Status`] with the HTTP status and the server's
//! per-field validation messages, a network failure becomes
//! [`ApiError::Transport`], and an undecodable success body becomes
//! [`ApiError::Decode`]. Nothing in this layer retries.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

use serde::Deserialize;
use serde::de::{MapAccess, Visitor};
use thiserror::Error;

/// Network-level failure before any response was obtained.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("network error: {0}")]
pub struct TransportError(pub String);

/// Per-field validation messages from an error response body.
///
/// Entries keep the order the server sent them in; `serde_json`'s default
/// map type would sort keys, and [`format_validation_errors`] must not.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(String, Vec<String>)>);

impl FieldErrors {
    /// Whether the server attached any messages at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fields and their messages, in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }
}

impl<'de> Deserialize<'de> for FieldErrors {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct FieldErrorsVisitor;

        impl<'de> Visitor<'de> for FieldErrorsVisitor {
            type Value = FieldErrors;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of field names to arrays of messages")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, Vec<String>>()? {
                    entries.push(entry);
                }
                Ok(FieldErrors(entries))
            }
        }

        deserializer.deserialize_map(FieldErrorsVisitor)
    }
}

/// Flatten every message across all fields into one newline-joined string.
///
/// Field order and per-field message order are preserved; no labels, no
/// de-duplication. Display-only.
pub fn format_validation_errors(errors: &FieldErrors) -> String {
    let mut lines = Vec::new();
    for (_, messages) in errors.iter() {
        for message in messages {
            lines.push(message.as_str());
        }
    }
    lines.join("\n")
}

/// Failure raised by the gateway or the auth flows.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The transport failed before producing a response.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The server answered with a status outside the 2xx range.
    #[error("API: {status}")]
    Status { status: u16, field_errors: FieldErrors },
    /// A success response carried a body that did not decode.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// A flow needed the signed-in user's login and none was present.
    #[error("login missing")]
    MissingLogin,
}

impl ApiError {
    /// Human-readable description used for notifications: the flattened
    /// field errors when present, otherwise the error's own message.
    pub fn describe(&self) -> String {
        match self {
            Self::Status { field_errors, .. } if !field_errors.is_empty() => {
                format_validation_errors(field_errors)
            }
            other => other.to_string(),
        }
    }
}
