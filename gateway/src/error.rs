//! Error taxonomy for REST calls.
//!
//! The backend reports failures with an HTTP status plus, usually, a Laravel
//! style body: `{ "message": "...", "errors": { "field": ["..."] } }`. Status
//! decides the variant; the body only contributes messages.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::transport::TransportError;

/// Failure of a single API call, collapsed by how the UI reacts to it.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// 401, or no stored credential to send.
    #[error("not authenticated")]
    Unauthenticated,
    /// 403.
    #[error("{0}")]
    Forbidden(String),
    /// 404.
    #[error("{0}")]
    NotFound(String),
    /// 422 with optional per-field messages.
    #[error("{message}")]
    Validation {
        message: String,
        fields: BTreeMap<String, Vec<String>>,
    },
    /// Any other non-2xx status.
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
    /// The response body was not the JSON shape we expected.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Checkout succeeded but carried no payment URL.
    #[error("payment link missing from checkout response")]
    MissingInitPoint,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: BTreeMap<String, Vec<String>>,
}

impl ApiError {
    /// Classify a non-2xx response.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).unwrap_or_default();
        let message = parsed.message.filter(|m| !m.trim().is_empty());
        match status {
            401 => Self::Unauthenticated,
            403 => Self::Forbidden(message.unwrap_or_else(|| "You do not have permission to do that.".to_owned())),
            404 => Self::NotFound(message.unwrap_or_else(|| "Not found.".to_owned())),
            422 => Self::Validation {
                message: message.unwrap_or_else(|| "Some fields are invalid.".to_owned()),
                fields: parsed.errors,
            },
            _ => Self::Server {
                status,
                message: message.unwrap_or_else(|| "Request failed.".to_owned()),
            },
        }
    }

    #[must_use]
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }

    /// First per-field validation message following `order`, then the
    /// general message. `None` for non-validation errors.
    #[must_use]
    pub fn first_field_error(&self, order: &[&str]) -> Option<String> {
        let Self::Validation { message, fields } = self else {
            return None;
        };
        order
            .iter()
            .find_map(|key| fields.get(*key).and_then(|msgs| msgs.first()).cloned())
            .or_else(|| Some(message.clone()))
    }

    /// Message suitable for an inline alert or notice.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthenticated => "Your session has expired. Please log in again.".to_owned(),
            Self::Forbidden(message) | Self::NotFound(message) => message.clone(),
            Self::Validation { message, .. } => message.clone(),
            Self::Server { message, .. } => message.clone(),
            Self::Transport(_) => "Could not reach the server. Check your connection.".to_owned(),
            Self::Decode(_) => "The server sent an unexpected response.".to_owned(),
            Self::MissingInitPoint => "Invalid payment link.".to_owned(),
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        Self::Transport(error.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}
