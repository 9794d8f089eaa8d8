//! HTTP transport seam.
//!
//! `Api` builds transport-neutral requests; each front end supplies a
//! `Transport` that turns them into real HTTP (`gloo-net` in the browser,
//! `reqwest` in the CLI). The trait has no `Send` bound because browser
//! futures are single-threaded.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use serde_json::Value;

/// HTTP verbs used by the API. Updates are `POST` with `_method=PUT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// A file attached to a multipart body.
#[derive(Clone, Debug, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// One field of a multipart form.
#[derive(Clone, Debug, PartialEq)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, upload: Upload },
}

impl FormPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }

    /// Text value, or `None` for file parts.
    #[must_use]
    pub fn text_value(&self) -> Option<&str> {
        match self {
            Self::Text { value, .. } => Some(value),
            Self::File { .. } => None,
        }
    }
}

/// Request payload.
#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Empty,
    Json(Value),
    Multipart(Vec<FormPart>),
}

/// A fully resolved request, ready for a transport to send.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Body,
}

impl ApiRequest {
    /// Headers every transport must send. Multipart bodies get no explicit
    /// content type so the HTTP stack can add the boundary.
    #[must_use]
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Accept", "application/json".to_owned())];
        if matches!(self.body, Body::Json(_)) {
            headers.push(("Content-Type", "application/json".to_owned()));
        }
        if let Some(token) = &self.bearer {
            headers.push(("Authorization", format!("Bearer {token}")));
        }
        headers
    }
}

/// Status and raw body of a completed exchange.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure to obtain any response at all.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("request could not be built: {0}")]
    Build(String),
    #[error("request failed: {0}")]
    Network(String),
}

/// Sends one request and returns whatever status the server answered with.
/// Non-2xx statuses are not errors at this layer.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
