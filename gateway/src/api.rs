//! Typed client for the events REST API.
//!
//! One method per backend route. Methods that need a credential take the
//! bearer token explicitly; `Gateway` is the layer that knows where tokens
//! come from and what a 401 means for the session.
//!
//! ENVELOPES
//! =========
//! The backend is inconsistent about wrapping: lists come bare, under
//! `data`, under a paginated `data.data`, or under `events`; details come
//! bare or under `data`. Each method unwraps what its route is known to
//! return and decodes the rest strictly.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::form::{EventForm, FormMode};
use crate::transport::{ApiRequest, Body, Method, Transport};
use crate::types::{
    AuthResponse, CheckoutResponse, Event, LoginRequest, MeResponse, Participant, RegisterRequest, User,
    extract_list, unwrap_data,
};

pub(crate) fn event_path(event_id: u64) -> String {
    format!("/api/events/{event_id}")
}

pub(crate) fn public_event_path(event_id: u64) -> String {
    format!("/api/public/events/{event_id}")
}

pub(crate) fn event_action_path(event_id: u64, action: &str) -> String {
    format!("/api/events/{event_id}/{action}")
}

pub(crate) fn public_participants_path(event_id: u64) -> String {
    format!("/api/public/events/{event_id}/participants")
}

/// REST client bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct Api<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> Api<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, transport }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call(&self, method: Method, path: &str, bearer: Option<&str>, body: Body) -> Result<Value, ApiError> {
        let request = ApiRequest {
            method,
            url: format!("{}{path}", self.base_url),
            bearer: bearer.map(str::to_owned),
            body,
        };
        log::debug!("api: {} {path}", method.as_str());
        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("api: {} {path} failed: {e}", method.as_str());
            ApiError::from(e)
        })?;
        if !response.is_success() {
            log::warn!("api: {} {path} -> {}", method.as_str(), response.status);
            return Err(ApiError::from_status(response.status, &response.body));
        }
        if response.status == 204 || response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    async fn call_json<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        bearer: Option<&str>,
        body: Body,
    ) -> Result<R, ApiError> {
        let value = self.call(method, path, bearer, body).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn get_event(&self, path: &str, bearer: Option<&str>) -> Result<Event, ApiError> {
        let value = self.call(Method::Get, path, bearer, Body::Empty).await?;
        Ok(serde_json::from_value(unwrap_data(value))?)
    }

    async fn get_list<R: DeserializeOwned>(&self, path: &str, bearer: Option<&str>) -> Result<Vec<R>, ApiError> {
        let value = self.call(Method::Get, path, bearer, Body::Empty).await?;
        Ok(serde_json::from_value(extract_list(value))?)
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// `POST /api/login`.
    ///
    /// # Errors
    ///
    /// `Validation` or `Unauthenticated` for bad credentials, plus the usual
    /// transport and decode failures.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let body = Body::Json(serde_json::to_value(request)?);
        self.call_json(Method::Post, "/api/login", None, body).await
    }

    /// `POST /api/register`.
    ///
    /// # Errors
    ///
    /// `Validation` when the backend rejects a field (e.g. a taken email).
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let body = Body::Json(serde_json::to_value(request)?);
        self.call_json(Method::Post, "/api/register", None, body).await
    }

    /// `POST /api/logout`, revoking `token` on the backend.
    ///
    /// # Errors
    ///
    /// Any non-2xx status or transport failure.
    pub async fn logout(&self, token: &str) -> Result<(), ApiError> {
        self.call(Method::Post, "/api/logout", Some(token), Body::Empty).await?;
        Ok(())
    }

    /// `GET /api/user`: strict, the bare user object.
    ///
    /// # Errors
    ///
    /// `Unauthenticated` for a missing or expired token.
    pub async fn user(&self, token: &str) -> Result<User, ApiError> {
        let value = self.call(Method::Get, "/api/user", Some(token), Body::Empty).await?;
        Ok(serde_json::from_value(unwrap_data(value))?)
    }

    /// `GET /api/me`: the `{success, data}` envelope. A `success: false`
    /// body or a missing user is reported as `Unauthenticated`.
    ///
    /// # Errors
    ///
    /// As `user`, plus the envelope cases above.
    pub async fn me(&self, token: &str) -> Result<User, ApiError> {
        let envelope: MeResponse = self.call_json(Method::Get, "/api/me", Some(token), Body::Empty).await?;
        match envelope {
            MeResponse {
                success: true,
                data: Some(user),
            } => Ok(user),
            _ => Err(ApiError::Unauthenticated),
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// `GET /api/events`: events owned by the token's user.
    ///
    /// # Errors
    ///
    /// Transport, status, or decode failures.
    pub async fn my_events(&self, token: &str) -> Result<Vec<Event>, ApiError> {
        self.get_list("/api/events", Some(token)).await
    }

    /// `GET /api/events/:id`.
    ///
    /// # Errors
    ///
    /// `NotFound` / `Forbidden` as reported by the backend.
    pub async fn event(&self, token: &str, event_id: u64) -> Result<Event, ApiError> {
        self.get_event(&event_path(event_id), Some(token)).await
    }

    /// `POST /api/events` as multipart.
    ///
    /// # Errors
    ///
    /// `Validation` with per-field messages on 422.
    pub async fn create_event(&self, token: &str, form: &EventForm) -> Result<Event, ApiError> {
        let body = Body::Multipart(form.to_parts(FormMode::Create));
        let value = self.call(Method::Post, "/api/events", Some(token), body).await?;
        Ok(serde_json::from_value(unwrap_data(value))?)
    }

    /// `POST /api/events/:id` with `_method=PUT` (multipart cannot ride a
    /// real `PUT` through the backend's form parser).
    ///
    /// # Errors
    ///
    /// As `create_event`, plus `Forbidden` for events the user does not own.
    pub async fn update_event(&self, token: &str, event_id: u64, form: &EventForm) -> Result<Event, ApiError> {
        let body = Body::Multipart(form.to_parts(FormMode::Update));
        let value = self.call(Method::Post, &event_path(event_id), Some(token), body).await?;
        Ok(serde_json::from_value(unwrap_data(value))?)
    }

    /// `DELETE /api/events/:id`.
    ///
    /// # Errors
    ///
    /// Any non-2xx status or transport failure.
    pub async fn delete_event(&self, token: &str, event_id: u64) -> Result<(), ApiError> {
        self.call(Method::Delete, &event_path(event_id), Some(token), Body::Empty).await?;
        Ok(())
    }

    /// `GET /api/public/events`.
    ///
    /// # Errors
    ///
    /// Transport, status, or decode failures.
    pub async fn public_events(&self) -> Result<Vec<Event>, ApiError> {
        self.get_list("/api/public/events", None).await
    }

    /// `GET /api/public/events/:id`.
    ///
    /// # Errors
    ///
    /// `NotFound` for unknown or private events.
    pub async fn public_event(&self, event_id: u64) -> Result<Event, ApiError> {
        self.get_event(&public_event_path(event_id), None).await
    }

    // =========================================================================
    // Participation
    // =========================================================================

    /// `GET /api/events/:id/participants` (owner view).
    ///
    /// # Errors
    ///
    /// `Forbidden` when the token's user does not own the event.
    pub async fn participants(&self, token: &str, event_id: u64) -> Result<Vec<Participant>, ApiError> {
        self.get_list(&event_action_path(event_id, "participants"), Some(token))
            .await
    }

    /// `GET /api/public/events/:id/participants`.
    ///
    /// # Errors
    ///
    /// Transport, status, or decode failures.
    pub async fn public_participants(&self, event_id: u64) -> Result<Vec<Participant>, ApiError> {
        self.get_list(&public_participants_path(event_id), None).await
    }

    /// `POST /api/events/:id/join`.
    ///
    /// # Errors
    ///
    /// Any non-2xx status, e.g. `Validation` for a paid event.
    pub async fn join_event(&self, token: &str, event_id: u64) -> Result<(), ApiError> {
        self.call(Method::Post, &event_action_path(event_id, "join"), Some(token), Body::Empty)
            .await?;
        Ok(())
    }

    /// `POST /api/events/:id/leave`.
    ///
    /// # Errors
    ///
    /// Any non-2xx status or transport failure.
    pub async fn leave_event(&self, token: &str, event_id: u64) -> Result<(), ApiError> {
        self.call(Method::Post, &event_action_path(event_id, "leave"), Some(token), Body::Empty)
            .await?;
        Ok(())
    }

    /// `POST /api/events/:id/checkout`, returning the payment provider's
    /// `init_point` URL.
    ///
    /// # Errors
    ///
    /// `MissingInitPoint` when the response carries no usable URL.
    pub async fn start_checkout(&self, token: &str, event_id: u64) -> Result<String, ApiError> {
        let value = self
            .call(Method::Post, &event_action_path(event_id, "checkout"), Some(token), Body::Empty)
            .await?;
        let response: CheckoutResponse = serde_json::from_value(unwrap_data(value)).unwrap_or(CheckoutResponse {
            init_point: None,
        });
        response
            .init_point
            .map(|url| url.trim().to_owned())
            .filter(|url| !url.is_empty())
            .ok_or(ApiError::MissingInitPoint)
    }
}
