//! In-memory backend for gateway tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde_json::Value;

use crate::api::Api;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport, TransportError};

pub const BASE_URL: &str = "http://api.test";

#[derive(Clone, Debug)]
struct Route {
    status: u16,
    body: String,
}

/// Canned responses keyed by `(method, path)`. Requests are recorded.
/// With `accept_token`, any request carrying a different bearer gets 401.
#[derive(Clone, Default)]
pub struct StubTransport {
    routes: Rc<RefCell<BTreeMap<(&'static str, String), Route>>>,
    requests: Rc<RefCell<Vec<ApiRequest>>>,
    token: Rc<RefCell<Option<String>>>,
    offline: bool,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(self, method: Method, path: &str, status: u16, body: Value) -> Self {
        let body = if body.is_null() { String::new() } else { body.to_string() };
        self.routes
            .borrow_mut()
            .insert((method.as_str(), path.to_owned()), Route { status, body });
        self
    }

    pub fn accept_token(self, token: &str) -> Self {
        *self.token.borrow_mut() = Some(token.to_owned());
        self
    }

    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|r| format!("{} {}", r.method.as_str(), strip_base(&r.url)))
            .collect()
    }
}

fn strip_base(url: &str) -> &str {
    url.strip_prefix(BASE_URL).unwrap_or(url)
}

impl Transport for StubTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        if self.offline {
            return Err(TransportError::Network("connection refused".to_owned()));
        }
        if let Some(expected) = self.token.borrow().as_deref() {
            if request.bearer.is_some() && request.bearer.as_deref() != Some(expected) {
                return Ok(ApiResponse {
                    status: 401,
                    body: r#"{"message":"Unauthenticated."}"#.to_owned(),
                });
            }
        }
        let key = (request.method.as_str(), strip_base(&request.url).to_owned());
        Ok(match self.routes.borrow().get(&key) {
            Some(route) => ApiResponse {
                status: route.status,
                body: route.body.clone(),
            },
            None => ApiResponse {
                status: 404,
                body: r#"{"message":"Not Found"}"#.to_owned(),
            },
        })
    }
}

pub fn api(transport: StubTransport) -> Api<StubTransport> {
    Api::new(BASE_URL, transport)
}

pub fn user_json(id: u64, name: &str) -> Value {
    serde_json::json!({ "id": id, "name": name, "email": format!("{}@example.com", name.to_lowercase()) })
}

pub fn event_json(id: u64, title: &str) -> Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "description": "desc",
        "date": "2025-05-01",
        "city": "Recife",
        "private": 0,
        "price": "0.00",
        "is_paid": 0,
        "items": [],
        "user_id": 1
    })
}
