//! Local axum stand-in for the events backend.

use axum::extract::{Multipart, Path};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

pub const TOKEN: &str = "tok-1";
pub const EMAIL: &str = "ada@example.com";
pub const PASSWORD: &str = "secret";

pub fn user_json() -> Value {
    json!({ "id": 1, "name": "Ada", "email": EMAIL, "created_at": "2024-01-02T10:00:00Z" })
}

pub fn event_json(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "Talks and pizza",
        "date": "2025-03-01",
        "city": "Recife",
        "price": "15.00",
        "is_paid": 1,
        "user_id": 1,
    })
}

/// Start the stub on an ephemeral port and return its base URL.
pub async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/login", post(login))
        .route("/api/register", post(register))
        .route("/api/logout", post(|| async { StatusCode::NO_CONTENT }))
        .route("/api/user", get(user))
        .route("/api/me", get(me))
        .route("/api/events", get(my_events).post(create_event))
        .route("/api/events/{id}", get(event).post(update_event).delete(delete_event))
        .route("/api/events/{id}/checkout", post(checkout))
        .route("/api/public/events", get(public_events));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });
    format!("http://{addr}")
}

fn authorized(headers: &HeaderMap) -> bool {
    let expected = format!("Bearer {TOKEN}");
    headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) == Some(expected.as_str())
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Unauthenticated." }))).into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["email"] == EMAIL && body["password"] == PASSWORD {
        Json(json!({ "token": TOKEN, "user": user_json() })).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Invalid credentials" }))).into_response()
    }
}

async fn register(Json(body): Json<Value>) -> Response {
    if body["email"] == EMAIL {
        let errors = json!({ "email": ["The email has already been taken."] });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "message": "Invalid data", "errors": errors })))
            .into_response();
    }
    let user = json!({ "id": 2, "name": body["name"], "email": body["email"] });
    (StatusCode::CREATED, Json(json!({ "token": TOKEN, "user": user }))).into_response()
}

async fn user(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(user_json()).into_response()
}

async fn me(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({ "success": true, "data": user_json() })).into_response()
}

async fn my_events(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({ "data": [event_json(5, "Rust Meetup")] })).into_response()
}

async fn event(headers: HeaderMap, Path(id): Path<u64>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if id != 5 {
        return (StatusCode::NOT_FOUND, Json(json!({ "message": "Event not found" }))).into_response();
    }
    Json(json!({ "data": event_json(5, "Rust Meetup") })).into_response()
}

/// Echo the multipart fields back as an event so tests can inspect them.
async fn echo_form(id: u64, mut multipart: Multipart) -> Value {
    let mut event = json!({ "id": id, "items": [] });
    while let Some(field) = multipart.next_field().await.expect("multipart field") {
        let name = field.name().unwrap_or_default().to_owned();
        if let Some(file_name) = field.file_name().map(str::to_owned) {
            let bytes = field.bytes().await.expect("file bytes");
            event["image"] = json!(format!("events/{file_name}:{}", bytes.len()));
            continue;
        }
        let text = field.text().await.expect("text field");
        match name.as_str() {
            "items[]" => event["items"].as_array_mut().expect("items").push(json!(text)),
            _ => event[name.as_str()] = json!(text),
        }
    }
    event
}

async fn create_event(headers: HeaderMap, multipart: Multipart) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    (StatusCode::CREATED, Json(json!({ "data": echo_form(42, multipart).await }))).into_response()
}

async fn update_event(headers: HeaderMap, Path(id): Path<u64>, multipart: Multipart) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let echoed = echo_form(id, multipart).await;
    if echoed["_method"] != "PUT" {
        return (StatusCode::METHOD_NOT_ALLOWED, Json(json!({ "message": "expected _method=PUT" }))).into_response();
    }
    Json(json!({ "data": echoed })).into_response()
}

async fn delete_event(headers: HeaderMap, Path(_id): Path<u64>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn checkout(headers: HeaderMap, Path(id): Path<u64>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if id == 5 {
        Json(json!({ "init_point": "https://pay.test/checkout/abc" })).into_response()
    } else {
        Json(json!({})).into_response()
    }
}

async fn public_events(headers: HeaderMap) -> Response {
    if headers.get(header::ACCEPT).and_then(|v| v.to_str().ok()) != Some("application/json") {
        return StatusCode::NOT_ACCEPTABLE.into_response();
    }
    Json(json!([event_json(5, "Rust Meetup"), event_json(6, "Leptos Night")])).into_response()
}
