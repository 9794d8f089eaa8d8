use super::*;
use crate::test_support::{BASE_URL, StubTransport, api, event_json, user_json};
use crate::transport::FormPart;

// =============================================================
// Paths
// =============================================================

#[test]
fn path_helpers_format_ids() {
    assert_eq!(event_path(4), "/api/events/4");
    assert_eq!(public_event_path(4), "/api/public/events/4");
    assert_eq!(event_action_path(4, "join"), "/api/events/4/join");
    assert_eq!(public_participants_path(4), "/api/public/events/4/participants");
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let api = Api::new("http://api.test/", StubTransport::new());
    assert_eq!(api.base_url(), BASE_URL);
}

// =============================================================
// Auth
// =============================================================

#[tokio::test]
async fn login_posts_json_and_decodes_token_pair() {
    let stub = StubTransport::new().route(
        Method::Post,
        "/api/login",
        200,
        serde_json::json!({ "token": "t-1", "user": user_json(1, "Ana") }),
    );
    let api = api(stub.clone());
    let auth = api
        .login(&LoginRequest {
            email: "ana@example.com".to_owned(),
            password: "secret".to_owned(),
        })
        .await
        .expect("login");

    assert_eq!(auth.token, "t-1");
    assert_eq!(auth.user.name, "Ana");
    let sent = stub.requests();
    assert_eq!(sent[0].bearer, None);
    assert_eq!(
        sent[0].body,
        Body::Json(serde_json::json!({ "email": "ana@example.com", "password": "secret" }))
    );
}

#[tokio::test]
async fn register_surfaces_validation_errors() {
    let stub = StubTransport::new().route(
        Method::Post,
        "/api/register",
        422,
        serde_json::json!({ "message": "taken", "errors": { "email": ["The email has already been taken."] } }),
    );
    let err = api(stub)
        .register(&RegisterRequest {
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
            password: "secret1".to_owned(),
            password_confirmation: "secret1".to_owned(),
        })
        .await
        .expect_err("422");
    assert_eq!(
        err.first_field_error(&["name", "email"]).as_deref(),
        Some("The email has already been taken.")
    );
}

#[tokio::test]
async fn me_rejects_unsuccessful_envelope() {
    let stub = StubTransport::new().route(
        Method::Get,
        "/api/me",
        200,
        serde_json::json!({ "success": false, "data": null }),
    );
    assert_eq!(api(stub).me("t").await, Err(ApiError::Unauthenticated));
}

#[tokio::test]
async fn user_accepts_bare_or_wrapped_object() {
    let bare = StubTransport::new().route(Method::Get, "/api/user", 200, user_json(2, "Bia"));
    assert_eq!(api(bare).user("t").await.expect("bare").id, 2);

    let wrapped =
        StubTransport::new().route(Method::Get, "/api/user", 200, serde_json::json!({ "data": user_json(3, "Caio") }));
    assert_eq!(api(wrapped).user("t").await.expect("wrapped").id, 3);
}

#[tokio::test]
async fn logout_tolerates_empty_body() {
    let stub = StubTransport::new().route(Method::Post, "/api/logout", 204, serde_json::Value::Null);
    api(stub.clone()).logout("t").await.expect("logout");
    assert_eq!(stub.requests()[0].bearer.as_deref(), Some("t"));
}

// =============================================================
// Events
// =============================================================

#[tokio::test]
async fn my_events_unwraps_paginated_envelope() {
    let stub = StubTransport::new().route(
        Method::Get,
        "/api/events",
        200,
        serde_json::json!({ "data": { "data": [event_json(1, "A"), event_json(2, "B")], "current_page": 1 } }),
    );
    let events = api(stub).my_events("t").await.expect("events");
    assert_eq!(events.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 2]);
}

#[tokio::test]
async fn public_events_accept_bare_array() {
    let stub = StubTransport::new().route(
        Method::Get,
        "/api/public/events",
        200,
        serde_json::json!([event_json(9, "Open")]),
    );
    let events = api(stub.clone()).public_events().await.expect("events");
    assert_eq!(events[0].title, "Open");
    assert_eq!(stub.requests()[0].bearer, None);
}

#[tokio::test]
async fn event_detail_maps_404() {
    let stub = StubTransport::new();
    let err = api(stub).event("t", 77).await.expect_err("missing");
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn update_posts_multipart_with_method_override() {
    let stub = StubTransport::new().route(
        Method::Post,
        "/api/events/5",
        200,
        serde_json::json!({ "data": event_json(5, "Renamed") }),
    );
    let form = EventForm {
        title: "Renamed".to_owned(),
        description: "d".to_owned(),
        date: "2025-05-01".to_owned(),
        city: "Recife".to_owned(),
        ..EventForm::default()
    };
    let event = api(stub.clone()).update_event("t", 5, &form).await.expect("update");
    assert_eq!(event.title, "Renamed");

    let Body::Multipart(parts) = &stub.requests()[0].body else {
        panic!("expected multipart body");
    };
    assert_eq!(parts[0], FormPart::text("_method", "PUT"));
}

#[tokio::test]
async fn delete_sends_delete_verb() {
    let stub = StubTransport::new().route(Method::Delete, "/api/events/3", 204, serde_json::Value::Null);
    api(stub.clone()).delete_event("t", 3).await.expect("delete");
    assert_eq!(stub.paths(), vec!["DELETE /api/events/3".to_owned()]);
}

// =============================================================
// Participation
// =============================================================

#[tokio::test]
async fn participants_default_to_empty_when_data_missing() {
    let stub = StubTransport::new().route(
        Method::Get,
        "/api/public/events/2/participants",
        200,
        serde_json::json!({ "message": "ok" }),
    );
    assert!(api(stub).public_participants(2).await.expect("list").is_empty());
}

#[tokio::test]
async fn checkout_returns_init_point() {
    let stub = StubTransport::new().route(
        Method::Post,
        "/api/events/8/checkout",
        200,
        serde_json::json!({ "init_point": "https://pay.test/p/abc" }),
    );
    assert_eq!(
        api(stub).start_checkout("t", 8).await.as_deref(),
        Ok("https://pay.test/p/abc")
    );
}

#[tokio::test]
async fn checkout_without_init_point_is_an_error() {
    for body in [
        serde_json::json!({ "message": "created" }),
        serde_json::json!({ "init_point": "" }),
        serde_json::Value::Null,
    ] {
        let stub = StubTransport::new().route(Method::Post, "/api/events/8/checkout", 200, body);
        assert_eq!(api(stub).start_checkout("t", 8).await, Err(ApiError::MissingInitPoint));
    }
}

#[tokio::test]
async fn transport_failure_maps_to_transport_error() {
    let err = api(StubTransport::new().offline()).public_events().await.expect_err("offline");
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn malformed_body_maps_to_decode_error() {
    let stub = StubTransport::new().route(
        Method::Get,
        "/api/public/events/1",
        200,
        serde_json::json!({ "title": "no id" }),
    );
    assert!(matches!(api(stub).public_event(1).await, Err(ApiError::Decode(_))));
}
