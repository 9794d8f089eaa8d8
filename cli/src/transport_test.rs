use super::*;
use crate::test_support::{self, EMAIL, PASSWORD, TOKEN};
use gateway::{Api, ApiError, EventForm, LoginRequest};

async fn api() -> Api<ReqwestTransport> {
    Api::new(test_support::spawn_backend().await, ReqwestTransport::new())
}

// =============================================================
// JSON and auth headers
// =============================================================

#[tokio::test]
async fn login_posts_json_and_decodes_token() {
    let api = api().await;
    let request = LoginRequest {
        email: EMAIL.to_owned(),
        password: PASSWORD.to_owned(),
    };
    let response = api.login(&request).await.expect("login");
    assert_eq!(response.token, TOKEN);
    assert_eq!(response.user.name, "Ada");
}

#[tokio::test]
async fn wrong_password_is_unauthenticated() {
    let api = api().await;
    let request = LoginRequest {
        email: EMAIL.to_owned(),
        password: "nope".to_owned(),
    };
    assert_eq!(api.login(&request).await.unwrap_err(), ApiError::Unauthenticated);
}

#[tokio::test]
async fn bearer_token_reaches_the_backend() {
    let api = api().await;
    assert_eq!(api.user(TOKEN).await.expect("user").id, 1);
    assert_eq!(api.user("stale").await.unwrap_err(), ApiError::Unauthenticated);
}

#[tokio::test]
async fn accept_header_is_sent_on_public_calls() {
    let api = api().await;
    let events = api.public_events().await.expect("events");
    assert_eq!(events.len(), 2);
}

#[tokio::test]
async fn no_content_delete_succeeds() {
    let api = api().await;
    api.delete_event(TOKEN, 5).await.expect("delete");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let api = Api::new("http://127.0.0.1:1", ReqwestTransport::new());
    assert!(matches!(api.public_events().await, Err(ApiError::Transport(_))));
}

// =============================================================
// Multipart
// =============================================================

#[tokio::test]
async fn create_sends_every_form_field() {
    let api = api().await;
    let mut form = EventForm {
        title: "Rust Meetup".to_owned(),
        description: "Talks".to_owned(),
        date: "2025-03-01".to_owned(),
        city: "Recife".to_owned(),
        price: "15.00".to_owned(),
        image: Some(gateway::Upload {
            file_name: "banner.png".to_owned(),
            content_type: "image/png".to_owned(),
            bytes: vec![1, 2, 3],
        }),
        ..EventForm::default()
    };
    form.add_item("Coffee");
    form.add_item("Stickers");

    let event = api.create_event(TOKEN, &form).await.expect("create");
    assert_eq!(event.id, 42);
    assert_eq!(event.title, "Rust Meetup");
    assert_eq!(event.city.as_deref(), Some("Recife"));
    assert!(event.is_paid);
    assert!((event.price - 15.0).abs() < f64::EPSILON);
    assert!(!event.private);
    assert_eq!(event.items, vec!["Coffee".to_owned(), "Stickers".to_owned()]);
    assert_eq!(event.image.as_deref(), Some("events/banner.png:3"));
}

#[tokio::test]
async fn update_spoofs_put_over_post() {
    let api = api().await;
    let form = EventForm {
        title: "Renamed".to_owned(),
        date: "2025-03-02".to_owned(),
        is_public: false,
        ..EventForm::default()
    };
    let event = api.update_event(TOKEN, 5, &form).await.expect("update");
    assert_eq!(event.id, 5);
    assert_eq!(event.title, "Renamed");
    assert!(event.private);
    assert!(!event.is_paid);
}

#[test]
fn bad_content_type_fails_to_build() {
    let parts = vec![FormPart::File {
        name: "image".to_owned(),
        upload: gateway::Upload {
            file_name: "x".to_owned(),
            content_type: "not a mime".to_owned(),
            bytes: Vec::new(),
        },
    }];
    assert!(matches!(multipart_form(parts), Err(TransportError::Build(_))));
}
