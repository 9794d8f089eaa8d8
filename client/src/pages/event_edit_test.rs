use super::*;

fn event(owner: Option<u64>) -> Event {
    serde_json::from_value(serde_json::json!({
        "id": 4,
        "title": "Meetup",
        "price": "12.5",
        "user_id": owner,
    }))
    .expect("event")
}

#[test]
fn organizer_gets_prefilled_form() {
    let form = editable_form(&event(Some(3)), Some(3)).expect("form");
    assert_eq!(form.title, "Meetup");
    assert_eq!(form.price, "12.50");
}

#[test]
fn other_users_are_refused() {
    assert_eq!(
        editable_form(&event(Some(3)), Some(8)),
        Err("You can only edit your own events.".to_owned())
    );
}

#[test]
fn missing_owner_is_left_to_the_backend() {
    assert!(editable_form(&event(None), Some(8)).is_ok());
}

#[test]
fn load_errors_are_specific() {
    assert_eq!(edit_load_message(&ApiError::NotFound("x".to_owned())), "Event not found.");
    assert_eq!(
        edit_load_message(&ApiError::Forbidden("x".to_owned())),
        "You can only edit your own events."
    );
}
