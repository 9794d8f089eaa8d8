use super::*;
use gateway::{AuthPhase, User};

fn event(id: u64, title: &str) -> Event {
    serde_json::from_value(serde_json::json!({ "id": id, "title": title })).expect("event")
}

#[test]
fn delete_prompt_names_the_event() {
    let events = vec![event(1, "Rust Meetup")];
    assert_eq!(delete_prompt(&events, 1), "Delete \"Rust Meetup\"? This cannot be undone.");
    assert_eq!(delete_prompt(&events, 2), "Delete this event? This cannot be undone.");
}

#[test]
fn greeting_uses_display_name_when_known() {
    let mut auth = AuthState {
        phase: AuthPhase::Authenticated,
        user: None,
    };
    assert_eq!(greeting(&auth), "My events");
    auth.user = Some(User {
        id: 1,
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        created_at: None,
    });
    assert_eq!(greeting(&auth), "Hello, Ana");
}

#[test]
fn optimistic_delete_keeps_other_events() {
    let mut load = Load::Ready(vec![event(1, "A"), event(2, "B")]);
    if let Some(list) = load.ready_mut() {
        gateway::remove_event(list, 1);
    }
    assert_eq!(load.ready().map(|l| l.iter().map(|e| e.id).collect::<Vec<_>>()), Some(vec![2]));
}
