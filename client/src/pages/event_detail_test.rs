use super::*;

fn event_owned_by(owner: u64) -> Event {
    serde_json::from_value(serde_json::json!({ "id": 1, "title": "T", "user_id": owner })).expect("event")
}

fn user(id: u64) -> User {
    User {
        id,
        name: "U".to_owned(),
        email: "u@example.com".to_owned(),
        created_at: None,
    }
}

#[test]
fn anonymous_visitor_gets_no_actions() {
    assert_eq!(detail_actions(&event_owned_by(1), None), DetailActions::default());
}

#[test]
fn owner_can_manage_and_participate() {
    let actions = detail_actions(&event_owned_by(1), Some(&user(1)));
    assert!(actions.can_manage);
    assert!(actions.can_participate);
}

#[test]
fn other_users_can_only_participate() {
    let actions = detail_actions(&event_owned_by(1), Some(&user(2)));
    assert!(!actions.can_manage);
    assert!(actions.can_participate);
}
