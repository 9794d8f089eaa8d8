use super::*;
use gateway::{Participant, User};

fn event(price: &str, is_paid: u8) -> Event {
    serde_json::from_value(serde_json::json!({ "id": 3, "title": "T", "price": price, "is_paid": is_paid }))
        .expect("event")
}

fn roster_with(ids: &[u64]) -> Roster {
    Roster::new(
        ids.iter()
            .map(|id| Participant {
                id: *id,
                name: format!("p{id}"),
                email: None,
            })
            .collect(),
    )
}

// =============================================================
// Action selection
// =============================================================

#[test]
fn participant_sees_leave() {
    let action = participation_action(Some(&event("15.00", 1)), &roster_with(&[7]), Some(7));
    assert_eq!(action, ParticipationAction::Leave);
}

#[test]
fn paid_event_routes_to_checkout() {
    let action = participation_action(Some(&event("15.00", 1)), &roster_with(&[]), Some(7));
    assert_eq!(action, ParticipationAction::Pay(15.0));
    assert_eq!(action.label(), "Buy ticket (R$ 15.00)");
}

#[test]
fn free_or_unknown_event_joins_directly() {
    assert_eq!(
        participation_action(Some(&event("0", 0)), &roster_with(&[1]), Some(7)),
        ParticipationAction::Join
    );
    assert_eq!(participation_action(None, &roster_with(&[]), None), ParticipationAction::Join);
}

#[test]
fn join_then_leave_restores_roster() {
    let before = roster_with(&[1, 2]);
    let mut roster = before.clone();
    let me = User {
        id: 7,
        name: "Me".to_owned(),
        email: "me@example.com".to_owned(),
        created_at: None,
    };
    roster.join(&me);
    assert_eq!(participation_action(None, &roster, Some(7)), ParticipationAction::Leave);
    roster.leave(7);
    assert_eq!(roster, before);
}

// =============================================================
// Errors and routing
// =============================================================

#[test]
fn load_errors_map_to_inline_messages() {
    assert_eq!(
        participants_error_message(&ApiError::NotFound("x".to_owned())),
        "Event not found."
    );
    assert_eq!(
        participants_error_message(&ApiError::Forbidden("x".to_owned())),
        "You do not have permission to view this event."
    );
    assert!(participants_error_message(&ApiError::Transport("x".to_owned())).starts_with("Could not load participants."));
}

#[test]
fn event_id_parsing_rejects_garbage() {
    assert_eq!(parse_event_id(Some("12".to_owned())), Some(12));
    assert_eq!(parse_event_id(Some("abc".to_owned())), None);
    assert_eq!(parse_event_id(None), None);
    assert_eq!(checkout_path(12), "/checkout/12");
}
