use super::*;

fn event(id: u64, title: &str, city: &str) -> Event {
    serde_json::from_value(serde_json::json!({ "id": id, "title": title, "city": city })).expect("event")
}

fn user(id: u64, name: &str) -> User {
    User {
        id,
        name: name.to_owned(),
        email: format!("{id}@example.com"),
        created_at: None,
    }
}

#[test]
fn remove_event_drops_exactly_that_id() {
    let mut events = vec![event(1, "A", "x"), event(2, "B", "x"), event(3, "C", "x")];
    assert!(remove_event(&mut events, 2));
    assert_eq!(events.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 3]);
    assert!(!remove_event(&mut events, 2));
    assert_eq!(events.len(), 2);
}

#[test]
fn filter_matches_title_description_or_city_case_insensitively() {
    let mut with_desc = event(3, "Workshop", "Natal");
    with_desc.description = Some("Intro to RUST".to_owned());
    let events = vec![event(1, "Rust Meetup", "Recife"), event(2, "Go Day", "Recife"), with_desc];

    let ids = |q: &str| filter_events(&events, q).iter().map(|e| e.id).collect::<Vec<_>>();
    assert_eq!(ids("rust"), vec![1, 3]);
    assert_eq!(ids("RECIFE"), vec![1, 2]);
    assert_eq!(ids("  "), vec![1, 2, 3]);
    assert!(ids("python").is_empty());
}

#[test]
fn join_then_leave_restores_roster() {
    let original = Roster::new(vec![Participant::from(&user(1, "Ana"))]);
    let mut roster = original.clone();
    assert!(roster.join(&user(2, "Bia")));
    assert!(roster.contains(2));
    assert_eq!(roster.len(), 2);
    assert!(roster.leave(2));
    assert_eq!(roster, original);
}

#[test]
fn join_is_idempotent() {
    let mut roster = Roster::default();
    assert!(roster.join(&user(5, "Caio")));
    assert!(!roster.join(&user(5, "Caio")));
    assert_eq!(roster.as_slice().len(), 1);
    assert!(!roster.leave(9));
    assert_eq!(roster.into_inner()[0].name, "Caio");
}
