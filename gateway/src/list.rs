//! Local list updates applied after a successful backend action, so pages
//! can reflect deletes and joins without refetching.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use crate::types::{Event, Participant, User};

/// Drop every event with `event_id`, keeping order. Returns whether anything
/// was removed.
pub fn remove_event(events: &mut Vec<Event>, event_id: u64) -> bool {
    let before = events.len();
    events.retain(|e| e.id != event_id);
    events.len() != before
}

/// Case-insensitive substring search over title, description and city.
#[must_use]
pub fn filter_events(events: &[Event], query: &str) -> Vec<Event> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return events.to_vec();
    }
    events
        .iter()
        .filter(|e| {
            [Some(e.title.as_str()), e.description.as_deref(), e.city.as_deref()]
                .into_iter()
                .flatten()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Participant list of one event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    #[must_use]
    pub fn new(participants: Vec<Participant>) -> Self {
        Self { participants }
    }

    /// Append `user` unless already listed.
    pub fn join(&mut self, user: &User) -> bool {
        if self.contains(user.id) {
            return false;
        }
        self.participants.push(Participant::from(user));
        true
    }

    pub fn leave(&mut self, user_id: u64) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p.id != user_id);
        self.participants.len() != before
    }

    #[must_use]
    pub fn contains(&self, user_id: u64) -> bool {
        self.participants.iter().any(|p| p.id == user_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Participant] {
        &self.participants
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Participant> {
        self.participants
    }
}
