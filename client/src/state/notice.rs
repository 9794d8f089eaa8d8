//! Transient notices for user-triggered actions (join, leave, pay, delete).
//!
//! DESIGN
//! ======
//! Initial-load failures render inline via `ErrorPanel`; only action
//! outcomes land here. Each notice gets a monotonically increasing id so a
//! delayed dismiss never removes a newer notice with the same text.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// How long a notice stays on screen.
pub const NOTICE_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "notice--success",
            Self::Error => "notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    next_id: u64,
    pub items: Vec<Notice>,
}

impl NoticeState {
    /// Queue a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}
