//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context. It mirrors the gateway session
//! for reactivity; `localStorage` remains the source of truth and pages
//! re-sync this signal after every gateway call.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use gateway::{AuthPhase, Session, User};

/// Authentication phase plus the user snapshot, when known.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub phase: AuthPhase,
    pub user: Option<User>,
}

impl AuthState {
    /// Settled state mirroring `session`.
    pub fn from_session(session: &Session) -> Self {
        Self {
            phase: session.state().into(),
            user: session.user().cloned(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated
    }

    pub fn user_id(&self) -> Option<u64> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn display_name(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.display_name().to_owned())
    }
}
