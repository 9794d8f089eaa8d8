//! Session/auth gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page reads the session through one `Gateway`: it owns the bearer
//! token and the current user snapshot, mirrors them into a durable
//! `CredentialStore`, and attaches the token to authenticated API calls.
//!
//! STATE MACHINE
//! =============
//! `Anonymous -> Authenticated` on `login` or a successful `restore`.
//! `Authenticated -> Anonymous` on `logout` or any call answered with 401.
//! There is no refresh and no pending re-auth state. A token without a user
//! snapshot is allowed only between reading storage and validating it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::api::Api;
use crate::error::ApiError;
use crate::form::EventForm;
use crate::store::{CredentialStore, StoredCredential};
use crate::transport::Transport;
use crate::types::{Event, Participant, User};

/// Client-held credential plus the user it belongs to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
}

impl Session {
    #[must_use]
    pub fn from_stored(stored: Option<StoredCredential>) -> Self {
        match stored {
            Some(StoredCredential { token, user }) => Self {
                token: Some(token),
                user,
            },
            None => Self::default(),
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.token.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state() == SessionState::Authenticated
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

/// Auth state as seen by route guards. `Loading` covers the window before
/// startup validation finishes, during which nothing should redirect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Loading,
    Anonymous,
    Authenticated,
}

impl AuthPhase {
    /// Whether a protected route should send the visitor to login.
    #[must_use]
    pub fn should_redirect(self) -> bool {
        self == Self::Anonymous
    }
}

impl From<SessionState> for AuthPhase {
    fn from(state: SessionState) -> Self {
        match state {
            SessionState::Anonymous => Self::Anonymous,
            SessionState::Authenticated => Self::Authenticated,
        }
    }
}

/// The session plus everything needed to keep it honest.
pub struct Gateway<S, T> {
    store: S,
    api: Api<T>,
    session: Session,
}

impl<S: CredentialStore, T: Transport> Gateway<S, T> {
    /// Build a gateway seeded from whatever `store` currently holds.
    pub fn open(store: S, api: Api<T>) -> Self {
        let session = Session::from_stored(store.load());
        Self { store, api, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn api(&self) -> &Api<T> {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Enter `Authenticated` with a freshly issued credential.
    pub fn login(&mut self, token: &str, user: User) {
        self.store.save(token, &user);
        self.session = Session {
            token: Some(token.to_owned()),
            user: Some(user),
        };
        log::info!("session: authenticated");
    }

    /// Drop the credential locally. Idempotent.
    pub fn logout(&mut self) {
        self.store.clear();
        if self.session.token.is_some() {
            log::info!("session: logged out");
        }
        self.session = Session::default();
    }

    /// Revoke the token on the backend, then `logout`. A remote failure is
    /// logged and otherwise ignored.
    pub async fn logout_remote(&mut self) {
        if let Some(token) = self.session.token.clone() {
            if let Err(e) = self.api.logout(&token).await {
                log::warn!("session: remote logout failed: {e}");
            }
        }
        self.logout();
    }

    /// Apply the 401 rule to a call result: an `Unauthenticated` error ends
    /// the session. The result is passed through unchanged.
    ///
    /// # Errors
    ///
    /// Returns `result`'s error as-is.
    pub fn guard<R>(&mut self, result: Result<R, ApiError>) -> Result<R, ApiError> {
        if matches!(result, Err(ApiError::Unauthenticated)) {
            log::info!("session: credential rejected");
            self.logout();
        }
        result
    }

    fn bearer(&self) -> Result<String, ApiError> {
        self.session.token.clone().ok_or(ApiError::Unauthenticated)
    }

    fn remember(&mut self, user: &User) {
        if let Some(token) = self.session.token.clone() {
            self.store.save(&token, user);
            self.session.user = Some(user.clone());
        }
    }

    // =========================================================================
    // Who am I
    // =========================================================================

    /// `/api/me` with the stored token. `None` covers no token, a rejected
    /// token, and every transport or decode failure alike.
    pub async fn current_user(&mut self) -> Option<User> {
        let token = self.session.token.clone()?;
        let result = self.api.me(&token).await;
        match self.guard(result) {
            Ok(user) => Some(user),
            Err(e) => {
                log::debug!("session: current user unavailable: {e}");
                None
            }
        }
    }

    /// `/api/user` with the stored token, keeping error kinds apart so a
    /// protected page can tell "log in again" from "try again later".
    ///
    /// # Errors
    ///
    /// `Unauthenticated` without a network call when no token is stored, or
    /// when the backend rejects it (the session is cleared). Other failures
    /// leave the session intact.
    pub async fn require_user(&mut self) -> Result<User, ApiError> {
        let token = self.bearer()?;
        let result = self.api.user(&token).await;
        let user = self.guard(result)?;
        self.remember(&user);
        Ok(user)
    }

    /// Startup validation: exchange a stored token once. Any failure logs out.
    pub async fn restore(&mut self) -> SessionState {
        let Some(token) = self.session.token.clone() else {
            return SessionState::Anonymous;
        };
        match self.api.me(&token).await {
            Ok(user) => {
                self.remember(&user);
                SessionState::Authenticated
            }
            Err(e) => {
                log::info!("session: stored credential invalid: {e}");
                self.logout();
                SessionState::Anonymous
            }
        }
    }

    // =========================================================================
    // Authenticated calls
    // =========================================================================

    /// # Errors
    ///
    /// As `Api::my_events`; `Unauthenticated` also ends the session.
    pub async fn my_events(&mut self) -> Result<Vec<Event>, ApiError> {
        let token = self.bearer()?;
        let result = self.api.my_events(&token).await;
        self.guard(result)
    }

    /// # Errors
    ///
    /// As `Api::event`.
    pub async fn event(&mut self, event_id: u64) -> Result<Event, ApiError> {
        let token = self.bearer()?;
        let result = self.api.event(&token, event_id).await;
        self.guard(result)
    }

    /// # Errors
    ///
    /// As `Api::create_event`.
    pub async fn create_event(&mut self, form: &EventForm) -> Result<Event, ApiError> {
        let token = self.bearer()?;
        let result = self.api.create_event(&token, form).await;
        self.guard(result)
    }

    /// # Errors
    ///
    /// As `Api::update_event`.
    pub async fn update_event(&mut self, event_id: u64, form: &EventForm) -> Result<Event, ApiError> {
        let token = self.bearer()?;
        let result = self.api.update_event(&token, event_id, form).await;
        self.guard(result)
    }

    /// # Errors
    ///
    /// As `Api::delete_event`.
    pub async fn delete_event(&mut self, event_id: u64) -> Result<(), ApiError> {
        let token = self.bearer()?;
        let result = self.api.delete_event(&token, event_id).await;
        self.guard(result)
    }

    /// # Errors
    ///
    /// As `Api::participants`.
    pub async fn participants(&mut self, event_id: u64) -> Result<Vec<Participant>, ApiError> {
        let token = self.bearer()?;
        let result = self.api.participants(&token, event_id).await;
        self.guard(result)
    }

    /// # Errors
    ///
    /// As `Api::join_event`.
    pub async fn join_event(&mut self, event_id: u64) -> Result<(), ApiError> {
        let token = self.bearer()?;
        let result = self.api.join_event(&token, event_id).await;
        self.guard(result)
    }

    /// # Errors
    ///
    /// As `Api::leave_event`.
    pub async fn leave_event(&mut self, event_id: u64) -> Result<(), ApiError> {
        let token = self.bearer()?;
        let result = self.api.leave_event(&token, event_id).await;
        self.guard(result)
    }

    /// # Errors
    ///
    /// As `Api::start_checkout`.
    pub async fn start_checkout(&mut self, event_id: u64) -> Result<String, ApiError> {
        let token = self.bearer()?;
        let result = self.api.start_checkout(&token, event_id).await;
        self.guard(result)
    }
}
