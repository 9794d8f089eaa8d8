//! Session gateway and typed REST client for the DEV Events API.
//!
//! This crate owns everything the browser client and the CLI share: the wire
//! DTOs, the error taxonomy, the transport seam, the credential store seam,
//! the session state machine, form encoding, and list bookkeeping. It has no
//! UI or runtime dependencies so both front ends can plug in their own HTTP
//! stack and durable storage.
//!
//! ARCHITECTURE
//! ============
//! `Api` is stateless and takes the bearer token per call. `Gateway` owns the
//! token and user snapshot, persists them through a `CredentialStore`, and
//! drops to anonymous whenever a call comes back unauthorized.

pub mod api;
pub mod error;
pub mod form;
pub mod list;
pub mod session;
pub mod store;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::Api;
pub use error::ApiError;
pub use form::{EventForm, FieldErrors, FormMode, LoginForm, RegisterForm};
pub use list::{Roster, filter_events, remove_event};
pub use session::{AuthPhase, Gateway, Session, SessionState};
pub use store::{CredentialStore, MemoryStore, StoredCredential};
pub use transport::{ApiRequest, ApiResponse, Body, FormPart, Method, Transport, TransportError, Upload};
pub use types::{AuthResponse, Event, LoginRequest, Organizer, Participant, RegisterRequest, User};
