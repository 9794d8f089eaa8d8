//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route's loading and action handling and delegates
//! rendering details to `components`. Guarded pages wrap their view in
//! `RequireAuth`.

pub mod checkout;
pub mod contact;
pub mod dashboard;
pub mod event_create;
pub mod event_detail;
pub mod event_edit;
pub mod events;
pub mod home;
pub mod login;
pub mod participants;
pub mod profile;
pub mod register;
