//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and form surfaces while reading shared
//! state from Leptos context providers.

pub mod error_panel;
pub mod event_card;
pub mod event_form;
pub mod field;
pub mod navbar;
pub mod notice;
pub mod require_auth;
