//! Reactive application state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` and `notice` are provided once by `App`; `load` is the per-page
//! loading shape used by route components.

pub mod auth;
pub mod load;
pub mod notice;
