//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` adapts browser `fetch` to the gateway transport seam and `api`
//! assembles the gateway pages talk to.

pub mod api;
pub mod http;
