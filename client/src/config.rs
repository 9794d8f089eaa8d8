//! Build-time configuration.
//!
//! The API base URL is baked in at compile time from `DEVEVENTS_API_URL`
//! (trunk forwards the environment to rustc).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Base URL of the REST backend.
pub fn api_url() -> &'static str {
    resolve_api_url(option_env!("DEVEVENTS_API_URL"))
}

fn resolve_api_url(configured: Option<&'static str>) -> &'static str {
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
}
