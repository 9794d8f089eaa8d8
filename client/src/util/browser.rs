//! Thin wrappers over browser globals used by action handlers.
//!
//! Native builds no-op so page logic stays testable off-browser.

/// Leave the app for an external URL (the payment provider).
pub fn redirect_external(url: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(url).is_err() {
                log::warn!("browser: failed to navigate to {url}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}

/// Blocking confirmation dialog. Off-browser there is nobody to ask.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

/// Step back in history, as the "Back" buttons do.
pub fn go_back() {
    #[cfg(feature = "csr")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    }
}
