//! `localStorage`-backed credential store.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort: private browsing or a disabled storage API
//! degrades to an always-empty store instead of failing the page. Native
//! builds have no storage and behave the same way.

/// Credential store over `window.localStorage`.
#[derive(Clone, Debug, Default)]
pub struct BrowserStore {
    #[cfg(feature = "csr")]
    storage: Option<web_sys::Storage>,
}

impl BrowserStore {
    pub fn new() -> Self {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
            if storage.is_none() {
                log::warn!("storage: localStorage unavailable; session will not persist");
            }
            Self { storage }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self {}
        }
    }
}

impl gateway::CredentialStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            self.storage.as_ref()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = &self.storage {
                if storage.set_item(key, value).is_err() {
                    log::warn!("storage: failed to write {key}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = &self.storage {
                if storage.remove_item(key).is_err() {
                    log::warn!("storage: failed to remove {key}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}
