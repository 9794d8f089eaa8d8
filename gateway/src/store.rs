//! Durable credential storage.
//!
//! A `CredentialStore` is a string key-value slot that survives reloads
//! (`localStorage` in the browser, a JSON file in the CLI). The token lives
//! under `auth_token` and the user snapshot under `auth_user`. Older builds
//! wrote `token` / `user`; those are read as a fallback and always erased.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::types::User;

pub const TOKEN_KEY: &str = "auth_token";
pub const USER_KEY: &str = "auth_user";
pub const LEGACY_TOKEN_KEY: &str = "token";
pub const LEGACY_USER_KEY: &str = "user";

/// Credential read back from storage. The user snapshot may be missing or
/// unreadable; the token alone is enough to attempt validation.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredCredential {
    pub token: String,
    pub user: Option<User>,
}

/// Minimal string key-value storage. Writes are best-effort.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Read the stored credential, preferring the canonical keys.
    fn load(&self) -> Option<StoredCredential> {
        let (token, user_raw) = match non_blank(self.get(TOKEN_KEY)) {
            Some(token) => (token, self.get(USER_KEY)),
            None => {
                let token = non_blank(self.get(LEGACY_TOKEN_KEY))?;
                log::info!("store: found credential under legacy key");
                (token, self.get(LEGACY_USER_KEY))
            }
        };
        let user = user_raw.and_then(|raw| serde_json::from_str::<User>(&raw).ok());
        Some(StoredCredential { token, user })
    }

    /// Persist under the canonical keys and drop any legacy copy.
    fn save(&self, token: &str, user: &User) {
        self.set(TOKEN_KEY, token);
        match serde_json::to_string(user) {
            Ok(raw) => self.set(USER_KEY, &raw),
            Err(e) => {
                log::warn!("store: failed to encode user snapshot: {e}");
                self.remove(USER_KEY);
            }
        }
        self.remove(LEGACY_TOKEN_KEY);
        self.remove(LEGACY_USER_KEY);
    }

    fn clear(&self) {
        for key in [TOKEN_KEY, USER_KEY, LEGACY_TOKEN_KEY, LEGACY_USER_KEY] {
            self.remove(key);
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl<S: CredentialStore + ?Sized> CredentialStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// Process-local store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every stored entry.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.borrow().clone()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
