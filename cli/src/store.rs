//! Session file for the CLI.
//!
//! The file holds the same key-value pairs the browser keeps in
//! `localStorage`, as a flat JSON object. Writes are best-effort: a failure
//! is logged and the command carries on with its in-memory session.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use gateway::CredentialStore;

use crate::error::CliError;

pub const SESSION_DIR: &str = ".devevents";
pub const SESSION_FILE: &str = "session.json";

/// `~/.devevents/session.json`.
///
/// # Errors
///
/// `NoHomeDir` when the platform reports no home directory.
pub fn default_session_path() -> Result<PathBuf, CliError> {
    dirs::home_dir()
        .map(|home| home.join(SESSION_DIR).join(SESSION_FILE))
        .ok_or(CliError::NoHomeDir)
}

#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> BTreeMap<String, String> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "session file unreadable");
                return BTreeMap::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "session file corrupt; ignoring");
            BTreeMap::new()
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) {
        if let Err(e) = self.try_write(entries) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write session file");
        }
    }

    fn try_write(&self, entries: &BTreeMap<String, String>) -> std::io::Result<()> {
        if entries.is_empty() {
            return match std::fs::remove_file(&self.path) {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
                _ => Ok(()),
            };
        }
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(entries).map_err(std::io::Error::other)?;
        std::fs::write(&self.path, raw)
    }
}

impl CredentialStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_entries().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.read_entries();
        entries.insert(key.to_owned(), value.to_owned());
        self.write_entries(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.read_entries();
        if entries.remove(key).is_some() {
            self.write_entries(&entries);
        }
    }
}
