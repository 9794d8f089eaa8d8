//! Browser wiring for the gateway.
//!
//! Pages build a fresh `Gateway` per interaction: `localStorage` is the
//! source of truth for the credential, so there is nothing to keep alive
//! between calls.

use gateway::{Api, Gateway};

use super::http::BrowserTransport;
use crate::config;
use crate::util::storage::BrowserStore;

pub type BrowserGateway = Gateway<BrowserStore, BrowserTransport>;

/// REST client for anonymous calls.
pub fn api() -> Api<BrowserTransport> {
    Api::new(config::api_url(), BrowserTransport)
}

/// Session gateway seeded from `localStorage`.
pub fn gateway() -> BrowserGateway {
    Gateway::open(BrowserStore::new(), api())
}

/// Read a picked file into an upload part.
///
/// # Errors
///
/// Returns a display string if the browser fails to read the file.
#[cfg(feature = "csr")]
pub async fn read_upload(file: web_sys::File) -> Result<gateway::Upload, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("could not read {}: {e:?}", file.name()))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let content_type = file.type_();
    Ok(gateway::Upload {
        file_name: file.name(),
        content_type: if content_type.is_empty() { "application/octet-stream".to_owned() } else { content_type },
        bytes,
    })
}
