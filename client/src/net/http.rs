//! `gloo-net` implementation of the gateway transport.
//!
//! Client-side (csr): real `fetch` calls. Native builds (tests, tooling)
//! get a transport that always fails, since there is no browser to talk to.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use gateway::{ApiRequest, ApiResponse, Transport, TransportError};
#[cfg(feature = "csr")]
use gateway::{Body, FormPart, Method};

/// Stateless browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            send_fetch(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable(&request))
        }
    }
}

#[cfg(any(test, not(feature = "csr")))]
fn unavailable(request: &ApiRequest) -> TransportError {
    TransportError::Network(format!("no browser available for {}", request.url))
}

#[cfg(feature = "csr")]
async fn send_fetch(request: ApiRequest) -> Result<ApiResponse, TransportError> {
    use gloo_net::http::Request;

    let mut builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Delete => Request::delete(&request.url),
    };
    for (name, value) in request.headers() {
        builder = builder.header(name, &value);
    }
    let built = match request.body {
        Body::Empty => builder.build(),
        Body::Json(value) => builder.body(value.to_string()),
        Body::Multipart(parts) => builder.body(form_data(&parts)?),
    }
    .map_err(|e| TransportError::Build(e.to_string()))?;

    let response = built
        .send()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;
    Ok(ApiResponse { status, body })
}

#[cfg(feature = "csr")]
fn form_data(parts: &[FormPart]) -> Result<web_sys::FormData, TransportError> {
    let build_err = |e: wasm_bindgen::JsValue| TransportError::Build(format!("{e:?}"));
    let data = web_sys::FormData::new().map_err(build_err)?;
    for part in parts {
        match part {
            FormPart::Text { name, value } => data.append_with_str(name, value).map_err(build_err)?,
            FormPart::File { name, upload } => {
                let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
                let sequence = js_sys::Array::new();
                sequence.push(&bytes.buffer());
                let options = web_sys::BlobPropertyBag::new();
                options.set_type(&upload.content_type);
                let blob =
                    web_sys::Blob::new_with_u8_array_sequence_and_options(&sequence, &options).map_err(build_err)?;
                data.append_with_blob_and_filename(name, &blob, &upload.file_name)
                    .map_err(build_err)?;
            }
        }
    }
    Ok(data)
}
