//! `reqwest` implementation of the gateway transport.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use gateway::{ApiRequest, ApiResponse, Body, FormPart, Method, Transport, TransportError};
use reqwest::multipart::{Form, Part};

#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };
        tracing::debug!(method = request.method.as_str(), url = %request.url, "sending request");

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }
        builder = match request.body {
            Body::Empty => builder,
            Body::Json(value) => builder.json(&value),
            Body::Multipart(parts) => builder.multipart(multipart_form(parts)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}

fn multipart_form(parts: Vec<FormPart>) -> Result<Form, TransportError> {
    parts.into_iter().try_fold(Form::new(), |form, part| match part {
        FormPart::Text { name, value } => Ok(form.text(name, value)),
        FormPart::File { name, upload } => {
            let file = Part::bytes(upload.bytes)
                .file_name(upload.file_name)
                .mime_str(&upload.content_type)
                .map_err(|e| TransportError::Build(e.to_string()))?;
            Ok(form.part(name, file))
        }
    })
}
