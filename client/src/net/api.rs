//! REST calls to the remote document API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: the calls return
//! [`ApiError::Unavailable`] since these endpoints are only reachable from
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; nothing here panics or retries.
//! Callers turn failures into toasts.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::{ApiError, ChatRequest, UploadResponse};
use crate::config::ClientConfig;
use crate::state::session::AnswerService;
use crate::util::intake::SelectedFile;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ChatResponse;

fn upload_endpoint(base_url: &str) -> String {
    format!("{base_url}/upload")
}

fn chat_endpoint(base_url: &str) -> String {
    format!("{base_url}/chat")
}

/// Decode a response body, mapping non-2xx statuses to [`ApiError::Status`].
#[cfg(any(test, feature = "hydrate"))]
fn decode_response<T: serde::de::DeserializeOwned>(ok: bool, status: u16, body: &str) -> Result<T, ApiError> {
    if !ok {
        return Err(ApiError::from_status(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn read_response<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let ok = resp.ok();
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    decode_response(ok, status, &body)
}

/// Upload a document via `POST {base}/upload` (multipart field `file`).
///
/// # Errors
///
/// Returns an [`ApiError`] when the request cannot be sent, the server
/// rejects it, or the body is not an [`UploadResponse`].
pub async fn upload_document(config: &ClientConfig, selected: &SelectedFile) -> Result<UploadResponse, ApiError> {
    let url = upload_endpoint(&config.api_base_url);
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
        form.append_with_blob_and_filename("file", &selected.file, &selected.raw.name)
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
        let resp = gloo_net::http::Request::post(&url)
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, selected);
        Err(ApiError::Unavailable)
    }
}

/// Ask a question about a document via `POST {base}/chat`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request cannot be sent, the server
/// rejects it, or the body is not a [`ChatResponse`].
pub async fn ask_question(base_url: &str, request: &ChatRequest) -> Result<String, ApiError> {
    let url = chat_endpoint(base_url);
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body: ChatResponse = read_response(resp).await?;
        Ok(body.response)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, request);
        Err(ApiError::Unavailable)
    }
}

/// [`AnswerService`] backed by the remote `/chat` endpoint.
#[derive(Clone, Debug)]
pub struct HttpAnswerService {
    base_url: String,
}

impl HttpAnswerService {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self { base_url: config.api_base_url.clone() }
    }
}

impl AnswerService for HttpAnswerService {
    fn ask(&self, question: &str, document_reference: &str) -> impl Future<Output = Result<String, ApiError>> {
        let request = ChatRequest { message: question.to_owned(), filepath: document_reference.to_owned() };
        let base_url = self.base_url.clone();
        async move { ask_question(&base_url, &request).await }
    }
}
