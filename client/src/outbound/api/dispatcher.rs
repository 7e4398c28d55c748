//! Reqwest-backed dispatcher shared by the API adapters.
//!
//! The dispatcher owns transport details only: endpoint resolution against
//! one base URL, bearer injection from the token store, timeout and HTTP
//! error classification, and JSON decoding for callers. Business decisions
//! such as retry or navigation stay with the adapters and orchestrators.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::error::{DispatchError, DispatchResult};
use crate::domain::ports::TokenStore;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Snapshot of a successful response.
///
/// The body is fully read before classification, so accessors never touch
/// the network.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ApiResponse {
    /// HTTP status of the response.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers as received.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// First value of the named header, when it decodes as visible ASCII.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Raw response body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Decode the body into a typed payload.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Decode`] when the body is not valid JSON for
    /// the target type.
    pub fn json<T: DeserializeOwned>(&self) -> DispatchResult<T> {
        serde_json::from_slice(&self.body).map_err(|error| decode_error(&error, &self.body))
    }

    /// Decode the body into untyped JSON for shape-sensitive callers.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Decode`] when the body is not valid JSON.
    pub fn json_value(&self) -> DispatchResult<Value> {
        self.json()
    }
}

/// Dispatcher performing authenticated requests against one backend origin.
#[derive(Clone)]
pub struct HttpDispatcher {
    client: Client,
    base: Url,
    store: Arc<dyn TokenStore>,
}

impl HttpDispatcher {
    /// Build a dispatcher with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, store: Arc<dyn TokenStore>) -> Result<Self, reqwest::Error> {
        Self::with_timeout(base, store, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Build a dispatcher with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(
        base: Url,
        store: Arc<dyn TokenStore>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base,
            store,
        })
    }

    /// Issue a GET request with optional query pairs.
    ///
    /// # Errors
    ///
    /// Returns a classified [`DispatchError`] for transport failures and
    /// non-success statuses.
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> DispatchResult<ApiResponse> {
        let mut request = self.client.get(self.endpoint(path)?);
        if !query.is_empty() {
            request = request.query(query);
        }
        self.dispatch(request, "GET", path).await
    }

    /// Issue a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns a classified [`DispatchError`] for transport failures and
    /// non-success statuses.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> DispatchResult<ApiResponse> {
        let request = self.client.post(self.endpoint(path)?).json(body);
        self.dispatch(request, "POST", path).await
    }

    /// Issue a POST request without a body.
    ///
    /// # Errors
    ///
    /// Returns a classified [`DispatchError`] for transport failures and
    /// non-success statuses.
    pub async fn post_empty(&self, path: &str) -> DispatchResult<ApiResponse> {
        let request = self.client.post(self.endpoint(path)?);
        self.dispatch(request, "POST", path).await
    }

    fn endpoint(&self, path: &str) -> DispatchResult<Url> {
        self.base.join(path).map_err(|error| {
            DispatchError::network(format!("invalid request path {path:?}: {error}"))
        })
    }

    async fn dispatch(
        &self,
        request: RequestBuilder,
        method: &str,
        path: &str,
    ) -> DispatchResult<ApiResponse> {
        let request_id = Uuid::new_v4();
        let token = self.store.get();
        debug!(
            %request_id,
            method,
            path,
            authenticated = token.is_some(),
            "dispatching API request"
        );
        let request = match token {
            Some(token) => request.bearer_auth(token.as_str()),
            None => request,
        };

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(map_transport_error)?;

        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                self.store.clear();
                warn!(%request_id, path, "authentication rejected; stored token cleared");
            } else {
                debug!(%request_id, path, status = status.as_u16(), "API request failed");
            }
            return Err(status_failure(status, body.as_ref()));
        }

        Ok(ApiResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}

fn map_transport_error(error: reqwest::Error) -> DispatchError {
    if error.is_timeout() {
        DispatchError::network(format!("request timed out: {error}"))
    } else {
        DispatchError::network(error.to_string())
    }
}

fn status_failure(status: StatusCode, body: &[u8]) -> DispatchError {
    let message = error_message(status, body);
    if status == StatusCode::UNAUTHORIZED {
        DispatchError::auth(message)
    } else {
        DispatchError::api(status.as_u16(), message)
    }
}

/// Extract the backend's error text from a failure body.
///
/// The backend reports failures as JSON objects carrying either an `error`
/// or a `message` string; `error` wins when both appear. Bodies that are not
/// JSON objects, or carry neither field, fall back to a generic status line.
fn error_message(status: StatusCode, body: &[u8]) -> String {
    if let Some(fields) = serde_json::from_slice::<Value>(body)
        .ok()
        .as_ref()
        .and_then(Value::as_object)
    {
        for key in ["error", "message"] {
            if let Some(text) = fields.get(key).and_then(Value::as_str) {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    return trimmed.to_owned();
                }
            }
        }
    }
    format!("HTTP {}", status.as_u16())
}

fn decode_error(error: &serde_json::Error, body: &[u8]) -> DispatchError {
    let preview = body_preview(body);
    if preview.is_empty() {
        DispatchError::decode(format!("invalid JSON payload: {error}"))
    } else {
        DispatchError::decode(format!("invalid JSON payload: {error}: {preview}"))
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
