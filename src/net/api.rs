//! Generic request bridge to the backend HTTP API.
//!
//! Browser builds (`hydrate`) issue real requests via `gloo-net`; other
//! builds get stubs returning `ApiError::Network`, which keeps the state
//! layer compiling and testable natively.
//!
//! Every call is a logical `(endpoint, method, payload, credential)` tuple.
//! The multipart variant carries a JSON part named for the mutated entity
//! plus a binary file part, and serializes the form exactly once.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

/// Base URL of the backend the desktop shell launches alongside the app.
pub const BASE_URL: &str = "http://localhost:8080/api";

/// HTTP method subset the backend uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// Typed failure for a bridge call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response, with the backend's message when it sent one.
    #[error("{message} (status {status})")]
    Status { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// 2xx response whose body did not parse as the expected type.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Refresh failed after a 401; the session has been cleared.
    #[error("session expired, please log in again")]
    SessionExpired,
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}

#[cfg(feature = "hydrate")]
fn to_gloo(method: Method) -> gloo_net::http::Method {
    match method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
        Method::Put => gloo_net::http::Method::PUT,
        Method::Patch => gloo_net::http::Method::PATCH,
        Method::Delete => gloo_net::http::Method::DELETE,
    }
}

/// Extract a human-readable message from an error response body. The
/// backend sends either `{"message": …}` or `{"error": …}`; anything else
/// falls back to the raw text.
fn error_message(status: u16, text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(text)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(|m| m.as_str())
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| {
            if text.trim().is_empty() {
                format!("request failed with status {status}")
            } else {
                text.to_owned()
            }
        })
}

#[cfg(feature = "hydrate")]
async fn send(
    endpoint: &str,
    method: Method,
    body: Option<&serde_json::Value>,
    token: Option<&str>,
) -> Result<gloo_net::http::Response, ApiError> {
    let url = format!("{BASE_URL}/{endpoint}");
    let mut builder = gloo_net::http::RequestBuilder::new(&url).method(to_gloo(method));
    if let Some(token) = token {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }
    let request = match body {
        Some(value) => builder.json(value),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, message: error_message(status, &text) })
    }
}

/// Issue a JSON request and parse the JSON response body.
#[cfg(feature = "hydrate")]
pub async fn call<T: DeserializeOwned>(
    endpoint: &str,
    method: Method,
    body: Option<&serde_json::Value>,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let response = send(endpoint, method, body, token).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(not(feature = "hydrate"))]
pub async fn call<T: DeserializeOwned>(
    endpoint: &str,
    method: Method,
    body: Option<&serde_json::Value>,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let _ = (endpoint, method, body, token);
    Err(ApiError::Network("backend calls require the webview".to_owned()))
}

/// Issue a JSON request and discard the (possibly empty) response body.
#[cfg(feature = "hydrate")]
pub async fn call_empty(
    endpoint: &str,
    method: Method,
    body: Option<&serde_json::Value>,
    token: Option<&str>,
) -> Result<(), ApiError> {
    send(endpoint, method, body, token).await.map(|_| ())
}

#[cfg(not(feature = "hydrate"))]
pub async fn call_empty(
    endpoint: &str,
    method: Method,
    body: Option<&serde_json::Value>,
    token: Option<&str>,
) -> Result<(), ApiError> {
    let _ = (endpoint, method, body, token);
    Err(ApiError::Network("backend calls require the webview".to_owned()))
}

/// Issue a multipart request: a JSON blob part named `part_name` plus an
/// optional binary `file` part. Used by canvas item saves, where only
/// image items carry a file.
#[cfg(feature = "hydrate")]
pub async fn call_multipart<T: DeserializeOwned>(
    endpoint: &str,
    method: Method,
    part_name: &str,
    json_part: &serde_json::Value,
    file: Option<&web_sys::File>,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let form = build_form(part_name, json_part, file)
        .map_err(|e| ApiError::Network(format!("failed to build form data: {e:?}")))?;

    let url = format!("{BASE_URL}/{endpoint}");
    let mut builder = gloo_net::http::RequestBuilder::new(&url).method(to_gloo(method));
    if let Some(token) = token {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }
    let request = builder
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, message: error_message(status, &text) })
    }
}

/// Assemble the two-part form body. The JSON part is serialized once, into
/// a blob with an explicit `application/json` content type so the backend's
/// part converter accepts it.
#[cfg(feature = "hydrate")]
fn build_form(
    part_name: &str,
    json_part: &serde_json::Value,
    file: Option<&web_sys::File>,
) -> Result<web_sys::FormData, wasm_bindgen::JsValue> {
    let serialized = json_part.to_string();
    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(&serialized));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let form = web_sys::FormData::new()?;
    form.append_with_blob(part_name, &blob)?;
    if let Some(file) = file {
        form.append_with_blob("file", file)?;
    }
    Ok(form)
}
