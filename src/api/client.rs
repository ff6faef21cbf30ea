use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::models::ApiError;
use super::transport::{CredentialsMode, HttpMethod, HttpRequest, HttpTransport, RawResponse};

/// Normalized success shape: the parsed JSON body, when the response
/// declared one, plus the HTTP status code.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResult {
    pub data: Option<Value>,
    pub status: u16,
}

/// Per-request options accepted by every verb method.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestOptions {
    /// Forwarded verbatim to the transport. `Include` asks it to attach
    /// the stored session credentials.
    pub credentials: CredentialsMode,
}

impl RequestOptions {
    pub fn with_credentials() -> Self {
        Self {
            credentials: CredentialsMode::Include,
        }
    }
}

/// Thin HTTP client: one method per verb, uniform response handling.
///
/// Every request carries `Accept: application/json`. Requests with a
/// body are serialized as JSON and tagged with the matching
/// `Content-Type`. Responses are normalized into [`HttpResult`] on
/// success and [`ApiError`] on failure, so callers never touch raw
/// status handling themselves.
pub struct ApiClient {
    transport: Box<dyn HttpTransport>,
    base_url: String,
}

impl ApiClient {
    pub fn new(transport: Box<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Base API address, always slash-terminated; call sites append
    /// their path and query directly.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, url: &str, options: RequestOptions) -> Result<HttpResult, ApiError> {
        self.request::<()>(HttpMethod::Get, url, None, options).await
    }

    pub async fn delete<B: Serialize>(
        &self,
        url: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<HttpResult, ApiError> {
        self.request(HttpMethod::Delete, url, body, options).await
    }

    pub async fn post<B: Serialize>(
        &self,
        url: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<HttpResult, ApiError> {
        self.request(HttpMethod::Post, url, body, options).await
    }

    pub async fn put<B: Serialize>(
        &self,
        url: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<HttpResult, ApiError> {
        self.request(HttpMethod::Put, url, body, options).await
    }

    pub async fn patch<B: Serialize>(
        &self,
        url: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<HttpResult, ApiError> {
        self.request(HttpMethod::Patch, url, body, options).await
    }

    async fn request<B: Serialize>(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<HttpResult, ApiError> {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        let body = match body {
            Some(value) => {
                headers.push(("Content-Type".to_string(), "application/json".to_string()));
                let serialized = serde_json::to_string(value).map_err(|e| {
                    ApiError::Deserialization(format!("failed to serialize request body: {}", e))
                })?;
                Some(serialized)
            }
            None => None,
        };

        let request = HttpRequest {
            method,
            url: url.to_string(),
            headers,
            body,
            credentials: options.credentials,
        };
        debug!("{} {}", request.method.as_str(), request.url);
        let response = self.transport.execute(request).await?;
        handle_response(response)
    }
}

/// Normalize a raw response.
///
/// The body is parsed whenever the `Content-Type` declares JSON,
/// regardless of status. 2xx yields an [`HttpResult`]; 401 and 403 map
/// to [`ApiError::Unauthorized`]; everything else becomes
/// [`ApiError::Server`] with the best failure reason available.
fn handle_response(response: RawResponse) -> Result<HttpResult, ApiError> {
    let RawResponse {
        status,
        content_type,
        body,
    } = response;

    let data: Option<Value> = if is_json(content_type.as_deref()) {
        let parsed = serde_json::from_slice(&body)
            .map_err(|e| ApiError::Deserialization(format!("invalid JSON response body: {}", e)))?;
        Some(parsed)
    } else {
        None
    };

    if !(200..300).contains(&status) {
        if status == 401 || status == 403 {
            return Err(ApiError::Unauthorized { status });
        }
        let reason = error_reason(data.as_ref(), status);
        warn!("api request failed with status {}: {}", status, reason);
        return Err(ApiError::Server { status, reason });
    }

    Ok(HttpResult { data, status })
}

fn is_json(content_type: Option<&str>) -> bool {
    content_type.map_or(false, |value| value.contains("application/json"))
}

/// Failure reason, in priority order: the body's `message` field when
/// truthy (strings as-is, other values as compact JSON), the whole
/// body as compact JSON when truthy, the numeric status. `null`,
/// `false`, `0` and `""` count as absent at either level.
fn error_reason(data: Option<&Value>, status: u16) -> String {
    let value = match data {
        Some(value) if is_truthy(value) => value,
        _ => return status.to_string(),
    };
    match value.get("message") {
        Some(Value::String(message)) if !message.is_empty() => message.clone(),
        Some(message) if is_truthy(message) => message.to_string(),
        _ => value.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
