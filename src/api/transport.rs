//! Transport layer: the seam between the HTTP wrapper and the network.

use async_trait::async_trait;
use thiserror::Error;

/// HTTP verbs exposed by the client wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

/// Whether a request should carry stored credentials, mirroring the
/// `credentials` option of a browser fetch call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialsMode {
    #[default]
    Omit,
    Include,
}

/// A fully built request, ready for a transport to execute.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body, when the caller supplied one.
    pub body: Option<String>,
    pub credentials: CredentialsMode,
}

/// Raw response data before normalization.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Network failure before a usable response was received.
#[derive(Debug, Error)]
#[error("request failed: {0}")]
pub struct TransportError(pub String);

/// Executes requests. Production code uses [`ReqwestTransport`]; tests
/// substitute a scripted transport behind the same trait.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse, TransportError>;
}

/// reqwest-backed transport.
///
/// Interprets [`CredentialsMode::Include`] by attaching the configured
/// session cookie; with no cookie configured the mode is a no-op.
pub struct ReqwestTransport {
    client: reqwest::Client,
    session_cookie: Option<String>,
}

impl ReqwestTransport {
    pub fn new(session_cookie: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            session_cookie,
        }
    }

    /// Cookie to attach for this request, if any.
    fn cookie_for(&self, credentials: CredentialsMode) -> Option<&str> {
        match credentials {
            CredentialsMode::Include => self.session_cookie.as_deref(),
            CredentialsMode::Omit => None,
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(cookie) = self.cookie_for(request.credentials) {
            builder = builder.header(reqwest::header::COOKIE, cookie);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError(e.to_string()))?
            .to_vec();

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
        HttpMethod::Patch => reqwest::Method::PATCH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_names() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
        assert_eq!(HttpMethod::Put.as_str(), "PUT");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
        assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
    }

    #[test]
    fn test_credentials_default_to_omit() {
        assert_eq!(CredentialsMode::default(), CredentialsMode::Omit);
    }

    #[test]
    fn test_cookie_attaches_only_for_include() {
        let with_cookie = ReqwestTransport::new(Some("session=abc123".to_string()));
        assert_eq!(
            with_cookie.cookie_for(CredentialsMode::Include),
            Some("session=abc123")
        );
        assert_eq!(with_cookie.cookie_for(CredentialsMode::Omit), None);

        let without_cookie = ReqwestTransport::new(None);
        assert_eq!(without_cookie.cookie_for(CredentialsMode::Include), None);
    }
}
