//! Scripted test doubles for the API layer.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::transport::{HttpRequest, HttpTransport, RawResponse, TransportError};

type ScriptedResult = Result<RawResponse, TransportError>;

/// Transport that hands out queued responses in order and records every
/// executed request. Clones share the same queue and log, so a test can
/// keep a handle after boxing one into a client.
#[derive(Default, Clone)]
pub struct FakeTransport {
    responses: Arc<Mutex<Vec<ScriptedResult>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response; requests consume the queue front to back.
    pub fn push_response(&self, response: RawResponse) {
        self.responses.lock().unwrap().push(Ok(response));
    }

    /// Queue a network-level failure.
    pub fn push_error(&self, error: TransportError) {
        self.responses.lock().unwrap().push(Err(error));
    }

    /// Requests executed so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(TransportError("no scripted response left".to_string()));
        }
        responses.remove(0)
    }
}

/// JSON response with the given status.
pub fn json_response(status: u16, body: Value) -> RawResponse {
    RawResponse {
        status,
        content_type: Some("application/json".to_string()),
        body: body.to_string().into_bytes(),
    }
}

/// Response without a JSON content type.
pub fn text_response(status: u16, body: &str) -> RawResponse {
    RawResponse {
        status,
        content_type: Some("text/plain".to_string()),
        body: body.as_bytes().to_vec(),
    }
}
