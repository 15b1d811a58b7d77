//! Mock HTTP transport for testing.

use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::TestFixtures;
use crate::error::{SesError, SesResult};
use crate::http::{HttpRequest, SesResponse, Transport};

/// Canned response returned by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Bytes,
}

impl MockResponse {
    /// Create a response with the given status and body and no headers.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// 200 response with a `text/xml` body.
    pub fn ok_xml(body: impl Into<Bytes>) -> Self {
        Self::new(200, body).with_header("content-type", "text/xml")
    }

    /// Error response carrying the standard SES XML error envelope.
    pub fn error_xml(status: u16, error_type: &str, code: &str, message: &str) -> Self {
        Self::new(status, TestFixtures::error_xml(error_type, code, message))
            .with_header("content-type", "text/xml")
    }

    /// Add a header to the response.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// Mock HTTP transport for testing.
///
/// Responses are returned in queue order; once the queue is empty the
/// default response is used, and without one the call fails with a
/// transport error. Every request is recorded.
pub struct MockTransport {
    /// Queue of responses to return.
    responses: Mutex<Vec<MockResponse>>,
    /// Recorded requests.
    requests: Mutex<Vec<HttpRequest>>,
    /// Default response if no responses are queued.
    default_response: Option<MockResponse>,
}

impl MockTransport {
    /// Create a new mock transport with no responses.
    pub fn new() -> Self {
        Self::with_responses(Vec::new())
    }

    /// Create a mock transport with queued responses.
    pub fn with_responses(responses: Vec<MockResponse>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
            default_response: None,
        }
    }

    /// Create a mock transport that always answers with `response`.
    pub fn with_default(response: MockResponse) -> Self {
        Self {
            default_response: Some(response),
            ..Self::new()
        }
    }

    /// Queue a response to return.
    pub fn queue_response(&self, response: MockResponse) {
        lock(&self.responses).push(response);
    }

    /// Get all recorded requests.
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    /// Get the number of requests made.
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Get the last request made.
    pub fn last_request(&self) -> Option<HttpRequest> {
        lock(&self.requests).last().cloned()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

// A panicking test must not poison the mock for the assertions that follow.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> SesResult<SesResponse> {
        lock(&self.requests).push(request);

        let response = {
            let mut responses = lock(&self.responses);
            if responses.is_empty() {
                self.default_response.clone()
            } else {
                Some(responses.remove(0))
            }
        };

        let mock = response.ok_or_else(|| SesError::Transport {
            message: "No mock response available".to_string(),
            source: None,
        })?;

        let status = StatusCode::from_u16(mock.status).map_err(|e| SesError::Transport {
            message: format!("Invalid mock status {}: {}", mock.status, e),
            source: None,
        })?;

        Ok(SesResponse::new(status, mock.headers, mock.body))
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("queued_responses", &lock(&self.responses).len())
            .field("recorded_requests", &lock(&self.requests).len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;

    #[tokio::test]
    async fn test_queue_then_default() {
        let transport = MockTransport::with_default(MockResponse::new(503, "down"));
        transport.queue_response(MockResponse::ok_xml("<A/>"));

        let first = transport
            .send(HttpRequest::new(Method::POST, "http://x/"))
            .await
            .unwrap();
        let second = transport
            .send(HttpRequest::new(Method::POST, "http://x/"))
            .await
            .unwrap();

        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(second.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_mock_fails() {
        let transport = MockTransport::new();
        let err = transport
            .send(HttpRequest::new(Method::POST, "http://x/"))
            .await
            .unwrap_err();

        assert!(matches!(err, SesError::Transport { .. }));
        assert!(transport.last_request().is_some());
    }
}
