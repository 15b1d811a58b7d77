//! HTTP layer for the SES query API.
//!
//! ```text
//! ┌─────────────────┐
//! │  SesHttpClient  │  - form encoding
//! │                 │  - AWS3-HTTPS signing
//! │                 │  - expected-status check
//! └────────┬────────┘
//!          │ HttpRequest
//!          ▼
//! ┌─────────────────┐
//! │   Transport     │  - reqwest, or a mock in tests
//! └─────────────────┘
//! ```

mod client;
mod request;
mod response;
mod transport;

pub use client::SesHttpClient;
pub use request::{SesRequest, FORM_CONTENT_TYPE};
pub use response::SesResponse;
pub use transport::{HttpRequest, ReqwestTransport, Transport};

use crate::error::SesResult;
use async_trait::async_trait;

/// Trait for clients that can send SES requests.
///
/// Services hold an `Arc<dyn HttpClient>` so they can be driven by a mock in
/// tests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a request and return the response.
    ///
    /// # Errors
    ///
    /// Returns [`SesError::UnexpectedStatus`](crate::error::SesError::UnexpectedStatus)
    /// when the response status differs from the request's expected status,
    /// and transport or signing errors as they occur.
    async fn send_request(&self, request: SesRequest) -> SesResult<SesResponse>;

    /// Get the endpoint URL for this client.
    fn endpoint(&self) -> &str;

    /// Get the AWS region for this client.
    fn region(&self) -> &str;
}
