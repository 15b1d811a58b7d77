//! Signed HTTP client for the SES query API.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::SesConfig;
use crate::error::{SesError, SesResult};
use crate::signing::{SignedHeaders, AUTHORIZATION_HEADER, DATE_HEADER};

use super::request::{SesRequest, FORM_CONTENT_TYPE};
use super::response::SesResponse;
use super::transport::{HttpRequest, ReqwestTransport, Transport};
use super::HttpClient;

/// HTTP client for the SES query API.
///
/// Every request is form-encoded, stamped with a fresh `Date` header and
/// signed with AWS3-HTTPS before it is handed to the transport. One call
/// produces exactly one HTTP request.
///
/// # Examples
///
/// ```rust
/// use integrations_aws_ses_classic::config::SesConfig;
/// use integrations_aws_ses_classic::http::{HttpClient, SesHttpClient};
///
/// let config = SesConfig::builder()
///     .region("us-west-2")
///     .credentials("access_key", "secret_key")
///     .build()?;
///
/// let client = SesHttpClient::new(config)?;
/// assert_eq!(client.endpoint(), "https://email.us-west-2.amazonaws.com");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct SesHttpClient {
    /// Client configuration
    config: Arc<SesConfig>,

    /// HTTP transport
    transport: Arc<dyn Transport>,

    /// Endpoint URL
    endpoint: String,
}

impl SesHttpClient {
    /// Create a client backed by [`ReqwestTransport`].
    pub fn new(config: SesConfig) -> SesResult<Self> {
        let transport = ReqwestTransport::new(config.timeout, config.connect_timeout)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client with a custom transport.
    pub fn with_transport(config: SesConfig, transport: Arc<dyn Transport>) -> Self {
        let endpoint = config.ses_endpoint();

        Self {
            config: Arc::new(config),
            transport,
            endpoint,
        }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &SesConfig {
        &self.config
    }

    /// Build the signed HTTP request for `ses_request` as of `now`.
    pub fn build_request(
        &self,
        ses_request: &SesRequest,
        now: &DateTime<Utc>,
    ) -> SesResult<HttpRequest> {
        let signed = SignedHeaders::for_request(&self.config.credentials, now)?;

        let mut request = HttpRequest::new(
            ses_request.method().clone(),
            ses_request.build_url(&self.endpoint),
        )
        .with_header(DATE_HEADER, signed.date)
        .with_header(AUTHORIZATION_HEADER, signed.authorization)
        .with_header("Content-Type", FORM_CONTENT_TYPE)
        .with_body(ses_request.encode_body());

        if let Some(user_agent) = &self.config.user_agent {
            request = request.with_header("User-Agent", user_agent.as_str());
        }

        Ok(request)
    }
}

impl std::fmt::Debug for SesHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SesHttpClient")
            .field("endpoint", &self.endpoint)
            .field("region", &self.config.region)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl HttpClient for SesHttpClient {
    async fn send_request(&self, ses_request: SesRequest) -> SesResult<SesResponse> {
        let request = self.build_request(&ses_request, &Utc::now())?;

        debug!(
            action = ses_request.action(),
            url = %request.url,
            "Sending SES request"
        );

        let response = self.transport.send(request).await?;
        let expected = ses_request.expected_status();

        if response.status() != expected {
            warn!(
                action = ses_request.action(),
                status = response.status().as_u16(),
                expected = expected.as_u16(),
                request_id = response.request_id(),
                "SES request failed"
            );
            return Err(SesError::UnexpectedStatus {
                expected,
                response: Box::new(response),
            });
        }

        debug!(
            action = ses_request.action(),
            request_id = response.request_id(),
            "SES request succeeded"
        );
        Ok(response)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn region(&self) -> &str {
        &self.config.region
    }
}
