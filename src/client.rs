//! SES client and builder.
//!
//! `SesClient` is the entry point. It owns one signed HTTP client and hands
//! it to three service objects, created on first access:
//!
//! - [`identities()`](SesClient::identities): verify, list and delete sender
//!   addresses
//! - [`account()`](SesClient::account): sending quota and statistics
//! - [`emails()`](SesClient::emails): structured, text, HTML and raw email
//!
//! Each operation is also available directly on the client.
//!
//! # Example
//!
//! ```rust,no_run
//! use integrations_aws_ses_classic::SesClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SesClient::builder()
//!     .region("us-east-1")
//!     .credentials("AKID", "SECRET")
//!     .build()?;
//!
//! let response = client
//!     .send_text_email("recipient@example.com", "Hello", "Email body", "sender@example.com")
//!     .await?;
//! println!("{}", response["SendEmailResult"]["MessageId"]);
//! # Ok(())
//! # }
//! ```

use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::time::Duration;

use crate::builders::SendEmailRequest;
use crate::config::{SesConfig, SesConfigBuilder};
use crate::document::Document;
use crate::error::SesResult;
use crate::http::{HttpClient, SesHttpClient, Transport};
use crate::services::{AccountService, EmailService, IdentityService};

/// Client for the classic SES query API.
///
/// # Cloning
///
/// Clones share the configuration, credentials and the underlying
/// connection pool. Nothing mutable is shared between calls.
///
/// # Example
///
/// ```rust,no_run
/// use integrations_aws_ses_classic::SesClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SesClient::from_env()?;
///
/// let client_clone = client.clone();
/// tokio::spawn(async move {
///     let _ = client_clone.get_send_quota().await;
/// });
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SesClient {
    /// HTTP client for making requests
    http_client: Arc<SesHttpClient>,

    // Created on first access.
    identity_service: OnceCell<IdentityService>,
    account_service: OnceCell<AccountService>,
    email_service: OnceCell<EmailService>,
}

impl SesClient {
    /// Create a client backed by reqwest.
    ///
    /// # Errors
    ///
    /// Returns `SesError::Transport` if the HTTP client cannot be built.
    pub fn new(config: SesConfig) -> SesResult<Self> {
        Ok(Self::from_http_client(SesHttpClient::new(config)?))
    }

    /// Create a client that sends through `transport`.
    pub fn with_transport(config: SesConfig, transport: Arc<dyn Transport>) -> Self {
        Self::from_http_client(SesHttpClient::with_transport(config, transport))
    }

    /// Create a client configured from the environment.
    ///
    /// See [`SesConfig::from_env`] for the variables read.
    pub fn from_env() -> SesResult<Self> {
        Self::new(SesConfig::from_env()?)
    }

    /// Create a new client builder.
    pub fn builder() -> SesClientBuilder {
        SesClientBuilder::default()
    }

    fn from_http_client(http_client: SesHttpClient) -> Self {
        Self {
            http_client: Arc::new(http_client),
            identity_service: OnceCell::new(),
            account_service: OnceCell::new(),
            email_service: OnceCell::new(),
        }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &SesConfig {
        self.http_client.config()
    }

    /// Get the underlying HTTP client.
    pub fn http_client(&self) -> &SesHttpClient {
        &self.http_client
    }

    fn shared_http_client(&self) -> Arc<dyn HttpClient> {
        self.http_client.clone()
    }

    /// Verified address operations.
    pub fn identities(&self) -> &IdentityService {
        self.identity_service
            .get_or_init(|| IdentityService::new(self.shared_http_client()))
    }

    /// Account quota and statistics operations.
    pub fn account(&self) -> &AccountService {
        self.account_service
            .get_or_init(|| AccountService::new(self.shared_http_client()))
    }

    /// Email sending operations.
    pub fn emails(&self) -> &EmailService {
        self.email_service
            .get_or_init(|| EmailService::new(self.shared_http_client()))
    }

    /// See [`IdentityService::verify_email_address`].
    pub async fn verify_email_address(&self, email: &str) -> SesResult<Document> {
        self.identities().verify_email_address(email).await
    }

    /// See [`IdentityService::list_verified_email_addresses`].
    pub async fn list_verified_email_addresses(&self) -> SesResult<Document> {
        self.identities().list_verified_email_addresses().await
    }

    /// See [`IdentityService::delete_verified_email_address`].
    pub async fn delete_verified_email_address(&self, email: &str) -> SesResult<Document> {
        self.identities().delete_verified_email_address(email).await
    }

    /// See [`AccountService::get_send_quota`].
    pub async fn get_send_quota(&self) -> SesResult<Document> {
        self.account().get_send_quota().await
    }

    /// See [`AccountService::get_send_statistics`].
    pub async fn get_send_statistics(&self) -> SesResult<Document> {
        self.account().get_send_statistics().await
    }

    /// See [`EmailService::send_email`].
    pub async fn send_email(&self, request: SendEmailRequest) -> SesResult<Document> {
        self.emails().send_email(request).await
    }

    /// See [`EmailService::send_text_email`].
    pub async fn send_text_email(
        &self,
        to: &str,
        subject: &str,
        text: &str,
        from: &str,
    ) -> SesResult<Document> {
        self.emails().send_text_email(to, subject, text, from).await
    }

    /// See [`EmailService::send_html_email`].
    pub async fn send_html_email(
        &self,
        to: &str,
        subject: &str,
        html: &str,
        from: &str,
    ) -> SesResult<Document> {
        self.emails().send_html_email(to, subject, html, from).await
    }

    /// See [`EmailService::send_raw_email`].
    pub async fn send_raw_email(&self, raw_message: impl AsRef<[u8]>) -> SesResult<Document> {
        self.emails().send_raw_email(raw_message).await
    }
}

impl std::fmt::Debug for SesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SesClient")
            .field("config", self.config())
            .finish_non_exhaustive()
    }
}

/// Builder for [`SesClient`].
///
/// Settings given here are applied on top of a base configuration: the one
/// passed to [`config`](Self::config), the environment when
/// [`from_env`](Self::from_env) is set, or defaults otherwise.
#[derive(Default)]
pub struct SesClientBuilder {
    config: Option<SesConfig>,
    from_env: bool,
    overrides: Overrides,
    transport: Option<Arc<dyn Transport>>,
}

#[derive(Default)]
struct Overrides {
    region: Option<String>,
    endpoint: Option<String>,
    credentials: Option<(String, String)>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SesClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: SesConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Start from [`SesConfig::from_env`].
    pub fn from_env(mut self) -> Self {
        self.from_env = true;
        self
    }

    /// Set the AWS region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.overrides.region = Some(region.into());
        self
    }

    /// Set a custom endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.overrides.endpoint = Some(endpoint.into());
        self
    }

    /// Set static credentials.
    pub fn credentials(
        mut self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        self.overrides.credentials = Some((access_key_id.into(), secret_access_key.into()));
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.overrides.timeout = Some(duration);
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, duration: Duration) -> Self {
        self.overrides.connect_timeout = Some(duration);
        self
    }

    /// Set a custom user agent string.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.overrides.user_agent = Some(ua.into());
        self
    }

    /// Send through a custom transport instead of reqwest.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `SesError::Configuration` when the resulting configuration is
    /// incomplete or invalid, and `SesError::Transport` if the reqwest client
    /// cannot be created.
    pub fn build(self) -> SesResult<SesClient> {
        let base = match self.config {
            Some(config) => Some(config),
            None if self.from_env => Some(SesConfig::from_env()?),
            None => None,
        };

        let config = self.overrides.apply(base)?;

        Ok(match self.transport {
            Some(transport) => SesClient::with_transport(config, transport),
            None => SesClient::new(config)?,
        })
    }
}

impl Overrides {
    fn apply(self, base: Option<SesConfig>) -> SesResult<SesConfig> {
        let mut builder = match base {
            Some(config) => seed(config),
            None => SesConfig::builder(),
        };

        if let Some(region) = self.region {
            builder = builder.region(region);
        }
        if let Some(endpoint) = self.endpoint {
            builder = builder.endpoint(endpoint);
        }
        if let Some((access_key_id, secret_access_key)) = self.credentials {
            builder = builder.credentials(access_key_id, secret_access_key);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        Ok(builder.build()?)
    }
}

fn seed(config: SesConfig) -> SesConfigBuilder {
    let SesConfig {
        region,
        endpoint,
        credentials,
        timeout,
        connect_timeout,
        user_agent,
    } = config;

    let mut builder = SesConfig::builder()
        .region(region)
        .aws_credentials(credentials)
        .timeout(timeout)
        .connect_timeout(connect_timeout);
    if let Some(endpoint) = endpoint {
        builder = builder.endpoint(endpoint);
    }
    if let Some(user_agent) = user_agent {
        builder = builder.user_agent(user_agent);
    }
    builder
}
