//! Configuration for the SES client.
//!
//! Covers the region and endpoint, the access key pair used for signing,
//! transport timeouts and an optional user agent.

use std::time::Duration;

pub mod error;

pub use error::ConfigError;

use crate::credentials::AwsCredentials;

/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Default timeout for a whole request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for establishing a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const ENV_REGION: &str = "AWS_REGION";
const ENV_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
const ENV_ENDPOINT_SES: &str = "AWS_ENDPOINT_URL_SES";
const ENV_ENDPOINT: &str = "AWS_ENDPOINT_URL";

/// Configuration for the SES client.
#[derive(Debug, Clone)]
pub struct SesConfig {
    /// AWS region (e.g., "us-east-1").
    pub region: String,

    /// Custom endpoint URL (for local test servers or proxies).
    pub endpoint: Option<String>,

    /// Access key pair used to sign every request.
    pub credentials: AwsCredentials,

    /// Timeout for the entire request.
    pub timeout: Duration,

    /// Timeout for establishing connections.
    pub connect_timeout: Duration,

    /// Custom user agent string.
    pub user_agent: Option<String>,
}

impl SesConfig {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```
    /// use integrations_aws_ses_classic::config::SesConfig;
    ///
    /// let config = SesConfig::builder()
    ///     .region("eu-west-1")
    ///     .credentials("access_key", "secret_key")
    ///     .build()?;
    /// assert_eq!(config.region, "eu-west-1");
    /// # Ok::<(), integrations_aws_ses_classic::config::ConfigError>(())
    /// ```
    pub fn builder() -> SesConfigBuilder {
        SesConfigBuilder::default()
    }

    /// Create a configuration from environment variables.
    ///
    /// Reads:
    /// - `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY` (required)
    /// - `AWS_REGION`, falling back to `AWS_DEFAULT_REGION`
    /// - `AWS_ENDPOINT_URL_SES`, falling back to `AWS_ENDPOINT_URL`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use integrations_aws_ses_classic::config::SesConfig;
    ///
    /// let config = SesConfig::from_env()?;
    /// # Ok::<(), integrations_aws_ses_classic::config::ConfigError>(())
    /// ```
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`SesConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let credentials = AwsCredentials::from_lookup(&lookup)?;

        let mut builder = Self::builder().aws_credentials(credentials);
        if let Some(region) = non_empty(ENV_REGION).or_else(|| non_empty(ENV_DEFAULT_REGION)) {
            builder = builder.region(region);
        }
        if let Some(endpoint) = non_empty(ENV_ENDPOINT_SES).or_else(|| non_empty(ENV_ENDPOINT)) {
            builder = builder.endpoint(endpoint);
        }

        builder.build()
    }

    /// Get the SES endpoint URL for this configuration.
    ///
    /// Returns the custom endpoint if configured, otherwise the standard
    /// classic SES endpoint for the configured region.
    ///
    /// # Example
    ///
    /// ```
    /// use integrations_aws_ses_classic::config::SesConfig;
    ///
    /// let config = SesConfig::builder()
    ///     .credentials("access_key", "secret_key")
    ///     .build()?;
    /// assert_eq!(config.ses_endpoint(), "https://email.us-east-1.amazonaws.com");
    /// # Ok::<(), integrations_aws_ses_classic::config::ConfigError>(())
    /// ```
    pub fn ses_endpoint(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://email.{}.amazonaws.com", self.region),
        }
    }
}

/// Builder for [`SesConfig`].
#[derive(Debug, Default)]
pub struct SesConfigBuilder {
    region: Option<String>,
    endpoint: Option<String>,
    credentials: Option<AwsCredentials>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SesConfigBuilder {
    /// Set the AWS region. Defaults to `us-east-1`.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set a custom endpoint URL.
    ///
    /// This is useful for testing against a local server.
    ///
    /// ```
    /// use integrations_aws_ses_classic::config::SesConfig;
    ///
    /// let config = SesConfig::builder()
    ///     .endpoint("http://localhost:4566/")
    ///     .credentials("access_key", "secret_key")
    ///     .build()?;
    /// assert_eq!(config.ses_endpoint(), "http://localhost:4566");
    /// # Ok::<(), integrations_aws_ses_classic::config::ConfigError>(())
    /// ```
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set static credentials.
    pub fn credentials(
        self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        self.aws_credentials(AwsCredentials::new(access_key_id, secret_access_key))
    }

    /// Set credentials from an existing [`AwsCredentials`].
    pub fn aws_credentials(mut self, credentials: AwsCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the connection timeout. Defaults to 10 seconds.
    pub fn connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = Some(duration);
        self
    }

    /// Set a custom user agent string.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if no credentials were
    /// set, [`ConfigError::InvalidRegion`] for a blank region and
    /// [`ConfigError::InvalidEndpoint`] for an endpoint that is not an
    /// absolute http(s) URL.
    pub fn build(self) -> Result<SesConfig, ConfigError> {
        let credentials = self.credentials.ok_or(ConfigError::MissingCredentials)?;

        let region = self.region.unwrap_or_else(|| DEFAULT_REGION.to_string());
        if region.trim().is_empty() {
            return Err(ConfigError::InvalidRegion { region });
        }

        if let Some(endpoint) = &self.endpoint {
            check_endpoint(endpoint)?;
        }

        Ok(SesConfig {
            region,
            endpoint: self.endpoint,
            credentials,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            user_agent: self.user_agent,
        })
    }
}

fn check_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };

    let url = url::Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("scheme must be http or https, got '{}'", other))),
    }
}
