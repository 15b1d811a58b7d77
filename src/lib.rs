//! Amazon SES classic query API integration
//!
//! Async client for the original Simple Email Service endpoint
//! (`https://email.<region>.amazonaws.com`, API version 2010-12-01).
//!
//! # Features
//!
//! - **Nine operations**: verify, list and delete sender addresses; send quota
//!   and statistics; structured, text, HTML and raw email
//! - **AWS3-HTTPS signing**: HMAC-SHA256 of the request date, recomputed per
//!   request
//! - **Untyped results**: every operation returns one field of the parsed
//!   response as a [`Document`] (`serde_json::Value`)
//! - **Inspectable failures**: a non-200 answer becomes
//!   [`SesError::UnexpectedStatus`] with a lazily parsed error body
//!
//! One call is one HTTP request; nothing is retried.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use integrations_aws_ses_classic::SesClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SesClient::from_env()?;
//!
//!     let response = client
//!         .send_text_email(
//!             "recipient@example.com",
//!             "Hello from SES",
//!             "This is a test email.",
//!             "sender@example.com",
//!         )
//!         .await?;
//!     println!("Message sent! ID: {}", response["SendEmailResult"]["MessageId"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Handling failures
//!
//! ```rust,no_run
//! use integrations_aws_ses_classic::{SesClient, SesError};
//!
//! # async fn example(client: SesClient) {
//! match client.verify_email_address("not-an-address").await {
//!     Ok(_) => println!("verification mail sent"),
//!     Err(err @ SesError::UnexpectedStatus { .. }) => {
//!         println!("status: {:?}", err.status());
//!         println!("code: {:?}", err.error_code());
//!         println!("body: {:?}", err.error_body());
//!     }
//!     Err(err) => println!("request failed: {}", err),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod builders;
pub mod client;
pub mod config;
pub mod credentials;
pub mod document;
pub mod error;
pub mod http;
pub mod mocks;
pub mod operations;
pub mod services;
pub mod signing;

pub use builders::{BuilderError, EmailBuilder, SendEmailRequest};
pub use client::{SesClient, SesClientBuilder};
pub use config::{SesConfig, SesConfigBuilder};
pub use credentials::{AwsCredentials, CredentialError};
pub use document::Document;
pub use error::{AwsErrorResponse, SesError, SesResult};
pub use http::{HttpClient, SesHttpClient, SesRequest, SesResponse};
pub use services::{AccountService, EmailService, IdentityService};

/// Crate-level result alias.
pub type Result<T> = std::result::Result<T, SesError>;

/// Create a new SES client from environment variables.
///
/// Reads `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`, and optionally
/// `AWS_REGION` / `AWS_DEFAULT_REGION` and `AWS_ENDPOINT_URL_SES` /
/// `AWS_ENDPOINT_URL`.
pub fn create_client_from_env() -> Result<SesClient> {
    SesClient::from_env()
}

/// Create a new SES client with explicit configuration.
///
/// # Example
///
/// ```rust
/// use integrations_aws_ses_classic::{create_client, SesConfig};
///
/// let config = SesConfig::builder()
///     .region("us-west-2")
///     .credentials("AKID", "SECRET")
///     .build()?;
/// let client = create_client(config)?;
/// assert_eq!(client.config().region, "us-west-2");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn create_client(config: SesConfig) -> Result<SesClient> {
    SesClient::new(config)
}
