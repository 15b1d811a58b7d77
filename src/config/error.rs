//! Configuration error types.

use thiserror::Error;

use crate::credentials::CredentialError;

/// Errors raised while building a [`SesConfig`](super::SesConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No access key pair was supplied.
    #[error("No credentials configured; set an access key pair or use from_env")]
    MissingCredentials,

    /// The region is blank.
    #[error("Invalid region '{region}'")]
    InvalidRegion {
        /// The rejected region.
        region: String,
    },

    /// The endpoint override is not an absolute http(s) URL.
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// The rejected endpoint.
        endpoint: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Credentials could not be read from the environment.
    #[error("Environment error: {0}")]
    Environment(#[from] CredentialError),
}
