//! Credential error types.

use thiserror::Error;

/// Errors raised while reading credentials from the environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    /// The variable is not set.
    #[error("{variable} environment variable not set")]
    NotSet {
        /// Name of the variable.
        variable: &'static str,
    },

    /// The variable is set to an empty string.
    #[error("{variable} is empty")]
    Empty {
        /// Name of the variable.
        variable: &'static str,
    },
}
