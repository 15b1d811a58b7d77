//! AWS credentials for signing SES requests.
//!
//! The classic SES endpoint authenticates every request with an access key
//! ID and the HMAC of the request date under the matching secret key; see
//! [`crate::signing`]. Credentials are supplied once when the client is
//! built, either directly or from the environment.
//!
//! # Example
//!
//! ```
//! use integrations_aws_ses_classic::credentials::AwsCredentials;
//!
//! let credentials = AwsCredentials::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG");
//! assert_eq!(credentials.access_key_id(), "AKIDEXAMPLE");
//! ```

mod env;
mod error;

pub use env::{AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY};
pub use error::CredentialError;

use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use zeroize::Zeroize;

/// An AWS access key pair.
///
/// The secret key is held in a [`SecretString`] and never appears in
/// `Debug` output.
#[derive(Clone)]
pub struct AwsCredentials {
    access_key_id: String,
    secret_access_key: SecretString,
}

impl AwsCredentials {
    /// Create credentials from an access key ID and secret access key.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: SecretString::new(secret_access_key.into()),
        }
    }

    /// Read credentials from `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::NotSet`] when either variable is unset and
    /// [`CredentialError::Empty`] when either is empty.
    pub fn from_env() -> Result<Self, CredentialError> {
        env::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through a custom variable lookup.
    ///
    /// Same rules as [`AwsCredentials::from_env`], with `lookup` standing in
    /// for the process environment.
    ///
    /// ```
    /// use integrations_aws_ses_classic::credentials::AwsCredentials;
    /// use std::collections::HashMap;
    ///
    /// let vars = HashMap::from([
    ///     ("AWS_ACCESS_KEY_ID", "AKID"),
    ///     ("AWS_SECRET_ACCESS_KEY", "SECRET"),
    /// ]);
    /// let credentials = AwsCredentials::from_lookup(|k| vars.get(k).map(|v| v.to_string()))?;
    /// assert_eq!(credentials.access_key_id(), "AKID");
    /// # Ok::<(), integrations_aws_ses_classic::credentials::CredentialError>(())
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CredentialError>
    where
        F: Fn(&str) -> Option<String>,
    {
        env::from_lookup(lookup)
    }

    /// The access key ID.
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// The secret access key.
    pub fn secret_access_key(&self) -> &str {
        self.secret_access_key.expose_secret()
    }
}

impl fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .finish()
    }
}

impl Drop for AwsCredentials {
    fn drop(&mut self) {
        // SecretString zeroizes itself.
        self.access_key_id.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_new() {
        let creds = AwsCredentials::new("AKID", "SECRET");
        assert_eq!(creds.access_key_id(), "AKID");
        assert_eq!(creds.secret_access_key(), "SECRET");
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = AwsCredentials::new("AKID", "SECRET");
        let debug = format!("{:?}", creds);

        assert!(debug.contains("AKID"));
        assert!(!debug.contains("SECRET"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_credentials_clone() {
        let creds = AwsCredentials::new("AKID", "SECRET");
        let cloned = creds.clone();
        drop(creds);

        assert_eq!(cloned.access_key_id(), "AKID");
        assert_eq!(cloned.secret_access_key(), "SECRET");
    }
}
