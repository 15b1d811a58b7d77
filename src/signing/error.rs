//! Signing error types.

use thiserror::Error;

/// Errors that can occur while signing a request.
#[derive(Debug, Error)]
pub enum SigningError {
    /// The MAC could not be computed.
    ///
    /// # Examples
    ///
    /// ```
    /// use integrations_aws_ses_classic::signing::SigningError;
    ///
    /// let error = SigningError::SigningFailed {
    ///     message: "invalid key length".to_string(),
    /// };
    /// assert_eq!(error.to_string(), "Signing failed: invalid key length");
    /// ```
    #[error("Signing failed: {message}")]
    SigningFailed {
        /// Details about the signing failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SigningError>();
    }
}
