//! Error types for the SES classic integration.
//!
//! Errors are grouped by where they originate:
//! - Local setup (configuration, credentials, request signing)
//! - Transport (connection failures, timeouts)
//! - Remote failures (the service answered with a status other than the one
//!   the operation expects)
//! - Response handling (malformed bodies, absent result fields)
//!
//! # Examples
//!
//! ```rust
//! use integrations_aws_ses_classic::error::SesError;
//!
//! fn report(error: &SesError) {
//!     if let Some(status) = error.status() {
//!         println!("remote call failed with {}", status);
//!         if let Some(code) = error.error_code() {
//!             println!("AWS error code: {}", code);
//!         }
//!     }
//! }
//! ```

mod mapping;

pub use mapping::{parse_error_document, AwsErrorResponse};

use http::StatusCode;
use thiserror::Error;

use crate::builders::BuilderError;
use crate::config::ConfigError;
use crate::credentials::CredentialError;
use crate::document::Document;
use crate::http::SesResponse;
use crate::signing::SigningError;

/// Result type for SES operations.
pub type SesResult<T> = std::result::Result<T, SesError>;

/// Top-level error type for the SES classic integration.
#[derive(Debug, Error)]
pub enum SesError {
    /// Configuration-related errors.
    ///
    /// Raised when the client is built from invalid or incomplete settings.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error.
        message: String,
        /// Optional underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Credential-related errors.
    #[error("Credential error: {message}")]
    Credential {
        /// Description of the credential error.
        message: String,
    },

    /// Request signing errors.
    ///
    /// Only the underlying HMAC implementation can fail here.
    #[error("Signing error: {message}")]
    Signing {
        /// Description of the signing error.
        message: String,
    },

    /// Transport and network errors.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the transport error.
        message: String,
        /// Optional underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Request timeout errors.
    #[error("Timeout: {message}")]
    Timeout {
        /// Description of the timeout.
        message: String,
    },

    /// The service answered with a status other than the operation's
    /// expected status.
    ///
    /// The full response is kept so the error body can be inspected; see
    /// [`SesError::error_body`].
    #[error("Unexpected status {} (expected {expected})", .response.status())]
    UnexpectedStatus {
        /// The status the operation expects on success.
        expected: StatusCode,
        /// The response that was received instead.
        response: Box<SesResponse>,
    },

    /// A response body could not be parsed.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parse failure.
        message: String,
    },

    /// The parsed response does not contain the field an operation returns.
    #[error("Missing field in response: {path}")]
    MissingField {
        /// Dotted path of the absent field.
        path: String,
    },

    /// Caller-side validation errors.
    #[error("Validation error: {message}")]
    Validation {
        /// Description of the validation error.
        message: String,
        /// Optional field name that failed validation.
        field: Option<String>,
    },
}

impl SesError {
    /// Returns the HTTP status of the response when the remote call failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use integrations_aws_ses_classic::error::SesError;
    ///
    /// let error = SesError::Timeout { message: "request timed out".to_string() };
    /// assert_eq!(error.status(), None);
    /// ```
    pub fn status(&self) -> Option<StatusCode> {
        self.response().map(SesResponse::status)
    }

    /// Returns the response received when the remote call failed.
    pub fn response(&self) -> Option<&SesResponse> {
        match self {
            SesError::UnexpectedStatus { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Returns the error body of a failed remote call.
    ///
    /// The body is parsed on first access according to the response's
    /// declared content type and cached inside the response; when it cannot
    /// be parsed the raw text is returned instead.
    pub fn error_body(&self) -> Option<&Document> {
        self.response().map(SesResponse::error_body)
    }

    /// Returns the structured AWS error envelope of a failed remote call.
    pub fn aws_error(&self) -> Option<AwsErrorResponse> {
        self.error_body().and_then(parse_error_document)
    }

    /// Returns the AWS error code (for example `MessageRejected`) if the
    /// remote error body carried one.
    pub fn error_code(&self) -> Option<String> {
        self.aws_error().map(|e| e.code)
    }

    /// Returns the AWS error message if the remote error body carried one.
    pub fn error_message(&self) -> Option<String> {
        self.aws_error().and_then(|e| e.message)
    }

    /// Returns the AWS request ID of a failed remote call.
    ///
    /// The response header is preferred; the `RequestId` element of the error
    /// body is used otherwise.
    pub fn request_id(&self) -> Option<String> {
        let response = self.response()?;
        response
            .request_id()
            .map(str::to_string)
            .or_else(|| self.aws_error().and_then(|e| e.request_id))
    }

    pub(crate) fn parse(message: impl Into<String>) -> Self {
        SesError::Parse {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for SesError {
    fn from(err: std::io::Error) -> Self {
        SesError::Transport {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for SesError {
    fn from(err: serde_json::Error) -> Self {
        SesError::Parse {
            message: err.to_string(),
        }
    }
}

impl From<quick_xml::Error> for SesError {
    fn from(err: quick_xml::Error) -> Self {
        SesError::Parse {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for SesError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SesError::Timeout {
                message: err.to_string(),
            }
        } else {
            SesError::Transport {
                message: err.to_string(),
                source: Some(Box::new(err)),
            }
        }
    }
}

impl From<ConfigError> for SesError {
    fn from(err: ConfigError) -> Self {
        SesError::Configuration {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<CredentialError> for SesError {
    fn from(err: CredentialError) -> Self {
        SesError::Credential {
            message: err.to_string(),
        }
    }
}

impl From<SigningError> for SesError {
    fn from(err: SigningError) -> Self {
        SesError::Signing {
            message: err.to_string(),
        }
    }
}

impl From<BuilderError> for SesError {
    fn from(err: BuilderError) -> Self {
        SesError::Validation {
            field: Some(err.field().to_string()),
            message: err.to_string(),
        }
    }
}
