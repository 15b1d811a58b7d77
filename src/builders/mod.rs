//! Builders for classic SES requests.
//!
//! [`EmailBuilder`] assembles the parameters of a `SendEmail` call: sender,
//! recipients, subject and text and/or HTML body.
//!
//! # Examples
//!
//! ```rust
//! use integrations_aws_ses_classic::builders::EmailBuilder;
//!
//! let request = EmailBuilder::new()
//!     .from("sender@example.com")
//!     .to("recipient@example.com")
//!     .subject("Hello World")
//!     .text("This is a plain text email")
//!     .html("<p>This is an HTML email</p>")
//!     .build()?;
//! # Ok::<(), integrations_aws_ses_classic::builders::BuilderError>(())
//! ```

mod email_builder;

pub use email_builder::{EmailBuilder, SendEmailRequest};

use thiserror::Error;

/// Why [`EmailBuilder::build`] refused to produce a request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// A required part of the message was never set.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing part (`from`, `recipients`, `subject` or `body`).
        field: String,
    },

    /// An address cannot be placed in a query parameter.
    #[error("Invalid address in '{field}': {reason}")]
    InvalidAddress {
        /// The builder field holding the address.
        field: String,
        /// Why the address was rejected.
        reason: String,
    },
}

impl BuilderError {
    /// Create a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub(crate) fn invalid_address(field: &str, reason: &str) -> Self {
        Self::InvalidAddress {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    /// The builder field the error refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field } | Self::InvalidAddress { field, .. } => field,
        }
    }
}
