//! AWS3-HTTPS request signing.
//!
//! The classic SES query endpoint uses the HTTPS-only AWS3 scheme rather than
//! Signature Version 4. Only the request date is signed:
//!
//! 1. Format the current UTC time as an HTTP date and send it in `Date`
//! 2. Compute HMAC-SHA256 of that exact string under the secret access key
//! 3. Base64-encode the MAC and send it in `X-Amzn-Authorization`:
//!
//! ```text
//! X-Amzn-Authorization: AWS3-HTTPS AWSAccessKeyId=<key>,Algorithm=HMACSHA256,Signature=<sig>
//! ```
//!
//! # Example
//!
//! ```
//! use integrations_aws_ses_classic::credentials::AwsCredentials;
//! use integrations_aws_ses_classic::signing::SignedHeaders;
//! use chrono::{TimeZone, Utc};
//!
//! let credentials = AwsCredentials::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY");
//! let now = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
//!
//! let headers = SignedHeaders::for_request(&credentials, &now)?;
//! assert_eq!(headers.date, "Mon, 02 Jan 2006 15:04:05 GMT");
//! assert!(headers.authorization.starts_with("AWS3-HTTPS AWSAccessKeyId=AKIDEXAMPLE,"));
//! # Ok::<(), integrations_aws_ses_classic::signing::SigningError>(())
//! ```

mod aws3;
mod error;

pub use aws3::{
    authorization_header, http_date, sign, SignedHeaders, ALGORITHM, AUTHORIZATION_HEADER,
    DATE_HEADER, SCHEME,
};
pub use error::SigningError;
