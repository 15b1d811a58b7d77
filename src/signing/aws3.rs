use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::SigningError;
use crate::credentials::AwsCredentials;

type HmacSha256 = Hmac<Sha256>;

/// Authentication scheme name.
pub const SCHEME: &str = "AWS3-HTTPS";

/// MAC algorithm name as it appears in the authorization header.
pub const ALGORITHM: &str = "HMACSHA256";

/// Header carrying the signature.
pub const AUTHORIZATION_HEADER: &str = "X-Amzn-Authorization";

/// Header carrying the signed date.
pub const DATE_HEADER: &str = "Date";

const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Base64 HMAC-SHA256 of `date` under `secret`.
///
/// A fresh MAC is built for every call, so concurrent requests never share
/// signing state.
///
/// ```
/// use integrations_aws_ses_classic::signing::sign;
///
/// let signature = sign("key", "The quick brown fox jumps over the lazy dog")?;
/// assert_eq!(signature, "97yD9DBThCSxMpjmqm+xQ+9NWaFJRhdZl0edvC0aPNg=");
/// # Ok::<(), integrations_aws_ses_classic::signing::SigningError>(())
/// ```
pub fn sign(secret: &str, date: &str) -> Result<String, SigningError> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|e| SigningError::SigningFailed {
            message: e.to_string(),
        })?;
    mac.update(date.as_bytes());
    let digest = mac.finalize().into_bytes();

    Ok(STANDARD.encode(digest).replace('\n', ""))
}

/// Format a timestamp as an HTTP date, e.g. `Mon, 02 Jan 2006 15:04:05 GMT`.
pub fn http_date(now: &DateTime<Utc>) -> String {
    now.format(HTTP_DATE_FORMAT).to_string()
}

/// Build the `X-Amzn-Authorization` header value.
pub fn authorization_header(access_key_id: &str, signature: &str) -> String {
    format!(
        "{} AWSAccessKeyId={},Algorithm={},Signature={}",
        SCHEME, access_key_id, ALGORITHM, signature
    )
}

/// The two header values a signed request carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// Value for the `Date` header.
    pub date: String,
    /// Value for the `X-Amzn-Authorization` header.
    pub authorization: String,
}

impl SignedHeaders {
    /// Sign a request made at `now`.
    pub fn for_request(
        credentials: &AwsCredentials,
        now: &DateTime<Utc>,
    ) -> Result<Self, SigningError> {
        let date = http_date(now);
        let signature = sign(credentials.secret_access_key(), &date)?;

        Ok(Self {
            authorization: authorization_header(credentials.access_key_id(), &signature),
            date,
        })
    }
}
