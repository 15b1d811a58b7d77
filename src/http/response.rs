//! HTTP responses from the SES endpoint.

use bytes::Bytes;
use http::StatusCode;
use once_cell::sync::OnceCell;
use std::collections::HashMap;

use crate::document::{self, Document, Format};
use crate::error::SesResult;

/// Header names carrying the AWS request ID, in lookup order.
const REQUEST_ID_HEADERS: [&str; 3] = ["x-amzn-requestid", "x-amzn-request-id", "x-amz-request-id"];

/// A response from the SES endpoint.
///
/// Header names are stored lowercase. The body is kept as raw bytes; it is
/// parsed on demand with [`SesResponse::document`], or through the memoized
/// [`SesResponse::error_body`] when the response is carried by an error.
#[derive(Debug, Clone)]
pub struct SesResponse {
    /// HTTP status code
    status: StatusCode,

    /// Response headers
    headers: HashMap<String, String>,

    /// Response body
    body: Bytes,

    /// AWS request ID (from the x-amzn-RequestId header)
    request_id: Option<String>,

    /// Parsed error body, filled on first access
    error_body: OnceCell<Document>,
}

impl SesResponse {
    /// Create a new response.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use integrations_aws_ses_classic::http::SesResponse;
    /// use bytes::Bytes;
    /// use http::StatusCode;
    /// use std::collections::HashMap;
    ///
    /// let headers = HashMap::from([("X-Amzn-RequestId".to_string(), "abc".to_string())]);
    /// let response = SesResponse::new(StatusCode::OK, headers, Bytes::from_static(b"ok"));
    /// assert_eq!(response.request_id(), Some("abc"));
    /// assert_eq!(response.header("x-amzn-requestid"), Some("abc"));
    /// ```
    pub fn new(status: StatusCode, headers: HashMap<String, String>, body: Bytes) -> Self {
        let headers: HashMap<String, String> = headers
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value))
            .collect();

        let request_id = REQUEST_ID_HEADERS
            .iter()
            .find_map(|name| headers.get(*name))
            .cloned();

        Self {
            status,
            headers,
            body,
            request_id,
            error_body: OnceCell::new(),
        }
    }

    /// Read a reqwest response to completion.
    pub(crate) async fn from_reqwest(response: reqwest::Response) -> SesResult<Self> {
        let status = response.status();

        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers.insert(name.as_str().to_string(), value.to_string());
            }
        }

        let body = response.bytes().await?;

        Ok(Self::new(status, headers, body))
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Get all headers, keyed by lowercase name.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Get the raw body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Get the body as text, replacing invalid UTF-8.
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Get the declared `Content-Type`.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Body format implied by the declared content type.
    pub fn format(&self) -> Format {
        Format::from_content_type(self.content_type())
    }

    /// Get the AWS request ID from the response headers.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Check whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Parse the body according to its declared content type.
    ///
    /// # Errors
    ///
    /// Returns [`SesError::Parse`](crate::error::SesError::Parse) when the
    /// body is malformed for its format.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use integrations_aws_ses_classic::http::SesResponse;
    /// use bytes::Bytes;
    /// use http::StatusCode;
    /// use std::collections::HashMap;
    ///
    /// let headers = HashMap::from([("Content-Type".to_string(), "text/xml".to_string())]);
    /// let response = SesResponse::new(StatusCode::OK, headers, Bytes::from_static(b"<A><B>1</B></A>"));
    /// assert_eq!(response.document()?["A"]["B"], "1");
    /// # Ok::<(), integrations_aws_ses_classic::SesError>(())
    /// ```
    pub fn document(&self) -> SesResult<Document> {
        document::parse(self.format(), &self.body)
    }

    /// The body of a failed response, parsed once and cached.
    ///
    /// Parsing follows the declared content type. A body that cannot be
    /// parsed is returned as its raw text rather than failing.
    pub fn error_body(&self) -> &Document {
        self.error_body.get_or_init(|| match self.document() {
            Ok(doc) => doc,
            Err(e) => {
                tracing::debug!(error = %e, "Error body is not well-formed, keeping raw text");
                Document::String(self.body_string())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(status: StatusCode, content_type: &str, body: &'static str) -> SesResponse {
        let headers = HashMap::from([("Content-Type".to_string(), content_type.to_string())]);
        SesResponse::new(status, headers, Bytes::from_static(body.as_bytes()))
    }

    #[test]
    fn test_headers_are_case_insensitive() {
        let r = response(StatusCode::OK, "text/xml", "");
        assert_eq!(r.header("CONTENT-TYPE"), Some("text/xml"));
        assert_eq!(r.content_type(), Some("text/xml"));
        assert_eq!(r.header("missing"), None);
    }

    #[test]
    fn test_request_id_header_variants() {
        let headers = HashMap::from([("x-amz-request-id".to_string(), "r2".to_string())]);
        let r = SesResponse::new(StatusCode::OK, headers, Bytes::new());
        assert_eq!(r.request_id(), Some("r2"));

        let r = SesResponse::new(StatusCode::OK, HashMap::new(), Bytes::new());
        assert_eq!(r.request_id(), None);
    }

    #[test]
    fn test_document_per_content_type() {
        let xml = response(StatusCode::OK, "text/xml", "<R><V>1</V></R>");
        assert_eq!(xml.document().unwrap(), json!({"R": {"V": "1"}}));

        let js = response(StatusCode::OK, "application/json", r#"{"R": 1}"#);
        assert_eq!(js.document().unwrap(), json!({"R": 1}));

        let plain = response(StatusCode::OK, "text/plain", "hello");
        assert_eq!(plain.document().unwrap(), json!("hello"));
    }

    #[test]
    fn test_document_without_content_type_is_text() {
        let r = SesResponse::new(
            StatusCode::OK,
            HashMap::new(),
            Bytes::from_static(b"<R/>"),
        );
        assert_eq!(r.format(), Format::Plain);
        assert_eq!(r.document().unwrap(), json!("<R/>"));
    }

    #[test]
    fn test_error_body_is_memoized() {
        let r = response(
            StatusCode::BAD_REQUEST,
            "text/xml",
            "<ErrorResponse><Error><Code>X</Code></Error></ErrorResponse>",
        );

        let first = r.error_body() as *const Document;
        let second = r.error_body() as *const Document;
        assert_eq!(first, second);
        assert_eq!(r.error_body()["ErrorResponse"]["Error"]["Code"], "X");
    }

    #[test]
    fn test_error_body_falls_back_to_raw_text() {
        let r = response(StatusCode::BAD_GATEWAY, "text/xml", "<html><body>Bad gateway");
        assert_eq!(r.error_body(), &json!("<html><body>Bad gateway"));
    }

    #[test]
    fn test_error_body_empty_is_null() {
        let r = response(StatusCode::INTERNAL_SERVER_ERROR, "text/xml", "");
        assert_eq!(r.error_body(), &Document::Null);
    }

    #[test]
    fn test_is_success() {
        assert!(response(StatusCode::OK, "text/xml", "").is_success());
        assert!(!response(StatusCode::FORBIDDEN, "text/xml", "").is_success());
    }
}
