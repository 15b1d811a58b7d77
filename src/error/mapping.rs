//! AWS error envelope extraction.
//!
//! The classic SES endpoint reports failures with an XML envelope:
//!
//! ```xml
//! <ErrorResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
//!   <Error>
//!     <Type>Sender</Type>
//!     <Code>MessageRejected</Code>
//!     <Message>Email address is not verified.</Message>
//!   </Error>
//!   <RequestId>a1b2c3</RequestId>
//! </ErrorResponse>
//! ```
//!
//! Gateways in front of the service sometimes answer with the JSON shape used
//! by newer AWS APIs (`{"__type": "...", "message": "..."}`), so both are
//! recognised.

use serde::{Deserialize, Serialize};

use crate::document::Document;

/// Structured view of an AWS error body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AwsErrorResponse {
    /// Fault side reported by the service (`Sender` or `Receiver`).
    pub error_type: Option<String>,

    /// The AWS error code, with any namespace prefix stripped.
    pub code: String,

    /// Human-readable error message.
    pub message: Option<String>,

    /// AWS request ID for debugging and support.
    pub request_id: Option<String>,
}

/// Extract the AWS error envelope from a parsed error body.
///
/// Returns `None` when the document carries no recognisable error code.
///
/// # Examples
///
/// ```rust
/// use integrations_aws_ses_classic::error::parse_error_document;
/// use serde_json::json;
///
/// let body = json!({"__type": "com.amazon.coral.service#Throttling", "message": "Rate exceeded"});
/// let error = parse_error_document(&body).unwrap();
/// assert_eq!(error.code, "Throttling");
/// assert_eq!(error.message.as_deref(), Some("Rate exceeded"));
/// ```
pub fn parse_error_document(doc: &Document) -> Option<AwsErrorResponse> {
    if let Some(envelope) = doc.get("ErrorResponse") {
        let error = envelope.get("Error")?;
        return Some(AwsErrorResponse {
            error_type: text(error, &["Type"]),
            code: text(error, &["Code"])?,
            message: text(error, &["Message"]),
            request_id: text(envelope, &["RequestId"]),
        });
    }

    // Bare <Error> root, as returned by some proxies.
    if let Some(error) = doc.get("Error") {
        return Some(AwsErrorResponse {
            error_type: text(error, &["Type"]),
            code: text(error, &["Code"])?,
            message: text(error, &["Message"]),
            request_id: text(error, &["RequestId"]).or_else(|| text(doc, &["RequestId"])),
        });
    }

    let code = text(doc, &["__type", "code", "Code"])?;
    Some(AwsErrorResponse {
        error_type: None,
        code: strip_namespace(&code).to_string(),
        message: text(doc, &["message", "Message"]),
        request_id: text(doc, &["requestId", "RequestId"]),
    })
}

fn text(doc: &Document, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| doc.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

// "com.amazon.coral.service#MessageRejected" -> "MessageRejected"
fn strip_namespace(code: &str) -> &str {
    match code.rfind('#') {
        Some(pos) => &code[pos + 1..],
        None => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_xml_envelope() {
        let doc = json!({
            "ErrorResponse": {
                "@xmlns": "http://ses.amazonaws.com/doc/2010-12-01/",
                "Error": {
                    "Type": "Sender",
                    "Code": "InvalidParameterValue",
                    "Message": "Missing final '@domain'"
                },
                "RequestId": "req-1"
            }
        });

        let error = parse_error_document(&doc).unwrap();
        assert_eq!(error.error_type.as_deref(), Some("Sender"));
        assert_eq!(error.code, "InvalidParameterValue");
        assert_eq!(error.message.as_deref(), Some("Missing final '@domain'"));
        assert_eq!(error.request_id.as_deref(), Some("req-1"));
    }

    #[test]
    fn test_bare_error_root() {
        let doc = json!({"Error": {"Code": "AccessDenied", "Message": "nope", "RequestId": "r"}});

        let error = parse_error_document(&doc).unwrap();
        assert_eq!(error.code, "AccessDenied");
        assert_eq!(error.request_id.as_deref(), Some("r"));
    }

    #[test]
    fn test_json_shape_strips_namespace() {
        let doc = json!({
            "__type": "com.amazon.coral.service#MessageRejected",
            "message": "Email address is not verified",
            "requestId": "abc"
        });

        let error = parse_error_document(&doc).unwrap();
        assert_eq!(error.code, "MessageRejected");
        assert_eq!(error.request_id.as_deref(), Some("abc"));
        assert_eq!(error.error_type, None);
    }

    #[test]
    fn test_unrecognised_bodies() {
        assert_eq!(parse_error_document(&json!("Service Unavailable")), None);
        assert_eq!(parse_error_document(&Document::Null), None);
        assert_eq!(
            parse_error_document(&json!({"ErrorResponse": {"RequestId": "x"}})),
            None
        );
    }
}
