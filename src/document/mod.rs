//! Parsed response bodies.
//!
//! Every response body is turned into a [`Document`], a `serde_json::Value`
//! tree, regardless of the wire format. The format is chosen from the
//! response's declared `Content-Type`:
//!
//! - `text/xml`, `application/xml` and `+xml` types are converted element by
//!   element (see [`xml`])
//! - `application/json` and `+json` types are parsed with `serde_json`
//! - anything else is kept as the raw body text
//!
//! Operations then pull one nested field out of the document with
//! [`extract`].

pub mod xml;

use crate::error::{SesError, SesResult};

/// A parsed response body.
///
/// Callers who want typed access can feed the value to
/// `serde_json::from_value`.
pub type Document = serde_json::Value;

/// Body format, derived from a declared content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// XML body.
    Xml,
    /// JSON body.
    Json,
    /// Anything else; the body is kept as text.
    Plain,
}

impl Format {
    /// Pick the format for a `Content-Type` header value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use integrations_aws_ses_classic::document::Format;
    ///
    /// assert_eq!(Format::from_content_type(Some("text/xml")), Format::Xml);
    /// assert_eq!(Format::from_content_type(Some("application/json; charset=utf-8")), Format::Json);
    /// assert_eq!(Format::from_content_type(Some("text/html")), Format::Plain);
    /// assert_eq!(Format::from_content_type(None), Format::Plain);
    /// ```
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        let Some(mime) = content_type.and_then(|ct| ct.trim().parse::<mime::Mime>().ok()) else {
            return Format::Plain;
        };

        let subtype = mime.subtype().as_str();
        let suffix = mime.suffix().map(|s| s.as_str());
        if subtype == "xml" || suffix == Some("xml") {
            Format::Xml
        } else if subtype == "json" || suffix == Some("json") || subtype.starts_with("x-amz-json") {
            Format::Json
        } else {
            Format::Plain
        }
    }
}

/// Parse a body in the given format.
///
/// A body that is empty or only whitespace parses to `Document::Null` in
/// every format.
pub fn parse(format: Format, body: &[u8]) -> SesResult<Document> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Document::Null);
    }

    match format {
        Format::Xml => {
            let text = std::str::from_utf8(body)
                .map_err(|e| SesError::parse(format!("XML body is not valid UTF-8: {}", e)))?;
            xml::to_document(text)
        }
        Format::Json => Ok(serde_json::from_slice(body)?),
        Format::Plain => Ok(Document::String(
            String::from_utf8_lossy(body).into_owned(),
        )),
    }
}

/// Return a copy of the field at `path`.
///
/// # Errors
///
/// Returns [`SesError::MissingField`] with the dotted path when any segment
/// is absent.
///
/// # Examples
///
/// ```rust
/// use integrations_aws_ses_classic::document::extract;
/// use serde_json::json;
///
/// let doc = json!({"GetSendQuotaResponse": {"GetSendQuotaResult": {"Max24HourSend": "200.0"}}});
/// let result = extract(&doc, &["GetSendQuotaResponse", "GetSendQuotaResult"])?;
/// assert_eq!(result["Max24HourSend"], "200.0");
///
/// assert!(extract(&doc, &["SendEmailResponse"]).is_err());
/// # Ok::<(), integrations_aws_ses_classic::SesError>(())
/// ```
pub fn extract(doc: &Document, path: &[&str]) -> SesResult<Document> {
    path.iter()
        .try_fold(doc, |node, key| node.get(*key))
        .cloned()
        .ok_or_else(|| SesError::MissingField {
            path: path.join("."),
        })
}
