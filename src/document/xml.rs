//! XML to [`Document`] conversion.
//!
//! The conversion mirrors how query-protocol responses are usually consumed:
//!
//! - the root element becomes a single-key object: `{"RootName": ...}`
//! - an element with only text becomes a string
//! - an empty element without attributes becomes `null`
//! - an element with children becomes an object keyed by child name; a name
//!   that repeats among siblings becomes an array in document order
//! - attributes are kept under `@name` keys, and text mixed with children or
//!   attributes under `#text`
//!
//! ```text
//! <GetSendQuotaResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
//!   <GetSendQuotaResult>
//!     <Max24HourSend>200.0</Max24HourSend>
//!   </GetSendQuotaResult>
//! </GetSendQuotaResponse>
//! ```
//!
//! becomes
//!
//! ```text
//! {"GetSendQuotaResponse": {
//!     "@xmlns": "http://ses.amazonaws.com/doc/2010-12-01/",
//!     "GetSendQuotaResult": {"Max24HourSend": "200.0"}}}
//! ```

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::Map;

use super::Document;
use crate::error::{SesError, SesResult};

/// Convert an XML string into a [`Document`].
///
/// # Errors
///
/// Returns [`SesError::Parse`] for malformed XML, unbalanced tags, more than
/// one root element or text outside the root element.
///
/// # Examples
///
/// ```rust
/// use integrations_aws_ses_classic::document::xml::to_document;
/// use serde_json::json;
///
/// let doc = to_document("<A><B>1</B><B>2</B><C/></A>")?;
/// assert_eq!(doc, json!({"A": {"B": ["1", "2"], "C": null}}));
/// # Ok::<(), integrations_aws_ses_classic::SesError>(())
/// ```
pub fn to_document(xml: &str) -> SesResult<Document> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<(String, Document)> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                stack.push(Element::open(&e)?);
            }
            Event::Empty(e) => {
                let element = Element::open(&e)?;
                close(element, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| SesError::parse("closing tag without matching open tag"))?;
                close(element, &mut stack, &mut root)?;
            }
            Event::Text(e) => {
                let text = e.unescape()?;
                push_text(&mut stack, &text)?;
            }
            Event::CData(e) => {
                let inner = e.into_inner();
                push_text(&mut stack, &String::from_utf8_lossy(&inner))?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions and doctypes
            // carry no data.
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(SesError::parse(format!(
            "unexpected end of document inside <{}>",
            open.name
        )));
    }

    Ok(match root {
        Some((name, value)) => {
            let mut map = Map::new();
            map.insert(name, value);
            Document::Object(map)
        }
        None => Document::Null,
    })
}

fn push_text(stack: &mut [Element], text: &str) -> SesResult<()> {
    match stack.last_mut() {
        Some(element) => {
            element.text.push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(SesError::parse("text outside of the root element")),
    }
}

fn close(
    element: Element,
    stack: &mut [Element],
    root: &mut Option<(String, Document)>,
) -> SesResult<()> {
    let name = element.name.clone();
    let value = element.into_document();

    match stack.last_mut() {
        Some(parent) => parent.children.push((name, value)),
        None if root.is_some() => {
            return Err(SesError::parse(format!(
                "second root element <{}>",
                name
            )))
        }
        None => *root = Some((name, value)),
    }
    Ok(())
}

/// An element whose closing tag has not been seen yet.
#[derive(Debug)]
struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<(String, Document)>,
    text: String,
}

impl Element {
    fn open(start: &BytesStart<'_>) -> SesResult<Self> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
            text: String::new(),
        })
    }

    fn into_document(self) -> Document {
        if self.children.is_empty() && self.attributes.is_empty() {
            return if self.text.is_empty() {
                Document::Null
            } else {
                Document::String(self.text)
            };
        }

        let mut map = Map::new();
        for (key, value) in self.attributes {
            map.insert(format!("@{}", key), Document::String(value));
        }
        for (name, value) in self.children {
            match map.get_mut(&name) {
                Some(Document::Array(items)) => items.push(value),
                Some(existing) => {
                    let first = existing.take();
                    *existing = Document::Array(vec![first, value]);
                }
                None => {
                    map.insert(name, value);
                }
            }
        }
        if !self.text.is_empty() {
            map.insert("#text".to_string(), Document::String(self.text));
        }
        Document::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_verified_addresses_envelope() {
        let xml = r#"<?xml version="1.0"?>
<ListVerifiedEmailAddressesResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
  <ListVerifiedEmailAddressesResult>
    <VerifiedEmailAddresses>
      <member>a@example.com</member>
      <member>b@example.com</member>
    </VerifiedEmailAddresses>
  </ListVerifiedEmailAddressesResult>
  <ResponseMetadata>
    <RequestId>3dd50e97-826b-11e0-8a5a-6b6a6e2a1c27</RequestId>
  </ResponseMetadata>
</ListVerifiedEmailAddressesResponse>"#;

        let doc = to_document(xml).unwrap();
        assert_eq!(
            doc,
            json!({
                "ListVerifiedEmailAddressesResponse": {
                    "@xmlns": "http://ses.amazonaws.com/doc/2010-12-01/",
                    "ListVerifiedEmailAddressesResult": {
                        "VerifiedEmailAddresses": {
                            "member": ["a@example.com", "b@example.com"]
                        }
                    },
                    "ResponseMetadata": {
                        "RequestId": "3dd50e97-826b-11e0-8a5a-6b6a6e2a1c27"
                    }
                }
            })
        );
    }

    #[test]
    fn test_single_member_stays_scalar() {
        let doc = to_document("<R><L><member>only</member></L></R>").unwrap();
        assert_eq!(doc, json!({"R": {"L": {"member": "only"}}}));
    }

    #[test]
    fn test_three_repeats_accumulate() {
        let doc = to_document("<R><m>1</m><m>2</m><m>3</m></R>").unwrap();
        assert_eq!(doc, json!({"R": {"m": ["1", "2", "3"]}}));
    }

    #[test]
    fn test_entities_and_cdata() {
        let doc = to_document("<R><a>Tom &amp; Jerry</a><b><![CDATA[<raw>]]></b></R>").unwrap();
        assert_eq!(doc, json!({"R": {"a": "Tom & Jerry", "b": "<raw>"}}));
    }

    #[test]
    fn test_attributes_with_text() {
        let doc = to_document(r#"<R><v unit="s">5</v></R>"#).unwrap();
        assert_eq!(doc, json!({"R": {"v": {"@unit": "s", "#text": "5"}}}));
    }

    #[test]
    fn test_empty_input_is_null() {
        assert_eq!(to_document("").unwrap(), Document::Null);
        assert_eq!(
            to_document(r#"<?xml version="1.0"?>"#).unwrap(),
            Document::Null
        );
    }

    #[test]
    fn test_malformed_documents() {
        assert!(matches!(
            to_document("<A><B></A>"),
            Err(SesError::Parse { .. })
        ));
        assert!(matches!(to_document("<A>"), Err(SesError::Parse { .. })));
        assert!(matches!(
            to_document("<A/><B/>"),
            Err(SesError::Parse { .. })
        ));
        assert!(matches!(
            to_document("stray text"),
            Err(SesError::Parse { .. })
        ));
    }
}
