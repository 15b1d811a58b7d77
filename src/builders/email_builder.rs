//! Email builder for constructing `SendEmail` requests.

use crate::builders::BuilderError;

const ACTION_PARAM: &str = "Action";

/// Parameters for a `SendEmail` call.
///
/// Built with [`EmailBuilder`], or taken verbatim from caller-supplied
/// query parameters with [`SendEmailRequest::from_params`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendEmailRequest {
    params: Vec<(String, String)>,
}

impl SendEmailRequest {
    /// Wrap caller-supplied `SendEmail` parameters without validation.
    ///
    /// An `Action` key is dropped; the operation always supplies its own.
    ///
    /// ```rust
    /// use integrations_aws_ses_classic::builders::SendEmailRequest;
    ///
    /// let request = SendEmailRequest::from_params([
    ///     ("Source", "me@example.com"),
    ///     ("Destination.ToAddresses.member.1", "you@example.com"),
    ///     ("Message.Subject.Data", "Hi"),
    ///     ("Message.Body.Text.Data", "Hello"),
    /// ]);
    /// assert_eq!(request.params().len(), 4);
    /// ```
    pub fn from_params<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            params: params
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .filter(|(k, _)| k != ACTION_PARAM)
                .collect(),
        }
    }

    /// The query parameters, in order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Consume the request, returning its parameters.
    pub fn into_params(self) -> Vec<(String, String)> {
        self.params
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Builder for [`SendEmailRequest`].
///
/// # Examples
///
/// ```rust
/// use integrations_aws_ses_classic::builders::EmailBuilder;
///
/// let request = EmailBuilder::new()
///     .from("sender@example.com")
///     .to("recipient1@example.com")
///     .to("recipient2@example.com")
///     .cc("cc@example.com")
///     .reply_to("replyto@example.com")
///     .subject("Meeting Invitation")
///     .html("<p>You're invited to our meeting</p>")
///     .charset("UTF-8")
///     .build()?;
///
/// assert_eq!(request.get("Destination.ToAddresses.member.2"), Some("recipient2@example.com"));
/// assert_eq!(request.get("Message.Body.Html.Charset"), Some("UTF-8"));
/// # Ok::<(), integrations_aws_ses_classic::builders::BuilderError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct EmailBuilder {
    from: Option<String>,
    to: Vec<String>,
    cc: Vec<String>,
    bcc: Vec<String>,
    reply_to: Vec<String>,
    return_path: Option<String>,
    subject: Option<String>,
    text_body: Option<String>,
    html_body: Option<String>,
    charset: Option<String>,
}

impl EmailBuilder {
    /// Create a new email builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sender address (`Source`). Required.
    pub fn from(mut self, email: impl Into<String>) -> Self {
        self.from = Some(email.into());
        self
    }

    /// Add a "To" recipient. Can be called repeatedly.
    pub fn to(mut self, email: impl Into<String>) -> Self {
        self.to.push(email.into());
        self
    }

    /// Add a "CC" recipient.
    pub fn cc(mut self, email: impl Into<String>) -> Self {
        self.cc.push(email.into());
        self
    }

    /// Add a "BCC" recipient.
    pub fn bcc(mut self, email: impl Into<String>) -> Self {
        self.bcc.push(email.into());
        self
    }

    /// Add a reply-to address.
    pub fn reply_to(mut self, email: impl Into<String>) -> Self {
        self.reply_to.push(email.into());
        self
    }

    /// Set the address bounces are returned to.
    pub fn return_path(mut self, email: impl Into<String>) -> Self {
        self.return_path = Some(email.into());
        self
    }

    /// Set the subject. Required.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the plain-text body.
    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.text_body = Some(body.into());
        self
    }

    /// Set the HTML body.
    pub fn html(mut self, body: impl Into<String>) -> Self {
        self.html_body = Some(body.into());
        self
    }

    /// Set the charset declared for the subject and every body part.
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    /// Build the [`SendEmailRequest`].
    ///
    /// # Errors
    ///
    /// - [`BuilderError::MissingField`] if `from`, every recipient list,
    ///   `subject`, or both bodies are absent
    /// - [`BuilderError::InvalidAddress`] for an empty address or an address
    ///   containing a line break
    pub fn build(self) -> Result<SendEmailRequest, BuilderError> {
        let from = self.from.ok_or_else(|| BuilderError::missing_field("from"))?;
        check_address("from", &from)?;

        if self.to.is_empty() && self.cc.is_empty() && self.bcc.is_empty() {
            return Err(BuilderError::missing_field("recipients"));
        }

        let subject = self
            .subject
            .ok_or_else(|| BuilderError::missing_field("subject"))?;

        if self.text_body.is_none() && self.html_body.is_none() {
            return Err(BuilderError::missing_field("body"));
        }

        let mut params = Vec::new();
        for (field, key, addresses) in [
            ("to", "Destination.ToAddresses", &self.to),
            ("cc", "Destination.CcAddresses", &self.cc),
            ("bcc", "Destination.BccAddresses", &self.bcc),
            ("reply_to", "ReplyToAddresses", &self.reply_to),
        ] {
            push_members(&mut params, field, key, addresses)?;
        }

        let charset = self.charset.as_deref();
        push_content(&mut params, "Message.Subject", subject, charset);
        if let Some(text) = self.text_body {
            push_content(&mut params, "Message.Body.Text", text, charset);
        }
        if let Some(html) = self.html_body {
            push_content(&mut params, "Message.Body.Html", html, charset);
        }

        if let Some(return_path) = self.return_path {
            check_address("return_path", &return_path)?;
            params.push(("ReturnPath".to_string(), return_path));
        }
        params.push(("Source".to_string(), from));

        Ok(SendEmailRequest { params })
    }
}

fn check_address(field: &str, address: &str) -> Result<(), BuilderError> {
    if address.trim().is_empty() {
        return Err(BuilderError::invalid_address(field, "address must not be empty"));
    }
    if address.contains(['\r', '\n']) {
        return Err(BuilderError::invalid_address(
            field,
            "address must not contain line breaks",
        ));
    }
    Ok(())
}

// Query lists are 1-based: Key.member.1, Key.member.2, ...
fn push_members(
    params: &mut Vec<(String, String)>,
    field: &str,
    key: &str,
    addresses: &[String],
) -> Result<(), BuilderError> {
    for (i, address) in addresses.iter().enumerate() {
        check_address(field, address)?;
        params.push((format!("{}.member.{}", key, i + 1), address.clone()));
    }
    Ok(())
}

fn push_content(
    params: &mut Vec<(String, String)>,
    prefix: &str,
    data: String,
    charset: Option<&str>,
) {
    params.push((format!("{}.Data", prefix), data));
    if let Some(charset) = charset {
        params.push((format!("{}.Charset", prefix), charset.to_string()));
    }
}
