//! Email sending operations.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::sync::Arc;
use tracing::instrument;

use super::{invoke, SesService};
use crate::builders::SendEmailRequest;
use crate::document::Document;
use crate::error::SesResult;
use crate::http::HttpClient;
use crate::operations::{SEND_EMAIL, SEND_HTML_EMAIL, SEND_RAW_EMAIL, SEND_TEXT_EMAIL};

/// Service for sending email.
///
/// Message contents are never recorded in tracing spans.
#[derive(Clone)]
pub struct EmailService {
    http_client: Arc<dyn HttpClient>,
}

impl EmailService {
    /// Create a new email service.
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self { http_client }
    }

    /// Send an email described by caller-supplied parameters.
    ///
    /// Returns the `SendEmailResponse` element; the message ID is under
    /// `SendEmailResult.MessageId`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use integrations_aws_ses_classic::builders::EmailBuilder;
    /// use integrations_aws_ses_classic::SesClient;
    ///
    /// # async fn example(client: SesClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let request = EmailBuilder::new()
    ///     .from("sender@example.com")
    ///     .to("a@example.com")
    ///     .to("b@example.com")
    ///     .subject("Release notes")
    ///     .text("See attached")
    ///     .build()?;
    ///
    /// let response = client.emails().send_email(request).await?;
    /// println!("{}", response["SendEmailResult"]["MessageId"]);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip_all, fields(operation = SEND_EMAIL.name))]
    pub async fn send_email(&self, request: SendEmailRequest) -> SesResult<Document> {
        invoke(self.http_client.as_ref(), &SEND_EMAIL, request.into_params()).await
    }

    /// Send a plain-text email to a single recipient.
    #[instrument(skip_all, fields(operation = SEND_TEXT_EMAIL.name))]
    pub async fn send_text_email(
        &self,
        to: &str,
        subject: &str,
        text: &str,
        from: &str,
    ) -> SesResult<Document> {
        let op = &SEND_TEXT_EMAIL;
        invoke(self.http_client.as_ref(), op, op.bind(&[to, subject, text, from])).await
    }

    /// Send an HTML email to a single recipient.
    #[instrument(skip_all, fields(operation = SEND_HTML_EMAIL.name))]
    pub async fn send_html_email(
        &self,
        to: &str,
        subject: &str,
        html: &str,
        from: &str,
    ) -> SesResult<Document> {
        let op = &SEND_HTML_EMAIL;
        invoke(self.http_client.as_ref(), op, op.bind(&[to, subject, html, from])).await
    }

    /// Send a complete MIME message, headers included.
    ///
    /// The message is base64-encoded into `RawMessage.Data`. Returns the
    /// `SendRawEmailResponse` element.
    #[instrument(skip_all, fields(operation = SEND_RAW_EMAIL.name, size = raw_message.as_ref().len()))]
    pub async fn send_raw_email(&self, raw_message: impl AsRef<[u8]>) -> SesResult<Document> {
        let op = &SEND_RAW_EMAIL;
        let data = STANDARD.encode(raw_message.as_ref());
        invoke(self.http_client.as_ref(), op, op.bind(&[data.as_str()])).await
    }
}

impl SesService for EmailService {
    fn http_client(&self) -> &Arc<dyn HttpClient> {
        &self.http_client
    }
}
