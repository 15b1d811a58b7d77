//! Test doubles and canned SES responses.
//!
//! ```rust
//! use integrations_aws_ses_classic::mocks::{MockResponse, MockTransport, TestFixtures};
//! use integrations_aws_ses_classic::SesClient;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = Arc::new(MockTransport::with_default(MockResponse::ok_xml(
//!     TestFixtures::get_send_quota_xml(),
//! )));
//! let client = SesClient::builder()
//!     .credentials("AKID", "SECRET")
//!     .transport(transport.clone())
//!     .build()?;
//!
//! let quota = client.get_send_quota().await?;
//! assert_eq!(quota["GetSendQuotaResult"]["Max24HourSend"], "200.0");
//! # Ok(())
//! # }
//! ```

mod transport;

pub use transport::{MockResponse, MockTransport};

/// Request ID used in every fixture envelope.
pub const FIXTURE_REQUEST_ID: &str = "d5964849-c866-11e0-9beb-01a62d68c57f";

/// Canned SES XML envelopes.
pub struct TestFixtures;

impl TestFixtures {
    /// Envelope for `VerifyEmailAddress`.
    pub fn verify_email_address_xml() -> String {
        format!(
            r#"<VerifyEmailAddressResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
  <ResponseMetadata>
    <RequestId>{}</RequestId>
  </ResponseMetadata>
</VerifyEmailAddressResponse>"#,
            FIXTURE_REQUEST_ID
        )
    }

    /// Envelope for `ListVerifiedEmailAddresses` listing `addresses`.
    pub fn list_verified_email_addresses_xml(addresses: &[&str]) -> String {
        let members: String = addresses
            .iter()
            .map(|a| format!("\n      <member>{}</member>", a))
            .collect();
        format!(
            r#"<ListVerifiedEmailAddressesResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
  <ListVerifiedEmailAddressesResult>
    <VerifiedEmailAddresses>{}
    </VerifiedEmailAddresses>
  </ListVerifiedEmailAddressesResult>
  <ResponseMetadata>
    <RequestId>{}</RequestId>
  </ResponseMetadata>
</ListVerifiedEmailAddressesResponse>"#,
            members, FIXTURE_REQUEST_ID
        )
    }

    /// Envelope for `DeleteVerifiedEmailAddress`.
    pub fn delete_verified_email_address_xml() -> String {
        format!(
            r#"<DeleteVerifiedEmailAddressResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
  <ResponseMetadata>
    <RequestId>{}</RequestId>
  </ResponseMetadata>
</DeleteVerifiedEmailAddressResponse>"#,
            FIXTURE_REQUEST_ID
        )
    }

    /// Envelope for `GetSendQuota`.
    pub fn get_send_quota_xml() -> String {
        format!(
            r#"<GetSendQuotaResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
  <GetSendQuotaResult>
    <SentLast24Hours>127.0</SentLast24Hours>
    <Max24HourSend>200.0</Max24HourSend>
    <MaxSendRate>1.0</MaxSendRate>
  </GetSendQuotaResult>
  <ResponseMetadata>
    <RequestId>{}</RequestId>
  </ResponseMetadata>
</GetSendQuotaResponse>"#,
            FIXTURE_REQUEST_ID
        )
    }

    /// Envelope for `GetSendStatistics` with two data points.
    pub fn get_send_statistics_xml() -> String {
        format!(
            r#"<GetSendStatisticsResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
  <GetSendStatisticsResult>
    <SendDataPoints>
      <member>
        <DeliveryAttempts>8</DeliveryAttempts>
        <Timestamp>2011-08-03T19:23:00Z</Timestamp>
        <Rejects>0</Rejects>
        <Bounces>0</Bounces>
        <Complaints>0</Complaints>
      </member>
      <member>
        <DeliveryAttempts>7</DeliveryAttempts>
        <Timestamp>2011-08-03T06:53:00Z</Timestamp>
        <Rejects>0</Rejects>
        <Bounces>0</Bounces>
        <Complaints>0</Complaints>
      </member>
    </SendDataPoints>
  </GetSendStatisticsResult>
  <ResponseMetadata>
    <RequestId>{}</RequestId>
  </ResponseMetadata>
</GetSendStatisticsResponse>"#,
            FIXTURE_REQUEST_ID
        )
    }

    /// Envelope for `SendEmail` returning `message_id`.
    pub fn send_email_xml(message_id: &str) -> String {
        format!(
            r#"<SendEmailResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
  <SendEmailResult>
    <MessageId>{}</MessageId>
  </SendEmailResult>
  <ResponseMetadata>
    <RequestId>{}</RequestId>
  </ResponseMetadata>
</SendEmailResponse>"#,
            message_id, FIXTURE_REQUEST_ID
        )
    }

    /// Envelope for `SendRawEmail` returning `message_id`.
    pub fn send_raw_email_xml(message_id: &str) -> String {
        format!(
            r#"<SendRawEmailResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
  <SendRawEmailResult>
    <MessageId>{}</MessageId>
  </SendRawEmailResult>
  <ResponseMetadata>
    <RequestId>{}</RequestId>
  </ResponseMetadata>
</SendRawEmailResponse>"#,
            message_id, FIXTURE_REQUEST_ID
        )
    }

    /// SES error envelope.
    pub fn error_xml(error_type: &str, code: &str, message: &str) -> String {
        format!(
            r#"<ErrorResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
  <Error>
    <Type>{}</Type>
    <Code>{}</Code>
    <Message>{}</Message>
  </Error>
  <RequestId>{}</RequestId>
</ErrorResponse>"#,
            error_type, code, message, FIXTURE_REQUEST_ID
        )
    }
}
