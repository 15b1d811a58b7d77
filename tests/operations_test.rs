//! Integration tests for every SES operation against a mock transport.

use integrations_aws_ses_classic::builders::{EmailBuilder, SendEmailRequest};
use integrations_aws_ses_classic::mocks::{MockResponse, MockTransport, TestFixtures};
use integrations_aws_ses_classic::{Document, SesClient, SesError, SesResult};
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
enum Call {
    VerifyEmailAddress,
    ListVerifiedEmailAddresses,
    DeleteVerifiedEmailAddress,
    GetSendQuota,
    GetSendStatistics,
    SendEmail,
    SendTextEmail,
    SendHtmlEmail,
    SendRawEmail,
}

impl Call {
    async fn run(self, client: &SesClient) -> SesResult<Document> {
        match self {
            Call::VerifyEmailAddress => client.verify_email_address("user@example.com").await,
            Call::ListVerifiedEmailAddresses => client.list_verified_email_addresses().await,
            Call::DeleteVerifiedEmailAddress => {
                client.delete_verified_email_address("user@example.com").await
            }
            Call::GetSendQuota => client.get_send_quota().await,
            Call::GetSendStatistics => client.get_send_statistics().await,
            Call::SendEmail => {
                let request = EmailBuilder::new()
                    .from("from@example.com")
                    .to("to@example.com")
                    .subject("Subject")
                    .text("Body")
                    .build()?;
                client.send_email(request).await
            }
            Call::SendTextEmail => {
                client
                    .send_text_email("to@example.com", "Subject", "Body", "from@example.com")
                    .await
            }
            Call::SendHtmlEmail => {
                client
                    .send_html_email("to@example.com", "Subject", "<b>Body</b>", "from@example.com")
                    .await
            }
            Call::SendRawEmail => {
                client
                    .send_raw_email("From: from@example.com\r\nTo: to@example.com\r\n\r\nBody")
                    .await
            }
        }
    }

    fn action(self) -> &'static str {
        match self {
            Call::VerifyEmailAddress => "VerifyEmailAddress",
            Call::ListVerifiedEmailAddresses => "ListVerifiedEmailAddresses",
            Call::DeleteVerifiedEmailAddress => "DeleteVerifiedEmailAddress",
            Call::GetSendQuota => "GetSendQuota",
            Call::GetSendStatistics => "GetSendStatistics",
            Call::SendEmail | Call::SendTextEmail | Call::SendHtmlEmail => "SendEmail",
            Call::SendRawEmail => "SendRawEmail",
        }
    }

    fn success_body(self) -> String {
        match self {
            Call::VerifyEmailAddress => TestFixtures::verify_email_address_xml(),
            Call::ListVerifiedEmailAddresses => {
                TestFixtures::list_verified_email_addresses_xml(&["a@example.com", "b@example.com"])
            }
            Call::DeleteVerifiedEmailAddress => TestFixtures::delete_verified_email_address_xml(),
            Call::GetSendQuota => TestFixtures::get_send_quota_xml(),
            Call::GetSendStatistics => TestFixtures::get_send_statistics_xml(),
            Call::SendEmail | Call::SendTextEmail | Call::SendHtmlEmail => {
                TestFixtures::send_email_xml("msg-1")
            }
            Call::SendRawEmail => TestFixtures::send_raw_email_xml("msg-1"),
        }
    }
}

fn client_with(transport: Arc<MockTransport>) -> SesClient {
    SesClient::builder()
        .credentials("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY")
        .transport(transport)
        .build()
        .unwrap()
}

fn form_params(body: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect()
}

fn request_id_metadata() -> Document {
    json!({"ResponseMetadata": {"RequestId": "d5964849-c866-11e0-9beb-01a62d68c57f"}})
}

#[rstest]
#[case::verify(Call::VerifyEmailAddress, request_id_metadata())]
#[case::list(
    Call::ListVerifiedEmailAddresses,
    json!({"VerifiedEmailAddresses": {"member": ["a@example.com", "b@example.com"]}})
)]
#[case::delete(Call::DeleteVerifiedEmailAddress, request_id_metadata())]
#[case::send_email(
    Call::SendEmail,
    json!({
        "@xmlns": "http://ses.amazonaws.com/doc/2010-12-01/",
        "SendEmailResult": {"MessageId": "msg-1"},
        "ResponseMetadata": {"RequestId": "d5964849-c866-11e0-9beb-01a62d68c57f"}
    })
)]
#[case::send_raw_email(
    Call::SendRawEmail,
    json!({
        "@xmlns": "http://ses.amazonaws.com/doc/2010-12-01/",
        "SendRawEmailResult": {"MessageId": "msg-1"},
        "ResponseMetadata": {"RequestId": "d5964849-c866-11e0-9beb-01a62d68c57f"}
    })
)]
#[tokio::test]
async fn test_operation_returns_documented_field(#[case] call: Call, #[case] expected: Document) {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok_xml(
        call.success_body(),
    )]));
    let client = client_with(transport.clone());

    let mut result = call.run(&client).await.unwrap();

    // The xmlns attribute is only present on the root element.
    if let Some(map) = result.as_object_mut() {
        if !expected.as_object().map_or(false, |e| e.contains_key("@xmlns")) {
            map.remove("@xmlns");
        }
    }
    assert_eq!(result, expected);
    assert_eq!(transport.request_count(), 1);
}

#[rstest]
#[case::quota(Call::GetSendQuota, "GetSendQuotaResult")]
#[case::statistics(Call::GetSendStatistics, "GetSendStatisticsResult")]
#[case::text(Call::SendTextEmail, "SendEmailResult")]
#[case::html(Call::SendHtmlEmail, "SendEmailResult")]
#[tokio::test]
async fn test_operation_returns_response_element(#[case] call: Call, #[case] child: &str) {
    let transport = Arc::new(MockTransport::with_default(MockResponse::ok_xml(
        call.success_body(),
    )));
    let client = client_with(transport);

    let result = call.run(&client).await.unwrap();

    assert!(result.get(child).is_some(), "{:?} lacks {}: {}", call, child, result);
    assert!(result.get("ResponseMetadata").is_some());
}

#[rstest]
#[case(Call::VerifyEmailAddress)]
#[case(Call::ListVerifiedEmailAddresses)]
#[case(Call::DeleteVerifiedEmailAddress)]
#[case(Call::GetSendQuota)]
#[case(Call::GetSendStatistics)]
#[case(Call::SendEmail)]
#[case(Call::SendTextEmail)]
#[case(Call::SendHtmlEmail)]
#[case(Call::SendRawEmail)]
#[tokio::test]
async fn test_operation_signs_and_posts_action_first(#[case] call: Call) {
    let transport = Arc::new(MockTransport::with_default(MockResponse::ok_xml(
        call.success_body(),
    )));
    let client = client_with(transport.clone());

    call.run(&client).await.unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, http::Method::POST);
    assert_eq!(request.url, "https://email.us-east-1.amazonaws.com/");
    assert!(request.header("date").unwrap().ends_with(" GMT"));
    assert!(request
        .header("x-amzn-authorization")
        .unwrap()
        .starts_with("AWS3-HTTPS AWSAccessKeyId=AKIDEXAMPLE,Algorithm=HMACSHA256,Signature="));

    let params = form_params(&request.body_string());
    assert_eq!(params[0], ("Action".to_string(), call.action().to_string()));
}

#[rstest]
#[case(Call::VerifyEmailAddress, 400)]
#[case(Call::ListVerifiedEmailAddresses, 403)]
#[case(Call::DeleteVerifiedEmailAddress, 400)]
#[case(Call::GetSendQuota, 500)]
#[case(Call::GetSendStatistics, 503)]
#[case(Call::SendEmail, 400)]
#[case(Call::SendTextEmail, 400)]
#[case(Call::SendHtmlEmail, 400)]
#[case(Call::SendRawEmail, 400)]
#[tokio::test]
async fn test_operation_failure_exposes_error_body(#[case] call: Call, #[case] status: u16) {
    let transport = Arc::new(MockTransport::with_default(MockResponse::error_xml(
        status,
        "Sender",
        "MessageRejected",
        "Email address is not verified.",
    )));
    let client = client_with(transport);

    let err = call.run(&client).await.unwrap_err();

    assert!(matches!(err, SesError::UnexpectedStatus { .. }));
    assert_eq!(err.status().map(|s| s.as_u16()), Some(status));
    assert_eq!(err.error_code().as_deref(), Some("MessageRejected"));
    assert_eq!(
        err.error_body()
            .and_then(|b| b.pointer("/ErrorResponse/Error/Message"))
            .and_then(|m| m.as_str()),
        Some("Email address is not verified.")
    );
}

#[tokio::test]
async fn test_success_status_other_than_expected_is_failure() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::ok_xml(
        TestFixtures::get_send_quota_xml(),
    )));
    transport.queue_response(MockResponse::new(204, ""));
    let client = client_with(transport);

    let err = client.get_send_quota().await.unwrap_err();
    assert_eq!(err.status(), Some(http::StatusCode::NO_CONTENT));
    assert_eq!(err.error_body(), Some(&Document::Null));
}

#[tokio::test]
async fn test_non_xml_error_body_is_raw_text() {
    let transport = Arc::new(MockTransport::with_default(
        MockResponse::new(502, "Bad Gateway").with_header("content-type", "text/html"),
    ));
    let client = client_with(transport);

    let err = client.list_verified_email_addresses().await.unwrap_err();
    assert_eq!(err.error_body(), Some(&json!("Bad Gateway")));
    assert_eq!(err.error_code(), None);
}

#[tokio::test]
async fn test_send_text_email_body() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::ok_xml(
        TestFixtures::send_email_xml("msg-1"),
    )));
    let client = client_with(transport.clone());

    client
        .send_text_email("a@b.com", "Hi", "Body", "from@b.com")
        .await
        .unwrap();

    let params = form_params(&transport.last_request().unwrap().body_string());
    let expected: Vec<(String, String)> = [
        ("Action", "SendEmail"),
        ("Destination.ToAddresses.member.1", "a@b.com"),
        ("Message.Subject.Data", "Hi"),
        ("Message.Body.Text.Data", "Body"),
        ("Source", "from@b.com"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    assert_eq!(params, expected);
}

#[tokio::test]
async fn test_send_html_email_body() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::ok_xml(
        TestFixtures::send_email_xml("msg-1"),
    )));
    let client = client_with(transport.clone());

    client
        .send_html_email("a@b.com", "Hi", "<p>Body & more</p>", "from@b.com")
        .await
        .unwrap();

    let params = form_params(&transport.last_request().unwrap().body_string());
    assert!(params.contains(&("Message.Body.Html.Data".to_string(), "<p>Body & more</p>".to_string())));
    assert!(!params.iter().any(|(k, _)| k == "Message.Body.Text.Data"));
}

#[tokio::test]
async fn test_list_verified_sends_only_action() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::ok_xml(
        TestFixtures::list_verified_email_addresses_xml(&[]),
    )));
    let client = client_with(transport.clone());

    let result = client.list_verified_email_addresses().await.unwrap();

    assert_eq!(
        transport.last_request().unwrap().body_string(),
        "Action=ListVerifiedEmailAddresses"
    );
    assert_eq!(result, json!({"VerifiedEmailAddresses": null}));
}

#[tokio::test]
async fn test_send_raw_email_is_base64() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::ok_xml(
        TestFixtures::send_raw_email_xml("raw-1"),
    )));
    let client = client_with(transport.clone());

    let result = client.send_raw_email(b"Subject: x\r\n\r\nhi".to_vec()).await.unwrap();

    let params = form_params(&transport.last_request().unwrap().body_string());
    assert_eq!(
        params[1],
        ("RawMessage.Data".to_string(), "U3ViamVjdDogeA0KDQpoaQ==".to_string())
    );
    assert_eq!(result["SendRawEmailResult"]["MessageId"], "raw-1");
}

#[tokio::test]
async fn test_send_email_with_builder_params() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::ok_xml(
        TestFixtures::send_email_xml("msg-2"),
    )));
    let client = client_with(transport.clone());

    let request = EmailBuilder::new()
        .from("from@example.com")
        .to("one@example.com")
        .to("two@example.com")
        .bcc("hidden@example.com")
        .subject("Hello")
        .html("<p>Hi</p>")
        .build()
        .unwrap();
    let result = client.emails().send_email(request).await.unwrap();

    let params = form_params(&transport.last_request().unwrap().body_string());
    assert_eq!(params[0].1, "SendEmail");
    assert!(params.contains(&(
        "Destination.ToAddresses.member.2".to_string(),
        "two@example.com".to_string()
    )));
    assert!(params.contains(&(
        "Destination.BccAddresses.member.1".to_string(),
        "hidden@example.com".to_string()
    )));
    assert_eq!(result["SendEmailResult"]["MessageId"], "msg-2");
}

#[tokio::test]
async fn test_missing_result_field() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::ok_xml(
        "<SomethingElse><X>1</X></SomethingElse>",
    )));
    let client = client_with(transport);

    match client.get_send_quota().await.unwrap_err() {
        SesError::MissingField { path } => assert_eq!(path, "GetSendQuotaResponse"),
        other => panic!("Expected MissingField, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_success_body() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::ok_xml(
        "<GetSendQuotaResponse><GetSendQuotaResult>",
    )));
    let client = client_with(transport);

    let err = client.get_send_quota().await.unwrap_err();
    assert!(matches!(err, SesError::Parse { .. }));
}

#[tokio::test]
async fn test_json_success_body() {
    let transport = Arc::new(MockTransport::with_default(
        MockResponse::new(200, r#"{"GetSendQuotaResponse": {"GetSendQuotaResult": {"MaxSendRate": 14.0}}}"#)
            .with_header("content-type", "application/json"),
    ));
    let client = client_with(transport);

    let result = client.get_send_quota().await.unwrap();
    assert_eq!(result["GetSendQuotaResult"]["MaxSendRate"], 14.0);
}

#[test]
fn test_builder_validation_error() {
    let err: SesError = EmailBuilder::new()
        .to("to@example.com")
        .subject("Hi")
        .text("Body")
        .build()
        .unwrap_err()
        .into();

    match err {
        SesError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("from")),
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_send_email_ignores_caller_action() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::ok_xml(
        TestFixtures::send_email_xml("msg-3"),
    )));
    let client = client_with(transport.clone());

    let request = SendEmailRequest::from_params([("Action", "SendRawEmail"), ("Source", "a@b")]);
    client.send_email(request).await.unwrap();

    assert_eq!(
        transport.last_request().unwrap().body_string(),
        "Action=SendEmail&Source=a%40b"
    );
}
