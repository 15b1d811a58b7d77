//! The fixed table of classic SES operations.
//!
//! Every operation is a form-encoded `POST /` carrying an `Action` parameter.
//! An operation fixes which positional arguments map to which parameter keys,
//! the status that counts as success and the path of the one field returned
//! from the parsed response.

use http::{Method, StatusCode};

/// Static description of one remote operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// Method name on the client, used in logs.
    pub name: &'static str,
    /// Value of the `Action` parameter.
    pub action: &'static str,
    /// HTTP method.
    pub method: Method,
    /// Request path.
    pub path: &'static str,
    /// Status that counts as success.
    pub expected_status: StatusCode,
    /// Parameter keys for the positional arguments, in argument order.
    pub arg_keys: &'static [&'static str],
    /// `false` when the caller supplies extra free-form parameters.
    pub no_body: bool,
    /// Path of the returned field in the parsed response.
    pub result_path: &'static [&'static str],
}

impl Operation {
    const fn post(
        name: &'static str,
        action: &'static str,
        arg_keys: &'static [&'static str],
        no_body: bool,
        result_path: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            action,
            method: Method::POST,
            path: "/",
            expected_status: StatusCode::OK,
            arg_keys,
            no_body,
            result_path,
        }
    }

    /// Pair positional arguments with this operation's parameter keys.
    ///
    /// Extra arguments beyond the declared keys are ignored.
    ///
    /// ```
    /// use integrations_aws_ses_classic::operations::VERIFY_EMAIL_ADDRESS;
    ///
    /// let params = VERIFY_EMAIL_ADDRESS.bind(&["a@example.com"]);
    /// assert_eq!(params, vec![("EmailAddress".to_string(), "a@example.com".to_string())]);
    /// ```
    pub fn bind(&self, args: &[&str]) -> Vec<(String, String)> {
        self.arg_keys
            .iter()
            .zip(args)
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }
}

const SEND_EMAIL_RESULT: &[&str] = &["SendEmailResponse"];

/// Start verification of an email address.
pub const VERIFY_EMAIL_ADDRESS: Operation = Operation::post(
    "verify_email_address",
    "VerifyEmailAddress",
    &["EmailAddress"],
    true,
    &["VerifyEmailAddressResponse"],
);

/// List verified email addresses.
pub const LIST_VERIFIED_EMAIL_ADDRESSES: Operation = Operation::post(
    "list_verified_email_addresses",
    "ListVerifiedEmailAddresses",
    &[],
    true,
    &[
        "ListVerifiedEmailAddressesResponse",
        "ListVerifiedEmailAddressesResult",
    ],
);

/// Remove an address from the verified list.
pub const DELETE_VERIFIED_EMAIL_ADDRESS: Operation = Operation::post(
    "delete_verified_email_address",
    "DeleteVerifiedEmailAddress",
    &["EmailAddress"],
    true,
    &["DeleteVerifiedEmailAddressResponse"],
);

/// Fetch the account's sending limits.
pub const GET_SEND_QUOTA: Operation = Operation::post(
    "get_send_quota",
    "GetSendQuota",
    &[],
    true,
    &["GetSendQuotaResponse"],
);

/// Fetch sending statistics.
pub const GET_SEND_STATISTICS: Operation = Operation::post(
    "get_send_statistics",
    "GetSendStatistics",
    &[],
    true,
    &["GetSendStatisticsResponse"],
);

/// Send a structured email with caller-supplied parameters.
pub const SEND_EMAIL: Operation =
    Operation::post("send_email", "SendEmail", &[], false, SEND_EMAIL_RESULT);

/// Send a plain-text email to one recipient.
pub const SEND_TEXT_EMAIL: Operation = Operation::post(
    "send_text_email",
    "SendEmail",
    &[
        "Destination.ToAddresses.member.1",
        "Message.Subject.Data",
        "Message.Body.Text.Data",
        "Source",
    ],
    true,
    SEND_EMAIL_RESULT,
);

/// Send an HTML email to one recipient.
pub const SEND_HTML_EMAIL: Operation = Operation::post(
    "send_html_email",
    "SendEmail",
    &[
        "Destination.ToAddresses.member.1",
        "Message.Subject.Data",
        "Message.Body.Html.Data",
        "Source",
    ],
    true,
    SEND_EMAIL_RESULT,
);

/// Send a complete MIME message.
pub const SEND_RAW_EMAIL: Operation = Operation::post(
    "send_raw_email",
    "SendRawEmail",
    &["RawMessage.Data"],
    true,
    &["SendRawEmailResponse"],
);

/// Every operation, in declaration order.
pub const ALL: [Operation; 9] = [
    VERIFY_EMAIL_ADDRESS,
    LIST_VERIFIED_EMAIL_ADDRESSES,
    DELETE_VERIFIED_EMAIL_ADDRESS,
    GET_SEND_QUOTA,
    GET_SEND_STATISTICS,
    SEND_EMAIL,
    SEND_TEXT_EMAIL,
    SEND_HTML_EMAIL,
    SEND_RAW_EMAIL,
];
