//! Request descriptors for the SES query API.

use http::{Method, StatusCode};
use url::form_urlencoded;

use crate::operations::Operation;

/// Content type of every request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

/// A request to the SES query API.
///
/// Parameters are kept in insertion order and `Action` is always first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SesRequest {
    /// HTTP method
    method: Method,

    /// Request path
    path: String,

    /// Form parameters, `Action` first
    params: Vec<(String, String)>,

    /// Status that counts as success
    expected_status: StatusCode,
}

impl SesRequest {
    /// Start a request for `operation` with only its `Action` parameter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use integrations_aws_ses_classic::http::SesRequest;
    /// use integrations_aws_ses_classic::operations::GET_SEND_QUOTA;
    ///
    /// let request = SesRequest::for_operation(&GET_SEND_QUOTA);
    /// assert_eq!(request.encode_body(), "Action=GetSendQuota");
    /// ```
    pub fn for_operation(operation: &Operation) -> Self {
        Self {
            method: operation.method.clone(),
            path: operation.path.to_string(),
            params: vec![("Action".to_string(), operation.action.to_string())],
            expected_status: operation.expected_status,
        }
    }

    /// Append one parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Append parameters in order.
    pub fn params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Get the HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the request path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the status that counts as success.
    pub fn expected_status(&self) -> StatusCode {
        self.expected_status
    }

    /// Get the value of the `Action` parameter.
    pub fn action(&self) -> &str {
        self.param_value("Action").unwrap_or_default()
    }

    /// Get all parameters in order.
    pub fn form_params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Get the first value for `key`.
    pub fn param_value(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Encode the parameters as an `application/x-www-form-urlencoded` body.
    ///
    /// ```rust
    /// use integrations_aws_ses_classic::http::SesRequest;
    /// use integrations_aws_ses_classic::operations::VERIFY_EMAIL_ADDRESS;
    ///
    /// let request = SesRequest::for_operation(&VERIFY_EMAIL_ADDRESS)
    ///     .param("EmailAddress", "a+b@example.com");
    /// assert_eq!(
    ///     request.encode_body(),
    ///     "Action=VerifyEmailAddress&EmailAddress=a%2Bb%40example.com"
    /// );
    /// ```
    pub fn encode_body(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }

    /// Build the full URL from an endpoint base.
    pub fn build_url(&self, endpoint: &str) -> String {
        let base = endpoint.trim_end_matches('/');
        if self.path.starts_with('/') {
            format!("{}{}", base, self.path)
        } else {
            format!("{}/{}", base, self.path)
        }
    }
}
