//! Service adapters, one method per classic SES operation.
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │  IdentityService   AccountService   EmailService │
//! └────────────────────────┬─────────────────────────┘
//!                          │ Operation + params
//!                          ▼
//! ┌──────────────────────────────────────────────────┐
//! │  HttpClient (signing, expected status)           │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! Every method builds the operation's parameters, sends one request and
//! returns the single field the operation defines, as a [`Document`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use integrations_aws_ses_classic::config::SesConfig;
//! use integrations_aws_ses_classic::http::SesHttpClient;
//! use integrations_aws_ses_classic::services::AccountService;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SesConfig::from_env()?;
//! let account = AccountService::new(Arc::new(SesHttpClient::new(config)?));
//!
//! let quota = account.get_send_quota().await?;
//! println!("{}", quota["GetSendQuotaResult"]["Max24HourSend"]);
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod emails;
pub mod identities;

pub use account::AccountService;
pub use emails::EmailService;
pub use identities::IdentityService;

use std::sync::Arc;

use crate::document::{self, Document};
use crate::error::SesResult;
use crate::http::{HttpClient, SesRequest};
use crate::operations::Operation;

/// Common trait for all SES services.
pub trait SesService: Send + Sync {
    /// Get a reference to the HTTP client.
    fn http_client(&self) -> &Arc<dyn HttpClient>;
}

/// Send `operation` with `params` after `Action` and return its result field.
pub(crate) async fn invoke(
    http_client: &dyn HttpClient,
    operation: &Operation,
    params: Vec<(String, String)>,
) -> SesResult<Document> {
    let request = SesRequest::for_operation(operation).params(params);
    let response = http_client.send_request(request).await?;
    let doc = response.document()?;

    document::extract(&doc, operation.result_path)
}
