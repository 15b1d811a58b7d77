//! Account-level operations: sending quota and statistics.

use std::sync::Arc;
use tracing::instrument;

use super::{invoke, SesService};
use crate::document::Document;
use crate::error::SesResult;
use crate::http::HttpClient;
use crate::operations::{GET_SEND_QUOTA, GET_SEND_STATISTICS};

/// Service for account-level queries.
#[derive(Clone)]
pub struct AccountService {
    http_client: Arc<dyn HttpClient>,
}

impl AccountService {
    /// Create a new account service.
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self { http_client }
    }

    /// Get the account's sending limits.
    ///
    /// Returns the whole `GetSendQuotaResponse` element; the limits are under
    /// `GetSendQuotaResult` (`Max24HourSend`, `MaxSendRate`,
    /// `SentLast24Hours`).
    #[instrument(skip(self), fields(operation = GET_SEND_QUOTA.name))]
    pub async fn get_send_quota(&self) -> SesResult<Document> {
        invoke(self.http_client.as_ref(), &GET_SEND_QUOTA, Vec::new()).await
    }

    /// Get sending statistics for the last two weeks.
    ///
    /// Returns the whole `GetSendStatisticsResponse` element; data points are
    /// under `GetSendStatisticsResult.SendDataPoints.member`.
    #[instrument(skip(self), fields(operation = GET_SEND_STATISTICS.name))]
    pub async fn get_send_statistics(&self) -> SesResult<Document> {
        invoke(self.http_client.as_ref(), &GET_SEND_STATISTICS, Vec::new()).await
    }
}

impl SesService for AccountService {
    fn http_client(&self) -> &Arc<dyn HttpClient> {
        &self.http_client
    }
}
