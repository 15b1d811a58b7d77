//! Verified email address operations.

use std::sync::Arc;
use tracing::instrument;

use super::{invoke, SesService};
use crate::document::Document;
use crate::error::SesResult;
use crate::http::HttpClient;
use crate::operations::{
    DELETE_VERIFIED_EMAIL_ADDRESS, LIST_VERIFIED_EMAIL_ADDRESSES, VERIFY_EMAIL_ADDRESS,
};

/// Service for managing verified sender addresses.
#[derive(Clone)]
pub struct IdentityService {
    http_client: Arc<dyn HttpClient>,
}

impl IdentityService {
    /// Create a new identity service.
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self { http_client }
    }

    /// Ask SES to send a verification message to `email`.
    ///
    /// Returns the `VerifyEmailAddressResponse` element, which only carries
    /// response metadata.
    #[instrument(skip(self), fields(operation = VERIFY_EMAIL_ADDRESS.name))]
    pub async fn verify_email_address(&self, email: &str) -> SesResult<Document> {
        let op = &VERIFY_EMAIL_ADDRESS;
        invoke(self.http_client.as_ref(), op, op.bind(&[email])).await
    }

    /// List the addresses verified for sending.
    ///
    /// Returns the `ListVerifiedEmailAddressesResult` element. Its
    /// `VerifiedEmailAddresses.member` is a string for one address and an
    /// array for several.
    #[instrument(skip(self), fields(operation = LIST_VERIFIED_EMAIL_ADDRESSES.name))]
    pub async fn list_verified_email_addresses(&self) -> SesResult<Document> {
        invoke(
            self.http_client.as_ref(),
            &LIST_VERIFIED_EMAIL_ADDRESSES,
            Vec::new(),
        )
        .await
    }

    /// Remove `email` from the verified list.
    #[instrument(skip(self), fields(operation = DELETE_VERIFIED_EMAIL_ADDRESS.name))]
    pub async fn delete_verified_email_address(&self, email: &str) -> SesResult<Document> {
        let op = &DELETE_VERIFIED_EMAIL_ADDRESS;
        invoke(self.http_client.as_ref(), op, op.bind(&[email])).await
    }
}

impl SesService for IdentityService {
    fn http_client(&self) -> &Arc<dyn HttpClient> {
        &self.http_client
    }
}
