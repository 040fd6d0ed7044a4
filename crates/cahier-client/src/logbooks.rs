//! Admin review actions on submitted logbooks.

use cahier_core::drafts::FlagRequest;
use cahier_core::envelope::Ack;

use crate::error::ApiError;
use crate::gateway::RequestOptions;
use crate::resource::{AdminLogbooks, Resource, ResourceClient};

impl ResourceClient<AdminLogbooks> {
    /// Mark logbook `id` as validated (`PUT /admin/logbooks/{id}/validate`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or status failure.
    pub async fn validate(&self, id: u64) -> Result<Ack, ApiError> {
        let endpoint = format!("{}/{id}/validate", AdminLogbooks::PATH);
        let ack = self
            .gateway()
            .send_json_or_default(&endpoint, RequestOptions::put())
            .await?;
        tracing::info!(id, "logbook validated");
        Ok(ack)
    }

    /// Flag logbook `id` with a reason (`PUT /admin/logbooks/{id}/flag`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on encode, transport or status failure.
    pub async fn flag(&self, id: u64, request: &FlagRequest) -> Result<Ack, ApiError> {
        let endpoint = format!("{}/{id}/flag", AdminLogbooks::PATH);
        let options = RequestOptions::put().json(request)?;
        let ack = self.gateway().send_json_or_default(&endpoint, options).await?;
        tracing::info!(id, "logbook flagged");
        Ok(ack)
    }
}
