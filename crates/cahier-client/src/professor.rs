//! Self-service endpoints of a signed-in professor.

use cahier_core::drafts::LogbookDraft;
use cahier_core::entities::{Logbook, ProfessorAssignment};
use cahier_core::envelope::{Envelope, Page};

use crate::error::ApiError;
use crate::gateway::{Gateway, RequestOptions};

const MY_ASSIGNMENTS: &str = "/professeur/my-assignments";
const MY_LOGBOOKS: &str = "/professeur/my-logbooks";
const LOGBOOKS: &str = "/professeur/logbooks";

/// Client for the `/professeur/*` routes. Every call acts on the account
/// owning the stored token.
#[derive(Debug, Clone)]
pub struct ProfessorClient {
    gateway: Gateway,
}

impl ProfessorClient {
    #[must_use]
    pub const fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Classes assigned to the signed-in professor, with module, matière and
    /// groupe names embedded.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn my_assignments(&self) -> Result<Vec<ProfessorAssignment>, ApiError> {
        let page: Page<ProfessorAssignment> = self
            .gateway
            .send_json_or_default(MY_ASSIGNMENTS, RequestOptions::get())
            .await?;
        Ok(page.into_data())
    }

    /// Logbooks submitted by the signed-in professor.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn list(&self) -> Result<Vec<Logbook>, ApiError> {
        let page: Page<Logbook> = self
            .gateway
            .send_json_or_default(MY_LOGBOOKS, RequestOptions::get())
            .await?;
        Ok(page.into_data())
    }

    /// Submit a logbook entry.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on encode, transport, status or decode failure.
    pub async fn create(&self, draft: &LogbookDraft) -> Result<Logbook, ApiError> {
        let options = RequestOptions::post().json(draft)?;
        let created: Envelope<Logbook> = self.gateway.send_json(LOGBOOKS, options).await?;
        let logbook = created.into_inner();
        tracing::info!(id = logbook.id, assignment = draft.assignment_id, "logbook submitted");
        Ok(logbook)
    }
}
