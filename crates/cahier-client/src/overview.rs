//! Aggregate reads that need several resources at once.

use chrono::NaiveDate;
use serde::Serialize;

use cahier_core::entities::{Groupe, Matiere, Module, Professor};
use cahier_core::stats::DashboardStats;

use crate::ApiClient;
use crate::error::ApiError;

/// Everything the assignment form needs to resolve ids to names.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    pub professors: Vec<Professor>,
    pub modules: Vec<Module>,
    pub matieres: Vec<Matiere>,
    pub groupes: Vec<Groupe>,
}

impl ApiClient {
    /// Dashboard counters from the first page of professors, groupes,
    /// modules and logbooks. The four calls run concurrently; any failure
    /// fails the whole read.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`] among the four calls.
    pub async fn dashboard(&self, today: NaiveDate) -> Result<DashboardStats, ApiError> {
        let (professors, groupes, modules, logbooks) =
            (self.professors(), self.groupes(), self.modules(), self.logbooks());
        let (professors, groupes, modules, logbooks) = tokio::try_join!(
            professors.list_page(1),
            groupes.list_page(1),
            modules.list_page(1),
            logbooks.list_page(1),
        )?;
        Ok(DashboardStats::compute(
            &professors,
            &groupes,
            &modules,
            &logbooks,
            today,
        ))
    }

    /// First page of each lookup collection, fetched concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`] among the four calls.
    pub async fn catalog(&self) -> Result<Catalog, ApiError> {
        let (professors, modules, matieres, groupes) =
            (self.professors(), self.modules(), self.matieres(), self.groupes());
        let (professors, modules, matieres, groupes) = tokio::try_join!(
            professors.list(1),
            modules.list(1),
            matieres.list(1),
            groupes.list(1),
        )?;
        Ok(Catalog {
            professors,
            modules,
            matieres,
            groupes,
        })
    }
}
