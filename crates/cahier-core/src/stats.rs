//! Admin dashboard counters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::{Groupe, Logbook, Module, Professor};
use crate::envelope::Page;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_professors: u64,
    pub active_groups: u64,
    pub modules_assigned: u64,
    pub logbooks_today: u64,
}

impl DashboardStats {
    /// Compute counters from the first page of each list.
    ///
    /// Totals use the page length, falling back to `meta.total` for an empty
    /// page. "Today" is only the logbooks present on the fetched page.
    #[must_use]
    pub fn compute(
        professors: &Page<Professor>,
        groupes: &Page<Groupe>,
        modules: &Page<Module>,
        logbooks: &Page<Logbook>,
        today: NaiveDate,
    ) -> Self {
        Self {
            total_professors: professors.count(),
            active_groups: groupes.count(),
            modules_assigned: modules.count(),
            logbooks_today: logbooks
                .data
                .iter()
                .filter(|logbook| logbook.session_date == today)
                .count() as u64,
        }
    }
}
