//! Search filters of the manager screens.
//!
//! Matching is a case-insensitive substring test. An empty query matches
//! everything.

use serde::Serialize;

use crate::entities::{Assignment, Filiere, Groupe, Logbook, Matiere, Module, Professor};
use crate::enums::{LogbookStatus, StatusFilter};

const UNKNOWN: &str = "Unknown";

fn contains(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Records that can be matched against a search box.
pub trait Searchable {
    /// Fields the search box looks at.
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Professor {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

impl Searchable for Filiere {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.code.as_deref());
        fields
    }
}

impl Searchable for Module {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.code.as_str()]
    }
}

impl Searchable for Matiere {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.code.as_str()]
    }
}

impl Searchable for Groupe {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.code.as_str()]
    }
}

/// Keep the records whose search fields contain `query`.
#[must_use]
pub fn filter_records<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| {
            record
                .search_fields()
                .into_iter()
                .any(|field| contains(field, &needle))
        })
        .collect()
}

/// Keep logbooks whose professor, module or groupe name contains `query` and
/// whose status passes `status`.
#[must_use]
pub fn filter_logbooks<'a>(
    logbooks: &'a [Logbook],
    query: &str,
    status: StatusFilter,
) -> Vec<&'a Logbook> {
    let needle = query.trim().to_lowercase();
    logbooks
        .iter()
        .filter(|logbook| status.matches(&logbook.status))
        .filter(|logbook| {
            needle.is_empty()
                || [logbook.user_name(), logbook.module_name(), logbook.groupe_name()]
                    .into_iter()
                    .flatten()
                    .any(|name| contains(name, &needle))
        })
        .collect()
}

/// Per-status tallies shown on the review screen tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub all: usize,
    pub pending: usize,
    pub validated: usize,
}

impl StatusCounts {
    #[must_use]
    pub fn tally(logbooks: &[Logbook]) -> Self {
        logbooks.iter().fold(
            Self {
                all: logbooks.len(),
                ..Self::default()
            },
            |mut counts, logbook| {
                match &logbook.status {
                    LogbookStatus::Pending => counts.pending += 1,
                    LogbookStatus::Validated => counts.validated += 1,
                    LogbookStatus::Other(_) => {}
                }
                counts
            },
        )
    }
}

/// Lookup tables for showing assignments by name instead of id.
#[derive(Debug, Clone, Copy)]
pub struct Directory<'a> {
    pub professors: &'a [Professor],
    pub modules: &'a [Module],
    pub matieres: &'a [Matiere],
    pub groupes: &'a [Groupe],
}

impl<'a> Directory<'a> {
    #[must_use]
    pub fn professor_name(&self, id: u64) -> &'a str {
        self.professors
            .iter()
            .find(|p| p.id == id)
            .map_or(UNKNOWN, |p| p.name.as_str())
    }

    #[must_use]
    pub fn module_name(&self, id: u64) -> &'a str {
        self.modules
            .iter()
            .find(|m| m.id == id)
            .map_or(UNKNOWN, |m| m.name.as_str())
    }

    #[must_use]
    pub fn matiere_name(&self, id: u64) -> &'a str {
        self.matieres
            .iter()
            .find(|m| m.id == id)
            .map_or(UNKNOWN, |m| m.name.as_str())
    }

    #[must_use]
    pub fn groupe_name(&self, id: u64) -> &'a str {
        self.groupes
            .iter()
            .find(|g| g.id == id)
            .map_or(UNKNOWN, |g| g.name.as_str())
    }

    /// Resolve every reference of `assignment`.
    #[must_use]
    pub fn describe(&self, assignment: &Assignment) -> AssignmentRow<'a> {
        AssignmentRow {
            id: assignment.id,
            professor: self.professor_name(assignment.user_id),
            module: self.module_name(assignment.module_id),
            matiere: self.matiere_name(assignment.matiere_id),
            groupe: self.groupe_name(assignment.groupe_id),
        }
    }
}

/// An assignment with names resolved, as rendered in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssignmentRow<'a> {
    pub id: u64,
    pub professor: &'a str,
    pub module: &'a str,
    pub matiere: &'a str,
    pub groupe: &'a str,
}

/// Resolve and filter assignments by any of their resolved names.
#[must_use]
pub fn filter_assignments<'a>(
    assignments: &[Assignment],
    directory: &Directory<'a>,
    query: &str,
) -> Vec<AssignmentRow<'a>> {
    let needle = query.trim().to_lowercase();
    assignments
        .iter()
        .map(|assignment| directory.describe(assignment))
        .filter(|row| {
            needle.is_empty()
                || [row.professor, row.module, row.matiere, row.groupe]
                    .into_iter()
                    .any(|name| contains(name, &needle))
        })
        .collect()
}
