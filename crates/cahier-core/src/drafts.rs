//! Request bodies for create/update calls.
//!
//! Drafts mirror the admin forms: selections that may still be empty are
//! `Option`s so [`crate::validation`] can report which one is missing before
//! anything is sent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::ProfessorAssignment;
use crate::enums::{Role, SessionType};
use crate::errors::CoreError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfessorDraft {
    pub name: String,
    pub email: String,
    /// Omitted from the body when `None`; an update keeps the current password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: Role,
}

impl ProfessorDraft {
    /// Drop a blank password so an edit does not overwrite the stored one.
    #[must_use]
    pub fn without_blank_password(mut self) -> Self {
        if self.password.as_deref().is_some_and(str::is_empty) {
            self.password = None;
        }
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FiliereDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleDraft {
    pub name: String,
    pub code: String,
    pub filiere_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatiereDraft {
    pub name: String,
    pub code: String,
    pub module_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coefficient: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupeDraft {
    pub name: String,
    pub code: String,
    pub filiere_id: Option<u64>,
    /// Signed so out-of-range input can be reported instead of failing to parse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignmentDraft {
    pub user_id: Option<u64>,
    pub module_id: Option<u64>,
    pub matiere_id: Option<u64>,
    pub groupe_id: Option<u64>,
}

/// A professor's session record, always built from one of their own
/// assignments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogbookDraft {
    pub assignment_id: u64,
    pub module_id: u64,
    pub matiere_id: u64,
    pub groupe_id: u64,
    pub session_date: NaiveDate,
    pub session_type: SessionType,
    pub contenu_traite: String,
    pub remarques: Option<String>,
}

impl LogbookDraft {
    /// Build a logbook for the selected assignment.
    ///
    /// Blank remarks are sent as `null`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when no assignment is selected or the
    /// session content is blank.
    pub fn for_assignment(
        assignment: Option<&ProfessorAssignment>,
        session_date: NaiveDate,
        session_type: SessionType,
        content: &str,
        remarks: Option<&str>,
    ) -> Result<Self, CoreError> {
        let assignment =
            assignment.ok_or_else(|| CoreError::validation("Please select a class first."))?;
        if content.trim().is_empty() {
            return Err(CoreError::validation("Please enter the session content."));
        }

        Ok(Self {
            assignment_id: assignment.id,
            module_id: assignment.module_id,
            matiere_id: assignment.matiere_id,
            groupe_id: assignment.groupe_id,
            session_date,
            session_type,
            contenu_traite: content.to_string(),
            remarques: remarks.filter(|r| !r.is_empty()).map(str::to_string),
        })
    }
}

/// Body of `PUT /admin/logbooks/{id}/flag`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlagRequest {
    pub reason: String,
}

impl FlagRequest {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
