use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::NamedRef;
use crate::enums::{LogbookStatus, SessionType};

/// A dated record of one teaching session, awaiting admin review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Logbook {
    pub id: u64,
    #[serde(default)]
    pub user: Option<NamedRef>,
    #[serde(default)]
    pub module: Option<NamedRef>,
    #[serde(default)]
    pub groupe: Option<NamedRef>,
    #[serde(default)]
    pub matiere: Option<NamedRef>,
    pub session_date: NaiveDate,
    pub session_type: SessionType,
    pub contenu_traite: String,
    #[serde(default)]
    pub remarques: Option<String>,
    pub status: LogbookStatus,
    /// Shown as sent: the backend may return a timestamp or relative text
    /// such as "2 hours ago".
    #[serde(default)]
    pub submitted_at: Option<String>,
}

impl Logbook {
    /// Display name of the submitting professor, if embedded.
    #[must_use]
    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().and_then(|r| r.name.as_deref())
    }

    #[must_use]
    pub fn module_name(&self) -> Option<&str> {
        self.module.as_ref().and_then(|r| r.name.as_deref())
    }

    #[must_use]
    pub fn groupe_name(&self) -> Option<&str> {
        self.groupe.as_ref().and_then(|r| r.name.as_deref())
    }
}
