//! Roles, session types and logbook statuses.
//!
//! Wire values follow the backend verbatim (`professeur`, `cours`, `TP`,
//! `pending`, ...). Every enum parses from its wire value via [`FromStr`] so
//! the CLI can accept the same spelling the API uses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Account role. Admins manage the catalog; professors submit logbooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "professeur", alias = "professor")]
    Professeur,
    #[serde(rename = "admin")]
    Admin,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Professeur => "professeur",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "professeur" | "professor" => Ok(Self::Professeur),
            "admin" => Ok(Self::Admin),
            _ => Err(CoreError::InvalidValue {
                kind: "role",
                value: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// SessionType
// ---------------------------------------------------------------------------

/// Kind of teaching session recorded in a logbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SessionType {
    /// Lecture.
    #[default]
    #[serde(rename = "cours")]
    Cours,
    /// Practical work.
    #[serde(rename = "TP")]
    Tp,
}

impl SessionType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cours => "cours",
            Self::Tp => "TP",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cours" => Ok(Self::Cours),
            "tp" => Ok(Self::Tp),
            _ => Err(CoreError::InvalidValue {
                kind: "session type",
                value: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// LogbookStatus
// ---------------------------------------------------------------------------

/// Review status of a logbook.
///
/// ```text
/// pending → validated   (admin `validate`)
/// ```
///
/// Flagging attaches a reason but has no known status transition; whatever
/// status string the backend reports after a flag (`flagged`, `rejected`, ...)
/// is kept verbatim in [`Self::Other`] and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogbookStatus {
    Pending,
    Validated,
    Other(String),
}

impl LogbookStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Validated => "validated",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for LogbookStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => Self::Pending,
            "validated" => Self::Validated,
            _ => Self::Other(raw),
        }
    }
}

impl From<LogbookStatus> for String {
    fn from(status: LogbookStatus) -> Self {
        match status {
            LogbookStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for LogbookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StatusFilter
// ---------------------------------------------------------------------------

/// Status selector of the logbook review screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Validated,
}

impl StatusFilter {
    #[must_use]
    pub fn matches(self, status: &LogbookStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => *status == LogbookStatus::Pending,
            Self::Validated => *status == LogbookStatus::Validated,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "validated" => Ok(Self::Validated),
            _ => Err(CoreError::InvalidValue {
                kind: "status filter",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn role_accepts_professor_alias_on_input() {
        let role: Role = serde_json::from_str(r#""professor""#).unwrap();
        assert_eq!(role, Role::Professeur);
        assert_eq!(serde_json::to_string(&role).unwrap(), r#""professeur""#);
    }

    #[test]
    fn session_type_uses_backend_spelling() {
        assert_eq!(serde_json::to_string(&SessionType::Tp).unwrap(), r#""TP""#);
        assert_eq!(
            serde_json::from_str::<SessionType>(r#""cours""#).unwrap(),
            SessionType::Cours
        );
        assert!(serde_json::from_str::<SessionType>(r#""tp""#).is_err());
    }

    #[test]
    fn unknown_logbook_status_is_kept_verbatim() {
        let status: LogbookStatus = serde_json::from_str(r#""flagged""#).unwrap();
        assert_eq!(status, LogbookStatus::Other("flagged".into()));
        assert_eq!(status.to_string(), "flagged");
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""flagged""#);
    }

    #[test]
    fn known_logbook_statuses_round_trip() {
        for wire in ["pending", "validated"] {
            let status: LogbookStatus = serde_json::from_str(&format!("\"{wire}\"")).unwrap();
            assert!(!matches!(status, LogbookStatus::Other(_)));
            assert_eq!(serde_json::to_value(&status).unwrap(), wire);
        }
    }

    #[rstest]
    #[case("all", StatusFilter::All, LogbookStatus::Other("flagged".into()), true)]
    #[case("pending", StatusFilter::Pending, LogbookStatus::Pending, true)]
    #[case("Pending", StatusFilter::Pending, LogbookStatus::Validated, false)]
    #[case("validated", StatusFilter::Validated, LogbookStatus::Validated, true)]
    #[case("validated", StatusFilter::Validated, LogbookStatus::Other("flagged".into()), false)]
    fn status_filter_parses_and_matches(
        #[case] text: &str,
        #[case] expected: StatusFilter,
        #[case] status: LogbookStatus,
        #[case] matches: bool,
    ) {
        let filter: StatusFilter = text.parse().unwrap();
        assert_eq!(filter, expected);
        assert_eq!(filter.matches(&status), matches);
    }

    #[test]
    fn from_str_rejects_unknown_values() {
        assert!("teacher".parse::<Role>().is_err());
        assert!("lab".parse::<SessionType>().is_err());
        assert!("flagged".parse::<StatusFilter>().is_err());
    }
}
