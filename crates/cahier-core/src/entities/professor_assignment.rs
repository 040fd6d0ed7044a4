use serde::{Deserialize, Serialize};

/// One class of the signed-in professor, as returned by
/// `/professeur/my-assignments`.
///
/// The professor is implied by the token, so `user_id` is usually absent;
/// the referenced names are embedded for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfessorAssignment {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    pub module_id: u64,
    #[serde(default)]
    pub module_name: Option<String>,
    pub matiere_id: u64,
    #[serde(default)]
    pub matiere_name: Option<String>,
    pub groupe_id: u64,
    #[serde(default)]
    pub groupe_name: Option<String>,
}
