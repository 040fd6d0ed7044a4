use serde::{Deserialize, Serialize};

/// Course-level unit. Belongs to exactly one filière.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Module {
    pub id: u64,
    pub name: String,
    pub code: String,
    pub filiere_id: u64,
    #[serde(default)]
    pub description: Option<String>,
}
