use serde::{Deserialize, Serialize};

/// Top-level academic track grouping modules and groupes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Filiere {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
