use serde::{Deserialize, Serialize};

/// Student cohort within a filière.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Groupe {
    pub id: u64,
    pub name: String,
    pub code: String,
    pub filiere_id: u64,
    #[serde(default, deserialize_with = "crate::de::opt_u32")]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
}
