use serde::{Deserialize, Serialize};

/// Subject within a module, weighted by `coefficient`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Matiere {
    pub id: u64,
    pub name: String,
    pub code: String,
    pub module_id: u64,
    #[serde(default, deserialize_with = "crate::de::opt_f64")]
    pub hours: Option<f64>,
    #[serde(default, deserialize_with = "crate::de::opt_f64")]
    pub coefficient: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}
