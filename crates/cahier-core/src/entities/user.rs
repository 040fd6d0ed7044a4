use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// The authenticated profile kept in the session store.
///
/// Login responses may carry only `id` and `role`, so the rest is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// `{ id, name }` reference embedded in logbooks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedRef {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
}
