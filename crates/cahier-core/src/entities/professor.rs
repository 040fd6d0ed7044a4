use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// A teaching account (or an admin, since both share the endpoint).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Professor {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
