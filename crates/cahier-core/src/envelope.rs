//! Wire envelopes shared by every endpoint.
//!
//! List endpoints answer `{ data: [...], meta: {...} }`, single-record
//! endpoints usually `{ data: {...} }` (sometimes the bare record), and
//! mutations without a record `{ message }`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::SessionUser;

/// One page of a list endpoint.
///
/// A response without `data` is an empty page, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            meta: None,
        }
    }
}

impl<T> Page<T> {
    /// Number of records to report for this resource: the page length, or
    /// `meta.total` when the page came back empty.
    #[must_use]
    pub fn count(&self) -> u64 {
        if self.data.is_empty() {
            self.meta.as_ref().and_then(|m| m.total).unwrap_or(0)
        } else {
            self.data.len() as u64
        }
    }

    #[must_use]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

/// Pagination metadata. Every field is optional because backends vary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageMeta {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub current_page: Option<u64>,
    #[serde(default)]
    pub last_page: Option<u64>,
    #[serde(default)]
    pub per_page: Option<u64>,
}

/// A single record, either wrapped in `{ data }` or sent bare.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

/// Acknowledgement of a delete, validate or flag call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ack {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Response of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}
