//! Cross-cutting error types for Cahier.
//!
//! Transport and API errors live in `cahier-client`; configuration errors in
//! `cahier-config`. The CLI converges all of them into `anyhow::Error`.

use thiserror::Error;

/// Errors raised by the view-layer rules in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Form input rejected before any request is made.
    #[error("{0}")]
    Validation(String),

    /// A textual value could not be parsed into one of the wire enums.
    #[error("invalid {kind}: '{value}'")]
    InvalidValue { kind: &'static str, value: String },
}

impl CoreError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
