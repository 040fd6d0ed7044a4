//! Client error types.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::session::SessionError;

/// Machine-readable category of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// The request never got an HTTP answer (DNS, refused, TLS, I/O, timeout).
    Transport,
    /// 401: missing, expired or revoked token.
    Unauthorized,
    /// 403: authenticated but not allowed (e.g. a professor on an admin route).
    Forbidden,
    /// 404.
    NotFound,
    /// 422: the backend rejected the payload.
    Validation,
    /// 429.
    RateLimited,
    /// 5xx.
    Server,
    /// Any other non-success status.
    Rejected,
    /// The request body could not be serialized.
    Encode,
    /// The response body did not have the expected shape.
    Decode,
    /// The session store could not be read or written.
    Session,
    /// Signed in with a different role than the one requested.
    RoleMismatch,
    /// Invalid client configuration (base URL, header).
    Config,
}

impl ApiErrorKind {
    /// Classify an HTTP status code.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            422 => Self::Validation,
            429 => Self::RateLimited,
            500..=599 => Self::Server,
            _ => Self::Rejected,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::Validation => "validation",
            Self::RateLimited => "rate_limited",
            Self::Server => "server",
            Self::Rejected => "rejected",
            Self::Encode => "encode",
            Self::Decode => "decode",
            Self::Session => "session",
            Self::RoleMismatch => "role_mismatch",
            Self::Config => "config",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-level messages of a 422 response (`{"errors": {"email": ["..."]}}`).
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Errors returned by every client operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status. Displays the server's
    /// message verbatim.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server `message` field, or a fixed fallback.
        message: String,
        /// Per-field validation messages, when the server sent them.
        errors: Option<FieldErrors>,
    },

    /// A request body could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response did not match the expected shape.
    #[error("unexpected response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the session store failed.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// `login_as` authenticated an account of another role.
    #[error("Invalid credentials. Please select the correct role.")]
    RoleMismatch { expected: String, actual: String },

    /// The configured base URL is not usable.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// A caller-supplied header name or value is not valid HTTP.
    #[error("invalid header: {0}")]
    InvalidHeader(String),
}

impl ApiError {
    #[must_use]
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            Self::Http(_) => ApiErrorKind::Transport,
            Self::Api { status, .. } => ApiErrorKind::from_status(*status),
            Self::Encode(_) => ApiErrorKind::Encode,
            Self::Decode { .. } => ApiErrorKind::Decode,
            Self::Session(_) => ApiErrorKind::Session,
            Self::RoleMismatch { .. } => ApiErrorKind::RoleMismatch,
            Self::InvalidBaseUrl(_) | Self::InvalidHeader(_) => ApiErrorKind::Config,
        }
    }

    /// Human-readable message to show the user.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status, when the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert_eq!(ApiErrorKind::from_status(401), ApiErrorKind::Unauthorized);
        assert_eq!(ApiErrorKind::from_status(422), ApiErrorKind::Validation);
        assert_eq!(ApiErrorKind::from_status(503), ApiErrorKind::Server);
        assert_eq!(ApiErrorKind::from_status(409), ApiErrorKind::Rejected);
    }

    #[test]
    fn api_error_displays_server_message() {
        let err = ApiError::Api {
            status: 404,
            message: "Professeur introuvable".into(),
            errors: None,
        };
        assert_eq!(err.to_string(), "Professeur introuvable");
        assert_eq!(err.message(), "Professeur introuvable");
        assert_eq!(err.kind(), ApiErrorKind::NotFound);
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn role_mismatch_is_its_own_kind() {
        let err = ApiError::RoleMismatch {
            expected: "admin".into(),
            actual: "professeur".into(),
        };
        assert_eq!(err.kind(), ApiErrorKind::RoleMismatch);
        assert!(err.status().is_none());
    }
}
