//! Local persistence of the signed-in session.
//!
//! A store is a small string key-value map holding two entries: the bearer
//! token under [`TOKEN_KEY`] and the JSON-encoded user under [`USER_KEY`].
//! Implementors provide the raw `get`/`set`/`remove` layer; the typed
//! accessors are shared.

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

use std::fmt;
use std::path::PathBuf;

use cahier_core::entities::SessionUser;

/// Key of the bearer token entry.
pub const TOKEN_KEY: &str = "auth_token";

/// Key of the JSON-encoded user entry.
pub const USER_KEY: &str = "user";

/// Errors raised when the session cannot be persisted.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session store I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Storage of the bearer token and the signed-in user.
///
/// Reads never fail: an absent, unreadable or corrupt entry reads as `None`.
pub trait SessionStore: Send + Sync + fmt::Debug {
    /// Raw value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the backing storage cannot be written.
    fn remove(&self, key: &str) -> Result<(), SessionError>;

    fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    /// # Errors
    ///
    /// Returns [`SessionError`] if the token cannot be persisted.
    fn set_token(&self, token: &str) -> Result<(), SessionError> {
        self.set(TOKEN_KEY, token)
    }

    /// # Errors
    ///
    /// Returns [`SessionError`] if the store cannot be written.
    fn remove_token(&self) -> Result<(), SessionError> {
        self.remove(TOKEN_KEY)
    }

    /// Stored user, or `None` when absent or not decodable.
    fn user(&self) -> Option<SessionUser> {
        let raw = self.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(error) => {
                tracing::warn!(%error, "stored user is not valid JSON; ignoring");
                None
            }
        }
    }

    /// # Errors
    ///
    /// Returns [`SessionError`] if the user cannot be encoded or persisted.
    fn set_user(&self, user: &SessionUser) -> Result<(), SessionError> {
        let encoded = serde_json::to_string(user)?;
        self.set(USER_KEY, &encoded)
    }

    /// # Errors
    ///
    /// Returns [`SessionError`] if the store cannot be written.
    fn remove_user(&self) -> Result<(), SessionError> {
        self.remove(USER_KEY)
    }

    /// Remove both entries. Both removals are attempted; the first failure
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if either entry cannot be removed.
    fn clear(&self) -> Result<(), SessionError> {
        let token = self.remove_token();
        let user = self.remove_user();
        token.and(user)
    }
}
