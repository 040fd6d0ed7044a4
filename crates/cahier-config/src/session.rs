//! Session store location.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

const SESSION_FILE_NAME: &str = "session.json";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Session file path. Empty means `<data dir>/cahier/session.json`.
    #[serde(default)]
    pub path: String,
}

impl SessionConfig {
    /// Resolve the session file path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoDataDir`] when no path is configured and the
    /// platform has no data directory.
    pub fn resolved_path(&self) -> Result<PathBuf, ConfigError> {
        if !self.path.trim().is_empty() {
            return Ok(PathBuf::from(self.path.trim()));
        }
        dirs::data_dir()
            .map(|dir| dir.join("cahier").join(SESSION_FILE_NAME))
            .ok_or(ConfigError::NoDataDir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = SessionConfig {
            path: " /tmp/cahier/session.json ".into(),
        };
        assert_eq!(
            config.resolved_path().unwrap(),
            PathBuf::from("/tmp/cahier/session.json")
        );
    }

    #[test]
    fn default_path_ends_with_session_file() {
        if let Ok(path) = SessionConfig::default().resolved_path() {
            assert!(path.ends_with("cahier/session.json"));
        }
    }
}
