//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_page() -> u32 {
    1
}

fn default_format() -> String {
    "json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default output format for the CLI (`json`, `table`, `raw`).
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Page requested by list commands when `--page` is not given.
    #[serde(default = "default_page")]
    pub default_page: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            default_page: default_page(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_format, "json");
        assert_eq!(config.default_page, 1);
    }
}
