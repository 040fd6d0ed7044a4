use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use cahier_client::{ApiClient, FileSessionStore};
use cahier_config::CahierConfig;
use chrono::NaiveDate;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub client: ApiClient,
    pub config: CahierConfig,
    pub session_path: PathBuf,
}

impl AppContext {
    /// Build the API client over the file-backed session store.
    ///
    /// `--session-file` wins over `session.path`.
    pub fn init(config: CahierConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let session_path = match &flags.session_file {
            Some(path) => path.clone(),
            None => config
                .session
                .resolved_path()
                .context("failed to resolve session file location")?,
        };
        tracing::debug!(path = %session_path.display(), "using session file");

        let store = FileSessionStore::new(&session_path);
        let client = ApiClient::new(&config.api, Arc::new(store))
            .context("failed to initialize API client")?;

        Ok(Self {
            client,
            config,
            session_path,
        })
    }

    /// First page to fetch when `--page` is absent.
    #[must_use]
    pub fn page(&self, requested: Option<u32>) -> u32 {
        requested.unwrap_or(self.config.general.default_page).max(1)
    }

    #[must_use]
    pub fn today() -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}
