//! # cahier-client
//!
//! HTTP client for the Cahier de textes backend.
//!
//! - [`Gateway`]: one entry point for every call (base URL, JSON headers,
//!   bearer token, error mapping)
//! - [`SessionStore`]: where the token and signed-in user live
//!   ([`MemorySessionStore`], [`FileSessionStore`])
//! - [`ResourceClient`]: generic CRUD over the admin collections
//! - [`AuthClient`] and [`ProfessorClient`]: login and the `/professeur/*` routes
//! - [`ListScreen`]: fetch lifecycle of a list view with stale-response guarding
//!
//! ```no_run
//! # async fn demo() -> Result<(), cahier_client::ApiError> {
//! use std::sync::Arc;
//! use cahier_client::{ApiClient, MemorySessionStore};
//! use cahier_config::ApiConfig;
//!
//! let client = ApiClient::new(&ApiConfig::default(), Arc::new(MemorySessionStore::new()))?;
//! client.auth().login("admin@univ.ma", "secret123").await?;
//! let filieres = client.filieres().list(1).await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod gateway;
pub mod logbooks;
pub mod overview;
pub mod professor;
pub mod resource;
pub mod screen;
pub mod session;

mod error;
mod http;

pub use auth::AuthClient;
pub use error::{ApiError, ApiErrorKind, FieldErrors};
pub use gateway::{Gateway, RequestOptions};
pub use overview::Catalog;
pub use professor::ProfessorClient;
pub use resource::{
    AdminLogbooks, Assignments, Filieres, Groupes, Matieres, Modules, Professors, Resource,
    ResourceClient,
};
pub use screen::{ListScreen, RequestScope, ScreenState, Ticket};
pub use session::{FileSessionStore, MemorySessionStore, SessionError, SessionStore};

use std::sync::Arc;

use cahier_config::ApiConfig;

/// Entry point handing out one client per backend area.
///
/// Every client shares the same [`Gateway`], hence the same connection pool
/// and session store.
#[derive(Debug, Clone)]
pub struct ApiClient {
    gateway: Gateway,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] or [`ApiError::Http`] if the
    /// gateway cannot be built.
    pub fn new(config: &ApiConfig, session: Arc<dyn SessionStore>) -> Result<Self, ApiError> {
        Ok(Self {
            gateway: Gateway::new(config, session)?,
        })
    }

    #[must_use]
    pub const fn from_gateway(gateway: Gateway) -> Self {
        Self { gateway }
    }

    #[must_use]
    pub const fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    #[must_use]
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        self.gateway.session()
    }

    #[must_use]
    pub fn auth(&self) -> AuthClient {
        AuthClient::new(self.gateway.clone())
    }

    #[must_use]
    pub fn professors(&self) -> ResourceClient<Professors> {
        ResourceClient::new(self.gateway.clone())
    }

    #[must_use]
    pub fn filieres(&self) -> ResourceClient<Filieres> {
        ResourceClient::new(self.gateway.clone())
    }

    #[must_use]
    pub fn modules(&self) -> ResourceClient<Modules> {
        ResourceClient::new(self.gateway.clone())
    }

    #[must_use]
    pub fn matieres(&self) -> ResourceClient<Matieres> {
        ResourceClient::new(self.gateway.clone())
    }

    #[must_use]
    pub fn groupes(&self) -> ResourceClient<Groupes> {
        ResourceClient::new(self.gateway.clone())
    }

    #[must_use]
    pub fn assignments(&self) -> ResourceClient<Assignments> {
        ResourceClient::new(self.gateway.clone())
    }

    /// Admin view of submitted logbooks.
    #[must_use]
    pub fn logbooks(&self) -> ResourceClient<AdminLogbooks> {
        ResourceClient::new(self.gateway.clone())
    }

    /// Routes of the signed-in professor.
    #[must_use]
    pub fn professor(&self) -> ProfessorClient {
        ProfessorClient::new(self.gateway.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clients_share_the_session_store() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let client = ApiClient::new(&ApiConfig::default(), Arc::clone(&store)).unwrap();

        store.set_token("shared").unwrap();
        assert!(client.auth().is_signed_in());
        assert_eq!(client.session().token().as_deref(), Some("shared"));
        assert_eq!(client.gateway().base_url(), cahier_config::DEFAULT_BASE_URL);
    }
}
