#![allow(dead_code)]

use std::sync::Arc;

use cahier_client::{ApiClient, MemorySessionStore, SessionStore};
use cahier_config::ApiConfig;
use wiremock::MockServer;

pub fn client_for(server: &MockServer, store: Arc<dyn SessionStore>) -> ApiClient {
    let config = ApiConfig {
        base_url: format!("{}/api", server.uri()),
        ..ApiConfig::default()
    };
    ApiClient::new(&config, store).expect("client should build")
}

pub fn anonymous(server: &MockServer) -> (ApiClient, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::new());
    (client_for(server, store.clone()), store)
}

pub fn signed_in(server: &MockServer, token: &str) -> (ApiClient, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::with_token(token));
    (client_for(server, store.clone()), store)
}
