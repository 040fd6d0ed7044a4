//! Single entry point for every backend call.
//!
//! Joins the base URL and the endpoint, sets JSON headers and the bearer
//! token from the session store, maps non-success statuses to
//! [`ApiError::Api`], and decodes the body.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use cahier_config::ApiConfig;

use crate::error::ApiError;
use crate::http::check_response;
use crate::session::SessionStore;

const JSON: &str = "application/json";

/// Method, body and extra headers of one request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    /// Applied after the JSON defaults, so they can override them.
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    #[must_use]
    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    #[must_use]
    pub fn put() -> Self {
        Self::new(Method::PUT)
    }

    #[must_use]
    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    /// Attach a serializable body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be converted to JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body).map_err(ApiError::Encode)?);
        Ok(self)
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// HTTP gateway shared by every resource client.
///
/// Cheap to clone; clones share the connection pool and the session store.
#[derive(Debug, Clone)]
pub struct Gateway {
    http: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl Gateway {
    /// Build a gateway from API settings.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if the base URL is not http(s), or
    /// [`ApiError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig, session: Arc<dyn SessionStore>) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl(config.base_url.clone()));
        }

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
            session,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Absolute URL of `endpoint` (plain concatenation, leading `/` added if
    /// missing).
    #[must_use]
    pub fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{endpoint}", self.base_url)
        } else {
            format!("{}/{endpoint}", self.base_url)
        }
    }

    /// Perform a request and return the decoded JSON body.
    ///
    /// An empty success body yields [`Value::Null`].
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on transport failure
    /// - [`ApiError::Api`] on a non-success status
    /// - [`ApiError::Decode`] if a success body is not JSON
    /// - [`ApiError::InvalidHeader`] if a caller header is malformed
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let url = self.url(endpoint);
        let headers = self.headers(&options.headers)?;

        let mut request = self.http.request(options.method.clone(), &url).headers(headers);
        if let Some(body) = &options.body {
            request = request.json(body);
        }

        tracing::debug!(method = %options.method, endpoint, "api request");
        let response = match request.send().await {
            Ok(response) => response,
            Err(error) => {
                tracing::debug!(%error, endpoint, "api transport failure");
                return Err(error.into());
            }
        };
        tracing::debug!(status = response.status().as_u16(), endpoint, "api response");

        let response = check_response(response).await?;
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    /// Perform a request and decode the body into `T`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::request`], plus [`ApiError::Decode`] on a shape
    /// mismatch.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let value = self.request(endpoint, options).await?;
        decode(endpoint, value)
    }

    /// Like [`Self::send_json`], but an empty body yields `T::default()`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::send_json`].
    pub async fn send_json_or_default<T: DeserializeOwned + Default>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        match self.request(endpoint, options).await? {
            Value::Null => Ok(T::default()),
            value => decode(endpoint, value),
        }
    }

    /// GET `endpoint` and decode the body into `T`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::send_json`].
    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.send_json(endpoint, RequestOptions::get()).await
    }

    fn headers(&self, extra: &[(String, String)]) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));

        for (name, value) in extra {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ApiError::InvalidHeader(name.clone()))?;
            let header_value =
                HeaderValue::from_str(value).map_err(|_| ApiError::InvalidHeader(name.clone()))?;
            headers.insert(header_name, header_value);
        }

        if let Some(token) = self.session.token() {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ApiError::InvalidHeader(AUTHORIZATION.to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }
}

fn decode<T: DeserializeOwned>(endpoint: &str, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|source| ApiError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    fn gateway(base_url: &str, token: Option<&str>) -> Gateway {
        let store = token.map_or_else(MemorySessionStore::new, MemorySessionStore::with_token);
        let config = ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        };
        Gateway::new(&config, Arc::new(store)).unwrap()
    }

    #[test]
    fn url_is_plain_concatenation() {
        let gw = gateway("http://localhost:8000/api/", None);
        assert_eq!(gw.url("/admin/filieres"), "http://localhost:8000/api/admin/filieres");
        assert_eq!(gw.url("login"), "http://localhost:8000/api/login");
    }

    #[test]
    fn rejects_non_http_base_url() {
        let config = ApiConfig {
            base_url: "localhost:8000".into(),
            ..ApiConfig::default()
        };
        let err = Gateway::new(&config, Arc::new(MemorySessionStore::new())).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
    }

    #[test]
    fn default_headers_are_json() {
        let gw = gateway("http://localhost", None);
        let headers = gw.headers(&[]).unwrap();
        assert_eq!(headers[CONTENT_TYPE], JSON);
        assert_eq!(headers[ACCEPT], JSON);
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn caller_headers_override_defaults_but_not_token() {
        let gw = gateway("http://localhost", Some("abc"));
        let headers = gw
            .headers(&[
                ("Accept".into(), "text/csv".into()),
                ("Authorization".into(), "Bearer other".into()),
            ])
            .unwrap();
        assert_eq!(headers[ACCEPT], "text/csv");
        assert_eq!(headers[AUTHORIZATION], "Bearer abc");
    }

    #[test]
    fn malformed_header_is_rejected() {
        let gw = gateway("http://localhost", None);
        let err = gw.headers(&[("bad header".into(), "x".into())]).unwrap_err();
        assert!(matches!(err, ApiError::InvalidHeader(_)));
    }

    #[test]
    fn request_options_builders() {
        let options = RequestOptions::put()
            .json(&serde_json::json!({"name": "GI"}))
            .unwrap()
            .header("X-Trace", "1");
        assert_eq!(options.method, Method::PUT);
        assert_eq!(options.body, Some(serde_json::json!({"name": "GI"})));
        assert_eq!(options.headers.len(), 1);
        assert_eq!(RequestOptions::default().method, Method::GET);
    }
}
