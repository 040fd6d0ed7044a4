//! Login, logout and the signed-in user.

use serde::Serialize;

use cahier_core::entities::SessionUser;
use cahier_core::enums::Role;
use cahier_core::envelope::{Envelope, LoginResponse};

use crate::error::ApiError;
use crate::gateway::{Gateway, RequestOptions};
use crate::session::{SessionStore, TOKEN_KEY, USER_KEY};

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone)]
pub struct AuthClient {
    gateway: Gateway,
}

impl AuthClient {
    #[must_use]
    pub const fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// `POST /login`. On success the token and user are persisted; on
    /// failure, including a failed write of either entry, the previous
    /// session is left in place.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] for rejected credentials, or transport,
    /// decode and session errors.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let options = RequestOptions::post().json(&Credentials { email, password })?;
        let response: LoginResponse = self.gateway.send_json("/login", options).await?;

        let session = self.gateway.session();
        let previous_token = session.get(TOKEN_KEY);
        let previous_user = session.get(USER_KEY);
        if let Err(error) = session
            .set_token(&response.token)
            .and_then(|()| session.set_user(&response.user))
        {
            restore(session.as_ref(), TOKEN_KEY, previous_token.as_deref());
            restore(session.as_ref(), USER_KEY, previous_user.as_deref());
            return Err(error.into());
        }

        tracing::info!(user_id = response.user.id, "signed in");
        Ok(response)
    }

    /// [`Self::login`], then require the account to have role `expected`.
    ///
    /// On a mismatch the freshly stored session is cleared again.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RoleMismatch`] when the roles differ, otherwise
    /// the errors of [`Self::login`].
    pub async fn login_as(
        &self,
        email: &str,
        password: &str,
        expected: Role,
    ) -> Result<LoginResponse, ApiError> {
        let response = self.login(email, password).await?;
        if response.user.role == Some(expected) {
            return Ok(response);
        }

        if let Err(error) = self.gateway.session().clear() {
            tracing::warn!(%error, "failed to clear session after role mismatch");
        }
        Err(ApiError::RoleMismatch {
            expected: expected.to_string(),
            actual: response
                .user
                .role
                .map_or_else(|| "unknown".to_string(), |role| role.to_string()),
        })
    }

    /// `POST /logout`. The local session is cleared whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns the network or status error of the call if it failed, else a
    /// session error if clearing failed.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let remote = self.gateway.request("/logout", RequestOptions::post()).await;
        let local = self.gateway.session().clear();

        if let Err(error) = &remote {
            tracing::warn!(%error, "logout request failed; local session cleared");
        }
        remote?;
        local?;
        tracing::info!("signed out");
        Ok(())
    }

    /// `GET /user`: the account owning the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] with status 401 when the token is missing
    /// or expired.
    pub async fn current_user(&self) -> Result<SessionUser, ApiError> {
        let user: Envelope<SessionUser> = self.gateway.get_json("/user").await?;
        Ok(user.into_inner())
    }

    /// User stored at login, without a network call.
    #[must_use]
    pub fn session_user(&self) -> Option<SessionUser> {
        self.gateway.session().user()
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.gateway.session().token().is_some()
    }
}

/// Put back the raw entry `key` held before a failed login.
fn restore(session: &dyn SessionStore, key: &str, previous: Option<&str>) {
    let result = match previous {
        Some(value) => session.set(key, value),
        None => session.remove(key),
    };
    if let Err(error) = result {
        tracing::warn!(%error, key, "failed to restore session entry after login error");
    }
}
