//! Auth configuration and shared handler state.

use super::{session::SessionIssuer, store::UserStore};
use std::sync::Arc;

const DEFAULT_SESSION_TTL_SECONDS: i64 = 12 * 60 * 60;
const DEFAULT_REMEMBER_TTL_SECONDS: i64 = 14 * 24 * 60 * 60;
const DEFAULT_LANDING_PATH: &str = "/dashboard";

#[derive(Clone, Debug)]
pub struct AuthConfig {
    base_url: String,
    session_ttl_seconds: i64,
    remember_ttl_seconds: i64,
    landing_path: String,
}

impl AuthConfig {
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            session_ttl_seconds: DEFAULT_SESSION_TTL_SECONDS,
            remember_ttl_seconds: DEFAULT_REMEMBER_TTL_SECONDS,
            landing_path: DEFAULT_LANDING_PATH.to_string(),
        }
    }

    #[must_use]
    pub fn with_session_ttl_seconds(mut self, seconds: i64) -> Self {
        self.session_ttl_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_remember_ttl_seconds(mut self, seconds: i64) -> Self {
        self.remember_ttl_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_landing_path(mut self, path: String) -> Self {
        self.landing_path = path;
        self
    }

    #[must_use]
    pub fn session_ttl_seconds(&self) -> i64 {
        self.session_ttl_seconds
    }

    #[must_use]
    pub fn remember_ttl_seconds(&self) -> i64 {
        self.remember_ttl_seconds
    }

    /// Default landing path used when no valid return URL accompanies a
    /// successful login.
    #[must_use]
    pub fn landing_path(&self) -> &str {
        &self.landing_path
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Only mark cookies secure when the portal is served over HTTPS.
    #[must_use]
    pub fn session_cookie_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

/// Shared state for the login flow: configuration plus the two injected
/// collaborators.
pub struct AuthState {
    config: AuthConfig,
    store: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionIssuer>,
}

impl AuthState {
    #[must_use]
    pub fn new(
        config: AuthConfig,
        store: Arc<dyn UserStore>,
        sessions: Arc<dyn SessionIssuer>,
    ) -> Self {
        Self {
            config,
            store,
            sessions,
        }
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub(crate) fn store(&self) -> &dyn UserStore {
        self.store.as_ref()
    }

    pub(crate) fn sessions(&self) -> &dyn SessionIssuer {
        self.sessions.as_ref()
    }
}
