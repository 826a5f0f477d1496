//! Session issuer: establishes and terminates cookie-referenced sessions.
//!
//! The issuer owns all session state. Handlers only ever see opaque
//! `Set-Cookie` values, never tokens or the session table itself.

use super::{state::AuthConfig, types::SessionClaims};
use anyhow::{Context, Result};
use async_trait::async_trait;
use axum::http::{header::COOKIE, HeaderMap, HeaderValue};
use base64ct::{Base64UrlUnpadded, Encoding};
use rand::{rngs::OsRng, RngCore};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

pub const SESSION_COOKIE_NAME: &str = "horaro_session";

/// Collaborator that owns authenticated session state.
///
/// `establish` hands back the `Set-Cookie` value carrying the new session;
/// `terminate` drops whatever session the request presented and returns the
/// clearing cookie. Terminating an absent session is not an error.
#[async_trait]
pub trait SessionIssuer: Send + Sync {
    async fn establish(&self, claims: SessionClaims, persistent: bool) -> Result<HeaderValue>;
    async fn terminate(&self, headers: &HeaderMap) -> Result<HeaderValue>;
    async fn current(&self, headers: &HeaderMap) -> Option<SessionClaims>;
}

struct SessionEntry {
    claims: SessionClaims,
    expires_at: Instant,
}

/// In-memory session table keyed by opaque random tokens.
///
/// Suitable for a single-instance deployment; the trait is the seam for a
/// shared backend.
pub struct InMemorySessions {
    sessions: Mutex<HashMap<String, SessionEntry>>,
    session_ttl: Duration,
    remember_ttl: Duration,
    cookie_secure: bool,
}

impl InMemorySessions {
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            session_ttl: seconds(config.session_ttl_seconds()),
            remember_ttl: seconds(config.remember_ttl_seconds()),
            cookie_secure: config.session_cookie_secure(),
        }
    }

    /// Build the session cookie. Remember-me sessions get a `Max-Age` so the
    /// browser persists them; everything else is a browser-session cookie.
    fn session_cookie(&self, token: &str, persistent: bool) -> Result<HeaderValue> {
        let mut cookie = format!("{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax");
        if persistent {
            cookie.push_str(&format!("; Max-Age={}", self.remember_ttl.as_secs()));
        }
        if self.cookie_secure {
            cookie.push_str("; Secure");
        }
        HeaderValue::from_str(&cookie).context("Invalid session cookie value")
    }

    fn clear_session_cookie(&self) -> Result<HeaderValue> {
        let mut cookie =
            format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
        if self.cookie_secure {
            cookie.push_str("; Secure");
        }
        HeaderValue::from_str(&cookie).context("Invalid clearing cookie value")
    }
}

#[async_trait]
impl SessionIssuer for InMemorySessions {
    async fn establish(&self, claims: SessionClaims, persistent: bool) -> Result<HeaderValue> {
        let token = generate_session_token()?;
        let ttl = if persistent {
            self.remember_ttl
        } else {
            self.session_ttl
        };

        let mut sessions = self.sessions.lock().await;
        let now = Instant::now();
        sessions.retain(|_, entry| entry.expires_at > now);
        sessions.insert(
            token.clone(),
            SessionEntry {
                claims,
                expires_at: now + ttl,
            },
        );
        drop(sessions);

        self.session_cookie(&token, persistent)
    }

    async fn terminate(&self, headers: &HeaderMap) -> Result<HeaderValue> {
        if let Some(token) = extract_session_token(headers) {
            let mut sessions = self.sessions.lock().await;
            sessions.remove(&token);
        }
        // Always clear the cookie, even if no session record existed.
        self.clear_session_cookie()
    }

    async fn current(&self, headers: &HeaderMap) -> Option<SessionClaims> {
        let token = extract_session_token(headers)?;
        let mut sessions = self.sessions.lock().await;
        match sessions.get(&token) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.claims.clone()),
            Some(_) => {
                sessions.remove(&token);
                None
            }
            None => None,
        }
    }
}

const fn seconds(value: i64) -> Duration {
    if value > 0 {
        Duration::from_secs(value as u64)
    } else {
        Duration::ZERO
    }
}

/// Create a new session token for the auth cookie. The raw value only ever
/// lives in the cookie; the table keys on the same opaque string.
fn generate_session_token() -> Result<String> {
    let mut bytes = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut bytes)
        .context("failed to generate session token")?;
    Ok(Base64UrlUnpadded::encode_string(&bytes))
}

fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(COOKIE)?;
    let value = header.to_str().ok()?;
    for pair in value.split(';') {
        let trimmed = pair.trim();
        let mut parts = trimmed.splitn(2, '=');
        let key = parts.next()?.trim();
        let val = parts.next()?.trim();
        if key == SESSION_COOKIE_NAME {
            return Some(val.to_string());
        }
    }
    None
}
