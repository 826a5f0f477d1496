//! Credential validator backed by a static user list.

use super::types::{Role, UserRecord};
use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::{fs, path::Path};
use uuid::Uuid;

/// External credential validator: maps a username/password pair to a user
/// record, or nothing.
///
/// Implementations must not reveal through their behavior whether the
/// username exists; the caller reports the same generic error either way.
pub trait UserStore: Send + Sync {
    fn validate(&self, username: &str, password: &SecretString) -> Option<UserRecord>;
}

#[derive(Debug, Deserialize)]
struct StoredUser {
    user_id: Uuid,
    username: String,
    full_name: String,
    password: SecretString,
    role: Role,
}

impl StoredUser {
    fn record(&self) -> UserRecord {
        UserRecord {
            user_id: self.user_id,
            username: self.username.clone(),
            full_name: self.full_name.clone(),
            role: self.role,
        }
    }
}

/// User store loaded once at startup from a JSON file.
#[derive(Debug)]
pub struct StaticUserStore {
    users: Vec<StoredUser>,
}

impl StaticUserStore {
    /// Load the store from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read user store: {}", path.display()))?;
        Self::from_json(&contents)
    }

    /// Parse the store from a JSON array of user objects.
    ///
    /// # Errors
    /// Returns an error if the JSON does not match the expected shape.
    pub fn from_json(contents: &str) -> Result<Self> {
        let users: Vec<StoredUser> =
            serde_json::from_str(contents).context("Invalid user store JSON")?;
        Ok(Self { users })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserStore for StaticUserStore {
    fn validate(&self, username: &str, password: &SecretString) -> Option<UserRecord> {
        let mut matched = None;
        // Scan the whole list so the amount of work does not depend on
        // whether the username exists.
        for user in &self.users {
            let name_match = user.username == username;
            let password_match = user.password.expose_secret() == password.expose_secret();
            if name_match && password_match && matched.is_none() {
                matched = Some(user.record());
            }
        }
        matched
    }
}
