//! Request, form, and identity types for the login flow.

use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

/// Portal roles. The set is closed; anything else collapses to
/// `Unspecified` when a user store is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Lecturer,
    Coordinator,
    Manager,
    Unspecified,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lecturer => "lecturer",
            Self::Coordinator => "coordinator",
            Self::Manager => "manager",
            Self::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "lecturer" => Self::Lecturer,
            "coordinator" => Self::Coordinator,
            "manager" => Self::Manager,
            _ => Self::Unspecified,
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// A user as the credential validator sees it. Read-only to the login flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub user_id: Uuid,
    pub username: String,
    pub full_name: String,
    pub role: Role,
}

/// The four identity attributes attached to every authenticated session.
///
/// All four are always present; a session missing any of them is never
/// issued. The pair order is fixed and observable via [`Self::pairs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionClaims {
    pub subject: String,
    pub display_name: String,
    pub given_name: String,
    pub role: Role,
}

impl SessionClaims {
    #[must_use]
    pub fn from_user(user: &UserRecord) -> Self {
        Self {
            subject: user.user_id.to_string(),
            display_name: user.full_name.clone(),
            given_name: user.username.clone(),
            role: user.role,
        }
    }

    /// Ordered (type, value) view of the claims.
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, &str); 4] {
        [
            ("sub", self.subject.as_str()),
            ("name", self.display_name.as_str()),
            ("given_name", self.given_name.as_str()),
            ("role", self.role.as_str()),
        ]
    }
}

/// Query parameters for the login form.
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    #[serde(default)]
    pub return_url: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Submitted login form. The password is dropped with the request and never
/// echoed back or logged.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: SecretString,
    #[serde(default)]
    pub remember_me: Option<String>,
    #[serde(default)]
    pub return_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_lowercase() {
        assert_eq!(Role::from("Lecturer"), Role::Lecturer);
        assert_eq!(Role::from(" manager "), Role::Manager);
        assert_eq!(Role::from("director"), Role::Unspecified);
        assert_eq!(Role::Coordinator.as_str(), "coordinator");
    }

    #[test]
    fn role_deserializes_unknown_as_unspecified() {
        let role: Role = serde_json::from_str("\"auditor\"").unwrap();
        assert_eq!(role, Role::Unspecified);
        let role: Role = serde_json::from_str("\"lecturer\"").unwrap();
        assert_eq!(role, Role::Lecturer);
    }

    #[test]
    fn claims_carry_all_four_attributes_in_order() {
        let user = UserRecord {
            user_id: Uuid::nil(),
            username: "amahlangu".to_string(),
            full_name: "Ayanda Mahlangu".to_string(),
            role: Role::Lecturer,
        };
        let claims = SessionClaims::from_user(&user);
        let pairs = claims.pairs();
        assert_eq!(
            pairs,
            [
                ("sub", "00000000-0000-0000-0000-000000000000"),
                ("name", "Ayanda Mahlangu"),
                ("given_name", "amahlangu"),
                ("role", "lecturer"),
            ]
        );
    }

    #[test]
    fn login_form_debug_redacts_password() {
        let form: LoginForm =
            serde_json::from_str(r#"{"username":"alice","password":"hunter2"}"#).unwrap();
        let debug = format!("{form:?}");
        assert!(!debug.contains("hunter2"));
    }
}
