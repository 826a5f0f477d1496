//! # Horaro (Timesheet Portal Login Service)
//!
//! `horaro` is the authentication front door for the timesheet portal. It
//! renders the login form, checks submitted credentials against an injected
//! user store, and establishes or terminates cookie-referenced sessions
//! through a session issuer.
//!
//! ## Authentication flow
//!
//! - `GET /login` renders the form, optionally prefilled from a role hint
//!   (`?role=lecturer` and friends map to fixed UI presets).
//! - `POST /login` validates the credential pair. Unknown users and wrong
//!   passwords are indistinguishable in the response to prevent account
//!   enumeration.
//! - Successful logins carry exactly four identity claims: subject, display
//!   name, given name, and role.
//! - `return_url` redirects are only honored for local paths; absolute URLs
//!   fall back to the dashboard (open-redirect guard).
//!
//! ## Sessions
//!
//! Sessions are referenced by an opaque random token in an `HttpOnly` cookie.
//! The issuer owns expiry: remember-me logins get a persistent cookie, all
//! others a browser-session cookie backed by a server-side TTL.

pub mod cli;
pub mod horaro;
