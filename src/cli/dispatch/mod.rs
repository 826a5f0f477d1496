//! Command-line argument dispatch and server initialization.
//!
//! This module parses validated CLI arguments and maps them to the
//! appropriate action, such as starting the HTTP server with its session
//! configuration.

use crate::cli::actions::{server::Args, Action};
use crate::cli::commands::{
    ARG_BASE_URL, ARG_PORT, ARG_REMEMBER_TTL, ARG_SESSION_TTL, ARG_USERS,
};
use anyhow::{Context, Result};
use std::path::PathBuf;
use url::Url;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8080);
    let users_path = matches
        .get_one::<String>(ARG_USERS)
        .map(PathBuf::from)
        .context("missing required argument: --users")?;
    let base_url = matches
        .get_one::<String>(ARG_BASE_URL)
        .cloned()
        .context("missing required argument: --base-url")?;

    Url::parse(&base_url).with_context(|| format!("Invalid base URL: {base_url}"))?;
    let session_ttl_seconds = matches
        .get_one::<i64>(ARG_SESSION_TTL)
        .copied()
        .unwrap_or(43200);
    let remember_ttl_seconds = matches
        .get_one::<i64>(ARG_REMEMBER_TTL)
        .copied()
        .unwrap_or(1_209_600);

    Ok(Action::Server(Args {
        port,
        users_path,
        base_url,
        session_ttl_seconds,
        remember_ttl_seconds,
    }))
}
