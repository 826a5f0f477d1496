use crate::cli::actions::Action;
use crate::horaro::{
    self,
    handlers::auth::{
        session::InMemorySessions,
        state::{AuthConfig, AuthState},
        store::StaticUserStore,
    },
};
use anyhow::{Context, Result};
use std::{path::PathBuf, sync::Arc};

/// Server arguments resolved from CLI matches.
pub struct Args {
    pub port: u16,
    pub users_path: PathBuf,
    pub base_url: String,
    pub session_ttl_seconds: i64,
    pub remember_ttl_seconds: i64,
}

/// Handle the server action
///
/// # Errors
/// Returns an error if the user store cannot be loaded or the server fails
pub async fn handle(action: Action) -> Result<()> {
    let Action::Server(args) = action;

    let store = StaticUserStore::from_path(&args.users_path).with_context(|| {
        format!(
            "Failed to load user store from {}",
            args.users_path.display()
        )
    })?;

    let config = AuthConfig::new(args.base_url)
        .with_session_ttl_seconds(args.session_ttl_seconds)
        .with_remember_ttl_seconds(args.remember_ttl_seconds);

    let sessions = InMemorySessions::new(&config);
    let state = Arc::new(AuthState::new(config, Arc::new(store), Arc::new(sessions)));

    horaro::new(args.port, state).await?;

    Ok(())
}
