//! Handlers for login, logout, denied-access, and the default landing view.

use super::{
    page::{self, LoginPage},
    preset::role_preset,
    state::AuthState,
    types::{LoginForm, LoginQuery, SessionClaims},
    utils::{checkbox_checked, resolve_return_url},
};
use axum::{
    extract::{Extension, Query},
    http::{
        header::{LOCATION, SET_COOKIE},
        HeaderMap, HeaderValue, StatusCode,
    },
    response::{IntoResponse, Json, Response},
    Form,
};
use std::sync::Arc;
use tracing::{error, info};

const INVALID_CREDENTIALS: &str = "Invalid username or password.";

/// `GET /login`: render the form, optionally prefilled from a role hint.
pub async fn login_page(query: Option<Query<LoginQuery>>) -> impl IntoResponse {
    let query = query.map_or_else(
        || LoginQuery {
            return_url: None,
            role: None,
        },
        |Query(query)| query,
    );

    let preset = role_preset(query.role.as_deref().unwrap_or(""));

    page::render(&LoginPage {
        username: preset,
        return_url: query.return_url.as_deref(),
        error: None,
    })
}

/// `POST /login`: validate the credential pair and establish a session.
pub async fn login(
    state: Extension<Arc<AuthState>>,
    payload: Option<Form<LoginForm>>,
) -> Response {
    let Some(Form(form)) = payload else {
        return (StatusCode::BAD_REQUEST, "Missing form payload".to_string()).into_response();
    };

    let Some(user) = state.store().validate(form.username.trim(), &form.password) else {
        // Same message for unknown users and wrong passwords, so responses
        // cannot be used to enumerate accounts.
        info!("Login rejected");
        return page::render(&LoginPage {
            username: &form.username,
            return_url: form.return_url.as_deref(),
            error: Some(INVALID_CREDENTIALS),
        })
        .into_response();
    };

    let claims = SessionClaims::from_user(&user);
    let persistent = checkbox_checked(form.remember_me.as_deref());

    let cookie = match state.sessions().establish(claims, persistent).await {
        Ok(cookie) => cookie,
        Err(err) => {
            error!("Failed to establish session: {err}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    info!(username = %user.username, role = %user.role, "Login successful");

    let target = resolve_return_url(form.return_url.as_deref(), state.config().landing_path());
    redirect(target, Some(cookie))
}

/// `POST /logout`: terminate whatever session the request presented.
/// Idempotent; a missing session still redirects to the login form.
pub async fn logout(headers: HeaderMap, state: Extension<Arc<AuthState>>) -> Response {
    match state.sessions().terminate(&headers).await {
        Ok(clear_cookie) => redirect("/login", Some(clear_cookie)),
        Err(err) => {
            error!("Failed to terminate session: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// `GET /denied`: fixed denial text.
pub async fn denied() -> impl IntoResponse {
    "Access denied."
}

/// `GET /dashboard`: the default landing view. Shows the signed-in identity
/// or bounces anonymous visitors back to the login form.
pub async fn dashboard(headers: HeaderMap, state: Extension<Arc<AuthState>>) -> Response {
    match state.sessions().current(&headers).await {
        Some(claims) => (StatusCode::OK, Json(claims)).into_response(),
        None => redirect("/login?return_url=/dashboard", None),
    }
}

fn redirect(target: &str, cookie: Option<HeaderValue>) -> Response {
    let mut headers = HeaderMap::new();
    match HeaderValue::from_str(target) {
        Ok(location) => {
            headers.insert(LOCATION, location);
        }
        Err(err) => {
            error!("Invalid redirect target: {err}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    }
    if let Some(cookie) = cookie {
        headers.insert(SET_COOKIE, cookie);
    }
    (StatusCode::SEE_OTHER, headers).into_response()
}
