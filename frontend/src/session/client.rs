//! HTTP calls backing the session store. All take the credential-forwarding
//! path through [`crate::api`] so the session cookie round-trips.

use gloo_console::log;

use common::model::user::User;
use common::requests::{LoginRequest, SignupRequest};

use crate::api;

/// Resolves the current session from `/auth/me`. Any failure, transport or
/// HTTP, means "not authenticated".
pub async fn fetch_current_user() -> Option<User> {
    match api::get_json::<User>("/auth/me").await {
        Ok(user) => Some(user),
        Err(err) => {
            log!(format!("session check: {err}"));
            None
        }
    }
}

pub async fn login(email: String, password: String) -> Result<User, String> {
    api::post_json("/auth/login", &LoginRequest { email, password })
        .await
        .map_err(|err| err.to_string())
}

pub async fn signup(email: String, username: String, password: String) -> Result<User, String> {
    api::post_json(
        "/auth/signup",
        &SignupRequest {
            email,
            username,
            password,
        },
    )
    .await
    .map_err(|err| err.to_string())
}

/// Best-effort server-side logout. A failed request is logged and otherwise
/// ignored; local state is cleared either way.
pub async fn logout() {
    if let Err(err) = api::post_empty("/auth/logout").await {
        log!(format!("logout request failed, clearing state anyway: {err}"));
    }
}
