//! The signed `session` cookie and the user id it carries. The cookie is the whole
//! session: nothing about it is kept on the server.

use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use sha2::{Digest, Sha512};
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies, Key};

pub const SESSION_COOKIE: &str = "session";

/// Stretch the configured secret to the 64 bytes the cookie signer needs.
pub fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Request handle on the session cookie. Reads verify the signature; writes are signed.
#[derive(Clone)]
pub struct SessionCookie {
    cookies: Cookies,
    key: Key,
    secure: bool,
}

impl SessionCookie {
    pub fn new(cookies: Cookies, key: Key, secure: bool) -> Self {
        SessionCookie {
            cookies,
            key,
            secure,
        }
    }

    /// `None` when the cookie is missing, unsigned, tampered or not an id.
    pub fn user_id(&self) -> Option<i64> {
        self.cookies
            .signed(&self.key)
            .get(SESSION_COOKIE)
            .and_then(|cookie| cookie.value().parse().ok())
    }

    /// Replace whatever the cookie held with `user_id` alone.
    pub fn log_in(&self, user_id: i64) {
        self.cookies.signed(&self.key).add(self.cookie(user_id.to_string()));
    }

    /// Tell the browser to drop the cookie.
    pub fn log_out(&self) {
        self.cookies.remove(self.cookie(String::new()));
    }

    /// Lives until the browser session ends: no `Max-Age`, no `Expires`.
    fn cookie(&self, value: String) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, value))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .build()
    }
}

#[async_trait]
impl FromRequestParts<AppState> for SessionCookie {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let cookies = Cookies::from_request_parts(parts, state)
            .await
            .map_err(|(_, reason)| AppError::Internal(reason.to_string()))?;
        Ok(SessionCookie::new(
            cookies,
            state.cookie_key.clone(),
            state.settings.secure_cookies,
        ))
    }
}
