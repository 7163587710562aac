//! Form payloads and their required-field checks.

use crate::error::{AppError, AuthError};
use crate::password::MAX_PASSWORD_LENGTH;
use serde::Deserialize;

/// Register and login form. A missing field is read as empty.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Create and update form for posts.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

pub struct RequestValidator;

impl RequestValidator {
    /// Username first, then password.
    pub fn credentials(form: &Credentials) -> Result<(), AuthError> {
        if form.username.is_empty() {
            return Err(AuthError::UsernameRequired);
        }
        if form.password.is_empty() {
            return Err(AuthError::PasswordRequired);
        }
        if form.password.len() > MAX_PASSWORD_LENGTH {
            return Err(AuthError::PasswordTooLong(MAX_PASSWORD_LENGTH));
        }
        Ok(())
    }

    pub fn post(form: &PostForm) -> Result<(), AppError> {
        if form.title.is_empty() {
            return Err(AppError::Validation("Title is required.".into()));
        }
        Ok(())
    }
}
