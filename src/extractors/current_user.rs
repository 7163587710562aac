//! The user behind the current request, as loaded by `auth::load_logged_in_user`.

use crate::error::AppError;
use crate::store::User;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

/// `None` for anonymous requests.
#[derive(Clone, Debug, Default)]
pub struct CurrentUser(pub Option<User>);

impl CurrentUser {
    pub fn get(&self) -> Option<&User> {
        self.0.as_ref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.0.is_none()
    }

    /// The logged-in user, or `AppError::LoginRequired`.
    pub fn require(&self) -> Result<&User, AppError> {
        self.0.as_ref().ok_or(AppError::LoginRequired)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<CurrentUser>().cloned().unwrap_or_default())
    }
}
