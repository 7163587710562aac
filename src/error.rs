//! Typed errors and HTTP mapping.

use crate::routes::LOGIN_PATH;
use crate::templates;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config load: {0}")]
    Load(#[from] config::ConfigError),
    #[error("instance path {}: {source}", .path.display())]
    InstancePath {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Registration and login failures. The display text is what the form shows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username is required.")]
    UsernameRequired,
    #[error("Password is required.")]
    PasswordRequired,
    #[error("Password must be at most {0} bytes.")]
    PasswordTooLong(usize),
    #[error("User {0} is already registered.")]
    DuplicateUser(String),
    #[error("Incorrect username.")]
    IncorrectUsername,
    #[error("Incorrect password.")]
    IncorrectPassword,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("forbidden")]
    Forbidden,
    #[error("login required")]
    LoginRequired,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("password hash: {0}")]
    Password(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::LoginRequired => return Redirect::to(LOGIN_PATH).into_response(),
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            // Form failures are shown on the page, like the re-rendered forms do.
            AppError::Auth(_) | AppError::Validation(_) => StatusCode::OK,
            AppError::Db(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::Config(_)
            | AppError::Db(_)
            | AppError::Password(_)
            | AppError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        // Internal details stay in the log.
        let message = if status.is_server_error() {
            None
        } else {
            Some(self.to_string())
        };
        (status, templates::error_page(status, message.as_deref())).into_response()
    }
}
