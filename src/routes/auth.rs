//! /auth route group.

use crate::handlers::auth::{login, login_form, logout, register, register_form};
use crate::state::AppState;
use axum::{routing::get, Router};

/// Paths are relative to `AUTH_PREFIX`.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", get(register_form).post(register))
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
}
