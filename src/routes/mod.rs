//! Route groups, their paths, and the assembled application router.

pub mod auth;
pub mod blog;
pub mod common;

pub use auth::auth_routes;
pub use blog::blog_routes;
pub use common::common_routes;

use crate::auth::load_logged_in_user;
use crate::db::db_scope;
use crate::error::AppError;
use crate::state::AppState;
use axum::{middleware, Router};
use tower::ServiceBuilder;
use tower_cookies::CookieManagerLayer;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

pub const INDEX_PATH: &str = "/";
pub const AUTH_PREFIX: &str = "/auth";
pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGIN_PATH: &str = "/auth/login";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const CREATE_PATH: &str = "/create";

/// Form posts are small.
const BODY_LIMIT: usize = 64 * 1024;

async fn not_found() -> AppError {
    AppError::NotFound("The requested URL was not found on the server.".into())
}

/// The whole application. Layers run outermost first: tracing, body limit, cookies,
/// request database scope, current-user loading.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .nest(AUTH_PREFIX, auth_routes())
        .merge(blog_routes())
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), load_logged_in_user))
        .layer(middleware::from_fn_with_state(state.clone(), db_scope))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
                .layer(CookieManagerLayer::new()),
        )
        .with_state(state)
}
