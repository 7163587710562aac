//! Routes outside the auth and blog groups.

use crate::state::AppState;
use axum::{routing::get, Router};

pub const GREETING: &str = "Hello, World! My name is Los🐍";

async fn hello() -> &'static str {
    GREETING
}

/// GET /hello
pub fn common_routes() -> Router<AppState> {
    Router::new().route("/hello", get(hello))
}
