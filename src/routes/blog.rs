//! Blog routes. Everything but the index sits behind `login_required`.

use crate::auth::login_required;
use crate::handlers::blog::{create, create_form, delete, index, update, update_form};
use crate::state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

pub fn blog_routes() -> Router<AppState> {
    let authored = Router::new()
        .route("/create", get(create_form).post(create))
        .route("/:id/update", get(update_form).post(update))
        .route("/:id/delete", post(delete))
        .route_layer(middleware::from_fn(login_required));

    Router::new().route("/", get(index)).merge(authored)
}
