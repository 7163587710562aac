//! Register, login and logout handlers.

use crate::db::RequestDb;
use crate::error::AppError;
use crate::extractors::CurrentUser;
use crate::routes::{INDEX_PATH, LOGIN_PATH};
use crate::service::{AuthService, Credentials};
use crate::session::SessionCookie;
use crate::state::AppState;
use crate::templates;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};

/// GET /auth/register
pub async fn register_form(current: CurrentUser) -> impl IntoResponse {
    templates::auth::register(current.get(), "", None)
}

/// POST /auth/register: create the account, then send the user to the login page.
pub async fn register(
    State(state): State<AppState>,
    current: CurrentUser,
    db: RequestDb,
    Form(form): Form<Credentials>,
) -> Result<Response, AppError> {
    let outcome = {
        let mut conn = db.get().await?;
        AuthService::register(&mut conn, &form, state.settings.bcrypt_cost).await
    };
    match outcome {
        Ok(id) => {
            tracing::info!(user_id = id, username = %form.username, "registered");
            Ok(Redirect::to(LOGIN_PATH).into_response())
        }
        Err(AppError::Auth(failure)) => {
            let message = failure.to_string();
            Ok(templates::auth::register(current.get(), &form.username, Some(&message)).into_response())
        }
        Err(e) => Err(e),
    }
}

/// GET /auth/login
pub async fn login_form(current: CurrentUser) -> impl IntoResponse {
    templates::auth::login(current.get(), "", None)
}

/// POST /auth/login: on success the session cookie is rewritten to hold only the user's id.
pub async fn login(
    session: SessionCookie,
    current: CurrentUser,
    db: RequestDb,
    Form(form): Form<Credentials>,
) -> Result<Response, AppError> {
    let outcome = {
        let mut conn = db.get().await?;
        AuthService::authenticate(&mut conn, &form).await
    };
    match outcome {
        Ok(user) => {
            session.log_in(user.id);
            tracing::info!(user_id = user.id, "logged in");
            Ok(Redirect::to(INDEX_PATH).into_response())
        }
        Err(AppError::Auth(failure)) => {
            let message = failure.to_string();
            Ok(templates::auth::login(current.get(), &form.username, Some(&message)).into_response())
        }
        Err(e) => Err(e),
    }
}

/// GET /auth/logout
pub async fn logout(session: SessionCookie, current: CurrentUser) -> Redirect {
    session.log_out();
    if let Some(user) = current.get() {
        tracing::info!(user_id = user.id, "logged out");
    }
    Redirect::to(INDEX_PATH)
}
