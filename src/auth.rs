//! Per-request user loading and the login-required gate.

use crate::db::RequestDb;
use crate::error::AppError;
use crate::extractors::CurrentUser;
use crate::session::SessionCookie;
use crate::store::UserStore;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Middleware: resolve the session's user id into a `CurrentUser` request extension.
/// An id whose row is gone loads as anonymous.
pub async fn load_logged_in_user(
    session: SessionCookie,
    db: RequestDb,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = match session.user_id() {
        None => None,
        Some(id) => {
            let mut conn = db.get().await?;
            let user = UserStore::find_by_id(&mut conn, id).await?;
            if user.is_none() {
                tracing::debug!(user_id = id, "session refers to a missing user");
            }
            user
        }
    };
    req.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(req).await)
}

/// Route layer: send anonymous requests to the login page instead of the handler.
pub async fn login_required(current: CurrentUser, req: Request, next: Next) -> Response {
    if current.is_anonymous() {
        return AppError::LoginRequired.into_response();
    }
    next.run(req).await
}
