//! Post list, create, update and delete handlers.

use crate::db::RequestDb;
use crate::error::AppError;
use crate::extractors::CurrentUser;
use crate::routes::INDEX_PATH;
use crate::service::{PostForm, PostService};
use crate::store::PostStore;
use crate::templates;
use axum::{
    extract::Path,
    response::{IntoResponse, Redirect, Response},
    Form,
};

/// GET /
pub async fn index(current: CurrentUser, db: RequestDb) -> Result<impl IntoResponse, AppError> {
    let posts = {
        let mut conn = db.get().await?;
        PostStore::list(&mut conn).await?
    };
    Ok(templates::blog::index(current.get(), &posts))
}

/// GET /create
pub async fn create_form(current: CurrentUser) -> Result<impl IntoResponse, AppError> {
    let user = current.require()?;
    Ok(templates::blog::create(Some(user), &PostForm::default(), None))
}

/// POST /create
pub async fn create(
    current: CurrentUser,
    db: RequestDb,
    Form(form): Form<PostForm>,
) -> Result<Response, AppError> {
    let user = current.require()?;
    let outcome = {
        let mut conn = db.get().await?;
        PostService::create(&mut conn, user, &form).await
    };
    match outcome {
        Ok(id) => {
            tracing::info!(post_id = id, user_id = user.id, "post created");
            Ok(Redirect::to(INDEX_PATH).into_response())
        }
        Err(AppError::Validation(message)) => {
            Ok(templates::blog::create(Some(user), &form, Some(&message)).into_response())
        }
        Err(e) => Err(e),
    }
}

/// GET /:id/update
pub async fn update_form(
    current: CurrentUser,
    db: RequestDb,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = current.require()?;
    let post = {
        let mut conn = db.get().await?;
        PostService::get(&mut conn, id, Some(user)).await?
    };
    let form = PostForm {
        title: post.title,
        body: post.body,
    };
    Ok(templates::blog::update(Some(user), id, &form, None))
}

/// POST /:id/update
pub async fn update(
    current: CurrentUser,
    db: RequestDb,
    Path(id): Path<i64>,
    Form(form): Form<PostForm>,
) -> Result<Response, AppError> {
    let user = current.require()?;
    let outcome = {
        let mut conn = db.get().await?;
        PostService::update(&mut conn, id, user, &form).await
    };
    match outcome {
        Ok(()) => {
            tracing::info!(post_id = id, "post updated");
            Ok(Redirect::to(INDEX_PATH).into_response())
        }
        Err(AppError::Validation(message)) => {
            Ok(templates::blog::update(Some(user), id, &form, Some(&message)).into_response())
        }
        Err(e) => Err(e),
    }
}

/// POST /:id/delete
pub async fn delete(
    current: CurrentUser,
    db: RequestDb,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    let user = current.require()?;
    {
        let mut conn = db.get().await?;
        PostService::delete(&mut conn, id, user).await?;
    }
    tracing::info!(post_id = id, "post deleted");
    Ok(Redirect::to(INDEX_PATH))
}
