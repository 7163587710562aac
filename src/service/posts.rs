//! Post lookups with the author check used by edit and delete.

use crate::error::AppError;
use crate::service::validation::{PostForm, RequestValidator};
use crate::store::{Post, PostStore, User};
use sqlx::sqlite::SqliteConnection;

pub struct PostService;

impl PostService {
    /// Fetch a post. With `author` set, the post must belong to that user.
    pub async fn get(
        conn: &mut SqliteConnection,
        id: i64,
        author: Option<&User>,
    ) -> Result<Post, AppError> {
        let post = PostStore::find(conn, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post id {} doesn't exist.", id)))?;
        if let Some(user) = author {
            if post.author_id != user.id {
                return Err(AppError::Forbidden);
            }
        }
        Ok(post)
    }

    pub async fn create(
        conn: &mut SqliteConnection,
        author: &User,
        form: &PostForm,
    ) -> Result<i64, AppError> {
        RequestValidator::post(form)?;
        PostStore::insert(conn, author.id, &form.title, &form.body).await
    }

    pub async fn update(
        conn: &mut SqliteConnection,
        id: i64,
        author: &User,
        form: &PostForm,
    ) -> Result<(), AppError> {
        Self::get(conn, id, Some(author)).await?;
        RequestValidator::post(form)?;
        PostStore::update(conn, id, &form.title, &form.body).await
    }

    pub async fn delete(conn: &mut SqliteConnection, id: i64, author: &User) -> Result<(), AppError> {
        Self::get(conn, id, Some(author)).await?;
        PostStore::delete(conn, id).await
    }
}
