//! Parameterized queries over the `user` and `post` tables.

use crate::error::{AppError, AuthError};
use chrono::NaiveDateTime;
use sqlx::sqlite::SqliteConnection;
use sqlx::FromRow;

#[derive(Clone, Debug, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// bcrypt hash.
    pub password: String,
}

/// A post joined with its author's username.
#[derive(Clone, Debug, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created: NaiveDateTime,
    pub author_id: i64,
    pub username: String,
}

pub struct UserStore;

impl UserStore {
    /// Insert a user. A taken username maps to `AuthError::DuplicateUser`.
    pub async fn insert(
        conn: &mut SqliteConnection,
        username: &str,
        password_hash: &str,
    ) -> Result<i64, AppError> {
        let result = sqlx::query("INSERT INTO user (username, password) VALUES (?, ?)")
            .bind(username)
            .bind(password_hash)
            .execute(&mut *conn)
            .await;
        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(AuthError::DuplicateUser(username.to_string()).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_by_username(
        conn: &mut SqliteConnection,
        username: &str,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT id, username, password FROM user WHERE username = ?")
            .bind(username)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(user)
    }

    pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT id, username, password FROM user WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(user)
    }

    pub async fn count_by_username(conn: &mut SqliteConnection, username: &str) -> Result<i64, AppError> {
        let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user WHERE username = ?")
            .bind(username)
            .fetch_one(&mut *conn)
            .await?;
        Ok(n)
    }
}

const POST_COLUMNS: &str = "p.id, p.title, p.body, p.created, p.author_id, u.username";

pub struct PostStore;

impl PostStore {
    /// All posts, newest first.
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Post>, AppError> {
        let sql = format!(
            "SELECT {} FROM post p JOIN user u ON p.author_id = u.id ORDER BY p.created DESC, p.id DESC",
            POST_COLUMNS
        );
        let posts = sqlx::query_as::<_, Post>(&sql).fetch_all(&mut *conn).await?;
        Ok(posts)
    }

    pub async fn find(conn: &mut SqliteConnection, id: i64) -> Result<Option<Post>, AppError> {
        let sql = format!(
            "SELECT {} FROM post p JOIN user u ON p.author_id = u.id WHERE p.id = ?",
            POST_COLUMNS
        );
        let post = sqlx::query_as::<_, Post>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(post)
    }

    pub async fn insert(
        conn: &mut SqliteConnection,
        author_id: i64,
        title: &str,
        body: &str,
    ) -> Result<i64, AppError> {
        let done = sqlx::query("INSERT INTO post (title, body, author_id) VALUES (?, ?, ?)")
            .bind(title)
            .bind(body)
            .bind(author_id)
            .execute(&mut *conn)
            .await?;
        Ok(done.last_insert_rowid())
    }

    pub async fn update(
        conn: &mut SqliteConnection,
        id: i64,
        title: &str,
        body: &str,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE post SET title = ?, body = ? WHERE id = ?")
            .bind(title)
            .bind(body)
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM post WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
