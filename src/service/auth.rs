//! Registration and credential checks.

use crate::error::{AppError, AuthError};
use crate::password::{hash_password, verify_password};
use crate::service::validation::{Credentials, RequestValidator};
use crate::store::{User, UserStore};
use sqlx::sqlite::SqliteConnection;
use sqlx::Connection;

pub struct AuthService;

impl AuthService {
    /// Validate, hash and insert in one transaction. Returns the new user id.
    pub async fn register(
        conn: &mut SqliteConnection,
        form: &Credentials,
        bcrypt_cost: u32,
    ) -> Result<i64, AppError> {
        RequestValidator::credentials(form)?;
        let hash = hash_password(&form.password, bcrypt_cost).await?;
        let mut tx = conn.begin().await?;
        let id = UserStore::insert(&mut *tx, &form.username, &hash).await?;
        tx.commit().await?;
        Ok(id)
    }

    /// Exact username lookup, then hash comparison.
    pub async fn authenticate(
        conn: &mut SqliteConnection,
        form: &Credentials,
    ) -> Result<User, AppError> {
        let user = UserStore::find_by_username(conn, &form.username)
            .await?
            .ok_or(AuthError::IncorrectUsername)?;
        if !verify_password(&form.password, &user.password).await? {
            return Err(AuthError::IncorrectPassword.into());
        }
        Ok(user)
    }
}
