//! Password hashing. bcrypt embeds a random salt in each hash; both calls run on the blocking pool.

use crate::error::AppError;

/// bcrypt only reads this many bytes of input.
pub const MAX_PASSWORD_LENGTH: usize = 72;

/// Callers reject longer passwords first; bcrypt would silently drop the excess.
pub async fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::Internal(format!("hash task: {}", e)))?
        .map_err(|e| AppError::Password(e.to_string()))
}

/// `Ok(false)` on mismatch, including any password longer than bcrypt reads;
/// `Err` only when the stored hash cannot be read.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    if password.len() > MAX_PASSWORD_LENGTH {
        return Ok(false);
    }
    let password = password.to_string();
    let hash = hash.to_string();
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::Internal(format!("verify task: {}", e)))?
        .map_err(|e| AppError::Password(e.to_string()))
}
