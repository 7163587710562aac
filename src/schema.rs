//! Schema setup. Drops and recreates the `user` and `post` tables.

use crate::db::Database;
use crate::error::AppError;
use sqlx::sqlite::SqliteConnection;
use sqlx::Connection;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Run the schema script on `conn`. Existing data is lost.
pub async fn init_db(conn: &mut SqliteConnection) -> Result<(), AppError> {
    sqlx::raw_sql(SCHEMA_SQL).execute(&mut *conn).await?;
    Ok(())
}

/// `init-db`: open the configured database, reset the schema, close.
pub async fn init_db_command(database: &Database) -> Result<(), AppError> {
    let mut conn = database.connect().await?;
    init_db(&mut conn).await?;
    conn.close().await?;
    tracing::info!("schema initialized");
    Ok(())
}
