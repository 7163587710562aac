//! Per-request database access. A request opens at most one SQLite connection, on first use,
//! and the `db_scope` middleware closes it once the response is produced.

use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::{MappedMutexGuard, Mutex, MutexGuard};

/// Connection settings shared by every request.
#[derive(Clone, Debug)]
pub struct Database {
    options: Arc<SqliteConnectOptions>,
}

impl Database {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);
        Database {
            options: Arc::new(options),
        }
    }

    /// Open a standalone connection (CLI commands, tests).
    pub async fn connect(&self) -> Result<SqliteConnection, sqlx::Error> {
        self.options.connect().await
    }

    /// A fresh, not yet opened, request-scoped handle.
    pub fn request_scope(&self) -> RequestDb {
        RequestDb {
            database: self.clone(),
            conn: Arc::new(Mutex::new(None)),
        }
    }
}

/// Request-scoped connection slot. Clones share the same slot.
#[derive(Clone, Debug)]
pub struct RequestDb {
    database: Database,
    conn: Arc<Mutex<Option<SqliteConnection>>>,
}

impl RequestDb {
    /// The request's connection, opened on first call. Later calls return the same connection.
    /// Do not call again while holding the returned guard.
    pub async fn get(&self) -> Result<MappedMutexGuard<'_, SqliteConnection>, sqlx::Error> {
        let mut slot = self.conn.lock().await;
        let conn = match slot.take() {
            Some(conn) => conn,
            None => {
                tracing::debug!("opening request connection");
                self.database.connect().await?
            }
        };
        Ok(MutexGuard::map(slot, move |slot| slot.insert(conn)))
    }

    pub async fn is_open(&self) -> bool {
        self.conn.lock().await.is_some()
    }

    /// Close the connection if one was opened. No-op otherwise.
    pub async fn close(&self) {
        let Some(conn) = self.conn.lock().await.take() else {
            return;
        };
        tracing::debug!("closing request connection");
        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "failed to close request connection");
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestDb
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestDb>()
            .cloned()
            .ok_or_else(|| AppError::Internal("request database scope is not installed".into()))
    }
}

/// Middleware: install a `RequestDb` for the request and close it after the handler has run,
/// whatever the handler returned.
pub async fn db_scope(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let db = state.db.request_scope();
    req.extensions_mut().insert(db.clone());
    let response = next.run(req).await;
    db.close().await;
    response
}
