//! Quill: a small blog with registration, session login and post CRUD over SQLite.

pub mod auth;
pub mod cli;
pub mod db;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod password;
pub mod routes;
pub mod schema;
pub mod service;
pub mod session;
pub mod settings;
pub mod state;
pub mod store;
pub mod templates;

pub use db::{Database, RequestDb};
pub use error::{AppError, AuthError, ConfigError};
pub use extractors::CurrentUser;
pub use routes::app;
pub use schema::{init_db, init_db_command};
pub use settings::Settings;
pub use state::AppState;
pub use store::{Post, User};
