//! Shared application state for all routes. Read-only after startup.

use crate::db::Database;
use crate::session::signing_key;
use crate::settings::Settings;
use std::sync::Arc;
use tower_cookies::Key;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub db: Database,
    /// Signs the session cookie; derived from `settings.secret_key`.
    pub cookie_key: Key,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let db = Database::new(&settings.database);
        let cookie_key = signing_key(&settings.secret_key);
        AppState {
            settings: Arc::new(settings),
            db,
            cookie_key,
        }
    }
}
