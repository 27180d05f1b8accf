//! Application state.

use jsonsage_db::DbPool;
use std::sync::Arc;

/// Default cap on request bodies (1 MiB).
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbPool>,
    pub body_limit: usize,
}

impl AppState {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self {
            db,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    pub fn with_body_limit(mut self, body_limit: usize) -> Self {
        self.body_limit = body_limit;
        self
    }
}
