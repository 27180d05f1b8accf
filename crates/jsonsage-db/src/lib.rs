//! JsonSage Database Layer
//!
//! SQLite persistence for the expense ledger (users and expenses).

pub mod migrations;
pub mod pool;
pub mod queries;

pub use pool::{DbError, DbPool, DbResult};

use std::path::Path;

/// Open the database at `path` and bring its schema up to date.
pub fn init_pool(path: &Path) -> DbResult<DbPool> {
    let pool = DbPool::open(path)?;
    migrations::run_migrations(&pool)?;
    tracing::debug!(path = %path.display(), "Database ready");
    Ok(pool)
}

/// In-memory database with the schema applied. Used by tests.
pub fn init_memory_pool() -> DbResult<DbPool> {
    let pool = DbPool::in_memory()?;
    migrations::run_migrations(&pool)?;
    Ok(pool)
}
