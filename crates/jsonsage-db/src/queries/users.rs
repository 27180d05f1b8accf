//! User-related database queries.

use crate::pool::{DbError, DbPool, DbResult};
use rusqlite::params;

/// User row from database.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub created_at: String,
}

/// Insert a user and return its row id.
pub fn insert_user(pool: &DbPool, username: &str, created_at: &str) -> DbResult<i64> {
    pool.with_conn(|conn| {
        conn.execute(
            "INSERT INTO users (username, created_at) VALUES (?1, ?2)",
            params![username, created_at],
        )
        .map_err(DbError::from_write)?;
        Ok(conn.last_insert_rowid())
    })
}

/// Get a user by ID.
pub fn get_user(pool: &DbPool, id: i64) -> DbResult<UserRow> {
    pool.with_conn(|conn| {
        conn.query_row(
            "SELECT id, username, created_at FROM users WHERE id = ?1",
            params![id],
            |row| {
                Ok(UserRow {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    created_at: row.get(2)?,
                })
            },
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => DbError::NotFound(format!("User: {}", id)),
            e => DbError::Connection(e),
        })
    })
}
