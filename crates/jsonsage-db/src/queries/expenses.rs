//! Expense-related database queries.

use crate::pool::{DbError, DbPool, DbResult};
use rusqlite::params;

/// Expense row from database.
#[derive(Debug, Clone)]
pub struct ExpenseRow {
    pub id: i64,
    pub amount: f64,
    pub description: Option<String>,
    pub user_id: i64,
    pub created_at: String,
}

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ExpenseRow> {
    Ok(ExpenseRow {
        id: row.get(0)?,
        amount: row.get(1)?,
        description: row.get(2)?,
        user_id: row.get(3)?,
        created_at: row.get(4)?,
    })
}

/// Insert an expense and return its row id.
pub fn insert_expense(
    pool: &DbPool,
    amount: f64,
    description: Option<&str>,
    user_id: i64,
    created_at: &str,
) -> DbResult<i64> {
    pool.with_conn(|conn| {
        conn.execute(
            "INSERT INTO expenses (amount, description, user_id, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![amount, description, user_id, created_at],
        )
        .map_err(DbError::from_write)?;
        Ok(conn.last_insert_rowid())
    })
}

/// Get an expense by ID.
pub fn get_expense(pool: &DbPool, id: i64) -> DbResult<ExpenseRow> {
    pool.with_conn(|conn| {
        conn.query_row(
            "SELECT id, amount, description, user_id, created_at FROM expenses WHERE id = ?1",
            params![id],
            map_row,
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => DbError::NotFound(format!("Expense: {}", id)),
            e => DbError::Connection(e),
        })
    })
}
