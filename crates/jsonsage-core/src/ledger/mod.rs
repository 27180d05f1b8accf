//! Expense ledger: users and the expenses they record.

pub mod model;

use crate::error::SageResult;
use jsonsage_db::queries::{expenses, users};
use jsonsage_db::DbPool;
use model::{Expense, User};

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Create a user. Uniqueness and length are enforced by the schema.
pub fn create_user(pool: &DbPool, username: &str) -> SageResult<User> {
    let id = users::insert_user(pool, username, &now())?;
    tracing::info!(user_id = id, username, "User created");

    let row = users::get_user(pool, id)?;
    Ok(User::from_row(row))
}

/// Record an expense for an existing user.
pub fn create_expense(
    pool: &DbPool,
    amount: f64,
    description: Option<&str>,
    user_id: i64,
) -> SageResult<Expense> {
    let id = expenses::insert_expense(pool, amount, description, user_id, &now())?;
    tracing::info!(expense_id = id, user_id, amount, "Expense created");

    let row = expenses::get_expense(pool, id)?;
    Ok(Expense::from_row(row))
}
