//! Ledger domain models.

use jsonsage_db::queries::expenses::ExpenseRow;
use jsonsage_db::queries::users::UserRow;

/// A person who records expenses.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: String,
}

impl User {
    pub fn from_row(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            created_at: row.created_at,
        }
    }
}

/// A single expense paid by a user.
#[derive(Debug, Clone)]
pub struct Expense {
    pub id: i64,
    pub amount: f64,
    pub description: Option<String>,
    pub user_id: i64,
    pub created_at: String,
}

impl Expense {
    pub fn from_row(row: ExpenseRow) -> Self {
        Self {
            id: row.id,
            amount: row.amount,
            description: row.description,
            user_id: row.user_id,
            created_at: row.created_at,
        }
    }
}
