//! Expense route handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::users::Created;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateExpenseRequest {
    pub amount: f64,
    pub description: Option<String>,
    pub user_id: i64,
}

pub async fn create_expense(
    State(state): State<AppState>,
    req: Result<Json<CreateExpenseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Created>), AppError> {
    let Json(req) = req.map_err(|e| AppError::Internal(e.body_text()))?;

    let expense = jsonsage_core::ledger::create_expense(
        &state.db,
        req.amount,
        req.description.as_deref(),
        req.user_id,
    )?;

    Ok((
        StatusCode::CREATED,
        Json(Created {
            message: "Expense created".to_string(),
            id: expense.id,
        }),
    ))
}
