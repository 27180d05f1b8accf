//! User route handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct Created {
    pub message: String,
    pub id: i64,
}

pub async fn create_user(
    State(state): State<AppState>,
    req: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Created>), AppError> {
    let Json(req) = req.map_err(|e| AppError::Internal(e.body_text()))?;

    let user = jsonsage_core::ledger::create_user(&state.db, &req.username)?;

    Ok((
        StatusCode::CREATED,
        Json(Created {
            message: "User created".to_string(),
            id: user.id,
        }),
    ))
}
