//! JSON analysis handler.

use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jsonsage_core::analysis;
use serde_json::Value;
use std::any::Any;
use tracing::debug;

use crate::error::{AppError, Envelope};

pub const NO_DATA: &str = "No JSON data provided";
pub const COMPLETED: &str = "JSON analysis completed";

/// Analyze the value under the body's `json` field.
///
/// A string value is decoded as a JSON document first. A present `null`
/// is analyzed like any other scalar; only a missing field is rejected.
pub async fn analyze_json(body: Bytes) -> Result<Json<Envelope<Value>>, AppError> {
    let input = extract_input(&body)?;
    let input = analysis::decode_embedded(input)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON format: {}", e)))?;

    let result = analysis::analyze(&input);
    analysis::release(input);
    debug!(value_type = %result.value_type, insights = result.insights.len(), "JSON analysis completed");

    let result = serde_json::to_value(&result)
        .map_err(|e| AppError::Internal(format!("Error analyzing JSON: {}", e)))?;

    Ok(Json(Envelope::success(COMPLETED, result)))
}

fn extract_input(body: &[u8]) -> Result<Value, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::BadRequest(NO_DATA.to_string()));
    }

    let data = analysis::parse_document(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON format: {}", e)))?;

    match data {
        Value::Object(mut map) => {
            let input = map.remove("json");
            analysis::release(Value::Object(map));
            input.ok_or_else(|| AppError::BadRequest(NO_DATA.to_string()))
        }
        other => {
            analysis::release(other);
            Err(AppError::BadRequest(NO_DATA.to_string()))
        }
    }
}

/// Render a panic inside the analyze route as a 500 envelope.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(%detail, "Analyzer panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(Envelope::error(format!("Error analyzing JSON: {}", detail))),
    )
        .into_response()
}
