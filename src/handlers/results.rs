// src/handlers/results.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    models::submission::SharedResultResponse,
    state::AppState,
};

/// Retrieves the shareable part of a stored result by its public id.
pub async fn get_shared_result(
    State(state): State<AppState>,
    Path(result_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let result_id = Uuid::parse_str(result_id.trim())
        .map_err(|_| AppError::BadRequest(format!("'{result_id}' is not a valid result id")))?;

    let top_two = state
        .store
        .find_top_two(result_id)
        .await?
        .ok_or(AppError::NotFound("Results not found".to_string()))?;

    Ok(Json(SharedResultResponse::new(result_id, top_two)))
}
