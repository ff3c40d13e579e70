// src/handlers/result.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{db, error::AppError, models::result::CreateResultRequest, utils::payload::Payload};

pub async fn list_results(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let results = db::result::list(&pool).await.map_err(|e| {
        tracing::error!("Failed to list results: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(results))
}

/// Records a submission. The returned row carries `data` as JSON text.
pub async fn create_result(
    State(pool): State<SqlitePool>,
    Payload(payload): Payload<CreateResultRequest>,
) -> Result<impl IntoResponse, AppError> {
    let result = db::result::insert(&pool, &payload).await.map_err(|e| {
        tracing::error!("Failed to record result: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    tracing::debug!(id = result.id, student = %result.student, test = %result.test, "Result recorded");

    Ok((StatusCode::CREATED, Json(result)))
}
