// src/handlers/test_paper.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{db, error::AppError, models::test_paper::CreateTestRequest, utils::payload::Payload};

/// Lists generated test papers, newest first.
pub async fn list_tests(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let tests = db::test_paper::list(&pool).await.map_err(|e| {
        tracing::error!("Failed to list tests: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(tests))
}

/// Saves a test paper definition.
pub async fn create_test(
    State(pool): State<SqlitePool>,
    Payload(payload): Payload<CreateTestRequest>,
) -> Result<impl IntoResponse, AppError> {
    let test = db::test_paper::insert(&pool, &payload).await.map_err(|e| {
        tracing::error!("Failed to create test: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    tracing::debug!(id = test.id, title = %test.title, "Test created");

    Ok((StatusCode::CREATED, Json(test)))
}
