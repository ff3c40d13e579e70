// src/handlers/question.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{db, error::AppError, models::question::CreateQuestionRequest, utils::payload::Payload};

/// Lists the question bank, newest first.
pub async fn list_questions(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let questions = db::question::list(&pool).await.map_err(|e| {
        tracing::error!("Failed to list questions: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(questions))
}

/// Adds a question to the bank and echoes the stored row.
pub async fn create_question(
    State(pool): State<SqlitePool>,
    Payload(payload): Payload<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let question = db::question::insert(&pool, &payload).await.map_err(|e| {
        tracing::error!("Failed to create question: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    tracing::debug!(id = question.id, subject = %question.subject, "Question created");

    Ok((StatusCode::CREATED, Json(question)))
}
