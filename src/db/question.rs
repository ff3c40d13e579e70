// src/db/question.rs

use super::now_timestamp;
use sqlx::SqlitePool;

use super::schema::QUESTIONS;
use crate::models::question::{CreateQuestionRequest, Question};

/// All questions, newest first.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(&QUESTIONS.list_sql())
        .fetch_all(pool)
        .await
}

/// Inserts a question and returns the stored row.
pub async fn insert(pool: &SqlitePool, req: &CreateQuestionRequest) -> Result<Question, sqlx::Error> {
    sqlx::query_as::<_, Question>(&QUESTIONS.insert_sql())
        .bind(&req.subject)
        .bind(&req.difficulty)
        .bind(&req.question)
        .bind(&req.option1)
        .bind(&req.option2)
        .bind(&req.option3)
        .bind(&req.option4)
        .bind(req.answer)
        .bind(now_timestamp())
        .fetch_one(pool)
        .await
}
