// src/db/test_paper.rs

use super::now_timestamp;
use sqlx::SqlitePool;

use super::schema::TESTS;
use crate::models::test_paper::{CreateTestRequest, TestPaper};

/// All tests, newest first.
pub async fn list(pool: &SqlitePool) -> Result<Vec<TestPaper>, sqlx::Error> {
    sqlx::query_as::<_, TestPaper>(&TESTS.list_sql())
        .fetch_all(pool)
        .await
}

/// Inserts a test and returns the stored row.
pub async fn insert(pool: &SqlitePool, req: &CreateTestRequest) -> Result<TestPaper, sqlx::Error> {
    sqlx::query_as::<_, TestPaper>(&TESTS.insert_sql())
        .bind(&req.title)
        .bind(&req.subject)
        .bind(req.duration)
        .bind(req.questions)
        .bind(&req.difficulty)
        .bind(&req.status)
        .bind(now_timestamp())
        .fetch_one(pool)
        .await
}
