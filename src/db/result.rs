// src/db/result.rs

use super::now_timestamp;
use sqlx::SqlitePool;

use super::schema::RESULTS;
use crate::models::result::{CreateResultRequest, TestResult};

/// All results, newest first.
pub async fn list(pool: &SqlitePool) -> Result<Vec<TestResult>, sqlx::Error> {
    sqlx::query_as::<_, TestResult>(&RESULTS.list_sql())
        .fetch_all(pool)
        .await
}

/// Inserts a result and returns the stored row.
/// `data` is stored as JSON text and never interpreted.
pub async fn insert(pool: &SqlitePool, req: &CreateResultRequest) -> Result<TestResult, sqlx::Error> {
    sqlx::query_as::<_, TestResult>(&RESULTS.insert_sql())
        .bind(&req.student)
        .bind(&req.test)
        .bind(req.score)
        .bind(req.data_text())
        .bind(now_timestamp())
        .fetch_one(pool)
        .await
}
