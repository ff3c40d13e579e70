// src/models/test_paper.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

use crate::utils::lenient;

/// Represents the 'tests' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TestPaper {
    pub id: i64,
    pub title: String,
    pub subject: String,

    /// Duration in minutes.
    pub duration: i64,

    /// Target number of questions. No question rows are linked.
    pub questions: i64,

    /// Comma-joined difficulty levels, e.g. "Easy, Hard".
    pub difficulty: String,

    /// e.g. "draft" or "published".
    pub status: String,

    /// Timestamp text as stored. Rows written by this service hold RFC 3339;
    /// older rows may hold other formats (e.g. a bare date) or nothing.
    pub created_at: Option<String>,
}

/// DTO for creating a new test.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTestRequest {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub subject: String,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub duration: i64,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub questions: i64,
    /// Accepts either a joined string or an array of levels.
    #[serde(default, deserialize_with = "lenient::joined_string")]
    pub difficulty: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: String,
}
