// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

use crate::utils::lenient;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    pub subject: String,

    /// Free text; the question form offers Easy, Medium and Hard.
    pub difficulty: String,

    /// The text content of the question.
    pub question: String,

    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,

    /// Zero-based index of the correct option. Not checked against the options.
    pub answer: i64,

    /// Timestamp text as stored. Rows written by this service hold RFC 3339;
    /// older rows may hold other formats (e.g. a bare date) or nothing.
    pub created_at: Option<String>,
}

/// DTO for creating a new question. Missing or malformed fields are defaulted.
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default, deserialize_with = "lenient::string")]
    pub subject: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub difficulty: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub question: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub option1: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub option2: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub option3: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub option4: String,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub answer: i64,
}
