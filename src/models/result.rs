// src/models/result.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::utils::lenient;

/// Represents the 'results' table in the database.
/// `student` and `test` are plain labels, not references to other rows.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TestResult {
    pub id: i64,
    pub student: String,
    pub test: String,
    pub score: f64,

    /// Submission details as JSON text. Clients parse it themselves.
    pub data: Option<String>,

    /// Timestamp text as stored. Rows written by this service hold RFC 3339;
    /// older rows may hold other formats (e.g. a bare date) or nothing.
    pub date: Option<String>,
}

/// DTO for recording a result.
#[derive(Debug, Default, Deserialize)]
pub struct CreateResultRequest {
    #[serde(default, deserialize_with = "lenient::string")]
    pub student: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub test: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub score: f64,
    #[serde(default)]
    pub data: Option<Value>,
}

impl CreateResultRequest {
    /// Serialized `data`, or `None` when absent or null.
    pub fn data_text(&self) -> Option<String> {
        match &self.data {
            None | Some(Value::Null) => None,
            Some(value) => Some(value.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn data_is_serialized_to_text() {
        let req: CreateResultRequest =
            serde_json::from_value(json!({"student": "ana", "data": {"foo": 1}})).unwrap();
        assert_eq!(req.data_text().as_deref(), Some(r#"{"foo":1}"#));
    }

    #[test]
    fn missing_or_null_data_stores_nothing() {
        let req: CreateResultRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(req.data_text(), None);

        let req: CreateResultRequest = serde_json::from_value(json!({"data": null})).unwrap();
        assert_eq!(req.data_text(), None);
    }

    #[test]
    fn string_data_is_kept_as_json_string() {
        let req: CreateResultRequest = serde_json::from_value(json!({"data": "3/4"})).unwrap();
        assert_eq!(req.data_text().as_deref(), Some(r#""3/4""#));
    }
}
