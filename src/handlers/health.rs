// src/handlers/health.rs

use axum::response::IntoResponse;

/// Liveness marker.
pub async fn root() -> impl IntoResponse {
    "MCQ Backend Running"
}
