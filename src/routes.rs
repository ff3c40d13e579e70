// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    handlers::{health, question, result, test_paper},
    state::AppState,
};

/// Assembles the main application router.
///
/// * `/api/questions`, `/api/tests`, `/api/results`: list (GET) and create (POST).
/// * `/`: liveness marker.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    let api_routes = Router::new()
        .route(
            "/questions",
            get(question::list_questions).post(question::create_question),
        )
        .route(
            "/tests",
            get(test_paper::list_tests).post(test_paper::create_test),
        )
        .route(
            "/results",
            get(result::list_results).post(result::create_result),
        );

    Router::new()
        .route("/", get(health::root))
        .nest("/api", api_routes)
        // Global Middleware (outermost first)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Any origin unless `CORS_ORIGINS` lists specific ones.
/// Entries that fail to parse are dropped; they never widen the policy.
fn cors_layer(config: &Config) -> CorsLayer {
    let allow_origin = if config.cors_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
