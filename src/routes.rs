// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{archetype, quiz, results},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (quiz, results, archetypes).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (config, submission store, notifier).
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
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

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let quiz_routes = Router::new()
        .route("/questions", get(quiz::list_questions))
        .route("/scale", get(quiz::get_scale))
        .route("/score", post(quiz::score_answers))
        .route("/submit", post(quiz::submit_quiz))
        .route("/stats", get(quiz::get_stats));

    let results_routes = Router::new().route("/{result_id}", get(results::get_shared_result));

    let archetype_routes = Router::new()
        .route("/", get(archetype::list_archetypes))
        .route("/{key}", get(archetype::get_archetype));

    Router::new()
        .nest("/api/quiz", quiz_routes)
        .nest("/api/results", results_routes)
        .nest("/api/archetypes", archetype_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
