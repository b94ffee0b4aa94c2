// Declare modules to be part of the library crate

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Builds the API router over the given state. Shared between `main` and
/// the integration tests.
pub fn build_router(state: state::AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/recommendations", post(handlers::get_recommendations))
        .route("/similar-movies", post(handlers::get_similar_movies))
        // Add middleware
        .layer(TraceLayer::new_for_http()) // Log requests/responses
        .layer(CorsLayer::permissive()) // Allow all origins (adjust for production)
        .with_state(state)
}
