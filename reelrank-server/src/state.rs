use reelrank_core::MovieRecommender;
use std::sync::Arc;

/// Holds the shared state accessible by all request handlers.
///
/// The embedding store is loaded once at startup and never mutated, so the
/// recommender is shared via a plain `Arc` with no locking: every request
/// computes over read-only data.
#[derive(Clone, Debug)]
pub struct AppState {
    pub recommender: Arc<MovieRecommender>,
}

impl AppState {
    /// Creates a new instance of the application state.
    pub fn new(recommender: MovieRecommender) -> Self {
        AppState {
            recommender: Arc::new(recommender),
        }
    }
}
