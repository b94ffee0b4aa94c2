use crate::error::{ServerError, ServerResult};
use crate::models::{RankingResponse, RecommendationRequest, SimilarMoviesRequest};
use crate::state::AppState;

use axum::{extract::State, Json};
use reelrank_core::{Rating, TasteConfig};
use tracing::{debug, info};

/// Handler for `GET /`
/// Simple liveness greeting.
pub async fn index() -> &'static str {
    "reelrank: movie recommendations from a pretrained embedding space"
}

/// Handler for `POST /recommendations`
/// Builds a taste vector from the user's ratings and ranks the catalogue
/// against it. Already-rated movies never appear in the result.
#[axum::debug_handler]
pub async fn get_recommendations(
    State(state): State<AppState>,
    Json(payload): Json<RecommendationRequest>,
) -> ServerResult<Json<RankingResponse>> {
    info!(
        user_id = %payload.user_id,
        ratings = payload.ratings.len(),
        num_recs = payload.num_recs,
        "Received recommendation request"
    );

    let config = TasteConfig {
        good_threshold: payload.good_threshold,
        bad_threshold: payload.bad_threshold,
        harshness: payload.harshness,
    };
    let ratings: Vec<Rating> = payload
        .ratings
        .into_iter()
        .map(|r| Rating { movie_id: r.movie_id, score: r.score })
        .collect();
    let num_recs = payload.num_recs;

    // Ranking is CPU-bound over the whole catalogue; run it off the
    // request-handling threads.
    let recommender = state.recommender.clone();
    let results = tokio::task::spawn_blocking(move || {
        recommender.recommend(&ratings, num_recs, &config)
    })
    .await
    .map_err(|e| ServerError::Internal(format!("Ranking task failed: {}", e)))??;

    debug!(returned = results.len(), "Recommendation ranking complete");
    Ok(Json(RankingResponse::from_results(results)))
}

/// Handler for `POST /similar-movies`
/// Ranks the catalogue against a single movie's embedding, excluding the
/// query movie itself.
#[axum::debug_handler]
pub async fn get_similar_movies(
    State(state): State<AppState>,
    Json(payload): Json<SimilarMoviesRequest>,
) -> ServerResult<Json<RankingResponse>> {
    info!(
        movie_id = %payload.movie_id,
        num_movies = payload.num_movies,
        "Received similar-movies request"
    );

    let recommender = state.recommender.clone();
    let results = tokio::task::spawn_blocking(move || {
        recommender.similar_movies(&payload.movie_id, payload.num_movies)
    })
    .await
    .map_err(|e| ServerError::Internal(format!("Ranking task failed: {}", e)))??;

    debug!(returned = results.len(), "Similarity ranking complete");
    Ok(Json(RankingResponse::from_results(results)))
}
