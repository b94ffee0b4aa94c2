//! Defines the data structures used for API request and response bodies.

use reelrank_core::{MovieId, SimilarityResult};
use serde::{Deserialize, Serialize};

// --- Request Bodies ---

/// A single (movie, score) rating in a recommendation request.
#[derive(Deserialize)]
pub struct RatingInput {
    pub movie_id: MovieId,
    pub score: f32,
}

/// Request body for `POST /recommendations`.
#[derive(Deserialize)]
pub struct RecommendationRequest {
    /// Caller-side user identifier. Carried for wire compatibility and
    /// request logging; the core works purely off the supplied ratings.
    pub user_id: String,
    pub ratings: Vec<RatingInput>,
    pub num_recs: usize,
    pub good_threshold: f32,
    pub bad_threshold: f32,
    pub harshness: u32,
}

/// Request body for `POST /similar-movies`.
#[derive(Deserialize)]
pub struct SimilarMoviesRequest {
    pub movie_id: MovieId,
    pub num_movies: usize,
}

// --- Response Bodies ---

/// A single ranked match in a response.
#[derive(Serialize)]
pub struct MovieMatch {
    pub movie_id: MovieId,
    pub score: f32,
    pub rank: usize,
}

impl From<SimilarityResult> for MovieMatch {
    fn from(result: SimilarityResult) -> Self {
        MovieMatch {
            movie_id: result.movie_id,
            score: result.score,
            rank: result.rank,
        }
    }
}

/// Response body for both ranking endpoints.
#[derive(Serialize)]
pub struct RankingResponse {
    pub data: Vec<MovieMatch>,
}

impl RankingResponse {
    pub fn from_results(results: Vec<SimilarityResult>) -> Self {
        RankingResponse {
            data: results.into_iter().map(MovieMatch::from).collect(),
        }
    }
}
