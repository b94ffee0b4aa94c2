//! The two use-case orchestrators: personal recommendations from a rating
//! history, and similar-movie lookup from a single movie id.

use crate::error::ReelResult;
use crate::rank::{rank_candidates, SimilarityResult};
use crate::store::EmbeddingStore;
use crate::taste::{build_taste_profile, Rating, TasteConfig};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Wires the embedding store, taste vector builder and similarity ranker
/// together. Holds the store behind an `Arc` so it can be shared across
/// concurrent requests; the store is read-only, so no locking is involved.
///
/// Constructed explicitly at startup and injected into callers, never a
/// hidden singleton: tests substitute a small fixture store directly.
#[derive(Debug, Clone)]
pub struct MovieRecommender {
    store: Arc<EmbeddingStore>,
}

impl MovieRecommender {
    pub fn new(store: Arc<EmbeddingStore>) -> Self {
        MovieRecommender { store }
    }

    pub fn store(&self) -> &EmbeddingStore {
        &self.store
    }

    /// Recommends up to `num_recs` movies for a user given their rating
    /// history. Already-rated movies are never recommended.
    ///
    /// Fails `InsufficientData` when no liked rating resolves to a vector,
    /// `InvalidParameter` on out-of-range tunables. The result may carry
    /// fewer than `num_recs` entries; callers must tolerate that.
    pub fn recommend(
        &self,
        ratings: &[Rating],
        num_recs: usize,
        config: &TasteConfig,
    ) -> ReelResult<Vec<SimilarityResult>> {
        let profile = build_taste_profile(&self.store, ratings, config)?;
        debug!(
            rated = profile.rated.len(),
            unresolved = profile.unresolved.len(),
            num_recs,
            "Ranking recommendations against full pool"
        );

        rank_candidates(
            &profile.vector,
            self.store.iter(),
            Some(&profile.rated),
            num_recs,
        )
    }

    /// Returns up to `num_movies` movies most similar to `movie_id`, which
    /// is itself excluded from the results.
    ///
    /// Fails `NotFound` when the query movie has no embedding. Unlike
    /// `recommend`, there is no further filtering stage: whenever the pool
    /// is large enough the full `num_movies` results come back.
    pub fn similar_movies(
        &self,
        movie_id: &str,
        num_movies: usize,
    ) -> ReelResult<Vec<SimilarityResult>> {
        let query = self.store.vector_of(movie_id)?;
        let exclude: HashSet<_> = std::iter::once(movie_id.to_string()).collect();

        rank_candidates(query, self.store.iter(), Some(&exclude), num_movies)
    }
}
