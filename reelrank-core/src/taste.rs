//! Builds a user's taste vector from their rating history.
//!
//! Liked and disliked ratings are resolved through the embedding store and
//! aggregated into a single query vector:
//! `taste = mean(liked) - harshness * mean(disliked)`.

use crate::error::{ReelError, ReelResult};
use crate::store::EmbeddingStore;
use crate::vector::{Embedding, MovieId};
use ndarray::Array1;
use serde::{Serialize, Deserialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// A single (movie, score) pair from a user's history. Scores are on the
/// 1-5 scale; nothing is persisted by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub movie_id: MovieId,
    pub score: f32,
}

/// Tunables controlling how ratings are classified and aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TasteConfig {
    /// Minimum score, inclusive, for a rating to count as liked. Valid range [3, 5].
    pub good_threshold: f32,
    /// Maximum score, inclusive, for a rating to count as disliked. Valid range [1, 3].
    pub bad_threshold: f32,
    /// Multiplier on the disliked-movie mean; tunes how aggressively disliked
    /// content repels the taste vector. Valid range [1, 2].
    pub harshness: u32,
}

impl TasteConfig {
    /// Validates the configuration parameters against their documented ranges.
    pub fn validate(&self) -> ReelResult<()> {
        if !(3.0..=5.0).contains(&self.good_threshold) {
            return Err(ReelError::InvalidParameter(format!(
                "good_threshold must be in [3, 5], got {}",
                self.good_threshold
            )));
        }
        if !(1.0..=3.0).contains(&self.bad_threshold) {
            return Err(ReelError::InvalidParameter(format!(
                "bad_threshold must be in [1, 3], got {}",
                self.bad_threshold
            )));
        }
        if !(1..=2).contains(&self.harshness) {
            return Err(ReelError::InvalidParameter(format!(
                "harshness must be in [1, 2], got {}",
                self.harshness
            )));
        }
        Ok(())
    }
}

impl Default for TasteConfig {
    fn default() -> Self {
        TasteConfig {
            good_threshold: 4.0,
            bad_threshold: 2.0,
            harshness: 1,
        }
    }
}

/// Per-request aggregate of a user's preferences. Created per request and
/// discarded after use.
#[derive(Debug, Clone)]
pub struct TasteProfile {
    /// The aggregate taste vector used as the ranking query.
    pub vector: Embedding,
    /// Every movie id the user rated, regardless of like/dislike
    /// classification; used downstream to exclude already-seen movies.
    pub rated: HashSet<MovieId>,
    /// Rated ids with no vector in the store. Skipped during aggregation,
    /// surfaced for diagnostics.
    pub unresolved: Vec<MovieId>,
}

/// Builds a [`TasteProfile`] from a user's rating history.
///
/// Ratings scoring at or above `good_threshold` pull the taste vector toward
/// their embeddings; ratings at or below `bad_threshold` push it away, scaled
/// by `harshness`. Ratings in between are ignored. Ids missing from the store
/// are skipped (and recorded), not fatal; but if no liked rating resolves to
/// a vector the profile is undefined and the call fails `InsufficientData`.
pub fn build_taste_profile(
    store: &EmbeddingStore,
    ratings: &[Rating],
    config: &TasteConfig,
) -> ReelResult<TasteProfile> {
    config.validate()?;

    let mut liked: Vec<&Embedding> = Vec::new();
    let mut disliked: Vec<&Embedding> = Vec::new();
    let mut rated: HashSet<MovieId> = HashSet::with_capacity(ratings.len());
    let mut unresolved: Vec<MovieId> = Vec::new();

    for rating in ratings {
        rated.insert(rating.movie_id.clone());

        let is_liked = rating.score >= config.good_threshold;
        let is_disliked = rating.score <= config.bad_threshold;
        if !is_liked && !is_disliked {
            continue;
        }

        match store.get(&rating.movie_id) {
            Some(embedding) => {
                if is_liked {
                    liked.push(embedding);
                } else {
                    disliked.push(embedding);
                }
            }
            None => {
                warn!(movie_id = %rating.movie_id, "Rated movie has no embedding, skipping");
                unresolved.push(rating.movie_id.clone());
            }
        }
    }

    let liked_mean = mean_of(&liked, store.dimensions()).ok_or(ReelError::InsufficientData)?;

    let vector = match mean_of(&disliked, store.dimensions()) {
        Some(disliked_mean) => Embedding(liked_mean - disliked_mean * config.harshness as f32),
        None => Embedding(liked_mean),
    };

    debug!(
        liked = liked.len(),
        disliked = disliked.len(),
        unresolved = unresolved.len(),
        "Built taste profile"
    );

    Ok(TasteProfile { vector, rated, unresolved })
}

/// Element-wise mean of a set of embeddings; `None` when the set is empty.
fn mean_of(embeddings: &[&Embedding], dimensions: usize) -> Option<Array1<f32>> {
    if embeddings.is_empty() {
        return None;
    }

    let mut acc = Array1::<f32>::zeros(dimensions);
    for embedding in embeddings {
        acc += &embedding.0;
    }
    acc /= embeddings.len() as f32;
    Some(acc)
}
