//! Ranks candidate movie vectors by cosine similarity to a query vector.

use crate::distance::cosine_similarity;
use crate::error::{ReelError, ReelResult};
use crate::vector::{Embedding, MovieId};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Maximum number of results a single ranking call may return.
pub const MAX_RESULTS: usize = 100;

/// A single ranked match: movie id, cosine score in [-1, 1], 1-based rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityResult {
    pub movie_id: MovieId,
    pub score: f32,
    pub rank: usize,
}

/// Scans the candidate pool and returns the `limit` best matches for `query`,
/// ordered by descending similarity with a stable ascending-id tie-break so
/// results are reproducible across runs.
///
/// Candidates in `exclude` are skipped before scoring. The output may be
/// shorter than `limit` when the pool after exclusion has fewer entries.
///
/// This is a linear scan over the full pool, fine at movie-catalogue scale
/// (tens of thousands of entries). An ANN index could be substituted behind
/// this signature without changing callers.
pub fn rank_candidates<'a, I>(
    query: &Embedding,
    pool: I,
    exclude: Option<&HashSet<MovieId>>,
    limit: usize,
) -> ReelResult<Vec<SimilarityResult>>
where
    I: IntoIterator<Item = (&'a MovieId, &'a Embedding)>,
{
    if limit == 0 || limit > MAX_RESULTS {
        return Err(ReelError::InvalidParameter(format!(
            "limit must be in [1, {}], got {}",
            MAX_RESULTS, limit
        )));
    }

    let mut scored: Vec<(MovieId, f32)> = Vec::new();
    for (id, candidate) in pool {
        if exclude.is_some_and(|set| set.contains(id)) {
            continue;
        }
        let score = cosine_similarity(query.view(), candidate.view())?;
        scored.push((id.clone(), score));
    }

    // Descending by score; ties broken by ascending id for determinism.
    // Cosine output never contains NaN (zero-norm operands score 0.0), so
    // the unwrap on partial_cmp cannot fire.
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .expect("cosine similarity is never NaN")
            .then_with(|| a.0.cmp(&b.0))
    });
    scored.truncate(limit);

    debug!(returned = scored.len(), limit, "Ranked candidate pool");

    Ok(scored
        .into_iter()
        .enumerate()
        .map(|(i, (movie_id, score))| SimilarityResult {
            movie_id,
            score,
            rank: i + 1,
        })
        .collect())
}
