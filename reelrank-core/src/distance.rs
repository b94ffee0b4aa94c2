//! Cosine similarity between embedding vectors.

use ndarray::ArrayView1;
use crate::error::{ReelError, ReelResult};

/// Calculates the cosine similarity between two vectors.
///
/// # Returns
/// The similarity score as `f32` in [-1, 1]; higher means more similar.
/// Returns `ReelError::DimensionMismatch` if vectors have different lengths.
///
/// # Notes
/// A zero-norm operand yields similarity 0.0 rather than a division fault.
pub fn cosine_similarity(v1: ArrayView1<f32>, v2: ArrayView1<f32>) -> ReelResult<f32> {
    if v1.len() != v2.len() {
        return Err(ReelError::DimensionMismatch {
            expected: v1.len(),
            actual: v2.len(),
        });
    }

    let dot_product = v1.dot(&v2);
    let norm_v1 = v1.dot(&v1).sqrt();
    let norm_v2 = v2.dot(&v2).sqrt();

    if norm_v1 == 0.0 || norm_v2 == 0.0 {
        // Cosine is undefined for zero vectors, return 0 similarity
        Ok(0.0)
    } else {
        // Clamp the result to avoid floating point inaccuracies causing values slightly outside [-1, 1]
        Ok((dot_product / (norm_v1 * norm_v2)).clamp(-1.0, 1.0))
    }
}
