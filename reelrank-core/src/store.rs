//! The embedding store: an immutable mapping from movie identifier to its
//! embedding vector, loaded once from a trained model artifact at startup.

use crate::error::{ReelError, ReelResult};
use crate::vector::{Embedding, MovieId};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// On-disk shape of the model artifact: the embedding dimensionality plus
/// one row per movie. Produced by the offline training pipeline.
#[derive(Deserialize)]
struct StoreArtifact {
    dimensions: usize,
    vectors: HashMap<MovieId, Vec<f32>>,
}

/// Read-only movie-id -> vector mapping for the process lifetime.
///
/// Loaded once at startup; no mutation after load, so it can be shared
/// freely across concurrent requests without locking.
#[derive(Debug)]
pub struct EmbeddingStore {
    dimensions: usize,
    vectors: HashMap<MovieId, Embedding>,
}

impl EmbeddingStore {
    /// Loads the store from a model artifact on disk.
    ///
    /// A missing or corrupt artifact is fatal to service start: any row whose
    /// length differs from the declared dimensionality fails the whole load
    /// rather than being silently dropped.
    pub fn load(path: &Path) -> ReelResult<Self> {
        info!(path = ?path, "Loading embedding store from model artifact");

        let file = fs::File::open(path).map_err(|e| ReelError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let artifact: StoreArtifact = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| ReelError::Deserialization(format!(
                "Failed to deserialize model artifact from {:?}: {}",
                path, e
            )))?;

        let store = Self::from_artifact(artifact)?;
        info!(
            movie_count = store.len(),
            dimensions = store.dimensions(),
            "Embedding store loaded"
        );
        Ok(store)
    }

    /// Builds a store directly from id/vector pairs. Intended for tests and
    /// fixtures; the server always goes through [`EmbeddingStore::load`].
    pub fn from_vectors<I>(dimensions: usize, pairs: I) -> ReelResult<Self>
    where
        I: IntoIterator<Item = (MovieId, Vec<f32>)>,
    {
        Self::from_artifact(StoreArtifact {
            dimensions,
            vectors: pairs.into_iter().collect(),
        })
    }

    fn from_artifact(artifact: StoreArtifact) -> ReelResult<Self> {
        if artifact.dimensions == 0 {
            return Err(ReelError::Deserialization(
                "Model artifact declares zero dimensions".to_string(),
            ));
        }

        let mut vectors = HashMap::with_capacity(artifact.vectors.len());
        for (id, row) in artifact.vectors {
            if row.len() != artifact.dimensions {
                return Err(ReelError::DimensionMismatch {
                    expected: artifact.dimensions,
                    actual: row.len(),
                });
            }
            vectors.insert(id, Embedding::from(row));
        }

        Ok(EmbeddingStore {
            dimensions: artifact.dimensions,
            vectors,
        })
    }

    /// Looks up the embedding for a movie id, failing with `NotFound` if the
    /// id is absent. Absence is never substituted with a zero vector.
    pub fn vector_of(&self, id: &str) -> ReelResult<&Embedding> {
        self.vectors
            .get(id)
            .ok_or_else(|| ReelError::NotFound(id.to_string()))
    }

    /// Non-failing lookup, for callers that tolerate missing ids.
    pub fn get(&self, id: &str) -> Option<&Embedding> {
        self.vectors.get(id)
    }

    /// Iterates over every (id, vector) pair. Finite and restartable; used
    /// as the candidate pool for ranking. Order is not guaranteed.
    pub fn iter(&self) -> impl Iterator<Item = (&MovieId, &Embedding)> {
        self.vectors.iter()
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }
}
