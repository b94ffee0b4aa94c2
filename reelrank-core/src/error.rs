use thiserror::Error;
use crate::vector::MovieId;
use std::path::PathBuf;

/// The main result type for reelrank-core operations.
pub type ReelResult<T> = Result<T, ReelError>;

/// Enum representing possible errors within the reelrank-core library.
#[derive(Error, Debug)]
pub enum ReelError {
    #[error("Movie ID not found in embedding store: {0}")]
    NotFound(MovieId),

    #[error("No rating cleared the good threshold, cannot build a taste vector")]
    InsufficientData,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("I/O error accessing path {path:?}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}
