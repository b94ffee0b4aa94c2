pub mod distance;
pub mod engine;
pub mod error;
pub mod rank;
pub mod store;
pub mod taste;
pub mod vector;

// Re-export key types for easier use
pub use engine::MovieRecommender;
pub use error::{ReelError, ReelResult};
pub use rank::{SimilarityResult, MAX_RESULTS};
pub use store::EmbeddingStore;
pub use taste::{Rating, TasteConfig, TasteProfile};
pub use vector::{Embedding, MovieId};
