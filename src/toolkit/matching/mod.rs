

pub mod similarity;
pub mod tokenizer;
pub mod vectorizer;

pub use similarity::{batch_cosine_similarity, cosine_similarity, rank_indices};
pub use tokenizer::{NgramRange, STOP_WORDS};
pub use vectorizer::{SparseVector, TfIdfVectorizer, VectorizerOptions};
