

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::tokenizer::{terms, NgramRange};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorizerOptions {
    pub ngram_range: NgramRange,
    pub remove_stop_words: bool,
}

impl Default for VectorizerOptions {
    fn default() -> Self {
        Self {
            ngram_range: NgramRange::UNI_AND_BIGRAMS,
            remove_stop_words: true,
        }
    }
}


/// Sparse vector keyed by vocabulary index, entries sorted by index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    fn from_map(map: BTreeMap<usize, f64>) -> Self {
        Self {
            entries: map.into_iter().filter(|(_, w)| *w != 0.0).collect(),
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    #[must_use]
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}


/// Vocabulary and IDF weights learned from a fixed corpus. Immutable once fitted.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    options: VectorizerOptions,
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
    n_documents: usize,
}

impl TfIdfVectorizer {
    /// Learns the vocabulary and smoothed IDF weights, `ln((1 + n) / (1 + df)) + 1`.
    pub fn fit<S: AsRef<str>>(corpus: &[S], options: VectorizerOptions) -> Self {
        let n_documents = corpus.len();
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();

        for doc in corpus {
            let unique: BTreeSet<String> =
                terms(doc.as_ref(), options.ngram_range, options.remove_stop_words)
                    .into_iter()
                    .collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (idx, (term, df)) in document_frequency.into_iter().enumerate() {
            idf.push(((1.0 + n_documents as f64) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        debug!(
            "Fitted TF-IDF vocabulary: {} terms over {} documents",
            vocabulary.len(),
            n_documents
        );

        Self {
            options,
            vocabulary,
            idf,
            n_documents,
        }
    }

    /// Raw term count times IDF, L2-normalized. Unknown terms are ignored.
    #[must_use]
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut weights: BTreeMap<usize, f64> = BTreeMap::new();
        for term in terms(text, self.options.ngram_range, self.options.remove_stop_words) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *weights.entry(idx).or_insert(0.0) += self.idf[idx];
            }
        }

        let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for w in weights.values_mut() {
                *w /= norm;
            }
        }

        SparseVector::from_map(weights)
    }

    pub fn transform_all<S: AsRef<str>>(&self, corpus: &[S]) -> Vec<SparseVector> {
        corpus.iter().map(|doc| self.transform(doc.as_ref())).collect()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&idx| self.idf[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<&'static str> {
        vec![
            "cardiology neurology oncology",
            "oncology radiation oncology",
            "dermatology",
        ]
    }

    #[test]
    fn test_vocabulary_includes_bigrams() {
        let v = TfIdfVectorizer::fit(&corpus(), VectorizerOptions::default());
        assert!(v.idf("cardiology neurology").is_some());
        assert!(v.idf("radiation oncology").is_some());
        assert!(v.idf("dermatology").is_some());
        assert_eq!(v.n_documents(), 3);
    }

    #[test]
    fn test_smoothed_idf() {
        let v = TfIdfVectorizer::fit(&corpus(), VectorizerOptions::default());
        // oncology: df = 2 of 3
        let expected = (4.0_f64 / 3.0).ln() + 1.0;
        assert!((v.idf("oncology").unwrap() - expected).abs() < 1e-12);
        // dermatology: df = 1 of 3
        let expected = (4.0_f64 / 2.0).ln() + 1.0;
        assert!((v.idf("dermatology").unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_transform_is_unit_length() {
        let v = TfIdfVectorizer::fit(&corpus(), VectorizerOptions::default());
        let vec = v.transform("oncology and cardiology");
        assert!((vec.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_terms_give_zero_vector() {
        let v = TfIdfVectorizer::fit(&corpus(), VectorizerOptions::default());
        assert!(v.transform("psychiatry").is_zero());
        assert!(v.transform("").is_zero());
    }

    #[test]
    fn test_transform_is_deterministic() {
        let v = TfIdfVectorizer::fit(&corpus(), VectorizerOptions::default());
        assert_eq!(v.transform("radiation oncology"), v.transform("radiation oncology"));
    }

    #[test]
    fn test_dot_of_disjoint_vectors_is_zero() {
        let v = TfIdfVectorizer::fit(&corpus(), VectorizerOptions::default());
        let a = v.transform("dermatology");
        let b = v.transform("cardiology");
        assert_eq!(a.dot(&b), 0.0);
    }

    #[test]
    fn test_empty_corpus() {
        let empty: Vec<String> = Vec::new();
        let v = TfIdfVectorizer::fit(&empty, VectorizerOptions::default());
        assert_eq!(v.vocabulary_size(), 0);
        assert!(v.transform("anything").is_zero());
    }
}
