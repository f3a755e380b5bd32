

pub mod keyword;
pub mod models;

use async_trait::async_trait;

use crate::core::error::Result;

pub use keyword::{KeywordSymptomExtractor, SYMPTOM_KEYWORDS};
pub use models::{EntityKind, MedicalEntity};


/// Turns free text into symptom, disease and body-part mentions.
///
/// NER models live behind this trait; `KeywordSymptomExtractor` is the
/// built-in fallback.
#[async_trait]
pub trait SymptomExtractor: Send + Sync {
    async fn extract(&self, text: &str) -> Result<Vec<MedicalEntity>>;
}


/// Entity texts with case-insensitive duplicates removed, first occurrence wins.
pub fn unique_terms(entities: &[MedicalEntity]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut terms = Vec::new();
    for entity in entities {
        let text = entity.text.trim();
        let key = text.to_lowercase();
        if text.is_empty() || seen.contains(&key) {
            continue;
        }
        seen.push(key);
        terms.push(text.to_string());
    }
    terms
}
