

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use super::models::MedicalEntity;
use super::SymptomExtractor;
use crate::core::error::Result;

lazy_static! {
    pub static ref SYMPTOM_KEYWORDS: Vec<&'static str> = vec![
        "headache", "fever", "cough", "nausea", "vomiting", "diarrhea",
        "chest pain", "shortness of breath", "fatigue", "dizziness",
        "abdominal pain", "back pain", "joint pain", "rash", "swelling",
    ];
}


/// Word-bounded, case-insensitive keyword matcher.
#[derive(Debug, Clone)]
pub struct KeywordSymptomExtractor {
    patterns: Vec<(String, Regex)>,
}

impl KeywordSymptomExtractor {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns: Vec<(String, Regex)> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if keyword.is_empty() || patterns.iter().any(|(k, _)| *k == keyword) {
                continue;
            }
            let pattern = format!(r"(?i)\b{}\b", regex::escape(&keyword));
            match Regex::new(&pattern) {
                Ok(regex) => patterns.push((keyword, regex)),
                Err(e) => warn!("Skipping keyword '{}': {}", keyword, e),
            }
        }
        Self { patterns }
    }

    /// The built-in keyword list extended with extra vocabulary.
    pub fn with_vocabulary<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords: Vec<String> = SYMPTOM_KEYWORDS.iter().map(|s| (*s).to_string()).collect();
        keywords.extend(extra.into_iter().map(|s| s.as_ref().to_string()));
        Self::new(keywords)
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|(k, _)| k.as_str())
    }

    /// Matches in order of first appearance in the text, without duplicates.
    pub fn extract_terms(&self, text: &str) -> Vec<String> {
        let mut found: Vec<(usize, &str)> = self
            .patterns
            .iter()
            .filter_map(|(keyword, regex)| regex.find(text).map(|m| (m.start(), keyword.as_str())))
            .collect();
        found.sort_by_key(|(pos, _)| *pos);

        let terms: Vec<String> = found.into_iter().map(|(_, k)| k.to_string()).collect();
        debug!("Keyword extraction found {} terms", terms.len());
        terms
    }
}

impl Default for KeywordSymptomExtractor {
    fn default() -> Self {
        Self::new(SYMPTOM_KEYWORDS.iter())
    }
}

#[async_trait]
impl SymptomExtractor for KeywordSymptomExtractor {
    async fn extract(&self, text: &str) -> Result<Vec<MedicalEntity>> {
        Ok(self
            .extract_terms(text)
            .into_iter()
            .map(MedicalEntity::symptom)
            .collect())
    }
}
