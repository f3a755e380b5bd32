

use std::path::Path;

use tracing::{debug, info};

use super::models::{SpecialistCategory, SpecialistEntry, SpecialistMatch};
use crate::core::error::{MedrouteError, Result};
use crate::toolkit::matching::{
    batch_cosine_similarity, rank_indices, SparseVector, TfIdfVectorizer, VectorizerOptions,
};


pub const FALLBACK_CONFIDENCE: f64 = 0.5;


pub fn default_entries() -> Vec<SpecialistEntry> {
    use SpecialistCategory::*;
    vec![
        SpecialistEntry::new(Cardiologist, &[
            "chest pain", "heart palpitations", "shortness of breath",
            "high blood pressure", "irregular heartbeat", "fatigue",
            "swelling in legs", "dizziness",
        ]),
        SpecialistEntry::new(Dermatologist, &[
            "rash", "skin irritation", "acne", "moles", "hair loss",
            "nail problems", "eczema", "psoriasis", "skin cancer",
        ]),
        SpecialistEntry::new(Gastroenterologist, &[
            "abdominal pain", "nausea", "vomiting", "diarrhea",
            "constipation", "bloating", "heartburn", "stomach pain",
        ]),
        SpecialistEntry::new(Neurologist, &[
            "headache", "migraine", "dizziness", "seizures", "memory loss",
            "numbness", "tingling", "weakness", "tremor",
        ]),
        SpecialistEntry::new(Pulmonologist, &[
            "cough", "shortness of breath", "wheezing", "chest pain",
            "breathing difficulty", "lung infection",
        ]),
        SpecialistEntry::new(Orthopedist, &[
            "joint pain", "back pain", "muscle pain", "bone pain",
            "fracture", "sprain", "arthritis", "stiffness",
        ]),
        SpecialistEntry::new(Psychiatrist, &[
            "depression", "anxiety", "mood swings", "insomnia",
            "panic attacks", "stress", "mental health",
        ]),
        SpecialistEntry::new(GeneralPractitioner, &[
            "fever", "cold", "flu", "general checkup", "vaccination",
            "routine care", "minor illness",
        ]),
    ]
}


/// Specialist reference table with its fitted symptom vectors. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct SpecialistCatalog {
    entries: Vec<SpecialistEntry>,
    vectorizer: TfIdfVectorizer,
    symptom_vectors: Vec<SparseVector>,
}

impl SpecialistCatalog {
    pub fn new() -> Self {
        Self::from_entries(default_entries())
    }

    pub fn from_entries(entries: Vec<SpecialistEntry>) -> Self {
        let documents: Vec<String> = entries.iter().map(SpecialistEntry::document).collect();
        let vectorizer = TfIdfVectorizer::fit(&documents, VectorizerOptions::default());
        let symptom_vectors = vectorizer.transform_all(&documents);

        info!("Specialist catalog ready with {} categories", entries.len());

        Self {
            entries,
            vectorizer,
            symptom_vectors,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<SpecialistEntry> = serde_json::from_str(json)?;
        if entries.is_empty() {
            return Err(MedrouteError::catalog("specialist catalog has no entries"));
        }
        Ok(Self::from_entries(entries))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn entries(&self) -> &[SpecialistEntry] {
        &self.entries
    }

    /// Every reference symptom across the catalog, deduplicated, in table order.
    pub fn vocabulary(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for symptom in self.entries.iter().flat_map(|e| e.reference_symptoms.iter()) {
            if !seen.contains(symptom) {
                seen.push(symptom.clone());
            }
        }
        seen
    }

    /// Best matching category for the symptom terms. Blank input gets the
    /// General Practitioner fallback at confidence 0.5.
    pub fn recommend<S: AsRef<str>>(&self, symptoms: &[S]) -> SpecialistMatch {
        self.rank(symptoms)
            .into_iter()
            .next()
            .unwrap_or(SpecialistMatch {
                category: SpecialistCategory::GeneralPractitioner,
                confidence: FALLBACK_CONFIDENCE,
            })
    }

    /// All categories scored against the symptoms, best first. Empty for blank input.
    pub fn rank<S: AsRef<str>>(&self, symptoms: &[S]) -> Vec<SpecialistMatch> {
        let terms: Vec<&str> = symptoms
            .iter()
            .map(|s| s.as_ref().trim())
            .filter(|s| !s.is_empty())
            .collect();

        if terms.is_empty() {
            debug!("No symptoms supplied, using fallback specialist");
            return Vec::new();
        }

        let query = self.vectorizer.transform(&terms.join(" "));
        let scores = batch_cosine_similarity(&query, &self.symptom_vectors);

        let ranked: Vec<SpecialistMatch> = rank_indices(&scores)
            .into_iter()
            .map(|(idx, score)| SpecialistMatch {
                category: self.entries[idx].category,
                confidence: score.max(0.0),
            })
            .collect();

        if let Some(best) = ranked.first() {
            debug!(
                "Specialist match for {:?}: {} ({:.3})",
                terms, best.category, best.confidence
            );
        }

        ranked
    }
}

impl Default for SpecialistCatalog {
    fn default() -> Self {
        Self::new()
    }
}
