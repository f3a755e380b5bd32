use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};


#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum SpecialistCategory {
    Cardiologist,
    Dermatologist,
    Gastroenterologist,
    Neurologist,
    Pulmonologist,
    Orthopedist,
    Psychiatrist,
    #[serde(rename = "General Practitioner")]
    #[strum(to_string = "General Practitioner", serialize = "GeneralPractitioner")]
    GeneralPractitioner,
}

impl SpecialistCategory {
    /// Hospital specialty searched for when this specialist is recommended.
    #[must_use]
    pub fn specialty(&self) -> &'static str {
        match self {
            Self::Cardiologist => "cardiology",
            Self::Dermatologist => "dermatology",
            Self::Gastroenterologist => "gastroenterology",
            Self::Neurologist => "neurology",
            Self::Pulmonologist => "pulmonology",
            Self::Orthopedist => "orthopedics",
            Self::Psychiatrist => "psychiatry",
            Self::GeneralPractitioner => "general medicine",
        }
    }
}


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpecialistEntry {
    pub category: SpecialistCategory,
    pub reference_symptoms: Vec<String>,
}

impl SpecialistEntry {
    pub fn new(category: SpecialistCategory, reference_symptoms: &[&str]) -> Self {
        Self {
            category,
            reference_symptoms: reference_symptoms.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    pub fn document(&self) -> String {
        self.reference_symptoms.join(" ")
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ConfidenceTier {
    High,
    Moderate,
    Low,
}

impl ConfidenceTier {
    #[must_use]
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 0.7 {
            Self::High
        } else if confidence > 0.4 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpecialistMatch {
    pub category: SpecialistCategory,
    pub confidence: f64,
}

impl SpecialistMatch {
    #[must_use]
    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::from_confidence(self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_display_names() {
        assert_eq!(SpecialistCategory::GeneralPractitioner.to_string(), "General Practitioner");
        assert_eq!(SpecialistCategory::Cardiologist.to_string(), "Cardiologist");
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(
            SpecialistCategory::from_str("General Practitioner").unwrap(),
            SpecialistCategory::GeneralPractitioner
        );
        assert_eq!(
            SpecialistCategory::from_str("neurologist").unwrap(),
            SpecialistCategory::Neurologist
        );
        assert!(SpecialistCategory::from_str("Astrologer").is_err());
    }

    #[test]
    fn test_serde_uses_display_name() {
        let json = serde_json::to_string(&SpecialistCategory::GeneralPractitioner).unwrap();
        assert_eq!(json, "\"General Practitioner\"");
    }

    #[test]
    fn test_confidence_tiers() {
        assert_eq!(ConfidenceTier::from_confidence(0.71), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_confidence(0.7), ConfidenceTier::Moderate);
        assert_eq!(ConfidenceTier::from_confidence(0.41), ConfidenceTier::Moderate);
        assert_eq!(ConfidenceTier::from_confidence(0.4), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_confidence(0.0), ConfidenceTier::Low);
    }

    #[test]
    fn test_specialty_mapping() {
        assert_eq!(SpecialistCategory::Orthopedist.specialty(), "orthopedics");
        assert_eq!(SpecialistCategory::GeneralPractitioner.specialty(), "general medicine");
    }
}
