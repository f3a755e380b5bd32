use serde::{Deserialize, Serialize};

use crate::core::geo::Coordinates;
use crate::toolkit::hospital::ScoredHospital;
use crate::toolkit::specialist::{ConfidenceTier, SpecialistMatch};
use crate::DEFAULT_SPECIALTY_RADIUS_KM;


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationQuery {
    pub raw_symptom_text: String,
    pub specialty_query: Option<String>,
    pub user_location: Option<Coordinates>,
    pub insurance_filter: Option<String>,
    pub is_emergency: bool,
    pub max_distance_km: f64,
}

impl RecommendationQuery {
    pub fn new(raw_symptom_text: impl Into<String>) -> Self {
        Self {
            raw_symptom_text: raw_symptom_text.into(),
            specialty_query: None,
            user_location: None,
            insurance_filter: None,
            is_emergency: false,
            max_distance_km: DEFAULT_SPECIALTY_RADIUS_KM,
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: Coordinates) -> Self {
        self.user_location = Some(location);
        self
    }

    #[must_use]
    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty_query = Some(specialty.into());
        self
    }

    #[must_use]
    pub fn with_insurance(mut self, provider: impl Into<String>) -> Self {
        self.insurance_filter = Some(provider.into());
        self
    }

    #[must_use]
    pub fn emergency(mut self, is_emergency: bool) -> Self {
        self.is_emergency = is_emergency;
        self
    }

    #[must_use]
    pub fn within_km(mut self, max_distance_km: f64) -> Self {
        self.max_distance_km = max_distance_km;
        self
    }
}


#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub symptoms: Vec<String>,
    pub specialist: SpecialistMatch,
    pub confidence_tier: ConfidenceTier,
    pub specialty: String,
    pub hospitals: Vec<ScoredHospital>,
    pub user_location: Option<Coordinates>,
    pub urgent_care_advised: bool,
}

impl Recommendation {
    #[must_use]
    pub fn has_hospitals(&self) -> bool {
        !self.hospitals.is_empty()
    }
}
