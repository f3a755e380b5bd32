use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::core::error::{MedrouteError, Result};
use crate::core::geo::Coordinates;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum FacilityType {
    Government,
    Private,
}


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HospitalRecord {
    pub name: String,
    pub city: String,
    pub coordinates: Coordinates,
    pub specialties: Vec<String>,
    pub rating: f64,
    pub emergency_capable: bool,
    pub accepted_insurance: Vec<String>,
    pub phone: String,
    pub facility_type: FacilityType,
}

impl HospitalRecord {
    /// Case-insensitive exact membership against the accepted insurance list.
    #[must_use]
    pub fn accepts_insurance(&self, provider: &str) -> bool {
        let provider = provider.trim().to_lowercase();
        self.accepted_insurance
            .iter()
            .any(|ins| ins.to_lowercase() == provider)
    }

    pub fn specialties_document(&self) -> String {
        self.specialties.join(" ")
    }

    #[must_use]
    pub fn is_government(&self) -> bool {
        self.facility_type == FacilityType::Government
    }

    pub fn validate(&self) -> Result<()> {
        self.coordinates.validate().map_err(|e| {
            MedrouteError::catalog(format!("hospital '{}': {e}", self.name))
        })?;
        if !self.rating.is_finite() || !(0.0..=5.0).contains(&self.rating) {
            return Err(MedrouteError::catalog(format!(
                "hospital '{}': rating {} outside [0, 5]",
                self.name, self.rating
            )));
        }
        Ok(())
    }
}


/// Per-query view of a catalog row with the scores computed for that query.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredHospital {
    pub record: Arc<HospitalRecord>,
    pub specialty_match_score: Option<f64>,
    pub distance_km: Option<f64>,
    pub combined_score: Option<f64>,
}

impl ScoredHospital {
    pub fn unscored(record: Arc<HospitalRecord>) -> Self {
        Self {
            record,
            specialty_match_score: None,
            distance_km: None,
            combined_score: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }
}
