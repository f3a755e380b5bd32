//! Hospital catalog and its ranked queries.
//!
//! Every query reads the immutable catalog and returns a fresh, filtered and
//! sorted `Vec`. Rows are shared through `Arc` and never modified.

use std::cmp::Ordering;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use super::data::default_records;
use super::models::{HospitalRecord, ScoredHospital};
use crate::core::error::Result;
use crate::core::geo::{closeness, great_circle_km, validate_radius, Coordinates};
use crate::toolkit::matching::{
    batch_cosine_similarity, SparseVector, TfIdfVectorizer, VectorizerOptions,
};
use crate::{
    DEFAULT_EMERGENCY_RADIUS_KM, DEFAULT_GOVERNMENT_RADIUS_KM, DEFAULT_MAX_RECOMMENDATIONS,
    DEFAULT_SPECIALTY_RADIUS_KM,
};


/// Specialty scores must be strictly greater than this to count as a match.
pub const SPECIALTY_MATCH_CUTOFF: f64 = 0.1;

pub const SPECIALTY_WEIGHT: f64 = 0.7;

pub const PROXIMITY_WEIGHT: f64 = 0.3;


#[inline]
#[must_use]
pub fn is_specialty_match(score: f64) -> bool {
    score > SPECIALTY_MATCH_CUTOFF
}


#[must_use]
pub fn combined_score(specialty_score: f64, distance_km: f64, max_distance_km: f64) -> f64 {
    (specialty_score * SPECIALTY_WEIGHT
        + closeness(distance_km, max_distance_km) * PROXIMITY_WEIGHT)
        .clamp(0.0, 1.0)
}


#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Radius override; `None` keeps each query's own default.
    pub max_distance_km: Option<f64>,
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_distance_km: None,
            limit: DEFAULT_MAX_RECOMMENDATIONS,
        }
    }
}


#[derive(Debug, Clone)]
pub struct HospitalCatalog {
    records: Vec<Arc<HospitalRecord>>,
    vectorizer: TfIdfVectorizer,
    specialty_vectors: Vec<SparseVector>,
}

impl HospitalCatalog {
    pub fn new() -> Self {
        Self::build(default_records())
    }

    pub fn from_records(records: Vec<HospitalRecord>) -> Result<Self> {
        for record in &records {
            record.validate()?;
        }
        Ok(Self::build(records))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<HospitalRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    fn build(records: Vec<HospitalRecord>) -> Self {
        let documents: Vec<String> = records
            .iter()
            .map(HospitalRecord::specialties_document)
            .collect();
        let vectorizer = TfIdfVectorizer::fit(&documents, VectorizerOptions::default());
        let specialty_vectors = vectorizer.transform_all(&documents);

        info!(
            "Hospital catalog ready with {} hospitals, {} specialty terms",
            records.len(),
            vectorizer.vocabulary_size()
        );

        Self {
            records: records.into_iter().map(Arc::new).collect(),
            vectorizer,
            specialty_vectors,
        }
    }

    pub fn records(&self) -> &[Arc<HospitalRecord>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Hospitals accepting `provider`, highest rating first.
    pub fn by_insurance(&self, provider: &str) -> Vec<Arc<HospitalRecord>> {
        let mut matches: Vec<Arc<HospitalRecord>> = self
            .records
            .iter()
            .filter(|r| r.accepts_insurance(provider))
            .cloned()
            .collect();

        matches.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
        debug!("Insurance '{}' accepted at {} hospitals", provider, matches.len());
        matches
    }

    /// Hospitals accepting `provider`. With a location, nearest first and no radius cutoff.
    pub fn by_insurance_near(
        &self,
        provider: &str,
        location: Option<&Coordinates>,
    ) -> Result<Vec<ScoredHospital>> {
        let matches = self
            .records
            .iter()
            .filter(|r| r.accepts_insurance(provider))
            .cloned()
            .map(ScoredHospital::unscored)
            .collect();

        match location {
            Some(location) => {
                location.validate()?;
                Ok(sort_by_distance(with_distance(matches, location)))
            }
            None => Ok(matches),
        }
    }

    pub fn by_government_type(
        &self,
        location: Option<&Coordinates>,
        max_distance_km: f64,
    ) -> Result<Vec<ScoredHospital>> {
        let government = self
            .records
            .iter()
            .filter(|r| r.is_government())
            .cloned()
            .map(ScoredHospital::unscored)
            .collect();

        self.near(government, location, max_distance_km)
    }

    /// Emergency-capable hospitals. Without a location the whole set is returned
    /// in catalog order with no distances.
    pub fn by_emergency(
        &self,
        location: Option<&Coordinates>,
        max_distance_km: f64,
    ) -> Result<Vec<ScoredHospital>> {
        let emergency = self
            .records
            .iter()
            .filter(|r| r.emergency_capable)
            .cloned()
            .map(ScoredHospital::unscored)
            .collect();

        self.near(emergency, location, max_distance_km)
    }

    pub fn by_specialty(
        &self,
        query: &str,
        location: Option<&Coordinates>,
        max_distance_km: f64,
    ) -> Result<Vec<ScoredHospital>> {
        if let Some(location) = location {
            location.validate()?;
            validate_radius(max_distance_km)?;
        }

        let query_vector = self.vectorizer.transform(query);
        let scores = batch_cosine_similarity(&query_vector, &self.specialty_vectors);

        let matches: Vec<ScoredHospital> = self
            .records
            .iter()
            .zip(scores)
            .filter(|(_, score)| is_specialty_match(*score))
            .map(|(record, score)| ScoredHospital {
                record: Arc::clone(record),
                specialty_match_score: Some(score.clamp(0.0, 1.0)),
                distance_km: None,
                combined_score: None,
            })
            .collect();

        let mut ranked = match location {
            Some(location) => {
                let mut nearby: Vec<ScoredHospital> = with_distance(matches, location)
                    .into_iter()
                    .filter(|h| h.distance_km.is_some_and(|d| d <= max_distance_km))
                    .collect();
                for hospital in &mut nearby {
                    let specialty = hospital.specialty_match_score.unwrap_or(0.0);
                    let distance = hospital.distance_km.unwrap_or(max_distance_km);
                    hospital.combined_score =
                        Some(combined_score(specialty, distance, max_distance_km));
                }
                nearby
            }
            None => matches,
        };

        ranked.sort_by(|a, b| {
            ranking_score(b)
                .partial_cmp(&ranking_score(a))
                .unwrap_or(Ordering::Equal)
        });

        debug!(
            "Specialty '{}' matched {} hospitals (location: {})",
            query,
            ranked.len(),
            location.is_some()
        );
        Ok(ranked)
    }

    /// Top five for a specialty or emergency, with an optional insurance filter
    /// applied before truncation.
    pub fn comprehensive_recommendation(
        &self,
        specialty: &str,
        location: Option<&Coordinates>,
        insurance: Option<&str>,
        is_emergency: bool,
    ) -> Result<Vec<ScoredHospital>> {
        self.comprehensive_recommendation_within(
            specialty,
            location,
            insurance,
            is_emergency,
            SearchOptions::default(),
        )
    }

    pub fn comprehensive_recommendation_within(
        &self,
        specialty: &str,
        location: Option<&Coordinates>,
        insurance: Option<&str>,
        is_emergency: bool,
        options: SearchOptions,
    ) -> Result<Vec<ScoredHospital>> {
        let hospitals = if is_emergency {
            self.by_emergency(
                location,
                options.max_distance_km.unwrap_or(DEFAULT_EMERGENCY_RADIUS_KM),
            )?
        } else {
            self.by_specialty(
                specialty,
                location,
                options.max_distance_km.unwrap_or(DEFAULT_SPECIALTY_RADIUS_KM),
            )?
        };

        let filtered: Vec<ScoredHospital> = match insurance.map(str::trim) {
            Some(provider) if !provider.is_empty() => hospitals
                .into_iter()
                .filter(|h| h.record.accepts_insurance(provider))
                .collect(),
            _ => hospitals,
        };

        Ok(filtered.into_iter().take(options.limit).collect())
    }

    pub fn by_government_type_default(
        &self,
        location: Option<&Coordinates>,
    ) -> Result<Vec<ScoredHospital>> {
        self.by_government_type(location, DEFAULT_GOVERNMENT_RADIUS_KM)
    }

    fn near(
        &self,
        hospitals: Vec<ScoredHospital>,
        location: Option<&Coordinates>,
        max_distance_km: f64,
    ) -> Result<Vec<ScoredHospital>> {
        let Some(location) = location else {
            return Ok(hospitals);
        };
        location.validate()?;
        validate_radius(max_distance_km)?;

        let nearby = with_distance(hospitals, location)
            .into_iter()
            .filter(|h| h.distance_km.is_some_and(|d| d <= max_distance_km))
            .collect();

        Ok(sort_by_distance(nearby))
    }
}

impl Default for HospitalCatalog {
    fn default() -> Self {
        Self::new()
    }
}


fn with_distance(hospitals: Vec<ScoredHospital>, location: &Coordinates) -> Vec<ScoredHospital> {
    hospitals
        .into_iter()
        .map(|mut h| {
            h.distance_km = Some(great_circle_km(location, &h.record.coordinates));
            h
        })
        .collect()
}

fn sort_by_distance(mut hospitals: Vec<ScoredHospital>) -> Vec<ScoredHospital> {
    hospitals.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(Ordering::Equal)
    });
    hospitals
}

fn ranking_score(hospital: &ScoredHospital) -> f64 {
    hospital
        .combined_score
        .or(hospital.specialty_match_score)
        .unwrap_or(0.0)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::MedrouteError;

    const AIIMS: &str = "All India Institute of Medical Sciences (AIIMS)";

    fn delhi() -> Coordinates {
        Coordinates::new(28.6139, 77.2090).unwrap()
    }

    fn mumbai() -> Coordinates {
        Coordinates::new(19.0760, 72.8777).unwrap()
    }

    fn names(hospitals: &[ScoredHospital]) -> Vec<&str> {
        hospitals.iter().map(ScoredHospital::name).collect()
    }

    #[test]
    fn test_cutoff_is_strict() {
        assert!(!is_specialty_match(0.1));
        assert!(is_specialty_match(0.1 + 1e-9));
        assert!(!is_specialty_match(0.0));
    }

    #[test]
    fn test_combined_score_weights() {
        assert!((combined_score(1.0, 0.0, 50.0) - 1.0).abs() < 1e-12);
        assert!((combined_score(0.5, 25.0, 50.0) - 0.5).abs() < 1e-12);
        assert!((combined_score(0.2, 50.0, 50.0) - 0.14).abs() < 1e-12);
    }

    #[test]
    fn test_insurance_is_case_insensitive() {
        let catalog = HospitalCatalog::new();
        let lower = catalog.by_insurance("star health");
        let upper = catalog.by_insurance("STAR HEALTH");
        assert_eq!(lower, upper);
        assert!(!lower.is_empty());
        assert!(lower.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn test_unknown_insurance_is_empty() {
        let catalog = HospitalCatalog::new();
        assert!(catalog.by_insurance("Acme Mutual").is_empty());
    }

    #[test]
    fn test_insurance_near_sorts_by_distance() {
        let catalog = HospitalCatalog::new();
        let results = catalog.by_insurance_near("ESI", Some(&mumbai())).unwrap();
        assert_eq!(results[0].name(), "Tata Memorial Hospital");
        assert!(results.iter().all(|h| h.distance_km.is_some()));
        assert!(results
            .windows(2)
            .all(|w| w[0].distance_km <= w[1].distance_km));

        let unsorted = catalog.by_insurance_near("ESI", None).unwrap();
        assert!(unsorted.iter().all(|h| h.distance_km.is_none()));
    }

    #[test]
    fn test_government_without_location() {
        let catalog = HospitalCatalog::new();
        let results = catalog.by_government_type(None, 100.0).unwrap();
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|h| h.record.is_government()));
        assert!(results.iter().all(|h| h.distance_km.is_none()));
    }

    #[test]
    fn test_government_near_delhi() {
        let catalog = HospitalCatalog::new();
        let results = catalog.by_government_type_default(Some(&delhi())).unwrap();
        assert_eq!(names(&results), vec![AIIMS]);
        assert_eq!(results[0].distance_km, Some(0.0));
    }

    #[test]
    fn test_specialty_near_delhi_ranks_aiims_first() {
        let catalog = HospitalCatalog::new();
        let results = catalog.by_specialty("cardiology", Some(&delhi()), 50.0).unwrap();

        assert!(!results.is_empty());
        assert_eq!(results[0].name(), AIIMS);
        let best = results[0].combined_score.unwrap();
        assert!(results.iter().all(|h| h.combined_score.unwrap() <= best));
        assert!(results.iter().all(|h| h.distance_km.unwrap() <= 50.0));
        assert!(results
            .windows(2)
            .all(|w| w[0].combined_score >= w[1].combined_score));
    }

    #[test]
    fn test_specialty_without_location_sorted_by_similarity() {
        let catalog = HospitalCatalog::new();
        let results = catalog.by_specialty("oncology", None, 50.0).unwrap();

        assert_eq!(results[0].name(), "Tata Memorial Hospital");
        assert!(results.iter().all(|h| h.distance_km.is_none()));
        assert!(results.iter().all(|h| h.combined_score.is_none()));
        assert!(results
            .iter()
            .all(|h| h.specialty_match_score.unwrap() > SPECIALTY_MATCH_CUTOFF));
        assert!(results
            .windows(2)
            .all(|w| w[0].specialty_match_score >= w[1].specialty_match_score));
    }

    #[test]
    fn test_specialty_ties_keep_catalog_order() {
        let catalog = HospitalCatalog::new();
        let results = catalog.by_specialty("cardiology", None, 50.0).unwrap();
        // AIIMS and Manipal list identical specialties.
        assert_eq!(results[0].name(), AIIMS);
        assert_eq!(results[1].name(), "Manipal Hospitals");
        assert_eq!(results[0].specialty_match_score, results[1].specialty_match_score);
    }

    #[test]
    fn test_specialty_scores_in_unit_interval() {
        let catalog = HospitalCatalog::new();
        for query in ["cardiology", "oncology", "dermatology", "general medicine", "transplant"] {
            for h in catalog.by_specialty(query, Some(&delhi()), 2000.0).unwrap() {
                let s = h.specialty_match_score.unwrap();
                let c = h.combined_score.unwrap();
                assert!((0.0..=1.0).contains(&s));
                assert!((0.0..=1.0).contains(&c));
            }
        }
    }

    #[test]
    fn test_unmatched_specialty_is_empty() {
        let catalog = HospitalCatalog::new();
        assert!(catalog.by_specialty("psychiatry", None, 50.0).unwrap().is_empty());
        assert!(catalog.by_specialty("", Some(&delhi()), 50.0).unwrap().is_empty());
    }

    #[test]
    fn test_emergency_near_mumbai() {
        let catalog = HospitalCatalog::new();
        let results = catalog.by_emergency(Some(&mumbai()), 50.0).unwrap();
        let found = names(&results);

        assert_eq!(found, vec!["Tata Memorial Hospital", "Kokilaben Dhirubhai Ambani Hospital"]);
        assert!(results.iter().all(|h| h.distance_km.unwrap() <= 50.0));
    }

    #[test]
    fn test_emergency_wide_radius_puts_mumbai_first() {
        let catalog = HospitalCatalog::new();
        let results = catalog.by_emergency(Some(&mumbai()), 5000.0).unwrap();
        assert_eq!(results.len(), 12);
        let first_remote = results
            .iter()
            .position(|h| matches!(h.record.city.as_str(), "Delhi" | "New Delhi" | "Bangalore"))
            .unwrap();
        let last_mumbai = results
            .iter()
            .rposition(|h| h.record.city == "Mumbai")
            .unwrap();
        assert!(last_mumbai < first_remote);
    }

    #[test]
    fn test_emergency_without_location_returns_all() {
        let catalog = HospitalCatalog::new();
        let results = catalog.by_emergency(None, 50.0).unwrap();
        assert_eq!(results.len(), 12);
        assert_eq!(results[0].name(), AIIMS);
        assert!(results.iter().all(|h| h.distance_km.is_none()));
    }

    #[test]
    fn test_comprehensive_oncology_government() {
        let catalog = HospitalCatalog::new();
        let results = catalog
            .comprehensive_recommendation("oncology", None, Some("Government"), false)
            .unwrap();

        assert!(results.len() <= 5);
        assert!(!results.is_empty());
        assert!(results.iter().all(|h| h.record.accepts_insurance("Government")));
        assert_eq!(results[0].name(), "Tata Memorial Hospital");
        assert!(results
            .windows(2)
            .all(|w| w[0].specialty_match_score >= w[1].specialty_match_score));
    }

    #[test]
    fn test_comprehensive_truncates_after_filter() {
        let catalog = HospitalCatalog::new();
        let unfiltered = catalog
            .comprehensive_recommendation("cardiology", None, None, false)
            .unwrap();
        assert_eq!(unfiltered.len(), 5);

        let filtered = catalog
            .comprehensive_recommendation("cardiology", None, Some("government"), false)
            .unwrap();
        // Four government-scheme hospitals treat cardiology; all survive truncation.
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_comprehensive_emergency_branch() {
        let catalog = HospitalCatalog::new();
        let results = catalog
            .comprehensive_recommendation("oncology", Some(&mumbai()), None, true)
            .unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|h| h.specialty_match_score.is_none()));
    }

    #[test]
    fn test_comprehensive_with_radius_and_limit() {
        let catalog = HospitalCatalog::new();
        let options = SearchOptions {
            max_distance_km: Some(3000.0),
            limit: 3,
        };
        let results = catalog
            .comprehensive_recommendation_within("neurology", Some(&delhi()), None, false, options)
            .unwrap();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|h| h.distance_km.unwrap() <= 3000.0));
    }

    #[test]
    fn test_queries_are_idempotent() {
        let catalog = HospitalCatalog::new();
        let a = catalog.by_specialty("neurology", Some(&delhi()), 50.0).unwrap();
        let b = catalog.by_specialty("neurology", Some(&delhi()), 50.0).unwrap();
        assert_eq!(a, b);

        let a = catalog.by_emergency(Some(&mumbai()), 1000.0).unwrap();
        let b = catalog.by_emergency(Some(&mumbai()), 1000.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_location_fails_fast() {
        let catalog = HospitalCatalog::new();
        let bad = Coordinates {
            latitude: 95.0,
            longitude: 77.0,
        };
        let err = catalog.by_specialty("cardiology", Some(&bad), 50.0).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(catalog.by_emergency(Some(&bad), 50.0).unwrap_err().is_invalid_input());
        assert!(catalog.by_government_type(Some(&bad), 100.0).is_err());
    }

    #[test]
    fn test_invalid_radius_fails_fast() {
        let catalog = HospitalCatalog::new();
        assert!(catalog.by_emergency(Some(&delhi()), 0.0).unwrap_err().is_invalid_input());
        assert!(catalog.by_specialty("cardiology", Some(&delhi()), -5.0).is_err());
    }

    #[test]
    fn test_catalog_rows_are_not_mutated() {
        let catalog = HospitalCatalog::new();
        let before: Vec<HospitalRecord> = catalog.records().iter().map(|r| (**r).clone()).collect();
        let _ = catalog.by_specialty("cardiology", Some(&delhi()), 50.0).unwrap();
        let _ = catalog.by_insurance("Star Health");
        let after: Vec<HospitalRecord> = catalog.records().iter().map(|r| (**r).clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_custom_catalog_from_json() {
        let json = r#"[{
            "name": "Sassoon General Hospital",
            "city": "Pune",
            "coordinates": {"latitude": 18.5204, "longitude": 73.8567},
            "specialties": ["general medicine", "pulmonology"],
            "rating": 3.9,
            "emergency_capable": true,
            "accepted_insurance": ["Government"],
            "phone": "020-26128000",
            "facility_type": "Government"
        }]"#;
        let catalog = HospitalCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        let results = catalog.by_specialty("pulmonology", None, 50.0).unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_custom_catalog_rejects_bad_rows() {
        let json = r#"[{
            "name": "Nowhere",
            "city": "Nowhere",
            "coordinates": {"latitude": 0.0, "longitude": 200.0},
            "specialties": [],
            "rating": 3.0,
            "emergency_capable": false,
            "accepted_insurance": [],
            "phone": "",
            "facility_type": "Private"
        }]"#;
        assert!(matches!(
            HospitalCatalog::from_json_str(json),
            Err(MedrouteError::Catalog(_))
        ));
    }
}
