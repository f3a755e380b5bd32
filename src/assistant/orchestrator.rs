

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::guidance::needs_urgent_care;
use super::models::{Recommendation, RecommendationQuery};
use crate::core::config::MedrouteConfig;
use crate::core::error::Result;
use crate::core::geo::Coordinates;
use crate::toolkit::extraction::{unique_terms, KeywordSymptomExtractor, SymptomExtractor};
use crate::toolkit::hospital::{HospitalCatalog, ScoredHospital, SearchOptions};
use crate::toolkit::specialist::SpecialistCatalog;


/// Runs free text through extraction, specialist matching and hospital ranking.
pub struct RecommendationOrchestrator {
    specialists: Arc<SpecialistCatalog>,
    hospitals: Arc<HospitalCatalog>,
    extractor: Arc<dyn SymptomExtractor>,
    config: MedrouteConfig,
}

impl RecommendationOrchestrator {
    pub fn new(
        specialists: Arc<SpecialistCatalog>,
        hospitals: Arc<HospitalCatalog>,
        extractor: Arc<dyn SymptomExtractor>,
        config: MedrouteConfig,
    ) -> Self {
        info!(
            "RecommendationOrchestrator initialized (specialists={}, hospitals={}, limit={})",
            specialists.entries().len(),
            hospitals.len(),
            config.max_recommendations
        );

        Self {
            specialists,
            hospitals,
            extractor,
            config,
        }
    }

    /// Builds catalogs from the configured JSON files, or the built-in tables when unset.
    pub fn from_config(config: MedrouteConfig) -> Result<Self> {
        config.validate()?;

        let specialists = match &config.specialist_catalog_path {
            Some(path) => SpecialistCatalog::from_path(path)?,
            None => SpecialistCatalog::new(),
        };
        let hospitals = match &config.hospital_catalog_path {
            Some(path) => HospitalCatalog::from_path(path)?,
            None => HospitalCatalog::new(),
        };

        let extractor = if config.include_specialist_vocabulary {
            KeywordSymptomExtractor::with_vocabulary(specialists.vocabulary())
        } else {
            KeywordSymptomExtractor::default()
        };

        Ok(Self::new(
            Arc::new(specialists),
            Arc::new(hospitals),
            Arc::new(extractor),
            config,
        ))
    }

    pub fn config(&self) -> &MedrouteConfig {
        &self.config
    }

    pub fn specialists(&self) -> &SpecialistCatalog {
        &self.specialists
    }

    pub fn hospitals(&self) -> &HospitalCatalog {
        &self.hospitals
    }

    pub async fn consult(&self, query: &RecommendationQuery) -> Result<Recommendation> {
        let entities = self.extractor.extract(&query.raw_symptom_text).await?;
        let mut symptoms = unique_terms(&entities);

        if symptoms.is_empty() {
            let raw = query.raw_symptom_text.trim();
            if !raw.is_empty() {
                debug!("No entities extracted, matching on the raw text");
                symptoms.push(raw.to_string());
            }
        }

        let specialist = self.specialists.recommend(&symptoms);
        let specialty = query
            .specialty_query
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| specialist.category.specialty())
            .to_string();

        let options = SearchOptions {
            max_distance_km: Some(query.max_distance_km),
            limit: self.config.max_recommendations,
        };
        let hospitals = self.hospitals.comprehensive_recommendation_within(
            &specialty,
            query.user_location.as_ref(),
            query.insurance_filter.as_deref(),
            query.is_emergency,
            options,
        )?;

        if hospitals.is_empty() {
            warn!("No hospitals found for specialty '{}'", specialty);
        }

        let urgent_care_advised = query.is_emergency || needs_urgent_care(&symptoms);

        info!(
            "Consultation: {} symptoms -> {} ({:.3}), {} hospitals, urgent={}",
            symptoms.len(),
            specialist.category,
            specialist.confidence,
            hospitals.len(),
            urgent_care_advised
        );

        Ok(Recommendation {
            confidence_tier: specialist.tier(),
            symptoms,
            specialist,
            specialty,
            hospitals,
            user_location: query.user_location,
            urgent_care_advised,
        })
    }

    /// Hospital search without symptom matching. `max_distance_km` overrides the
    /// configured radius for the chosen search kind.
    pub fn find_hospitals(
        &self,
        specialty: Option<&str>,
        location: Option<&Coordinates>,
        insurance: Option<&str>,
        is_emergency: bool,
        max_distance_km: Option<f64>,
    ) -> Result<Vec<ScoredHospital>> {
        let limit = self.config.max_recommendations;

        if is_emergency {
            let options = SearchOptions {
                max_distance_km: Some(max_distance_km.unwrap_or(self.config.emergency_radius_km)),
                limit,
            };
            return self.hospitals.comprehensive_recommendation_within(
                "", location, insurance, true, options,
            );
        }

        match specialty.map(str::trim).filter(|s| !s.is_empty()) {
            Some(specialty) => {
                let options = SearchOptions {
                    max_distance_km: Some(
                        max_distance_km.unwrap_or(self.config.specialty_radius_km),
                    ),
                    limit,
                };
                self.hospitals.comprehensive_recommendation_within(
                    specialty, location, insurance, false, options,
                )
            }
            None => match insurance.map(str::trim).filter(|s| !s.is_empty()) {
                Some(provider) => Ok(self
                    .hospitals
                    .by_insurance_near(provider, location)?
                    .into_iter()
                    .take(limit)
                    .collect()),
                None => Ok(self
                    .hospitals
                    .by_government_type(
                        location,
                        max_distance_km.unwrap_or(self.config.government_radius_km),
                    )?
                    .into_iter()
                    .take(limit)
                    .collect()),
            },
        }
    }
}
