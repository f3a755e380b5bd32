

pub mod catalog;
pub mod data;
pub mod models;

pub use catalog::{
    combined_score, is_specialty_match, HospitalCatalog, SearchOptions, PROXIMITY_WEIGHT,
    SPECIALTY_MATCH_CUTOFF, SPECIALTY_WEIGHT,
};
pub use data::default_records;
pub use models::{FacilityType, HospitalRecord, ScoredHospital};
