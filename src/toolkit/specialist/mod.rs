

pub mod catalog;
pub mod models;

pub use catalog::{default_entries, SpecialistCatalog, FALLBACK_CONFIDENCE};
pub use models::{ConfidenceTier, SpecialistCategory, SpecialistEntry, SpecialistMatch};
