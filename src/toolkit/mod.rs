

pub mod extraction;
pub mod hospital;
pub mod matching;
pub mod specialist;

pub use extraction::{KeywordSymptomExtractor, MedicalEntity, SymptomExtractor};
pub use hospital::{HospitalCatalog, HospitalRecord, ScoredHospital, SearchOptions};
pub use matching::{TfIdfVectorizer, VectorizerOptions};
pub use specialist::{SpecialistCatalog, SpecialistCategory, SpecialistMatch};
