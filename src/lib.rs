

pub mod assistant;
pub mod core;
pub mod toolkit;


pub use assistant::{Recommendation, RecommendationOrchestrator, RecommendationQuery};
pub use crate::core::config::MedrouteConfig;
pub use crate::core::error::{MedrouteError, Result};
pub use crate::core::geo::Coordinates;
pub use toolkit::{HospitalCatalog, SpecialistCatalog};


pub const DEFAULT_SPECIALTY_RADIUS_KM: f64 = 50.0;


pub const DEFAULT_GOVERNMENT_RADIUS_KM: f64 = 100.0;


pub const DEFAULT_EMERGENCY_RADIUS_KM: f64 = 50.0;


pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 5;
