

pub mod gazetteer;
pub mod guidance;
pub mod models;
pub mod orchestrator;

pub use guidance::{needs_urgent_care, render_consultation, render_hospitals};
pub use models::{Recommendation, RecommendationQuery};
pub use orchestrator::RecommendationOrchestrator;
