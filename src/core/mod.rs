

pub mod config;
pub mod error;
pub mod geo;

pub use config::MedrouteConfig;
pub use error::{MedrouteError, Result};
pub use geo::Coordinates;
