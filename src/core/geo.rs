//! Coordinates and great-circle distance.

use serde::{Deserialize, Serialize};

use super::error::{MedrouteError, Result};


pub const EARTH_RADIUS_KM: f64 = 6371.0088;


#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Builds a validated coordinate pair. Out-of-range values are rejected, never clamped.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let coords = Self {
            latitude,
            longitude,
        };
        coords.validate()?;
        Ok(coords)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(MedrouteError::invalid_input(format!(
                "latitude {} outside [-90, 90]",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(MedrouteError::invalid_input(format!(
                "longitude {} outside [-180, 180]",
                self.longitude
            )));
        }
        Ok(())
    }
}


/// Haversine distance on a spherical earth.
#[must_use]
pub fn great_circle_km(a: &Coordinates, b: &Coordinates) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}


/// Linear closeness in [0, 1] for a distance already inside `max_distance_km`.
#[must_use]
pub fn closeness(distance_km: f64, max_distance_km: f64) -> f64 {
    (1.0 - distance_km / max_distance_km).clamp(0.0, 1.0)
}


pub fn validate_radius(max_distance_km: f64) -> Result<()> {
    if !max_distance_km.is_finite() || max_distance_km <= 0.0 {
        return Err(MedrouteError::invalid_input(format!(
            "max distance must be a positive number of km, got {max_distance_km}"
        )));
    }
    Ok(())
}
