

use lazy_static::lazy_static;
use tracing::{debug, warn};

use crate::core::geo::Coordinates;

lazy_static! {
    static ref CITY_COORDINATES: Vec<(&'static str, f64, f64)> = vec![
        ("delhi", 28.6139, 77.2090),
        ("new delhi", 28.6139, 77.2090),
        ("mumbai", 19.0760, 72.8777),
        ("bangalore", 12.9716, 77.5946),
        ("bengaluru", 12.9716, 77.5946),
        ("chennai", 13.0827, 80.2707),
        ("kolkata", 22.5726, 88.3639),
        ("hyderabad", 17.3850, 78.4867),
        ("pune", 18.5204, 73.8567),
        ("ahmedabad", 23.0225, 72.5714),
        ("jaipur", 26.9124, 75.7873),
        ("lucknow", 26.8467, 80.9462),
        ("chandigarh", 30.7333, 76.7794),
        ("gurgaon", 28.4595, 77.0266),
        ("gurugram", 28.4595, 77.0266),
        ("noida", 28.5355, 77.3910),
        ("ghaziabad", 28.6692, 77.4538),
        ("faridabad", 28.4089, 77.3178),
        ("indore", 22.7196, 75.8577),
        ("bhopal", 23.2599, 77.4126),
        ("patna", 25.5941, 85.1376),
        ("nagpur", 21.1458, 79.0882),
        ("surat", 21.1702, 72.8311),
        ("vadodara", 22.3072, 73.1812),
        ("rajkot", 22.3039, 70.8022),
        ("coimbatore", 11.0168, 76.9558),
        ("madurai", 9.9252, 78.1198),
        ("kochi", 9.9312, 76.2673),
        ("thiruvananthapuram", 8.5241, 76.9366),
        ("visakhapatnam", 17.6868, 83.2185),
        ("vijayawada", 16.5062, 80.6480),
        ("bhubaneswar", 20.2961, 85.8245),
        ("raipur", 21.2514, 81.6296),
        ("ranchi", 23.3441, 85.3096),
        ("dehradun", 30.3165, 78.0322),
        ("shimla", 31.1048, 77.1734),
        ("jammu", 32.7266, 74.8570),
        ("srinagar", 34.0837, 74.7973),
        ("guwahati", 26.1445, 91.7362),
        ("agartala", 23.8315, 91.2868),
    ];
}


/// Resolves free text to the first city whose name appears in it.
pub fn resolve(text: &str) -> Option<(&'static str, Coordinates)> {
    let lowered = text.to_lowercase();
    let (city, latitude, longitude) = CITY_COORDINATES
        .iter()
        .find(|(city, _, _)| lowered.contains(city))?;

    debug!("Resolved location '{}' from input", city);
    Some((
        *city,
        Coordinates {
            latitude: *latitude,
            longitude: *longitude,
        },
    ))
}


pub fn resolve_coordinates(text: &str) -> Option<Coordinates> {
    resolve(text).map(|(_, coords)| coords)
}


/// Location for a user-named city, or a city mentioned in `text` when none is named.
/// An unknown city gives `None` so the search runs without a location.
pub fn locate(city: Option<&str>, text: &str) -> Option<Coordinates> {
    match city.map(str::trim).filter(|c| !c.is_empty()) {
        Some(city) => {
            let found = resolve_coordinates(city);
            if found.is_none() {
                warn!("Unknown city '{}', searching without a location", city);
            }
            found
        }
        None => resolve_coordinates(text),
    }
}


pub fn known_cities() -> impl Iterator<Item = &'static str> {
    CITY_COORDINATES.iter().map(|(city, _, _)| *city)
}
