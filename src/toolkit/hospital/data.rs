

use super::models::{FacilityType, HospitalRecord};
use crate::core::geo::Coordinates;

#[allow(clippy::too_many_arguments)]
fn row(
    name: &str,
    city: &str,
    (latitude, longitude): (f64, f64),
    specialties: &[&str],
    rating: f64,
    emergency_capable: bool,
    accepted_insurance: &[&str],
    phone: &str,
    facility_type: FacilityType,
) -> HospitalRecord {
    HospitalRecord {
        name: name.to_string(),
        city: city.to_string(),
        coordinates: Coordinates {
            latitude,
            longitude,
        },
        specialties: specialties.iter().map(|s| (*s).to_string()).collect(),
        rating,
        emergency_capable,
        accepted_insurance: accepted_insurance.iter().map(|s| (*s).to_string()).collect(),
        phone: phone.to_string(),
        facility_type,
    }
}


pub fn default_records() -> Vec<HospitalRecord> {
    use FacilityType::{Government, Private};
    vec![
        row(
            "All India Institute of Medical Sciences (AIIMS)",
            "New Delhi",
            (28.6139, 77.2090),
            &["cardiology", "neurology", "oncology", "orthopedics", "gastroenterology", "nephrology"],
            4.8,
            true,
            &["Government", "CGHS", "ECHS", "ESI", "Private"],
            "011-26588500",
            Government,
        ),
        row(
            "Apollo Hospitals",
            "Chennai",
            (13.0827, 80.2707),
            &["cardiology", "oncology", "neurology", "orthopedics", "transplant", "emergency medicine"],
            4.6,
            true,
            &["Star Health", "HDFC ERGO", "ICICI Lombard", "Bajaj Allianz", "New India Assurance"],
            "044-28293333",
            Private,
        ),
        row(
            "Fortis Healthcare",
            "Gurgaon",
            (28.4595, 77.0266),
            &["cardiology", "neurology", "oncology", "orthopedics", "gastroenterology", "urology"],
            4.4,
            true,
            &["Star Health", "Max Bupa", "HDFC ERGO", "Religare", "Apollo Munich"],
            "0124-4962200",
            Private,
        ),
        row(
            "Medanta - The Medicity",
            "Gurgaon",
            (28.4089, 77.0416),
            &["cardiology", "neurology", "oncology", "transplant", "pediatrics", "emergency medicine"],
            4.5,
            true,
            &["Star Health", "Care Health", "HDFC ERGO", "ICICI Lombard", "United India"],
            "0124-4141414",
            Private,
        ),
        row(
            "Manipal Hospitals",
            "Bangalore",
            (12.9716, 77.5946),
            &["cardiology", "neurology", "oncology", "orthopedics", "gastroenterology", "nephrology"],
            4.3,
            true,
            &["Star Health", "Bajaj Allianz", "HDFC ERGO", "Max Bupa", "Religare"],
            "080-25023200",
            Private,
        ),
        row(
            "Max Super Speciality Hospital",
            "Delhi",
            (28.5355, 77.2910),
            &["cardiology", "neurology", "oncology", "orthopedics", "emergency medicine", "dermatology"],
            4.2,
            true,
            &["Max Bupa", "Star Health", "HDFC ERGO", "Care Health", "ICICI Lombard"],
            "011-26692251",
            Private,
        ),
        row(
            "Tata Memorial Hospital",
            "Mumbai",
            (19.0760, 72.8777),
            &["oncology", "radiation oncology", "surgical oncology", "medical oncology", "palliative care"],
            4.7,
            true,
            &["Government", "CGHS", "ESI", "Star Health", "HDFC ERGO"],
            "022-24177000",
            Government,
        ),
        row(
            "King George Medical University",
            "Lucknow",
            (26.9124, 80.9424),
            &["cardiology", "neurology", "gastroenterology", "orthopedics", "pediatrics", "emergency medicine"],
            4.1,
            true,
            &["Government", "CGHS", "ESI", "UP State Insurance"],
            "0522-2258401",
            Government,
        ),
        row(
            "Christian Medical College (CMC)",
            "Vellore",
            (12.9165, 79.1325),
            &["cardiology", "neurology", "oncology", "nephrology", "gastroenterology", "transplant"],
            4.6,
            true,
            &["Government", "Star Health", "HDFC ERGO", "New India Assurance"],
            "0416-2282020",
            Private,
        ),
        row(
            "Narayana Health",
            "Bangalore",
            (12.9079, 77.6101),
            &["cardiology", "cardiac surgery", "neurology", "oncology", "orthopedics", "pediatrics"],
            4.4,
            true,
            &["Star Health", "HDFC ERGO", "Bajaj Allianz", "Care Health", "ICICI Lombard"],
            "080-71222222",
            Private,
        ),
        row(
            "PGIMER",
            "Chandigarh",
            (30.7333, 76.7794),
            &["cardiology", "neurology", "gastroenterology", "nephrology", "orthopedics", "emergency medicine"],
            4.5,
            true,
            &["Government", "CGHS", "ESI", "Punjab State Insurance"],
            "0172-2755555",
            Government,
        ),
        row(
            "Kokilaben Dhirubhai Ambani Hospital",
            "Mumbai",
            (19.1136, 72.8697),
            &["cardiology", "neurology", "oncology", "transplant", "robotic surgery", "emergency medicine"],
            4.3,
            true,
            &["Star Health", "HDFC ERGO", "ICICI Lombard", "Bajaj Allianz", "Care Health"],
            "022-30999999",
            Private,
        ),
    ]
}
