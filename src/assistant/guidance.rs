//! Plain-text phrasing of recommendations for voice or chat front ends.

use lazy_static::lazy_static;

use super::models::Recommendation;
use crate::toolkit::hospital::ScoredHospital;

lazy_static! {
    static ref URGENT_KEYWORDS: Vec<&'static str> = vec![
        "chest pain",
        "shortness of breath",
        "severe pain",
        "bleeding",
        "unconscious",
    ];
}

const SPOKEN_HOSPITALS: usize = 3;

const DISCLAIMER: &str = "Please remember that this is general guidance only. \
Always consult with a qualified healthcare professional for proper diagnosis and treatment. \
If your symptoms worsen or you feel this is an emergency, seek immediate medical help.";


pub fn needs_urgent_care<S: AsRef<str>>(symptoms: &[S]) -> bool {
    let joined = symptoms
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    URGENT_KEYWORDS.iter().any(|k| joined.contains(k))
}


pub fn render_consultation(recommendation: &Recommendation) -> String {
    let mut out = String::new();

    if recommendation.urgent_care_advised {
        out.push_str(
            "IMPORTANT: Your symptoms may require immediate medical attention. \
             Please consider visiting the nearest emergency room or calling emergency services. ",
        );
    }

    out.push_str(&format!(
        "Based on your symptoms: {}, I recommend consulting a {} with {} confidence. ",
        recommendation.symptoms.join(", "),
        recommendation.specialist.category,
        recommendation.confidence_tier
    ));

    if recommendation.hospitals.is_empty() {
        out.push_str(
            "I couldn't find specific hospitals matching your criteria. \
             I recommend searching for general hospitals in your area. ",
        );
    } else {
        let shown = recommendation.hospitals.len().min(SPOKEN_HOSPITALS);
        out.push_str(&format!("I found {shown} suitable hospitals for you: "));
        for (idx, hospital) in recommendation.hospitals.iter().take(SPOKEN_HOSPITALS).enumerate() {
            out.push_str(&format!(
                "{}. {} in {}{}. Rating: {} out of 5. Contact: {}. ",
                idx + 1,
                hospital.record.name,
                hospital.record.city,
                distance_clause(hospital, ", which is"),
                hospital.record.rating,
                hospital.record.phone
            ));
        }
    }

    out.push_str(DISCLAIMER);
    out
}


pub fn render_hospitals(hospitals: &[ScoredHospital]) -> String {
    if hospitals.is_empty() {
        return "I'm sorry, I couldn't find any hospitals matching your criteria. \
                Please try adjusting your search parameters."
            .to_string();
    }

    let shown = hospitals.len().min(SPOKEN_HOSPITALS);
    let mut out = format!("I found {shown} hospitals for you. Here are the top recommendations: ");

    for (idx, hospital) in hospitals.iter().take(SPOKEN_HOSPITALS).enumerate() {
        let record = &hospital.record;
        out.push_str(&format!(
            "{}. {} in {}{}. Rating: {} out of 5. Phone: {}. ",
            idx + 1,
            record.name,
            record.city,
            distance_clause(hospital, ", located"),
            record.rating,
            record.phone
        ));

        if record.is_government() {
            out.push_str("This is a government hospital with subsidized treatment. ");
        } else {
            let insurers: Vec<&str> = record
                .accepted_insurance
                .iter()
                .take(3)
                .map(String::as_str)
                .collect();
            out.push_str(&format!("Accepts insurance: {}. ", insurers.join(", ")));
        }
    }

    out.trim_end().to_string()
}

fn distance_clause(hospital: &ScoredHospital, lead: &str) -> String {
    match hospital.distance_km {
        Some(km) => format!("{lead} {km:.1} kilometers away"),
        None => String::new(),
    }
}
