use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum EntityKind {
    Disease,
    Symptom,
    BodyPart,
}


#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MedicalEntity {
    pub kind: EntityKind,
    pub text: String,
}

impl MedicalEntity {
    pub fn new(kind: EntityKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn symptom(text: impl Into<String>) -> Self {
        Self::new(EntityKind::Symptom, text)
    }

    /// Converts an NER `(entity_group, word)` pair. Groups other than
    /// DISEASE, SYMPTOM and BODY_PART are dropped.
    pub fn from_ner_group(group: &str, word: &str) -> Option<Self> {
        let kind: EntityKind = group.trim().parse().ok()?;
        let word = word.trim();
        if word.is_empty() {
            return None;
        }
        Some(Self::new(kind, word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ner_group() {
        let e = MedicalEntity::from_ner_group("SYMPTOM", " chest pain ").unwrap();
        assert_eq!(e.kind, EntityKind::Symptom);
        assert_eq!(e.text, "chest pain");

        let e = MedicalEntity::from_ner_group("BODY_PART", "knee").unwrap();
        assert_eq!(e.kind, EntityKind::BodyPart);

        let e = MedicalEntity::from_ner_group("disease", "asthma").unwrap();
        assert_eq!(e.kind, EntityKind::Disease);
    }

    #[test]
    fn test_other_groups_are_dropped() {
        assert!(MedicalEntity::from_ner_group("MEDICATION", "aspirin").is_none());
        assert!(MedicalEntity::from_ner_group("SYMPTOM", "   ").is_none());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(EntityKind::BodyPart.to_string(), "BODY_PART");
    }
}
