use crate::symptoms::{SymptomRule, SymptomSource};
use crate::Definition;

/// CLABSI: Central-Line-Associated Bloodstream Infection.
/// A positive blood culture with an eligible, device-associated line
/// meets criteria; no documented symptom is required.
pub struct Clabsi;

impl Definition for Clabsi {
    fn id(&self) -> &str {
        "clabsi"
    }

    fn name(&self) -> &str {
        "CLABSI"
    }

    fn device_name(&self) -> &str {
        "Central line"
    }

    fn culture_name(&self) -> &str {
        "blood culture"
    }

    fn symptom_rules(&self) -> &[SymptomRule] {
        static RULES: std::sync::LazyLock<Vec<SymptomRule>> = std::sync::LazyLock::new(|| {
            vec![
                SymptomRule {
                    id: "fever".to_string(),
                    name: "Fever (> 38.0 C)".to_string(),
                    source: SymptomSource::Temperature,
                    suppressed_while_device_in_place: false,
                },
                SymptomRule {
                    id: "hypotension".to_string(),
                    name: "Hypotension".to_string(),
                    source: SymptomSource::Reported,
                    suppressed_while_device_in_place: false,
                },
                SymptomRule {
                    id: "chills".to_string(),
                    name: "Chills".to_string(),
                    source: SymptomSource::Reported,
                    suppressed_while_device_in_place: false,
                },
            ]
        });
        &RULES
    }

    fn requires_symptom(&self) -> bool {
        false
    }
}
