use crate::symptoms::{SymptomRule, SymptomSource};
use crate::Definition;

/// CAUTI: Catheter-Associated Urinary Tract Infection.
/// Requires a positive urine culture plus at least one eligible symptom.
/// Urgency, frequency, and dysuria are excluded while the catheter is in
/// place on the assessment date.
pub struct Cauti;

impl Definition for Cauti {
    fn id(&self) -> &str {
        "cauti"
    }

    fn name(&self) -> &str {
        "CAUTI"
    }

    fn device_name(&self) -> &str {
        "Urinary catheter"
    }

    fn culture_name(&self) -> &str {
        "urine culture"
    }

    fn symptom_rules(&self) -> &[SymptomRule] {
        static RULES: std::sync::LazyLock<Vec<SymptomRule>> = std::sync::LazyLock::new(|| {
            let reported = |id: &str, name: &str, suppressed: bool| SymptomRule {
                id: id.to_string(),
                name: name.to_string(),
                source: SymptomSource::Reported,
                suppressed_while_device_in_place: suppressed,
            };

            vec![
                SymptomRule {
                    id: "fever".to_string(),
                    name: "Fever (> 38.0 C)".to_string(),
                    source: SymptomSource::Temperature,
                    suppressed_while_device_in_place: false,
                },
                reported("suprapubic_tenderness", "Suprapubic tenderness", false),
                reported("cva_tenderness", "CVA pain or tenderness", false),
                reported("urgency", "Urinary urgency", true),
                reported("frequency", "Urinary frequency", true),
                reported("dysuria", "Dysuria", true),
            ]
        });
        &RULES
    }

    fn requires_symptom(&self) -> bool {
        true
    }
}
