//! Symptom eligibility rules and normalization.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::{ClinicalFindings, SymptomFlag};
use crate::Definition;

/// Where a symptom's raw value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SymptomSource {
    /// Derived from the charted temperature, never entered as a boolean.
    Temperature,
    /// Reported directly as a yes/no flag.
    Reported,
}

/// One symptom rule within a surveillance definition.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomRule {
    pub id: String,
    pub name: String,
    pub source: SymptomSource,
    /// Excluded from the eligible symptom set while the device is in
    /// place on the assessment date (e.g. urgency with a catheter in).
    pub suppressed_while_device_in_place: bool,
}

/// The normalizer's output: eligible flags plus informational notes.
#[derive(Debug, Clone)]
pub struct NormalizedSymptoms {
    pub flags: Vec<SymptomFlag>,
    pub notes: Vec<String>,
}

impl NormalizedSymptoms {
    pub fn any_present(&self) -> bool {
        self.flags.iter().any(|f| f.present)
    }
}

/// Convert a Fahrenheit temperature to Celsius, rounded to one decimal
/// place. Temperatures are charted to a tenth of a degree; rounding keeps
/// the 38.0 boundary exact (100.4 F is exactly 38.0 C).
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    let celsius = (fahrenheit - 32.0) * 5.0 / 9.0;
    (celsius * 10.0).round() / 10.0
}

/// Fever is strictly greater than 38.0 C; exactly 38.0 C is not a fever.
pub fn fever_from_temperature(fahrenheit: f64) -> bool {
    fahrenheit_to_celsius(fahrenheit) > 38.0
}

/// Apply a definition's symptom rules to raw findings.
///
/// Temperature-sourced rules read the derived fever flag. Rules marked
/// suppressed-while-in-place are forced to `false` when the device is in
/// place on the assessment date, and one note records the exclusion.
/// Entries for unknown symptom IDs are ignored.
pub fn normalize(
    definition: &dyn Definition,
    device_in_place: bool,
    findings: &ClinicalFindings,
) -> NormalizedSymptoms {
    let fever = findings
        .temperature_f
        .is_some_and(fever_from_temperature);

    let mut flags = Vec::new();
    for rule in definition.symptom_rules() {
        let raw = match rule.source {
            SymptomSource::Temperature => fever,
            SymptomSource::Reported => findings.symptom(&rule.id),
        };
        let suppressed = rule.suppressed_while_device_in_place && device_in_place;
        flags.push(SymptomFlag {
            symptom_id: rule.id.clone(),
            name: rule.name.clone(),
            present: raw && !suppressed,
            suppressed: suppressed && raw,
        });
    }

    let mut notes = Vec::new();
    if device_in_place {
        let excluded: Vec<&str> = definition
            .symptom_rules()
            .iter()
            .filter(|r| r.suppressed_while_device_in_place)
            .map(|r| r.name.as_str())
            .collect();
        if !excluded.is_empty() {
            notes.push(format!(
                "{} is in place: {} excluded from eligible symptoms.",
                definition.device_name(),
                excluded.join(", "),
            ));
        }
    }

    NormalizedSymptoms { flags, notes }
}
