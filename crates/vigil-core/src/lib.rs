//! vigil-core
//!
//! NHSN-aligned device-associated infection criteria. Pure logic, no I/O.
//! Defines the date/window arithmetic, symptom eligibility rules, and the
//! criteria evaluator for each supported surveillance definition.

pub mod dates;
pub mod definitions;
pub mod error;
pub mod escalation;
pub mod evaluate;
pub mod models;
pub mod symptoms;

use symptoms::SymptomRule;

/// Trait implemented by each device-associated surveillance definition.
///
/// A definition is a small rule descriptor: which symptoms count, which
/// are excluded while the device is in place, and whether meeting criteria
/// requires a documented symptom at all. The evaluator is shared; only the
/// descriptor differs between CLABSI and CAUTI.
pub trait Definition: Send + Sync {
    /// Unique identifier for this definition (e.g., "clabsi", "cauti").
    fn id(&self) -> &str;

    /// Short display name (e.g., "CLABSI", "CAUTI").
    fn name(&self) -> &str;

    /// Display name for the monitored device (e.g., "Central line").
    fn device_name(&self) -> &str;

    /// Display name for the qualifying culture (e.g., "blood culture").
    fn culture_name(&self) -> &str;

    /// The symptom rules this definition evaluates.
    fn symptom_rules(&self) -> &[SymptomRule];

    /// Whether meeting criteria requires at least one eligible symptom.
    ///
    /// CLABSI does not require a symptom alongside a positive culture;
    /// CAUTI does. The two predicates are intentionally not unified.
    fn requires_symptom(&self) -> bool;
}

/// Return all registered surveillance definitions.
pub fn all_definitions() -> Vec<Box<dyn Definition>> {
    vec![
        Box::new(definitions::clabsi::Clabsi),
        Box::new(definitions::cauti::Cauti),
    ]
}

/// Look up a definition by ID.
pub fn get_definition(id: &str) -> Option<Box<dyn Definition>> {
    all_definitions().into_iter().find(|d| d.id() == id)
}
