use jiff::civil::Date;
use jiff::ToSpan;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One device's relevant timeline for one assessment.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeviceEpisode {
    /// Calendar date the device was placed. Day of insertion counts as day 1.
    pub insertion_date: Date,
    /// The date under evaluation (DOE).
    pub assessment_date: Date,
    /// Caller-declared device status on the assessment date. May be
    /// overridden by inference when the removal date equals the DOE.
    pub in_place_on_assessment: bool,
    /// Required when the device is not in place on the assessment date.
    pub removal_date: Option<Date>,
}

/// A raw symptom flag supplied by the caller, keyed by symptom rule ID.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomEntry {
    pub symptom_id: String,
    pub present: bool,
}

/// Symptom and culture findings for one assessment.
///
/// Fever is never entered directly: it is derived from the measured
/// temperature by the normalizer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalFindings {
    /// Measured temperature in degrees Fahrenheit, if charted.
    pub temperature_f: Option<f64>,
    pub symptoms: Vec<SymptomEntry>,
    /// Positive qualifying culture (blood or urine, per definition).
    pub positive_culture: bool,
}

impl ClinicalFindings {
    /// Raw flag for a symptom ID; absent entries read as `false`.
    pub fn symptom(&self, symptom_id: &str) -> bool {
        self.symptoms
            .iter()
            .find(|e| e.symptom_id == symptom_id)
            .is_some_and(|e| e.present)
    }
}

/// The 7-day infection window period: anchor date plus/minus 3 days.
///
/// Only the anchor is stored; the bounds are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InfectionWindow {
    /// First positive diagnostic test date, or the assessment date when
    /// no culture collection date was supplied.
    pub anchor: Date,
}

impl InfectionWindow {
    pub fn around(anchor: Date) -> Self {
        Self { anchor }
    }

    pub fn start(&self) -> Date {
        self.anchor.saturating_sub(3.days())
    }

    pub fn end(&self) -> Date {
        self.anchor.saturating_add(3.days())
    }

    /// Formatted IWP label, e.g. "(IWP: Jan 01, 2025 - Jan 07, 2025)".
    pub fn label(&self) -> String {
        format!(
            "(IWP: {} - {})",
            self.start().strftime("%b %d, %Y"),
            self.end().strftime("%b %d, %Y"),
        )
    }
}

/// One normalized symptom as seen by the criteria evaluator.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomFlag {
    pub symptom_id: String,
    pub name: String,
    /// Eligible presence after device-status rules are applied.
    pub present: bool,
    /// True when a raw `true` was forced to `false` because the device
    /// was in place on the assessment date.
    pub suppressed: bool,
}

/// Final three-state classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Meets,
    AtRisk,
    LowRisk,
}

/// The evaluator's output for one assessment.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Determination {
    /// Inclusive calendar-day count from insertion through the effective end.
    pub device_days: i64,
    /// Device present for more than 2 calendar days.
    pub day_eligible: bool,
    /// Device in place on the DOE, or removed the day before.
    pub device_associated: bool,
    /// `None` means the window could not be determined (no anchor date).
    pub window: Option<InfectionWindow>,
    /// Normalized symptom set, in definition order.
    pub symptoms: Vec<SymptomFlag>,
    /// Informational notes from normalization (e.g. suppression).
    pub notes: Vec<String>,
    pub meets_criteria: bool,
    pub risk_level: RiskLevel,
    /// One entry per failing required condition, in fixed priority order.
    /// Empty when criteria are met.
    pub unmet_reasons: Vec<String>,
}
