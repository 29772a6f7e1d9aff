//! The criteria evaluator: validation, classification, and unmet reasons.

use jiff::civil::Date;

use crate::dates;
use crate::error::{ValidationError, ValidationFailure};
use crate::models::{ClinicalFindings, Determination, DeviceEpisode, RiskLevel};
use crate::symptoms;
use crate::Definition;

/// Validate a device episode against the date-ordering invariants.
///
/// Runs after in-place inference. Returns every violation, not just the
/// first; the caller surfaces them all and re-prompts.
pub fn validate_episode(episode: &DeviceEpisode) -> Vec<ValidationError> {
    let in_place = dates::infer_in_place(
        episode.in_place_on_assessment,
        episode.removal_date,
        episode.assessment_date,
    );
    let end = dates::effective_end(in_place, episode.removal_date, episode.assessment_date);

    let mut problems = Vec::new();
    if episode.insertion_date > episode.assessment_date {
        problems.push(ValidationError::new(
            "insertion_date",
            "insertion date cannot be after the assessment date",
        ));
    }
    if episode.insertion_date > end {
        problems.push(ValidationError::new(
            "insertion_date",
            "insertion date cannot be after the removal or assessment date",
        ));
    }
    if let Some(removal) = episode.removal_date
        && removal > episode.assessment_date
    {
        problems.push(ValidationError::new(
            "removal_date",
            "removal date cannot be after the assessment date",
        ));
    }
    if !in_place && episode.removal_date.is_none() {
        problems.push(ValidationError::new(
            "removal_date",
            "removal date is required when the device is not in place on the assessment date",
        ));
    }
    problems
}

/// Evaluate one assessment against a surveillance definition.
///
/// Pure and synchronous: a fully-populated input record in, a
/// determination out. Invalid input returns the full problem list instead
/// of a partial evaluation.
pub fn evaluate(
    definition: &dyn Definition,
    episode: &DeviceEpisode,
    culture_date: Option<Date>,
    findings: &ClinicalFindings,
) -> Result<Determination, ValidationFailure> {
    let problems = validate_episode(episode);
    if !problems.is_empty() {
        return Err(ValidationFailure { problems });
    }

    let in_place = dates::infer_in_place(
        episode.in_place_on_assessment,
        episode.removal_date,
        episode.assessment_date,
    );
    let end = dates::effective_end(in_place, episode.removal_date, episode.assessment_date);
    let device_days = dates::inclusive_days(episode.insertion_date, end);
    let day_eligible = dates::device_day_eligible(device_days);
    let device_associated =
        dates::device_associated(in_place, episode.removal_date, episode.assessment_date);

    // The culture collection date anchors the window; the DOE otherwise.
    let window = dates::infection_window(culture_date.or(Some(episode.assessment_date)));

    let normalized = symptoms::normalize(definition, in_place, findings);
    let symptom_present = normalized.any_present();

    let meets = findings.positive_culture
        && day_eligible
        && device_associated
        && (!definition.requires_symptom() || symptom_present);

    let risk_level = if meets {
        RiskLevel::Meets
    } else if symptom_present {
        RiskLevel::AtRisk
    } else {
        RiskLevel::LowRisk
    };

    let unmet_reasons = if meets {
        Vec::new()
    } else {
        unmet_reasons(
            definition,
            findings.positive_culture,
            day_eligible,
            device_associated,
            symptom_present,
        )
    };

    Ok(Determination {
        device_days,
        day_eligible,
        device_associated,
        window,
        symptoms: normalized.flags,
        notes: normalized.notes,
        meets_criteria: meets,
        risk_level,
        unmet_reasons,
    })
}

/// One reason per failing required condition, in fixed priority order:
/// culture, day eligibility, device association, then (only when the
/// definition requires one) symptom presence.
fn unmet_reasons(
    definition: &dyn Definition,
    positive_culture: bool,
    day_eligible: bool,
    device_associated: bool,
    symptom_present: bool,
) -> Vec<String> {
    let mut reasons = Vec::new();
    if !positive_culture {
        reasons.push(format!(
            "No positive {} recorded.",
            definition.culture_name()
        ));
    }
    if !day_eligible {
        reasons.push(format!(
            "{} present for fewer than 3 calendar days.",
            definition.device_name()
        ));
    }
    if !device_associated {
        reasons.push(format!(
            "{} was not in place on the assessment date and was not removed the day before.",
            definition.device_name()
        ));
    }
    if definition.requires_symptom() && !symptom_present {
        reasons.push("No eligible symptom documented.".to_string());
    }
    reasons
}
