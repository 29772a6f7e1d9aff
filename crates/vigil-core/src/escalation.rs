//! Escalation pathways: short triage checklists for deciding whether to
//! obtain a culture or contact clinical leadership.
//!
//! Each pathway is a fixed decision tree over 2-3 yes/no questions with
//! two possible outcomes and a static reminder checklist. No shared state
//! with the criteria evaluator.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

/// The two possible pathway outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EscalationAction {
    ObtainCulture,
    EscalateToLeadership,
}

/// The advice a pathway produces for one set of answers.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EscalationAdvice {
    pub action: EscalationAction,
    pub message: String,
    pub reminders: Vec<String>,
}

/// A triage checklist for one device type.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EscalationPathway {
    pub id: String,
    pub name: String,
    /// Yes/no questions, answered in order.
    pub questions: Vec<String>,
}

impl EscalationPathway {
    /// Decide the outcome for one set of answers, in question order.
    pub fn decide(&self, answers: &[bool]) -> Result<EscalationAdvice, ValidationError> {
        if answers.len() != self.questions.len() {
            return Err(ValidationError::new(
                "answers",
                format!(
                    "expected {} answers for pathway '{}', got {}",
                    self.questions.len(),
                    self.id,
                    answers.len(),
                ),
            ));
        }

        let advice = match self.id.as_str() {
            "clabsi" => decide_clabsi(answers[0], answers[1], answers[2]),
            "cauti" => decide_cauti(answers[0], answers[1]),
            other => {
                return Err(ValidationError::new(
                    "pathway",
                    format!("unknown pathway: {other}"),
                ));
            }
        };
        Ok(advice)
    }
}

/// Return all registered escalation pathways.
pub fn all_pathways() -> Vec<EscalationPathway> {
    vec![
        EscalationPathway {
            id: "clabsi".to_string(),
            name: "Blood culture pathway".to_string(),
            questions: vec![
                "New fever, chills, or hypotension within the last 24 hours?".to_string(),
                "Central line in place for more than 2 calendar days, or removed the day before?"
                    .to_string(),
                "Is there an obvious alternate source of infection?".to_string(),
            ],
        },
        EscalationPathway {
            id: "cauti".to_string(),
            name: "Urine culture pathway".to_string(),
            questions: vec![
                "Fever, suprapubic tenderness, or CVA tenderness present?".to_string(),
                "Catheter in place for more than 2 calendar days, or removed the day before?"
                    .to_string(),
            ],
        },
    ]
}

/// Look up a pathway by ID.
pub fn get_pathway(id: &str) -> Option<EscalationPathway> {
    all_pathways().into_iter().find(|p| p.id == id)
}

fn decide_clabsi(new_symptoms: bool, line_eligible: bool, alternate_source: bool) -> EscalationAdvice {
    if new_symptoms && line_eligible && !alternate_source {
        EscalationAdvice {
            action: EscalationAction::ObtainCulture,
            message: "Obtain paired blood cultures before starting antimicrobials.".to_string(),
            reminders: clabsi_reminders(),
        }
    } else {
        EscalationAdvice {
            action: EscalationAction::EscalateToLeadership,
            message: "Criteria for immediate culturing not met. Discuss with the unit medical lead before ordering blood cultures."
                .to_string(),
            reminders: clabsi_reminders(),
        }
    }
}

fn decide_cauti(urinary_symptoms: bool, catheter_eligible: bool) -> EscalationAdvice {
    if urinary_symptoms && catheter_eligible {
        EscalationAdvice {
            action: EscalationAction::ObtainCulture,
            message: "Obtain a urine culture before starting antimicrobials.".to_string(),
            reminders: cauti_reminders(),
        }
    } else {
        EscalationAdvice {
            action: EscalationAction::EscalateToLeadership,
            message: "Criteria for immediate culturing not met. Escalate to clinical leadership before ordering a urine culture."
                .to_string(),
            reminders: cauti_reminders(),
        }
    }
}

fn clabsi_reminders() -> Vec<String> {
    vec![
        "Draw one set peripherally and one from the line.".to_string(),
        "Culture before the first antimicrobial dose.".to_string(),
        "Document the line insertion date on the order.".to_string(),
    ]
}

fn cauti_reminders() -> Vec<String> {
    vec![
        "Do not collect the specimen from the drainage bag.".to_string(),
        "Replace a long-dwelling catheter before sampling.".to_string(),
        "Reassess the ongoing need for the catheter.".to_string(),
    ]
}
