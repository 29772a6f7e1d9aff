use vigil_core::models::{ClinicalFindings, SymptomEntry};
use vigil_core::symptoms::{fahrenheit_to_celsius, fever_from_temperature, normalize};
use vigil_core::{get_definition, Definition};

fn entry(id: &str, present: bool) -> SymptomEntry {
    SymptomEntry {
        symptom_id: id.to_string(),
        present,
    }
}

fn cauti() -> Box<dyn Definition> {
    get_definition("cauti").unwrap()
}

fn clabsi() -> Box<dyn Definition> {
    get_definition("clabsi").unwrap()
}

#[test]
fn exactly_38_celsius_is_not_a_fever() {
    // 100.4 F converts to exactly 38.0 C
    assert_eq!(fahrenheit_to_celsius(100.4), 38.0);
    assert!(!fever_from_temperature(100.4));
}

#[test]
fn just_above_38_celsius_is_a_fever() {
    assert_eq!(fahrenheit_to_celsius(100.6), 38.1);
    assert!(fever_from_temperature(100.6));
}

#[test]
fn typical_febrile_temperature() {
    assert_eq!(fahrenheit_to_celsius(101.0), 38.3);
    assert!(fever_from_temperature(101.0));
}

#[test]
fn fever_flag_derives_from_temperature() {
    let findings = ClinicalFindings {
        temperature_f: Some(101.0),
        symptoms: vec![],
        positive_culture: false,
    };
    let normalized = normalize(clabsi().as_ref(), true, &findings);
    let fever = normalized
        .flags
        .iter()
        .find(|f| f.symptom_id == "fever")
        .unwrap();
    assert!(fever.present);
}

#[test]
fn missing_temperature_reads_as_no_fever() {
    let findings = ClinicalFindings {
        temperature_f: None,
        symptoms: vec![],
        positive_culture: false,
    };
    let normalized = normalize(cauti().as_ref(), false, &findings);
    let fever = normalized
        .flags
        .iter()
        .find(|f| f.symptom_id == "fever")
        .unwrap();
    assert!(!fever.present);
}

#[test]
fn catheter_in_place_suppresses_urinary_symptoms() {
    let findings = ClinicalFindings {
        temperature_f: None,
        symptoms: vec![
            entry("urgency", true),
            entry("frequency", true),
            entry("dysuria", true),
            entry("suprapubic_tenderness", true),
            entry("cva_tenderness", true),
        ],
        positive_culture: false,
    };
    let normalized = normalize(cauti().as_ref(), true, &findings);

    for id in ["urgency", "frequency", "dysuria"] {
        let flag = normalized.flags.iter().find(|f| f.symptom_id == id).unwrap();
        assert!(!flag.present, "{id} should be suppressed while in place");
        assert!(flag.suppressed);
    }
    for id in ["suprapubic_tenderness", "cva_tenderness"] {
        let flag = normalized.flags.iter().find(|f| f.symptom_id == id).unwrap();
        assert!(flag.present, "{id} should pass through unchanged");
        assert!(!flag.suppressed);
    }
    assert_eq!(normalized.notes.len(), 1);
    assert!(normalized.notes[0].contains("excluded from eligible symptoms"));
}

#[test]
fn removed_catheter_keeps_urinary_symptoms_eligible() {
    let findings = ClinicalFindings {
        temperature_f: None,
        symptoms: vec![entry("urgency", true)],
        positive_culture: false,
    };
    let normalized = normalize(cauti().as_ref(), false, &findings);
    let urgency = normalized
        .flags
        .iter()
        .find(|f| f.symptom_id == "urgency")
        .unwrap();
    assert!(urgency.present);
    assert!(!urgency.suppressed);
    assert!(normalized.notes.is_empty());
}

#[test]
fn clabsi_symptoms_are_never_suppressed() {
    let findings = ClinicalFindings {
        temperature_f: None,
        symptoms: vec![entry("hypotension", true), entry("chills", true)],
        positive_culture: false,
    };
    let normalized = normalize(clabsi().as_ref(), true, &findings);
    assert!(normalized.flags.iter().all(|f| !f.suppressed));
    assert!(normalized.any_present());
    assert!(normalized.notes.is_empty());
}

#[test]
fn unknown_symptom_entries_are_ignored() {
    let findings = ClinicalFindings {
        temperature_f: None,
        symptoms: vec![entry("nausea", true)],
        positive_culture: false,
    };
    let normalized = normalize(clabsi().as_ref(), true, &findings);
    assert!(!normalized.any_present());
}
