use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use vigil_core::symptoms::SymptomRule;
use vigil_core::{all_definitions, get_definition};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct DefinitionSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
pub struct DefinitionDetail {
    id: String,
    name: String,
    device_name: String,
    culture_name: String,
    requires_symptom: bool,
    symptom_rules: Vec<SymptomRule>,
}

pub async fn list_definitions() -> Json<Vec<DefinitionSummary>> {
    let definitions: Vec<DefinitionSummary> = all_definitions()
        .iter()
        .map(|d| DefinitionSummary {
            id: d.id().to_string(),
            name: d.name().to_string(),
        })
        .collect();
    Json(definitions)
}

pub async fn get_definition_detail(
    Path(id): Path<String>,
) -> Result<Json<DefinitionDetail>, ApiError> {
    let definition = get_definition(&id)
        .ok_or_else(|| ApiError::NotFound(format!("definition not found: {id}")))?;

    Ok(Json(DefinitionDetail {
        id: definition.id().to_string(),
        name: definition.name().to_string(),
        device_name: definition.device_name().to_string(),
        culture_name: definition.culture_name().to_string(),
        requires_symptom: definition.requires_symptom(),
        symptom_rules: definition.symptom_rules().to_vec(),
    }))
}
