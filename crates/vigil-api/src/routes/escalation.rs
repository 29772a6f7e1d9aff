use axum::extract::Path;
use axum::Json;
use serde::Deserialize;

use vigil_core::escalation::{all_pathways, get_pathway, EscalationAdvice, EscalationPathway};

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct DecideRequest {
    /// Yes/no answers, one per pathway question, in question order.
    pub answers: Vec<bool>,
}

pub async fn list_pathways() -> Json<Vec<EscalationPathway>> {
    Json(all_pathways())
}

pub async fn decide(
    Path(id): Path<String>,
    Json(req): Json<DecideRequest>,
) -> Result<Json<EscalationAdvice>, ApiError> {
    let pathway = get_pathway(&id)
        .ok_or_else(|| ApiError::NotFound(format!("pathway not found: {id}")))?;

    let advice = pathway.decide(&req.answers)?;
    Ok(Json(advice))
}
