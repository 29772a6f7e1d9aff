use axum::extract::Path;
use axum::Json;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use vigil_core::models::{ClinicalFindings, Determination, DeviceEpisode};

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct EvaluateRequest {
    pub episode: DeviceEpisode,
    /// First positive culture collection date, when known. Anchors the
    /// infection window; the assessment date is used otherwise.
    pub culture_date: Option<Date>,
    pub findings: ClinicalFindings,
}

#[derive(Serialize)]
pub struct EvaluateResponse {
    pub definition_id: String,
    pub determination: Determination,
    /// Derived window bounds for the presenter.
    pub window_start: Option<Date>,
    pub window_end: Option<Date>,
    pub window_label: Option<String>,
}

/// Run one criteria evaluation. Returns 422 with the full problem list
/// when the episode violates the date-ordering invariants.
pub async fn evaluate(
    Path(id): Path<String>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, ApiError> {
    let definition = vigil_core::get_definition(&id)
        .ok_or_else(|| ApiError::NotFound(format!("definition not found: {id}")))?;

    let determination = vigil_core::evaluate::evaluate(
        definition.as_ref(),
        &req.episode,
        req.culture_date,
        &req.findings,
    )?;

    let window = determination.window;
    Ok(Json(EvaluateResponse {
        definition_id: definition.id().to_string(),
        determination,
        window_start: window.map(|w| w.start()),
        window_end: window.map(|w| w.end()),
        window_label: window.map(|w| w.label()),
    }))
}
