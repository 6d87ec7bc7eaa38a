use axum::extract::State;
use axum::Json;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use intake_core::models::response::ResponseCell;
use intake_tracking::registry::require_client;
use intake_tracking::sync::record_submission;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFormRequest {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub form_id: String,
    #[serde(default)]
    pub responses: Vec<ResponseCell>,
    /// Client-side submission time; server time when absent.
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
}

#[derive(Serialize)]
pub struct SubmitFormResponse {
    pub message: &'static str,
}

pub async fn submit_form(
    State(state): State<AppState>,
    Json(req): Json<SubmitFormRequest>,
) -> Result<Json<SubmitFormResponse>, ApiError> {
    if req.client_id.trim().is_empty() || req.form_id.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "clientId and formId are required".to_string(),
        ));
    }

    let client = require_client(
        state.store.as_ref(),
        &state.central_spreadsheet_id,
        &req.client_id,
    )
    .await?;

    let now = req.timestamp.unwrap_or_else(Timestamp::now);
    record_submission(
        state.store.as_ref(),
        &state.locks,
        &state.central_spreadsheet_id,
        &client,
        &req.form_id,
        &req.responses,
        now,
    )
    .await?;

    Ok(Json(SubmitFormResponse {
        message: "Form submission received",
    }))
}
