use axum::extract::{Query, State};
use axum::Json;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use intake_core::models::status::FormStatus;
use intake_provisioner::provision::{create_client, NewClient};
use intake_tracking::registry::require_client;
use intake_tracking::status::form_statuses;

use crate::error::ApiError;
use crate::state::AppState;

// Field validation is done by hand rather than through serde so that a
// missing field answers 400, matching the documented contract.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSheetRequest {
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub eval_type: String,
    #[serde(default)]
    pub age_range: String,
    #[serde(default)]
    pub user_type: String,
    #[serde(default)]
    pub selected_forms: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSheetResponse {
    pub message: String,
    pub client_id: String,
    pub assigned_forms: Vec<String>,
    pub sheet_url: String,
    pub sheet_id: String,
}

pub async fn create_sheet(
    State(state): State<AppState>,
    Json(req): Json<CreateSheetRequest>,
) -> Result<Json<CreateSheetResponse>, ApiError> {
    let new = NewClient {
        display_name: req.client_name,
        date_of_birth: req.dob,
        evaluation_type: req.eval_type,
        age_range: req.age_range,
        user_type: req.user_type,
        assigned_form_ids: req.selected_forms,
    };

    let provisioned = create_client(
        state.store.as_ref(),
        &state.central_spreadsheet_id,
        &state.operator_email,
        new,
        Timestamp::now(),
    )
    .await?;

    let record = provisioned.record;
    Ok(Json(CreateSheetResponse {
        message: "Client created with individual sheet and form tabs".to_string(),
        client_id: record.client_id,
        assigned_forms: record.assigned_form_ids,
        sheet_url: record.document_url,
        sheet_id: record.document_id,
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientFormsQuery {
    #[serde(default)]
    pub client_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedForm {
    pub form_id: String,
    pub status: FormStatus,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientFormsResponse {
    pub client_id: String,
    pub client_name: String,
    pub assigned_forms: Vec<AssignedForm>,
}

pub async fn client_forms(
    State(state): State<AppState>,
    Query(query): Query<ClientFormsQuery>,
) -> Result<Json<ClientFormsResponse>, ApiError> {
    if query.client_id.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "missing clientId query parameter".to_string(),
        ));
    }

    let client = require_client(
        state.store.as_ref(),
        &state.central_spreadsheet_id,
        &query.client_id,
    )
    .await?;
    let statuses = form_statuses(state.store.as_ref(), &client).await?;

    Ok(Json(ClientFormsResponse {
        client_id: client.client_id,
        client_name: client.display_name,
        assigned_forms: statuses
            .into_iter()
            .map(|(form_id, status)| AssignedForm { form_id, status })
            .collect(),
    }))
}
