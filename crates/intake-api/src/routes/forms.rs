use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use intake_forms::{all_forms, get_form, AnswerOption};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct FormSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
pub struct FormDetail {
    id: String,
    name: String,
    options: Vec<AnswerOption>,
    questions: Vec<String>,
}

pub async fn list_forms() -> Json<Vec<FormSummary>> {
    let forms: Vec<FormSummary> = all_forms()
        .iter()
        .map(|f| FormSummary {
            id: f.id().to_string(),
            name: f.name().to_string(),
        })
        .collect();
    Json(forms)
}

pub async fn form_detail(Path(id): Path<String>) -> Result<Json<FormDetail>, ApiError> {
    let form =
        get_form(&id).ok_or_else(|| ApiError::NotFound(format!("form not found: {id}")))?;

    Ok(Json(FormDetail {
        id: form.id().to_string(),
        name: form.name().to_string(),
        options: form.options().to_vec(),
        questions: form.questions().iter().map(|q| q.to_string()).collect(),
    }))
}
