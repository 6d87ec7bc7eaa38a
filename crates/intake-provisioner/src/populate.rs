//! Form tab population.

use jiff::Timestamp;

use intake_core::models::client::ClientRecord;
use intake_core::models::status::FormStatus;
use intake_core::models::submission::SubmissionRow;
use intake_core::models::tracking::TrackingRow;
use intake_core::ranges;
use intake_forms::catalog;
use intake_sheets::error::SheetsError;
use intake_sheets::store::SheetsStore;

use crate::error::ProvisionError;

/// What happened to one assigned form during provisioning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopulateOutcome {
    /// Tab created, questions written, "Not Started" seeded twice.
    Seeded { questions: usize },
    /// The catalog had no questions for this form; nothing was seeded.
    SkippedEmpty,
    /// Population failed partway; the remaining forms still ran.
    Failed(String),
}

/// Populate one assigned form on the client's document.
///
/// Reads the form's question column from the central catalog, strips the
/// literal header token, creates a tab named after the form, writes the
/// prompts vertically, then seeds a "Not Started" row in the client
/// document's `Submissions` tab and in the central `MeasurementTracking`
/// tab.
pub async fn populate_form_tab(
    store: &dyn SheetsStore,
    central_id: &str,
    client: &ClientRecord,
    form_id: &str,
    now: Timestamp,
) -> Result<PopulateOutcome, ProvisionError> {
    let catalog_tab = catalog::catalog_tab(form_id);
    let rows = match store
        .get_range(central_id, &ranges::catalog_column(&catalog_tab))
        .await
    {
        Ok(rows) => rows,
        Err(SheetsError::RangeNotFound { .. }) => {
            tracing::warn!(form_id, catalog_tab = %catalog_tab, "catalog tab missing, skipping form");
            return Ok(PopulateOutcome::SkippedEmpty);
        }
        Err(e) => return Err(e.into()),
    };

    let questions = catalog::strip_header(
        rows.into_iter()
            .map(|row| row.into_iter().next().unwrap_or_default())
            .collect(),
    );
    if questions.is_empty() {
        tracing::warn!(form_id, catalog_tab = %catalog_tab, "no questions found, skipping form");
        return Ok(PopulateOutcome::SkippedEmpty);
    }

    store.add_tab(&client.document_id, form_id).await?;
    let question_rows: Vec<Vec<String>> = questions.iter().map(|q| vec![q.clone()]).collect();
    store
        .update_range(
            &client.document_id,
            &ranges::question_write(form_id, questions.len()),
            question_rows,
        )
        .await?;

    let submission = SubmissionRow {
        client_id: client.client_id.clone(),
        form_id: form_id.to_string(),
        status: FormStatus::NotStarted,
        updated_at: now,
    };
    store
        .append_rows(
            &client.document_id,
            &ranges::submissions_append(),
            vec![submission.into_row()],
        )
        .await?;

    let tracking = TrackingRow {
        client_id: client.client_id.clone(),
        display_name: client.display_name.clone(),
        form_id: form_id.to_string(),
        user_type: client.user_type.clone(),
        status: FormStatus::NotStarted,
        updated_at: now,
    };
    store
        .append_rows(central_id, &ranges::tracking_append(), vec![tracking.into_row()])
        .await?;

    tracing::info!(
        client_id = %client.client_id,
        form_id,
        questions = questions.len(),
        "form tab seeded"
    );
    Ok(PopulateOutcome::Seeded {
        questions: questions.len(),
    })
}
