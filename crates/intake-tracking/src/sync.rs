//! The status synchronizer.
//!
//! On submission: write the answers into the client document, then upsert
//! "Completed" into the client document's `Submissions` tab and into the
//! central `MeasurementTracking` tab. The two upserts hit different
//! documents and no transaction spans them; a failure between them leaves
//! the tables temporarily disagreeing, and resubmission (idempotent for
//! the status rows) is the recovery path.

use jiff::Timestamp;

use intake_core::models::client::ClientRecord;
use intake_core::models::response::ResponseCell;
use intake_core::models::status::FormStatus;
use intake_core::models::submission::SubmissionRow;
use intake_core::models::tracking::TrackingRow;
use intake_core::ranges;
use intake_sheets::error::SheetsError;
use intake_sheets::store::SheetsStore;

use crate::error::TrackingError;
use crate::locks::SubmissionLocks;
use crate::matcher;

/// Record a completed form submission.
///
/// Validates before writing: the form tab must exist with a non-empty
/// question column, and the response count must equal the question count.
/// Writes happen in damage-bounding order: answers first (failure aborts
/// the whole operation), then the per-client status row, then the central
/// one. Steps 2 and 3 are independent and never rolled back or retried.
pub async fn record_submission(
    store: &dyn SheetsStore,
    locks: &SubmissionLocks,
    central_id: &str,
    client: &ClientRecord,
    form_id: &str,
    responses: &[ResponseCell],
    now: Timestamp,
) -> Result<(), TrackingError> {
    let _guard = locks.acquire(&client.client_id, form_id).await;

    let questions = match store
        .get_range(&client.document_id, &ranges::question_column(form_id))
        .await
    {
        Ok(rows) => rows,
        Err(SheetsError::RangeNotFound { .. }) => {
            return Err(TrackingError::UnknownForm {
                client_id: client.client_id.clone(),
                form_id: form_id.to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let question_count = questions.len();
    if question_count == 0 {
        return Err(TrackingError::UnknownForm {
            client_id: client.client_id.clone(),
            form_id: form_id.to_string(),
        });
    }
    if responses.len() != question_count {
        return Err(TrackingError::ResponseCount {
            form_id: form_id.to_string(),
            expected: question_count,
            got: responses.len(),
        });
    }

    // Step 1: answers, aligned row-for-row to the question column.
    let answer_rows: Vec<Vec<String>> = responses.iter().map(ResponseCell::answer_cells).collect();
    store
        .update_range(
            &client.document_id,
            &ranges::answer_columns(form_id, question_count),
            answer_rows,
        )
        .await?;
    tracing::debug!(client_id = %client.client_id, form_id, "answers written");

    // Step 2: per-client status row.
    upsert_submission_status(store, client, form_id, now).await?;

    // Step 3: central tracking row.
    upsert_tracking_status(store, central_id, client, form_id, now).await?;

    tracing::info!(client_id = %client.client_id, form_id, "form submission recorded");
    Ok(())
}

/// Upsert `(client_id, form_id) -> Completed` in the client document.
/// Appends when the key is absent; otherwise updates only the status and
/// timestamp columns, leaving the key columns untouched.
async fn upsert_submission_status(
    store: &dyn SheetsStore,
    client: &ClientRecord,
    form_id: &str,
    now: Timestamp,
) -> Result<(), TrackingError> {
    let rows = store
        .get_range(&client.document_id, &ranges::submissions_scan())
        .await?;

    match matcher::find_row(&rows, &[(0, &client.client_id), (1, form_id)]) {
        Some(index) => {
            store
                .update_range(
                    &client.document_id,
                    &ranges::submissions_status(index),
                    vec![SubmissionRow::status_cells(FormStatus::Completed, now)],
                )
                .await?;
        }
        None => {
            let row = SubmissionRow {
                client_id: client.client_id.clone(),
                form_id: form_id.to_string(),
                status: FormStatus::Completed,
                updated_at: now,
            };
            store
                .append_rows(
                    &client.document_id,
                    &ranges::submissions_append(),
                    vec![row.into_row()],
                )
                .await?;
        }
    }
    Ok(())
}

/// Same upsert against the central `MeasurementTracking` tab, which keys
/// on columns A (client) and C (form).
async fn upsert_tracking_status(
    store: &dyn SheetsStore,
    central_id: &str,
    client: &ClientRecord,
    form_id: &str,
    now: Timestamp,
) -> Result<(), TrackingError> {
    let rows = store.get_range(central_id, &ranges::tracking_scan()).await?;

    match matcher::find_row(&rows, &[(0, &client.client_id), (2, form_id)]) {
        Some(index) => {
            store
                .update_range(
                    central_id,
                    &ranges::tracking_status(index),
                    vec![TrackingRow::status_cells(FormStatus::Completed, now)],
                )
                .await?;
        }
        None => {
            let row = TrackingRow {
                client_id: client.client_id.clone(),
                display_name: client.display_name.clone(),
                form_id: form_id.to_string(),
                user_type: client.user_type.clone(),
                status: FormStatus::Completed,
                updated_at: now,
            };
            store
                .append_rows(central_id, &ranges::tracking_append(), vec![row.into_row()])
                .await?;
        }
    }
    Ok(())
}
