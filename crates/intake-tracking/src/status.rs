//! Read-side status reporting.

use intake_core::models::client::ClientRecord;
use intake_core::models::status::FormStatus;
use intake_core::ranges;
use intake_sheets::store::SheetsStore;

use crate::error::TrackingError;
use crate::matcher;

/// Status of each of the client's assigned forms, in assignment order,
/// from a single read of the client document's `Submissions` tab.
///
/// A form with no submission row (or an unreadable status cell) reports
/// "Not Started".
pub async fn form_statuses(
    store: &dyn SheetsStore,
    client: &ClientRecord,
) -> Result<Vec<(String, FormStatus)>, TrackingError> {
    let rows = store
        .get_range(&client.document_id, &ranges::submissions_scan())
        .await?;

    Ok(client
        .assigned_form_ids
        .iter()
        .map(|form_id| {
            let status = matcher::find_row(&rows, &[(0, &client.client_id), (1, form_id)])
                .and_then(|index| rows[index].get(2))
                .and_then(|cell| cell.parse().ok())
                .unwrap_or(FormStatus::NotStarted);
            (form_id.clone(), status)
        })
        .collect())
}
