use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::status::FormStatus;

/// One row of the central registry's `MeasurementTracking` tab
/// (columns A..F).
///
/// Denormalized copy of the per-client submission state, kept for
/// practice-wide reporting. For a given `(client_id, form_id)` this row
/// and the client document's [`SubmissionRow`](super::submission::SubmissionRow)
/// must agree after any successful submission.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrackingRow {
    pub client_id: String,
    pub display_name: String,
    pub form_id: String,
    pub user_type: String,
    pub status: FormStatus,
    pub updated_at: Timestamp,
}

impl TrackingRow {
    pub fn from_row(row: &[String]) -> Result<Self, CoreError> {
        let col = |i: usize| row.get(i).map(String::as_str).unwrap_or("").trim().to_string();

        let client_id = col(0);
        if client_id.is_empty() {
            return Err(CoreError::MissingColumn {
                table: "MeasurementTracking",
                column: "clientId",
            });
        }

        Ok(TrackingRow {
            client_id,
            display_name: col(1),
            form_id: col(2),
            user_type: col(3),
            status: col(4).parse()?,
            updated_at: col(5).parse()?,
        })
    }

    pub fn into_row(self) -> Vec<String> {
        vec![
            self.client_id,
            self.display_name,
            self.form_id,
            self.user_type,
            self.status.to_string(),
            self.updated_at.to_string(),
        ]
    }

    /// The status + timestamp pair written when updating columns E:F in
    /// place.
    pub fn status_cells(status: FormStatus, at: Timestamp) -> Vec<String> {
        vec![status.to_string(), at.to_string()]
    }
}
