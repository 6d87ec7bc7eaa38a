use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::status::FormStatus;

/// One row of a client document's `Submissions` tab (columns A..D).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmissionRow {
    pub client_id: String,
    pub form_id: String,
    pub status: FormStatus,
    pub updated_at: Timestamp,
}

impl SubmissionRow {
    pub fn from_row(row: &[String]) -> Result<Self, CoreError> {
        let col = |i: usize| row.get(i).map(String::as_str).unwrap_or("").trim().to_string();

        let client_id = col(0);
        if client_id.is_empty() {
            return Err(CoreError::MissingColumn {
                table: "Submissions",
                column: "ClientID",
            });
        }

        Ok(SubmissionRow {
            client_id,
            form_id: col(1),
            status: col(2).parse()?,
            updated_at: col(3).parse()?,
        })
    }

    pub fn into_row(self) -> Vec<String> {
        vec![
            self.client_id,
            self.form_id,
            self.status.to_string(),
            self.updated_at.to_string(),
        ]
    }

    /// The status + timestamp pair written when updating columns C:D in
    /// place, leaving the key columns untouched.
    pub fn status_cells(status: FormStatus, at: Timestamp) -> Vec<String> {
        vec![status.to_string(), at.to_string()]
    }
}
