use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One row of the central registry's `Clients` tab.
///
/// Created once at intake and immutable thereafter. The positional layout
/// (columns A..J) exists only in [`from_row`](Self::from_row) and
/// [`into_row`](Self::into_row); everything above the storage facade works
/// with named fields.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClientRecord {
    pub client_id: String,
    pub display_name: String,
    /// Ordered set of assigned form ids, comma-joined in the cell.
    pub assigned_form_ids: Vec<String>,
    pub date_of_birth: String,
    pub evaluation_type: String,
    pub age_range: String,
    pub user_type: String,
    pub created_at: Timestamp,
    /// Id of the client's own spreadsheet document.
    pub document_id: String,
    pub document_url: String,
}

impl ClientRecord {
    /// Decode a positional `Clients` row.
    ///
    /// Range reads drop trailing empty cells, so optional columns default
    /// to empty; identity and document columns are required.
    pub fn from_row(row: &[String]) -> Result<Self, CoreError> {
        let col = |i: usize| row.get(i).map(String::as_str).unwrap_or("").trim().to_string();

        let client_id = col(0);
        if client_id.is_empty() {
            return Err(CoreError::MissingColumn {
                table: "Clients",
                column: "clientId",
            });
        }
        let document_id = col(8);
        if document_id.is_empty() {
            return Err(CoreError::MissingColumn {
                table: "Clients",
                column: "documentId",
            });
        }

        Ok(ClientRecord {
            client_id,
            display_name: col(1),
            assigned_form_ids: split_form_ids(&col(2)),
            date_of_birth: col(3),
            evaluation_type: col(4),
            age_range: col(5),
            user_type: col(6),
            created_at: col(7).parse()?,
            document_id,
            document_url: col(9),
        })
    }

    /// Encode as a positional `Clients` row (columns A..J).
    pub fn into_row(self) -> Vec<String> {
        vec![
            self.client_id,
            self.display_name,
            self.assigned_form_ids.join(","),
            self.date_of_birth,
            self.evaluation_type,
            self.age_range,
            self.user_type,
            self.created_at.to_string(),
            self.document_id,
            self.document_url,
        ]
    }
}

fn split_form_ids(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
