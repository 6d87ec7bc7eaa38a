use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SheetsError;

/// A document created by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedDocument {
    pub document_id: String,
    pub url: String,
}

/// Access role grantable on a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessRole {
    Reader,
    Writer,
}

impl AccessRole {
    pub fn as_str(self) -> &'static str {
        match self {
            AccessRole::Reader => "reader",
            AccessRole::Writer => "writer",
        }
    }
}

/// The external tabular store, as seen by the rest of the system.
///
/// Pure I/O. No retries anywhere: every failure surfaces immediately as a
/// [`SheetsError`]. The store offers no cross-document transactions and no
/// conditional writes over ranges.
#[async_trait]
pub trait SheetsStore: Send + Sync {
    /// Read a rectangular range. Trailing empty cells and rows may be
    /// absent from the result; callers index columns positionally with
    /// defaults.
    async fn get_range(
        &self,
        document_id: &str,
        range: &str,
    ) -> Result<Vec<Vec<String>>, SheetsError>;

    /// Append rows after the last data row of the addressed tab, starting
    /// at the range's first column.
    async fn append_rows(
        &self,
        document_id: &str,
        range: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<(), SheetsError>;

    /// Overwrite the addressed range in place.
    async fn update_range(
        &self,
        document_id: &str,
        range: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<(), SheetsError>;

    /// Create a new document containing the given tabs.
    async fn create_document(
        &self,
        title: &str,
        initial_tabs: &[&str],
    ) -> Result<CreatedDocument, SheetsError>;

    /// Add an empty tab to an existing document.
    async fn add_tab(&self, document_id: &str, title: &str) -> Result<(), SheetsError>;

    /// Grant `email` the given role on a document.
    async fn grant_access(
        &self,
        document_id: &str,
        email: &str,
        role: AccessRole,
    ) -> Result<(), SheetsError>;
}
