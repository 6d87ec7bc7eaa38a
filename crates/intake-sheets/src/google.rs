//! Google Sheets / Drive implementation of the store.
//!
//! Request shaping only: every method maps 1:1 onto a documented REST
//! call. Range strings pass through untouched; layout knowledge lives in
//! `intake_core::ranges`, not here.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;

use async_trait::async_trait;

use crate::auth::{ServiceAccountKey, TokenProvider};
use crate::error::SheetsError;
use crate::store::{AccessRole, CreatedDocument, SheetsStore};

const SHEETS_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const DRIVE_BASE: &str = "https://www.googleapis.com/drive/v3/files";

#[derive(Clone)]
pub struct GoogleSheets {
    http: reqwest::Client,
    auth: Arc<TokenProvider>,
    /// Drive folder newly created documents are moved into, when set.
    folder_id: Option<String>,
}

impl GoogleSheets {
    pub fn new(key: ServiceAccountKey, folder_id: Option<String>) -> Result<Self, SheetsError> {
        let http = reqwest::Client::new();
        let auth = Arc::new(TokenProvider::new(http.clone(), key)?);
        Ok(GoogleSheets {
            http,
            auth,
            folder_id,
        })
    }

    /// Classify a non-success values response. Google answers 404 for an
    /// unknown document and 400 INVALID_ARGUMENT ("Unable to parse range")
    /// for a range addressing a tab that does not exist.
    async fn values_error(
        resp: reqwest::Response,
        document_id: &str,
        range: &str,
        wrap: fn(String) -> SheetsError,
    ) -> SheetsError {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        match status.as_u16() {
            404 => SheetsError::DocumentNotFound {
                document_id: document_id.to_string(),
            },
            400 => SheetsError::RangeNotFound {
                document_id: document_id.to_string(),
                range: range.to_string(),
            },
            _ => wrap(format!("{status}: {body}")),
        }
    }

    async fn bearer(&self) -> Result<String, SheetsError> {
        self.auth.token().await
    }
}

#[derive(Deserialize)]
struct ValuesResponse {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateResponse {
    spreadsheet_id: String,
    #[serde(default)]
    spreadsheet_url: String,
}

/// Cells come back typed (strings, numbers, bools); the facade boundary is
/// stringly, matching how the rest of the system reads rows.
fn cell_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[async_trait]
impl SheetsStore for GoogleSheets {
    async fn get_range(
        &self,
        document_id: &str,
        range: &str,
    ) -> Result<Vec<Vec<String>>, SheetsError> {
        let token = self.bearer().await?;
        let url = format!("{SHEETS_BASE}/{document_id}/values/{range}");
        let resp = self.http.get(&url).bearer_auth(&token).send().await?;

        if !resp.status().is_success() {
            return Err(Self::values_error(resp, document_id, range, SheetsError::GetRange).await);
        }

        let body: ValuesResponse = resp.json().await?;
        Ok(body
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect())
    }

    async fn append_rows(
        &self,
        document_id: &str,
        range: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<(), SheetsError> {
        let token = self.bearer().await?;
        let url = format!(
            "{SHEETS_BASE}/{document_id}/values/{range}:append\
             ?valueInputOption=RAW&insertDataOption=INSERT_ROWS"
        );
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&token)
            .json(&json!({ "values": rows }))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(
                Self::values_error(resp, document_id, range, SheetsError::AppendRows).await,
            );
        }
        Ok(())
    }

    async fn update_range(
        &self,
        document_id: &str,
        range: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<(), SheetsError> {
        let token = self.bearer().await?;
        let url = format!("{SHEETS_BASE}/{document_id}/values/{range}?valueInputOption=RAW");
        let resp = self
            .http
            .put(&url)
            .bearer_auth(&token)
            .json(&json!({ "values": rows }))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(
                Self::values_error(resp, document_id, range, SheetsError::UpdateRange).await,
            );
        }
        Ok(())
    }

    async fn create_document(
        &self,
        title: &str,
        initial_tabs: &[&str],
    ) -> Result<CreatedDocument, SheetsError> {
        let token = self.bearer().await?;
        let sheets: Vec<_> = initial_tabs
            .iter()
            .map(|tab| json!({ "properties": { "title": tab } }))
            .collect();
        let resp = self
            .http
            .post(SHEETS_BASE)
            .bearer_auth(&token)
            .json(&json!({
                "properties": { "title": title },
                "sheets": sheets,
            }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SheetsError::CreateDocument(format!("{status}: {body}")));
        }
        let created: CreateResponse = resp.json().await?;

        // Folder placement is best-effort: the document is already usable.
        if let Some(folder_id) = &self.folder_id {
            let url = format!(
                "{DRIVE_BASE}/{}?addParents={folder_id}&removeParents=root",
                created.spreadsheet_id
            );
            let moved = self
                .http
                .patch(&url)
                .bearer_auth(&token)
                .json(&json!({}))
                .send()
                .await;
            match moved {
                Ok(resp) if resp.status().is_success() => {}
                Ok(resp) => {
                    tracing::warn!(
                        document_id = %created.spreadsheet_id,
                        status = %resp.status(),
                        "failed to move document into configured folder"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        document_id = %created.spreadsheet_id,
                        error = %e,
                        "failed to move document into configured folder"
                    );
                }
            }
        }

        Ok(CreatedDocument {
            document_id: created.spreadsheet_id,
            url: created.spreadsheet_url,
        })
    }

    async fn add_tab(&self, document_id: &str, title: &str) -> Result<(), SheetsError> {
        let token = self.bearer().await?;
        let url = format!("{SHEETS_BASE}/{document_id}:batchUpdate");
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&token)
            .json(&json!({
                "requests": [
                    { "addSheet": { "properties": { "title": title } } }
                ]
            }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            if status.as_u16() == 404 {
                return Err(SheetsError::DocumentNotFound {
                    document_id: document_id.to_string(),
                });
            }
            return Err(SheetsError::AddTab(format!("{status}: {body}")));
        }
        Ok(())
    }

    async fn grant_access(
        &self,
        document_id: &str,
        email: &str,
        role: AccessRole,
    ) -> Result<(), SheetsError> {
        let token = self.bearer().await?;
        let url = format!("{DRIVE_BASE}/{document_id}/permissions?sendNotificationEmail=false");
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&token)
            .json(&json!({
                "type": "user",
                "role": role.as_str(),
                "emailAddress": email,
            }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SheetsError::GrantAccess(format!("{status}: {body}")));
        }
        Ok(())
    }
}
