use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("document not found: {document_id}")]
    DocumentNotFound { document_id: String },

    #[error("range not found on {document_id}: {range}")]
    RangeNotFound { document_id: String, range: String },

    #[error("malformed range: {0:?}")]
    MalformedRange(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Sheets GetRange error: {0}")]
    GetRange(String),

    #[error("Sheets AppendRows error: {0}")]
    AppendRows(String),

    #[error("Sheets UpdateRange error: {0}")]
    UpdateRange(String),

    #[error("Sheets CreateDocument error: {0}")]
    CreateDocument(String),

    #[error("Sheets AddTab error: {0}")]
    AddTab(String),

    #[error("Drive GrantAccess error: {0}")]
    GrantAccess(String),

    #[error("auth error: {0}")]
    Auth(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
