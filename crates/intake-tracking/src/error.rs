use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("unknown client: {0}")]
    UnknownClient(String),

    #[error("no questions found for form {form_id} on client {client_id}")]
    UnknownForm { client_id: String, form_id: String },

    #[error("form {form_id} has {expected} questions but {got} responses were given")]
    ResponseCount {
        form_id: String,
        expected: usize,
        got: usize,
    },

    #[error("row codec error: {0}")]
    Core(#[from] intake_core::error::CoreError),

    #[error("storage error: {0}")]
    Sheets(#[from] intake_sheets::error::SheetsError),
}
