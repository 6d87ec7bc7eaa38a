use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("clientName is required")]
    MissingClientName,

    #[error("at least one form must be selected")]
    NoFormsSelected,

    #[error("row codec error: {0}")]
    Core(#[from] intake_core::error::CoreError),

    #[error("storage error: {0}")]
    Sheets(#[from] intake_sheets::error::SheetsError),
}
