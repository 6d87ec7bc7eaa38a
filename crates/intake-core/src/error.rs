use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{table} row is missing required column: {column}")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    #[error("invalid form status: {0:?}")]
    InvalidStatus(String),

    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] jiff::Error),
}
