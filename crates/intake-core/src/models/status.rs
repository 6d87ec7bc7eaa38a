use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Completion state of one assigned form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FormStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "Completed")]
    Completed,
}

impl FormStatus {
    /// The literal cell text used in both tracking tables.
    pub fn as_str(self) -> &'static str {
        match self {
            FormStatus::NotStarted => "Not Started",
            FormStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for FormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, CoreError> {
        match s.trim() {
            "Not Started" => Ok(FormStatus::NotStarted),
            "Completed" => Ok(FormStatus::Completed),
            other => Err(CoreError::InvalidStatus(other.to_string())),
        }
    }
}
