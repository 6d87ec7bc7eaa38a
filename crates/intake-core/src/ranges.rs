//! Spreadsheet tab and range conventions.
//!
//! Pure string functions with no network dependency. These define the
//! canonical layout of the central registry and of each client document.

/// Central registry tab holding one row per client.
pub const CLIENTS_TAB: &str = "Clients";

/// Central registry tab mirroring per-client submission state.
pub const TRACKING_TAB: &str = "MeasurementTracking";

/// Per-client status tab on each client document.
pub const SUBMISSIONS_TAB: &str = "Submissions";

/// Header row of a client document's `Submissions` tab.
pub const SUBMISSIONS_HEADER: [&str; 4] = ["ClientID", "FormID", "Status", "Timestamp"];

/// Literal header token optionally present at the top of a catalog
/// question column; readers strip it.
pub const QUESTIONS_HEADER: &str = "Questions";

/// Scan of all client rows. Row 1 is the header, data starts at row 2.
pub fn clients_scan() -> String {
    format!("{CLIENTS_TAB}!A2:J")
}

pub fn clients_append() -> String {
    format!("{CLIENTS_TAB}!A1")
}

pub fn tracking_scan() -> String {
    format!("{TRACKING_TAB}!A2:F")
}

pub fn tracking_append() -> String {
    format!("{TRACKING_TAB}!A1")
}

/// Status + timestamp cells (columns E:F) of the tracking data row at
/// `index`, 0-based within a [`tracking_scan`] read.
pub fn tracking_status(index: usize) -> String {
    let row = index + 2;
    format!("{TRACKING_TAB}!E{row}:F{row}")
}

pub fn submissions_scan() -> String {
    format!("{SUBMISSIONS_TAB}!A2:D")
}

pub fn submissions_append() -> String {
    format!("{SUBMISSIONS_TAB}!A1")
}

/// Status + timestamp cells (columns C:D) of the submission data row at
/// `index`, 0-based within a [`submissions_scan`] read.
pub fn submissions_status(index: usize) -> String {
    let row = index + 2;
    format!("{SUBMISSIONS_TAB}!C{row}:D{row}")
}

/// Question column of a form tab on the client document.
pub fn question_column(form_id: &str) -> String {
    format!("{form_id}!A1:A")
}

/// Write range for `count` question prompts, one per row.
pub fn question_write(form_id: &str, count: usize) -> String {
    format!("{form_id}!A1:A{count}")
}

/// Aligned answer columns (label, value) next to the question list.
pub fn answer_columns(form_id: &str, count: usize) -> String {
    format!("{form_id}!B1:C{count}")
}

/// Question column of a catalog tab on the central registry.
pub fn catalog_column(tab: &str) -> String {
    format!("{tab}!A:A")
}

/// Title of a client's own spreadsheet document.
pub fn document_title(client_id: &str) -> String {
    format!("Client_{client_id}_Submissions")
}
