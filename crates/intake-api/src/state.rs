use std::sync::Arc;

use intake_sheets::store::SheetsStore;
use intake_tracking::locks::SubmissionLocks;

/// Shared application state, injected into all route handlers via Axum
/// state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SheetsStore>,
    pub central_spreadsheet_id: String,
    pub operator_email: String,
    pub locks: SubmissionLocks,
}
