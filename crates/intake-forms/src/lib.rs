//! intake-forms
//!
//! Static questionnaire definitions and the paginated form-session logic.
//! Pure data, no network dependency. Question prompts for licensed
//! instruments live only in the central catalog tabs; this crate bundles
//! the public-domain forms and the answer scales.

pub mod catalog;
pub mod error;
pub mod forms;
pub mod session;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One choice on a form's answer scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub label: String,
    pub value: i64,
}

/// Trait implemented by each bundled questionnaire.
pub trait Form: Send + Sync {
    /// Unique identifier (e.g. "gad7", "phq9").
    fn id(&self) -> &str;

    /// Human-readable name (e.g. "GAD-7").
    fn name(&self) -> &str;

    /// The answer scale shared by every question on the form.
    fn options(&self) -> &[AnswerOption];

    /// Ordered prompts. Catalog row order is answer order; never re-sort.
    fn questions(&self) -> &[&str];

    /// Resolve a submitted value to its option.
    fn option_for_value(&self, value: i64) -> Option<&AnswerOption> {
        self.options().iter().find(|o| o.value == value)
    }
}

/// Return all bundled forms.
pub fn all_forms() -> Vec<Box<dyn Form>> {
    vec![Box::new(forms::gad7::Gad7), Box::new(forms::phq9::Phq9)]
}

/// Look up a bundled form by id.
pub fn get_form(id: &str) -> Option<Box<dyn Form>> {
    all_forms().into_iter().find(|f| f.id() == id)
}
