//! Paginated form-filling session.
//!
//! The logic layer of the selection-input UI: page slicing, option
//! resolution, and production of the ordered response list. Rendering is
//! out of scope; this is what any frontend drives.

use intake_core::models::response::{ResponseCell, SelectedOption};

use crate::error::FormError;
use crate::Form;

pub const QUESTIONS_PER_PAGE: usize = 20;

/// One in-progress pass over a form.
///
/// The response list always holds exactly one slot per question, in
/// question order; submission sends it as-is, unanswered slots included.
pub struct FormSession<'a> {
    form: &'a dyn Form,
    responses: Vec<ResponseCell>,
    page: usize,
}

impl<'a> FormSession<'a> {
    pub fn new(form: &'a dyn Form) -> Self {
        FormSession {
            form,
            responses: vec![ResponseCell::Empty; form.questions().len()],
            page: 0,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.form.questions().len().div_ceil(QUESTIONS_PER_PAGE).max(1)
    }

    /// Global index of the first question on the current page.
    pub fn page_start(&self) -> usize {
        self.page * QUESTIONS_PER_PAGE
    }

    /// Prompts visible on the current page.
    pub fn current_questions(&self) -> &[&str] {
        let questions = self.form.questions();
        let start = self.page_start().min(questions.len());
        let end = (start + QUESTIONS_PER_PAGE).min(questions.len());
        &questions[start..end]
    }

    /// Record an answer for the question at the global `index`, resolving
    /// `value` against the form's option scale.
    pub fn select(&mut self, index: usize, value: i64) -> Result<(), FormError> {
        if index >= self.responses.len() {
            return Err(FormError::QuestionIndex {
                form_id: self.form.id().to_string(),
                index,
            });
        }
        let option = self
            .form
            .option_for_value(value)
            .ok_or_else(|| FormError::UnknownOption {
                form_id: self.form.id().to_string(),
                value,
            })?;
        self.responses[index] = ResponseCell::Answered(SelectedOption {
            label: option.label.clone(),
            value: option.value,
        });
        Ok(())
    }

    pub fn next_page(&mut self) {
        self.page = (self.page + 1).min(self.page_count() - 1);
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn is_last_page(&self) -> bool {
        self.page + 1 == self.page_count()
    }

    pub fn answered_count(&self) -> usize {
        self.responses.iter().filter(|r| r.is_answered()).count()
    }

    /// The ordered response list submitted to the backend.
    pub fn into_responses(self) -> Vec<ResponseCell> {
        self.responses
    }
}
