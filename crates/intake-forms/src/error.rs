use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown form: {0}")]
    UnknownForm(String),

    #[error("form {form_id} has no option with value {value}")]
    UnknownOption { form_id: String, value: i64 },

    #[error("question index {index} out of range for form {form_id}")]
    QuestionIndex { form_id: String, index: usize },
}
