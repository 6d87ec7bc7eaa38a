//! Catalog tab-name resolution.
//!
//! Every form's question prompts live in the central registry, one tab
//! per form, read at provisioning time.

use intake_core::ranges::QUESTIONS_HEADER;

/// Resolve the central-registry tab holding a form's question column.
///
/// The SRS-2 tabs are named after the snake_case files they were imported
/// from; every other form follows the `{form_id}_Questions` convention.
pub fn catalog_tab(form_id: &str) -> String {
    match form_id {
        "srs2-adult-self" => "srs2_adult_self_Questions".to_string(),
        "srs2-adult-informant" => "srs2_adult_informant_Questions".to_string(),
        _ => format!("{form_id}_Questions"),
    }
}

/// Strip the literal `Questions` header token if a catalog column starts
/// with one.
pub fn strip_header(mut questions: Vec<String>) -> Vec<String> {
    if questions
        .first()
        .is_some_and(|q| q.trim() == QUESTIONS_HEADER)
    {
        questions.remove(0);
    }
    questions
}
