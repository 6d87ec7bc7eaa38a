//! Tests for the form registry, catalog tab resolution, and the paginated
//! session logic.

use intake_core::models::response::ResponseCell;
use intake_forms::catalog::{catalog_tab, strip_header};
use intake_forms::error::FormError;
use intake_forms::session::{FormSession, QUESTIONS_PER_PAGE};
use intake_forms::{all_forms, get_form, AnswerOption, Form};

#[test]
fn registry_resolves_bundled_forms_by_id() {
    let ids: Vec<String> = all_forms().iter().map(|f| f.id().to_string()).collect();
    assert_eq!(ids, vec!["gad7", "phq9"]);

    let gad7 = get_form("gad7").unwrap();
    assert_eq!(gad7.name(), "GAD-7");
    assert_eq!(gad7.questions().len(), 7);
    assert!(get_form("mcmi-iv").is_none());
}

#[test]
fn catalog_tab_uses_the_override_table_for_srs2_ids() {
    assert_eq!(catalog_tab("srs2-adult-self"), "srs2_adult_self_Questions");
    assert_eq!(
        catalog_tab("srs2-adult-informant"),
        "srs2_adult_informant_Questions"
    );
    assert_eq!(catalog_tab("gad7"), "gad7_Questions");
}

#[test]
fn strip_header_removes_only_a_leading_header_token() {
    let stripped = strip_header(vec![
        "Questions".to_string(),
        "Trouble relaxing".to_string(),
    ]);
    assert_eq!(stripped, vec!["Trouble relaxing"]);

    // No token, nothing stripped; the token is not removed mid-column.
    let untouched = strip_header(vec![
        "Trouble relaxing".to_string(),
        "Questions".to_string(),
    ]);
    assert_eq!(untouched.len(), 2);
}

/// A large form for exercising pagination; prompts are synthetic.
struct LongForm {
    questions: Vec<&'static str>,
    options: Vec<AnswerOption>,
}

impl LongForm {
    fn new(count: usize) -> Self {
        LongForm {
            questions: vec!["prompt"; count],
            options: vec![
                AnswerOption {
                    label: "Not true".to_string(),
                    value: 1,
                },
                AnswerOption {
                    label: "Almost always true".to_string(),
                    value: 4,
                },
            ],
        }
    }
}

impl Form for LongForm {
    fn id(&self) -> &str {
        "long-form"
    }
    fn name(&self) -> &str {
        "Long Form"
    }
    fn options(&self) -> &[AnswerOption] {
        &self.options
    }
    fn questions(&self) -> &[&str] {
        &self.questions
    }
}

#[test]
fn session_pages_are_twenty_questions_wide() {
    let form = LongForm::new(45);
    let mut session = FormSession::new(&form);

    assert_eq!(session.page_count(), 3);
    assert_eq!(session.current_questions().len(), QUESTIONS_PER_PAGE);
    assert!(!session.is_last_page());

    session.next_page();
    session.next_page();
    assert!(session.is_last_page());
    assert_eq!(session.page_start(), 40);
    assert_eq!(session.current_questions().len(), 5);

    // Navigation clamps at both ends.
    session.next_page();
    assert_eq!(session.page(), 2);
    session.prev_page();
    session.prev_page();
    session.prev_page();
    assert_eq!(session.page(), 0);
}

#[test]
fn select_resolves_the_value_to_its_label() {
    let gad7 = get_form("gad7").unwrap();
    let mut session = FormSession::new(gad7.as_ref());

    session.select(0, 3).unwrap();
    session.select(6, 0).unwrap();
    assert_eq!(session.answered_count(), 2);

    let responses = session.into_responses();
    assert_eq!(responses.len(), 7);
    match &responses[0] {
        ResponseCell::Answered(opt) => {
            assert_eq!(opt.label, "Nearly every day");
            assert_eq!(opt.value, 3);
        }
        other => panic!("expected an answered slot, got {other:?}"),
    }
    assert_eq!(responses[1], ResponseCell::Empty);
}

#[test]
fn select_rejects_values_outside_the_scale_and_out_of_range_indices() {
    let gad7 = get_form("gad7").unwrap();
    let mut session = FormSession::new(gad7.as_ref());

    assert!(matches!(
        session.select(0, 9),
        Err(FormError::UnknownOption { value: 9, .. })
    ));
    assert!(matches!(
        session.select(7, 0),
        Err(FormError::QuestionIndex { index: 7, .. })
    ));
    assert_eq!(session.answered_count(), 0);
}

#[test]
fn single_page_form_still_has_one_page() {
    let gad7 = get_form("gad7").unwrap();
    let session = FormSession::new(gad7.as_ref());
    assert_eq!(session.page_count(), 1);
    assert!(session.is_last_page());
    assert_eq!(session.current_questions().len(), 7);
}
