use crate::forms::FREQUENCY_SCALE;
use crate::{AnswerOption, Form};

/// GAD-7: Generalized Anxiety Disorder 7-item scale.
pub struct Gad7;

const QUESTIONS: [&str; 7] = [
    "Feeling nervous, anxious, or on edge",
    "Not being able to stop or control worrying",
    "Worrying too much about different things",
    "Trouble relaxing",
    "Being so restless that it is hard to sit still",
    "Becoming easily annoyed or irritable",
    "Feeling afraid, as if something awful might happen",
];

impl Form for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn options(&self) -> &[AnswerOption] {
        &FREQUENCY_SCALE
    }

    fn questions(&self) -> &[&str] {
        &QUESTIONS
    }
}
