use crate::forms::FREQUENCY_SCALE;
use crate::{AnswerOption, Form};

/// PHQ-9: Patient Health Questionnaire depression module.
pub struct Phq9;

const QUESTIONS: [&str; 9] = [
    "Little interest or pleasure in doing things",
    "Feeling down, depressed, or hopeless",
    "Trouble falling or staying asleep, or sleeping too much",
    "Feeling tired or having little energy",
    "Poor appetite or overeating",
    "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
    "Trouble concentrating on things, such as reading the newspaper or watching television",
    "Moving or speaking so slowly that other people could have noticed, or the opposite, being so fidgety or restless that you have been moving around a lot more than usual",
    "Thoughts that you would be better off dead or of hurting yourself in some way",
];

impl Form for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn options(&self) -> &[AnswerOption] {
        &FREQUENCY_SCALE
    }

    fn questions(&self) -> &[&str] {
        &QUESTIONS
    }
}
