pub mod gad7;
pub mod phq9;

use std::sync::LazyLock;

use crate::AnswerOption;

/// The standard four-point frequency scale ("over the last two weeks, how
/// often have you been bothered by...") shared by the screening forms.
pub(crate) static FREQUENCY_SCALE: LazyLock<Vec<AnswerOption>> = LazyLock::new(|| {
    vec![
        AnswerOption {
            label: "Not at all".to_string(),
            value: 0,
        },
        AnswerOption {
            label: "Several days".to_string(),
            value: 1,
        },
        AnswerOption {
            label: "More than half the days".to_string(),
            value: 2,
        },
        AnswerOption {
            label: "Nearly every day".to_string(),
            value: 3,
        },
    ]
});
