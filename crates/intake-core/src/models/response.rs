use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ts_rs::TS;

/// An answer option the client picked from a form's option scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SelectedOption {
    pub label: String,
    pub value: i64,
}

/// One slot of the ordered response list.
///
/// Index `i` of the list aligns with question `i` of the form. Alignment
/// is strictly positional, never by question identifier. On the wire an
/// unanswered slot is the empty string, an answered slot is the
/// `{label, value}` object.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResponseCell {
    #[default]
    Empty,
    Answered(SelectedOption),
}

impl ResponseCell {
    pub fn is_answered(&self) -> bool {
        matches!(self, ResponseCell::Answered(_))
    }

    /// The label + value pair written into the answer columns (B, C) of a
    /// form tab. Unanswered slots write empty cells to keep alignment.
    pub fn answer_cells(&self) -> Vec<String> {
        match self {
            ResponseCell::Empty => vec![String::new(), String::new()],
            ResponseCell::Answered(opt) => vec![opt.label.clone(), opt.value.to_string()],
        }
    }
}

impl Serialize for ResponseCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResponseCell::Empty => serializer.serialize_str(""),
            ResponseCell::Answered(opt) => opt.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ResponseCell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Null => Ok(ResponseCell::Empty),
            serde_json::Value::String(s) if s.is_empty() => Ok(ResponseCell::Empty),
            serde_json::Value::String(s) => Err(D::Error::custom(format!(
                "expected an empty string or a {{label, value}} object, got {s:?}"
            ))),
            other => {
                let opt: SelectedOption =
                    serde_json::from_value(other).map_err(D::Error::custom)?;
                Ok(ResponseCell::Answered(opt))
            }
        }
    }
}
