//! Units of the operator clarification protocol.
//!
//! The generator is agnostic to rendering: swipe-style yes/no cards and
//! grid-style multi-selects are the same decision point behind different
//! input affordances, so a question carries only type, options, and priority.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    SingleSelect,
    MultiSelect,
    YesNo,
    FreeText,
    PhotoLabeling,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionOption {
    pub value: String,
    pub label: String,
    /// Pre-checked based on inferred data; rendered distinguishably from
    /// operator-made choices.
    #[serde(default)]
    pub preselected: bool,
}

impl QuestionOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            preselected: false,
        }
    }

    pub fn preselected(mut self) -> Self {
        self.preselected = true;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier; the operator-answers payload keys off it.
    pub id: String,
    pub prompt: String,
    pub kind: QuestionKind,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    /// Lower sorts earlier.
    pub priority: u32,
}
