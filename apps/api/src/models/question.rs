use serde::Serialize;

/// How the client should present a question's options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Single choice or free text
    Text,
    /// Several options may be picked
    Multiple,
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: u32,
    pub question: &'static str,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub options: &'static [&'static str],
}
