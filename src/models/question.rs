use serde::{Deserialize, Serialize};

/// Every question carries exactly this many answer choices.
pub const CHOICES_PER_QUESTION: usize = 4;

/// A multiple-choice question produced by the quiz generator.
///
/// Lives only for the duration of one quiz run; nothing persists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQuestion {
    pub question: String,
    pub choices: Vec<String>,
    #[serde(rename = "correctIndex")]
    pub correct_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl GeneratedQuestion {
    pub fn new(
        question: impl Into<String>,
        choices: [&str; CHOICES_PER_QUESTION],
        correct_index: usize,
    ) -> Self {
        Self {
            question: question.into(),
            choices: choices.iter().map(|c| c.to_string()).collect(),
            correct_index,
            explanation: None,
        }
    }

    /// A question is usable only with a non-empty prompt, exactly four
    /// choices and an in-range correct index.
    pub fn is_valid(&self) -> bool {
        !self.question.is_empty()
            && self.choices.len() == CHOICES_PER_QUESTION
            && self.correct_index < CHOICES_PER_QUESTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity() {
        let q = GeneratedQuestion::new("What is SQL?", ["a", "b", "c", "d"], 0);
        assert!(q.is_valid());

        let mut empty = q.clone();
        empty.question.clear();
        assert!(!empty.is_valid());

        let mut short = q.clone();
        short.choices.pop();
        assert!(!short.is_valid());

        let mut out_of_range = q;
        out_of_range.correct_index = 4;
        assert!(!out_of_range.is_valid());
    }

    #[test]
    fn test_serde_field_names() {
        let q = GeneratedQuestion::new("Q", ["a", "b", "c", "d"], 2);
        let json = serde_json::to_string(&q).unwrap();
        assert!(json.contains("\"correctIndex\":2"));
        assert!(!json.contains("explanation"));
    }
}
