//! Canned answers for common tutor questions.
//!
//! Checked before any remote call: if the (lowercased) question contains one
//! of these keys, the stored answer is returned immediately.

static INSTANT_ANSWERS: &[(&str, &str)] = &[
    (
        "what is sql",
        "SQL stands for Structured Query Language. It is used to store, retrieve, \
         and manage data in relational databases.",
    ),
    (
        "what is database",
        "A database is an organized collection of data that can be easily accessed, \
         managed, and updated.",
    ),
    (
        "what is primary key",
        "A primary key uniquely identifies each record in a database table.",
    ),
    (
        "difference between sql and mysql",
        "SQL is a language, while MySQL is a database management system that uses SQL.",
    ),
    (
        "what is select query",
        "SELECT is used to retrieve data from one or more tables in a database.",
    ),
];

/// Substring match against the canned-answer table.
pub fn instant_answer(question: &str) -> Option<&'static str> {
    let q = question.to_lowercase();
    let q = q.trim();
    INSTANT_ANSWERS
        .iter()
        .find(|(key, _)| q.contains(key))
        .map(|(_, answer)| *answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_match() {
        let answer = instant_answer("Hey, what is SQL exactly?").unwrap();
        assert!(answer.contains("Structured Query Language"));
    }

    #[test]
    fn test_case_and_whitespace() {
        assert!(instant_answer("  WHAT IS PRIMARY KEY  ").is_some());
    }

    #[test]
    fn test_no_match() {
        assert!(instant_answer("explain b-tree splits").is_none());
    }
}
