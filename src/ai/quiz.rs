//! Quiz generation over an unreliable text channel.
//!
//! The model is instructed to answer with a bare JSON array, but completions
//! routinely arrive wrapped in prose or code fences, with typographic quotes
//! or trailing commas. The pipeline here makes that channel behave like a
//! structured API: extract the likely array, repair it, try a fixed sequence
//! of parse variants, validate each element, and fall back to a deterministic
//! question set when nothing usable survives. Callers see either a full valid
//! quiz or a credential/network error, never a malformed one.

use serde_json::Value;
use tracing::{debug, warn};

use crate::models::{CHOICES_PER_QUESTION, GeneratedQuestion};

use super::{AiError, OpenRouterClient};

pub const QUIZ_MODEL: &str = "mistralai/mistral-7b-instruct";

const SYSTEM_PROMPT: &str = "\
You are an educational quiz generator.
Create concise multiple-choice questions (MCQs) for college students.
- Respond with JSON array only. No markdown, no bullets, no code fences.
- For each question, provide exactly 4 concise options and one correct index.
- Keep wording short and clear; no markdown.
- Stay strictly on the provided topic/content.
- Do not repeat questions; avoid trivial duplicates.
- Keep difficulty beginner-friendly.
JSON schema:
[
  {
    \"question\": \"...\",
    \"choices\": [\"A\", \"B\", \"C\", \"D\"],
    \"correctIndex\": 0,
    \"explanation\": \"... (optional)\"
  }
]";

/// Generate up to `count` questions about `topic`, biased by `context`.
///
/// Only call-level failures propagate ([`AiError::MissingCredential`],
/// [`AiError::RemoteService`], transport errors). A completed call always
/// yields valid questions, remote-sourced or fallback.
pub async fn generate(
    client: &OpenRouterClient,
    topic: &str,
    context: &str,
    count: usize,
) -> Result<Vec<GeneratedQuestion>, AiError> {
    let user_prompt = format!(
        "Topic: {topic}\nContext (transcript/notes): {context}\n\
         Number of questions: {count}\nReturn JSON array only."
    );

    let raw = client
        .chat_completion(QUIZ_MODEL, SYSTEM_PROMPT, &user_prompt, 600, 0.6)
        .await?;

    Ok(normalize_response(&raw, topic, count))
}

/// Everything after the network call: extraction, repair, parse, validation,
/// fallback. Pure, so the whole failure surface is unit-testable.
fn normalize_response(raw: &str, topic: &str, count: usize) -> Vec<GeneratedQuestion> {
    let candidate = sanitize_json(raw);

    let Some(parsed) = try_parse_json(&candidate) else {
        warn!(topic, "failed to parse quiz JSON from model response, using fallback");
        return fallback_questions(topic, count);
    };

    let cleaned = coerce_questions(&parsed);
    if cleaned.is_empty() {
        warn!(topic, "quiz JSON parsed but no valid questions survived, using fallback");
        return fallback_questions(topic, count);
    }

    debug!(topic, kept = cleaned.len(), "quiz questions validated");
    cleaned.into_iter().take(count).collect()
}

/// Isolate and repair the likely JSON array inside a completion.
fn sanitize_json(text: &str) -> String {
    let body = fenced_body(text);
    let sliced = slice_array(body);

    let dequoted: String = sliced
        .chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            c => c,
        })
        .collect();

    let stripped = strip_trailing_commas(&dequoted);
    collapse_whitespace(&stripped)
}

/// Prefer the interior of a fenced code block when one is present.
fn fenced_body(text: &str) -> &str {
    let Some(open) = text.find("```") else {
        return text;
    };
    let mut inner = &text[open + 3..];
    if let Some(tag) = inner.get(..4) {
        if tag.eq_ignore_ascii_case("json") {
            inner = &inner[4..];
        }
    }
    match inner.find("```") {
        Some(close) => {
            let body = inner[..close].trim();
            if body.is_empty() { text } else { body }
        }
        // Unterminated fence; treat as prose.
        None => text,
    }
}

/// Slice from the first '[' to the last ']' inclusive. Without such a pair
/// the text is returned unchanged.
fn slice_array(text: &str) -> &str {
    match (text.find('['), text.rfind(']')) {
        (Some(first), Some(last)) if first < last => &text[first..=last],
        _ => text,
    }
}

/// Drop commas that directly precede a closing bracket or brace.
fn strip_trailing_commas(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for (i, c) in text.char_indices() {
        if c == ',' {
            let next = text[i + 1..].chars().find(|c| !c.is_whitespace());
            if matches!(next, Some('}') | Some(']')) {
                continue;
            }
        }
        out.push(c);
    }
    out
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Ordered parse attempts: the text as-is, then one repair heuristic at a
/// time. The first variant that parses wins; new heuristics append here.
fn try_parse_json(text: &str) -> Option<Value> {
    let variants: [fn(&str) -> String; 4] = [
        |s| s.to_string(),
        strip_trailing_commas,
        |s| s.trim().to_string(),
        |s| s.replace('\'', "\""),
    ];

    variants
        .iter()
        .find_map(|variant| serde_json::from_str(&variant(text)).ok())
}

/// Coerce a parsed value into valid questions, dropping anything that does
/// not satisfy the invariants. Non-arrays and non-object elements yield
/// nothing.
fn coerce_questions(parsed: &Value) -> Vec<GeneratedQuestion> {
    let Some(items) = parsed.as_array() else {
        return Vec::new();
    };
    items.iter().filter_map(coerce_question).collect()
}

fn coerce_question(item: &Value) -> Option<GeneratedQuestion> {
    let obj = item.as_object()?;

    let question = obj
        .get("question")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let choices: Vec<String> = obj
        .get("choices")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .take(CHOICES_PER_QUESTION)
                .map(choice_text)
                .collect()
        })
        .unwrap_or_default();

    // Integer-only; anything else (or out of range) defaults to 0.
    let correct_index = obj
        .get("correctIndex")
        .and_then(Value::as_i64)
        .and_then(|i| usize::try_from(i).ok())
        .filter(|i| *i < CHOICES_PER_QUESTION)
        .unwrap_or(0);

    let explanation = obj
        .get("explanation")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let candidate = GeneratedQuestion {
        question,
        choices,
        correct_index,
        explanation,
    };
    candidate.is_valid().then_some(candidate)
}

fn choice_text(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

/// Deterministic question set used whenever extraction, parsing or
/// validation fails. Static apart from the topic interpolation.
pub fn fallback_questions(topic: &str, count: usize) -> Vec<GeneratedQuestion> {
    let base = [
        GeneratedQuestion::new(
            format!("What does the SELECT statement do in {topic}?"),
            [
                "Retrieve data from tables",
                "Delete data",
                "Add a new column",
                "Change a database user",
            ],
            0,
        ),
        GeneratedQuestion::new(
            format!("Which keyword adds new rows in {topic}?"),
            ["UPDATE", "INSERT", "DROP", "GRANT"],
            1,
        ),
        GeneratedQuestion::new(
            format!("Which clause filters rows in {topic}?"),
            ["ORDER BY", "GROUP BY", "WHERE", "LIMIT"],
            2,
        ),
        GeneratedQuestion::new(
            format!("What does DELETE do in {topic}?"),
            [
                "Removes rows",
                "Creates a table",
                "Changes column type",
                "Backs up data",
            ],
            0,
        ),
        GeneratedQuestion::new(
            format!("Which statement changes existing rows in {topic}?"),
            ["ALTER", "INSERT", "UPDATE", "DROP"],
            2,
        ),
        GeneratedQuestion::new(
            format!("What does the WHERE clause do in {topic}?"),
            ["Sorts rows", "Filters rows", "Groups rows", "Counts rows"],
            1,
        ),
        GeneratedQuestion::new(
            format!("Which keyword sorts the result set in {topic}?"),
            ["ORDER BY", "GROUP BY", "HAVING", "LIMIT"],
            0,
        ),
        GeneratedQuestion::new(
            format!("Which clause groups rows for aggregation in {topic}?"),
            ["ORDER BY", "GROUP BY", "WHERE", "DISTINCT"],
            1,
        ),
        GeneratedQuestion::new(
            format!("What does DISTINCT do in {topic}?"),
            [
                "Removes duplicate rows",
                "Sorts rows",
                "Deletes rows",
                "Adds rows",
            ],
            0,
        ),
        GeneratedQuestion::new(
            format!("Which statement removes a table in {topic}?"),
            ["DELETE", "DROP", "TRUNCATE", "RENAME"],
            1,
        ),
    ];
    base.into_iter().take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_fenced_response_round_trips() {
        let raw = "```json\n[{\"question\":\"Q\",\"choices\":[\"a\",\"b\",\"c\",\"d\"],\"correctIndex\":2}]\n```";
        let questions = normalize_response(raw, "SQL", 10);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "Q");
        assert_eq!(questions[0].correct_index, 2);
        assert!(questions[0].explanation.is_none());
    }

    #[test]
    fn test_extraction_is_idempotent_on_clean_input() {
        let clean = r#"[{"question":"Q","choices":["a","b","c","d"],"correctIndex":1}]"#;
        let once = sanitize_json(clean);
        let twice = sanitize_json(&once);
        assert_eq!(once, twice);
        assert_eq!(
            try_parse_json(&once).unwrap(),
            serde_json::from_str::<Value>(clean).unwrap()
        );
    }

    #[test]
    fn test_trailing_comma_is_repaired() {
        let raw = r#"[{"question": "Q", "choices": ["a","b","c","d"], "correctIndex": 1,}]"#;
        let questions = normalize_response(raw, "SQL", 10);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_index, 1);
    }

    #[test]
    fn test_typographic_quotes_are_repaired() {
        let raw = "[{\u{201C}question\u{201D}: \u{201C}Q\u{201D}, \u{201C}choices\u{201D}: \
                   [\u{201C}a\u{201D},\u{201C}b\u{201D},\u{201C}c\u{201D},\u{201C}d\u{201D}], \
                   \u{201C}correctIndex\u{201D}: 3}]";
        let questions = normalize_response(raw, "SQL", 10);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "Q");
        assert_eq!(questions[0].correct_index, 3);
    }

    #[test]
    fn test_prose_around_the_array_is_tolerated() {
        let raw = "Sure! Here are your questions:\n\
                   [{\"question\":\"Q\",\"choices\":[\"a\",\"b\",\"c\",\"d\"],\"correctIndex\":0}]\n\
                   Let me know if you need more.";
        let questions = normalize_response(raw, "SQL", 10);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "Q");
    }

    #[test]
    fn test_plain_prose_yields_fallback() {
        let questions = normalize_response("I cannot answer that.", "Indexing", 10);
        assert_eq!(questions.len(), 10);
        for q in &questions {
            assert!(q.is_valid());
            assert!(q.question.contains("Indexing"));
        }
    }

    #[test]
    fn test_fallback_respects_requested_count() {
        assert_eq!(normalize_response("no json here", "SQL", 3).len(), 3);
        // Requesting more than exists never fabricates extras.
        assert_eq!(fallback_questions("SQL", 25).len(), 10);
    }

    #[test]
    fn test_wrong_choice_count_is_dropped_sibling_kept() {
        let raw = r#"[
            {"question":"three","choices":["a","b","c"],"correctIndex":0},
            {"question":"four","choices":["a","b","c","d"],"correctIndex":1}
        ]"#;
        let questions = normalize_response(raw, "SQL", 10);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "four");
    }

    #[test]
    fn test_extra_choices_truncated_to_four() {
        let raw = r#"[{"question":"Q","choices":["a","b","c","d","e","f"],"correctIndex":1}]"#;
        let questions = normalize_response(raw, "SQL", 10);
        assert_eq!(questions[0].choices, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_malformed_correct_index_defaults_to_zero() {
        let raw = r#"[
            {"question":"string","choices":["a","b","c","d"],"correctIndex":"2"},
            {"question":"float","choices":["a","b","c","d"],"correctIndex":1.5},
            {"question":"range","choices":["a","b","c","d"],"correctIndex":9},
            {"question":"missing","choices":["a","b","c","d"]}
        ]"#;
        let questions = normalize_response(raw, "SQL", 10);
        assert_eq!(questions.len(), 4);
        for q in &questions {
            assert_eq!(q.correct_index, 0, "{}", q.question);
        }
    }

    #[test]
    fn test_non_array_payload_yields_fallback() {
        let raw = r#"{"question":"Q","choices":["a","b","c","d"],"correctIndex":0}"#;
        let questions = normalize_response(raw, "SQL", 2);
        assert_eq!(questions.len(), 2);
        assert!(questions[0].question.contains("SQL"));
    }

    #[test]
    fn test_empty_question_is_dropped() {
        let raw = r#"[{"question":"","choices":["a","b","c","d"],"correctIndex":0}]"#;
        let questions = normalize_response(raw, "SQL", 10);
        // Nothing valid survived, so the fallback takes over.
        assert_eq!(questions.len(), 10);
        assert!(questions[0].question.contains("SQL"));
    }

    #[test]
    fn test_single_quoted_variant_parses() {
        let raw = "[{'question':'Q','choices':['a','b','c','d'],'correctIndex':2}]";
        let questions = normalize_response(raw, "SQL", 10);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_index, 2);
    }

    #[test]
    fn test_explanation_carried_when_present() {
        let raw = r#"[{"question":"Q","choices":["a","b","c","d"],"correctIndex":0,"explanation":"because"}]"#;
        let questions = normalize_response(raw, "SQL", 10);
        assert_eq!(questions[0].explanation.as_deref(), Some("because"));
    }

    #[test]
    fn test_unterminated_fence_falls_through_to_slice() {
        let raw = "```json\n[{\"question\":\"Q\",\"choices\":[\"a\",\"b\",\"c\",\"d\"],\"correctIndex\":0}]";
        let questions = normalize_response(raw, "SQL", 10);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "Q");
    }

    #[tokio::test]
    async fn test_missing_credential_propagates() {
        let client = OpenRouterClient::with_api_key(None);
        let err = generate(&client, "SQL", "", 5).await.unwrap_err();
        assert!(matches!(err, AiError::MissingCredential));
    }
}
