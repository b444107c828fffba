//! Tutor Q&A: instant answers first, remote model second.
//!
//! No parsing here; the completion text is returned verbatim.

use tracing::debug;

use crate::data::instant_answer;

use super::{AiError, OpenRouterClient, quiz::QUIZ_MODEL};

/// Answer a tutoring question scoped to `topic`.
///
/// Known questions are served from the canned table without any network
/// call. Remote failures propagate; the caller decides how to degrade.
pub async fn answer(
    client: &OpenRouterClient,
    topic: &str,
    question: &str,
) -> Result<String, AiError> {
    if let Some(canned) = instant_answer(question) {
        debug!(topic, "tutor question served from instant-answer table");
        return Ok(canned.to_string());
    }

    let system = format!(
        "You are an AI Tutor.\nAnswer only questions related to {topic}.\nExplain in simple English."
    );
    let content = client
        .chat_completion(QUIZ_MODEL, &system, question, 150, 0.7)
        .await?;

    if content.is_empty() {
        Ok("No response from AI.".to_string())
    } else {
        Ok(content)
    }
}

/// Shown when the remote tutor is unavailable.
pub fn offline_answer(topic: &str) -> String {
    format!(
        "This is an advanced {topic} question.\nPlease revise this topic or refer to the video explanation above."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_instant_answer_needs_no_credential() {
        let client = OpenRouterClient::with_api_key(None);
        let answer = answer(&client, "SQL", "what is sql?").await.unwrap();
        assert!(answer.contains("Structured Query Language"));
    }

    #[tokio::test]
    async fn test_unknown_question_without_credential_errors() {
        let client = OpenRouterClient::with_api_key(None);
        let err = answer(&client, "SQL", "explain b-tree splits")
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::MissingCredential));
    }

    #[test]
    fn test_offline_answer_names_topic() {
        assert!(offline_answer("Indexing").contains("Indexing"));
    }
}
