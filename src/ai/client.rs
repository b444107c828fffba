//! Thin chat-completions client for the OpenRouter endpoint.

use serde::{Deserialize, Serialize};

use super::AiError;

const OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const API_KEY_VAR: &str = "OPENROUTER_API_KEY";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

/// Stateless client; safe to clone and call concurrently.
#[derive(Clone)]
pub struct OpenRouterClient {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl OpenRouterClient {
    /// Read the credential from `OPENROUTER_API_KEY`. A missing variable is
    /// not an error until a call is attempted.
    pub fn from_env() -> Self {
        Self::with_api_key(std::env::var(API_KEY_VAR).ok())
    }

    pub fn with_api_key(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// Issue one chat completion and return `choices[0].message.content`.
    pub async fn chat_completion(
        &self,
        model: &str,
        system: &str,
        user: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, AiError> {
        let api_key = self.api_key.as_deref().ok_or(AiError::MissingCredential)?;

        let body = ChatRequest {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens,
            temperature,
        };

        let response = self
            .http
            .post(OPENROUTER_URL)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::RemoteService {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatResponse = response.json().await?;
        Ok(completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_credential_fails_before_network() {
        let client = OpenRouterClient::with_api_key(None);
        let err = client
            .chat_completion("m", "s", "u", 10, 0.0)
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::MissingCredential));
    }

    #[test]
    fn test_request_body_shape() {
        let body = ChatRequest {
            model: "mistralai/mistral-7b-instruct",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "usr",
                },
            ],
            max_tokens: 600,
            temperature: 0.6,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "usr");
        assert_eq!(json["max_tokens"], 600);
    }

    #[test]
    fn test_response_without_choices() {
        let parsed: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.choices.is_empty());
    }
}
