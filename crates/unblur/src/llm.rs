//! Minimal client for OpenAI-compatible chat-completions endpoints.
//!
//! Used by both the semantic judge and the hint generator. Transport details
//! stay here so the matching cascade never sees HTTP.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::LlmSettings;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("no endpoint configured")]
    NotConfigured,

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    Malformed(String),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Chat-completions client bound to one endpoint and model
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl ChatClient {
    /// Build a client; the HTTP layer enforces the configured timeout.
    pub fn new(settings: &LlmSettings) -> Result<Self, LlmError> {
        let endpoint = settings
            .endpoint
            .clone()
            .filter(|e| !e.trim().is_empty())
            .ok_or(LlmError::NotConfigured)?;

        let http = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()?;

        Ok(Self {
            http,
            endpoint,
            model: settings.model.clone(),
            api_key: settings.api_key.clone(),
        })
    }

    /// Send one system + user exchange and return the assistant text.
    ///
    /// With `json_mode` the endpoint is asked for a JSON object response.
    pub async fn complete(&self, system: &str, user: &str, json_mode: bool) -> Result<String, LlmError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: 0.0,
            response_format: json_mode.then_some(ResponseFormat {
                kind: "json_object",
            }),
        };

        let mut request = self.http.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| LlmError::Malformed("response has no message content".into()))?;

        debug!(model = %self.model, chars = content.len(), "chat completion received");
        Ok(content)
    }
}

/// Slice the outermost `{...}` out of model output that may wrap JSON in prose
/// or code fences.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_fenced_json() {
        let text = "```json\n{\"isValid\": true}\n```";
        assert_eq!(extract_json_object(text), Some("{\"isValid\": true}"));
    }

    #[test]
    fn test_no_object_is_none() {
        assert_eq!(extract_json_object("nope"), None);
        assert_eq!(extract_json_object("} {"), None);
    }

    #[test]
    fn test_client_requires_endpoint() {
        let err = ChatClient::new(&LlmSettings::default()).unwrap_err();
        assert!(matches!(err, LlmError::NotConfigured));
    }

    #[test]
    fn test_request_serializes_json_mode() {
        let body = ChatRequest {
            model: "m",
            messages: [
                ChatMessage {
                    role: "system",
                    content: "s",
                },
                ChatMessage {
                    role: "user",
                    content: "u",
                },
            ],
            temperature: 0.0,
            response_format: Some(ResponseFormat {
                kind: "json_object",
            }),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["response_format"]["type"], "json_object");
        assert_eq!(json["messages"][1]["role"], "user");
    }
}
