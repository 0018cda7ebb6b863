//! Chat-completions backend for OpenAI and compatible servers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::http::{JsonApi, KeyStyle};
use super::traits::*;

/// Public OpenAI endpoint.
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Backend speaking `POST {base}/chat/completions`.
pub struct OpenAiBackend {
    api: JsonApi,
    model: String,
}

impl OpenAiBackend {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, api_key: Option<String>) -> Result<Self, LlmError> {
        Ok(Self {
            api: JsonApi::new(base_url, api_key.as_deref(), KeyStyle::Bearer)?,
            model: model.into(),
        })
    }

    /// Backend for the public OpenAI API.
    pub fn openai(model: &str, api_key: impl Into<String>) -> Result<Self, LlmError> {
        Self::new(OPENAI_API_BASE, model, Some(api_key.into()))
    }
}

#[derive(Debug, Serialize)]
struct ChatBody<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> ChatBody<'a> {
    fn from_request(model: &'a str, request: &'a CompletionRequest) -> Self {
        let system = request
            .system_prompt
            .as_deref()
            .map(|content| Message { role: "system", content });
        let user = Message {
            role: "user",
            content: &request.prompt,
        };

        Self {
            model,
            messages: system.into_iter().chain(std::iter::once(user)).collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            stream: false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ReplyMessage>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

impl From<ChatReply> for CompletionResponse {
    fn from(reply: ChatReply) -> Self {
        // A filtered reply may carry no choice at all; that reads as empty text.
        let choice = reply.choices.into_iter().next();
        let finish_reason = match choice.as_ref().and_then(|c| c.finish_reason.as_deref()) {
            Some("length") => FinishReason::Length,
            Some("content_filter") => FinishReason::ContentFilter,
            _ => FinishReason::Stop,
        };

        CompletionResponse {
            content: choice
                .and_then(|c| c.message)
                .and_then(|m| m.content)
                .unwrap_or_default(),
            finish_reason,
            usage: reply.usage.unwrap_or_default(),
        }
    }
}

#[async_trait]
impl LlmBackend for OpenAiBackend {
    fn id(&self) -> &str {
        &self.model
    }

    async fn is_available(&self) -> bool {
        self.api.reachable("models").await
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = ChatBody::from_request(&self.model, &request);
        let reply: ChatReply = self.api.post("chat/completions", &body).await?;
        Ok(reply.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_goes_first() {
        let request = CompletionRequest::user("pitch ACME").with_system("be brief");
        let body = serde_json::to_value(ChatBody::from_request("m", &request)).unwrap();

        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "pitch ACME");
        assert_eq!(body["stream"], false);
        assert!(body.get("max_tokens").is_none());
    }

    #[test]
    fn test_reply_without_choices_is_empty() {
        let reply: ChatReply = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        let response = CompletionResponse::from(reply);
        assert!(response.content.is_empty());
        assert_eq!(response.finish_reason, FinishReason::Stop);
    }
}
