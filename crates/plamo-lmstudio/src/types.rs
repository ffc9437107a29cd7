// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request/response types for LM Studio's OpenAI-compatible API.

use plamo_core::types::ModelInfo;
use serde::{Deserialize, Serialize};

/// A request to the `/v1/chat/completions` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier as loaded in LM Studio.
    pub model: String,

    /// Conversation messages; translation sends a single user message.
    pub messages: Vec<ChatMessage>,

    /// Maximum tokens to generate.
    pub max_tokens: u32,

    /// Sampling temperature; 0.0 for deterministic translations.
    pub temperature: f32,

    /// Stop sequences; generation halts at the next segment marker.
    pub stop: Vec<String>,
}

/// A single message in the chat completion format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "user" or "assistant".
    pub role: String,

    /// Message content; carries the full translation prompt.
    pub content: String,
}

/// A response from the `/v1/chat/completions` endpoint.
///
/// Every level is tolerant of absence: a 2xx body that decodes but carries no
/// message content is an API contract violation the client classifies, not a
/// deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Completion choices; the first one carries the translation.
    #[serde(default)]
    pub choices: Vec<ChatChoice>,

    /// Token accounting, when the server reports it.
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// The trimmed content of the first choice, when the response carries a
    /// non-empty one.
    pub fn translation(&self) -> Option<&str> {
        let content = self.choices.first()?.message.as_ref()?.content.as_deref()?;
        let trimmed = content.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

/// The assistant message within a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage reported by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub total_tokens: u64,
}

/// A response from the `/v1/models` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelsResponse {
    /// Advertised models; an absent array reads as empty.
    #[serde(default)]
    pub data: Vec<ModelInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_serializes_with_wire_field_names() {
        let request = ChatRequest {
            model: "mmnga/plamo-2-translate-gguf".into(),
            messages: vec![ChatMessage {
                role: "user".into(),
                content: "prompt".into(),
            }],
            max_tokens: 1000,
            temperature: 0.0,
            stop: vec!["<|plamo:op|>".into()],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "mmnga/plamo-2-translate-gguf");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "prompt");
        assert_eq!(json["max_tokens"], 1000);
        assert_eq!(json["temperature"], 0.0);
        assert_eq!(json["stop"], serde_json::json!(["<|plamo:op|>"]));
    }

    #[test]
    fn translation_extracts_trimmed_first_choice() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"  こんにちは \n"}}],"usage":{"total_tokens":42}}"#,
        )
        .unwrap();
        assert_eq!(response.translation(), Some("こんにちは"));
        assert_eq!(response.usage.unwrap().total_tokens, 42);
    }

    #[test]
    fn translation_is_none_for_empty_choices() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(response.translation(), None);
    }

    #[test]
    fn translation_is_none_for_missing_content() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{}}]}"#).unwrap();
        assert_eq!(response.translation(), None);

        let response: ChatResponse = serde_json::from_str(r#"{"choices":[{}]}"#).unwrap();
        assert_eq!(response.translation(), None);
    }

    #[test]
    fn translation_is_none_for_whitespace_only_content() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"   \n  "}}]}"#).unwrap();
        assert_eq!(response.translation(), None);
    }

    #[test]
    fn empty_body_decodes_with_defaults() {
        let response: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(response.choices.is_empty());
        assert!(response.usage.is_none());
    }

    #[test]
    fn models_response_tolerates_missing_data() {
        let response: ModelsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.data.is_empty());

        let response: ModelsResponse = serde_json::from_str(
            r#"{"data":[{"id":"plamo-2-translate","object":"model"},{"id":"other"}]}"#,
        )
        .unwrap();
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[0].id, "plamo-2-translate");
        assert_eq!(response.data[1].object, "");
    }
}
