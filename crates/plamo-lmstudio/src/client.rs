// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for an LM Studio server's OpenAI-compatible API.
//!
//! Provides [`LmStudioClient`] which handles request construction, the
//! 30-second abort timeout, and classification of failures into the
//! user-facing error categories.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use plamo_core::types::{ErrorCategory, ModelInfo, Settings, TranslationSuccess};
use plamo_core::{
    Language, PlamoError, SEGMENT_MARKER, TranslationProvider, build_translation_prompt,
};
use tracing::{debug, warn};

use crate::types::{ChatMessage, ChatRequest, ChatResponse, ModelsResponse};

/// Hard budget for any single request to the server. Exceeding it aborts the
/// in-flight call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for LM Studio communication.
///
/// One request per translation, no retry: a timed-out or failed call is
/// terminal for that invocation and the user must re-trigger.
#[derive(Debug, Clone)]
pub struct LmStudioClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl LmStudioClient {
    /// Creates a new client with the standard request timeout.
    pub fn new() -> Result<Self, PlamoError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| PlamoError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            timeout: REQUEST_TIMEOUT,
        })
    }

    /// Overrides the request timeout (for exercising the abort path in tests).
    #[cfg(test)]
    fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl TranslationProvider for LmStudioClient {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
        settings: &Settings,
    ) -> Result<TranslationSuccess, PlamoError> {
        let started = Instant::now();

        let request = ChatRequest {
            model: settings.model_name.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_translation_prompt(text, source, target),
            }],
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            stop: vec![SEGMENT_MARKER.to_string()],
        };
        let url = endpoint(&settings.lm_studio_url, "/v1/chat/completions");

        debug!(
            url = url.as_str(),
            model = settings.model_name.as_str(),
            %source,
            %target,
            "sending translation request"
        );

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = body.as_str(), "translation request rejected");
            return Err(classify_status(status));
        }

        let body: ChatResponse = response.json().await.map_err(classify_body_error)?;
        let translation = body
            .translation()
            .ok_or_else(|| PlamoError::Translation {
                category: ErrorCategory::InvalidResponse,
                message: "response carries no message content".to_string(),
            })?
            .to_string();

        let processing_time_ms = started.elapsed().as_millis() as u64;
        match &body.usage {
            Some(usage) => debug!(
                total_tokens = usage.total_tokens,
                processing_time_ms, "translation completed"
            ),
            None => debug!(processing_time_ms, "translation completed"),
        }

        Ok(TranslationSuccess {
            translation,
            processing_time_ms,
        })
    }

    async fn list_models(&self, base_url: &str) -> Result<Vec<ModelInfo>, PlamoError> {
        let url = endpoint(base_url, "/v1/models");
        debug!(url = url.as_str(), "listing models");

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "model listing rejected");
            return Err(classify_status(status));
        }

        let body: ModelsResponse = response.json().await.map_err(classify_body_error)?;
        debug!(models = body.data.len(), "model listing completed");
        Ok(body.data)
    }
}

/// Joins the configured base URL with an API path, tolerating trailing
/// slashes on the base.
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Maps a transport-level failure onto a user-facing category: the abort
/// timer wins over everything, a refused connection or DNS failure is
/// CONNECTION_FAILED, anything else is UNKNOWN.
fn classify_transport_error(error: reqwest::Error) -> PlamoError {
    let category = if error.is_timeout() {
        ErrorCategory::Timeout
    } else if error.is_connect() {
        ErrorCategory::ConnectionFailed
    } else {
        ErrorCategory::Unknown
    };

    PlamoError::Translation {
        category,
        message: error.to_string(),
    }
}

/// Maps a non-2xx status onto a category; only 5xx indicates a server-side
/// model failure.
fn classify_status(status: reqwest::StatusCode) -> PlamoError {
    let category = if status.is_server_error() {
        ErrorCategory::ServerError
    } else {
        ErrorCategory::Unknown
    };

    PlamoError::Translation {
        category,
        message: format!("server returned HTTP {status}"),
    }
}

/// Maps a 2xx body that cannot be decoded. A timeout firing mid-read is
/// still a timeout; everything else violated the API contract.
fn classify_body_error(error: reqwest::Error) -> PlamoError {
    let category = if error.is_timeout() {
        ErrorCategory::Timeout
    } else {
        ErrorCategory::InvalidResponse
    };

    PlamoError::Translation {
        category,
        message: format!("failed to decode response body: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_settings(base_url: &str) -> Settings {
        Settings {
            lm_studio_url: base_url.to_string(),
            ..Settings::default()
        }
    }

    fn completion_body(content: &str) -> serde_json::Value {
        serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": content}}],
            "usage": {"total_tokens": 21}
        })
    }

    #[tokio::test]
    async fn translate_success_trims_content() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("  Hello \n")))
            .mount(&server)
            .await;

        let client = LmStudioClient::new().unwrap();
        let result = client
            .translate(
                "こんにちは",
                Language::Japanese,
                Language::English,
                &test_settings(&server.uri()),
            )
            .await
            .unwrap();

        assert_eq!(result.translation, "Hello");
        assert!(result.processing_time_ms < 30_000);
    }

    #[tokio::test]
    async fn translate_sends_prompt_model_and_stop_sequence() {
        let server = MockServer::start().await;

        let expected_prompt = build_translation_prompt(
            "こんにちは",
            Language::Japanese,
            Language::English,
        );
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "model": "mmnga/plamo-2-translate-gguf",
                "messages": [{"role": "user", "content": expected_prompt}],
                "max_tokens": 1000,
                "stop": ["<|plamo:op|>"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Hello")))
            .expect(1)
            .mount(&server)
            .await;

        let client = LmStudioClient::new().unwrap();
        let result = client
            .translate(
                "こんにちは",
                Language::Japanese,
                Language::English,
                &test_settings(&server.uri()),
            )
            .await;
        assert!(result.is_ok(), "request body should match: {result:?}");
    }

    #[tokio::test]
    async fn trailing_slash_on_base_url_is_tolerated() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
            .mount(&server)
            .await;

        let client = LmStudioClient::new().unwrap();
        let result = client
            .translate(
                "hello",
                Language::English,
                Language::Japanese,
                &test_settings(&format!("{}/", server.uri())),
            )
            .await;
        assert!(result.is_ok(), "got: {result:?}");
    }

    #[tokio::test]
    async fn http_500_maps_to_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("model crashed"))
            .mount(&server)
            .await;

        let client = LmStudioClient::new().unwrap();
        let err = client
            .translate(
                "hello",
                Language::English,
                Language::Japanese,
                &test_settings(&server.uri()),
            )
            .await
            .unwrap_err();

        assert_eq!(err.category(), Some(ErrorCategory::ServerError));
    }

    #[tokio::test]
    async fn http_404_maps_to_unknown() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = LmStudioClient::new().unwrap();
        let err = client
            .translate(
                "hello",
                Language::English,
                Language::Japanese,
                &test_settings(&server.uri()),
            )
            .await
            .unwrap_err();

        assert_eq!(err.category(), Some(ErrorCategory::Unknown));
        assert!(err.to_string().contains("404"), "got: {err}");
    }

    #[tokio::test]
    async fn missing_content_maps_to_invalid_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let client = LmStudioClient::new().unwrap();
        let err = client
            .translate(
                "hello",
                Language::English,
                Language::Japanese,
                &test_settings(&server.uri()),
            )
            .await
            .unwrap_err();

        assert_eq!(err.category(), Some(ErrorCategory::InvalidResponse));
    }

    #[tokio::test]
    async fn non_json_body_maps_to_invalid_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = LmStudioClient::new().unwrap();
        let err = client
            .translate(
                "hello",
                Language::English,
                Language::Japanese,
                &test_settings(&server.uri()),
            )
            .await
            .unwrap_err();

        assert_eq!(err.category(), Some(ErrorCategory::InvalidResponse));
    }

    #[tokio::test]
    async fn connection_refused_maps_to_connection_failed() {
        // Bind a server to grab a free port, then drop it so the port is
        // closed by the time the client connects. `builder().start()` avoids
        // wiremock's shared server pool, which would keep the port listening
        // after drop.
        let server = MockServer::builder().start().await;
        let uri = server.uri();
        drop(server);

        let client = LmStudioClient::new().unwrap();
        let err = client
            .translate(
                "hello",
                Language::English,
                Language::Japanese,
                &test_settings(&uri),
            )
            .await
            .unwrap_err();

        assert_eq!(err.category(), Some(ErrorCategory::ConnectionFailed));
    }

    #[tokio::test]
    async fn exceeding_the_timeout_aborts_the_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion_body("too late"))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = LmStudioClient::new()
            .unwrap()
            .with_timeout(Duration::from_millis(50));
        let started = Instant::now();
        let err = client
            .translate(
                "hello",
                Language::English,
                Language::Japanese,
                &test_settings(&server.uri()),
            )
            .await
            .unwrap_err();

        assert_eq!(err.category(), Some(ErrorCategory::Timeout));
        // The abort must cut the call short rather than wait out the server.
        assert!(started.elapsed() < Duration::from_millis(450));
    }

    #[tokio::test]
    async fn list_models_returns_advertised_models() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    {"id": "mmnga/plamo-2-translate-gguf", "object": "model"},
                    {"id": "other-model", "object": "model"}
                ]
            })))
            .mount(&server)
            .await;

        let client = LmStudioClient::new().unwrap();
        let models = client.list_models(&server.uri()).await.unwrap();

        assert_eq!(models.len(), 2);
        assert_eq!(models[0].id, "mmnga/plamo-2-translate-gguf");
    }

    #[tokio::test]
    async fn list_models_with_absent_data_is_empty() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = LmStudioClient::new().unwrap();
        let models = client.list_models(&server.uri()).await.unwrap();
        assert!(models.is_empty());
    }

    #[tokio::test]
    async fn list_models_timeout_maps_to_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/models"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": []}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = LmStudioClient::new()
            .unwrap()
            .with_timeout(Duration::from_millis(50));
        let err = client.list_models(&server.uri()).await.unwrap_err();
        assert_eq!(err.category(), Some(ErrorCategory::Timeout));
    }
}
