// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The generative-text client.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::GenAiConfig;
use crate::error::GenAiError;
use crate::transport::{Transport, UreqTransport};
use crate::wire::{GenerateContentRequest, GenerateContentResponse};

/// Sends prompts to a generative model and returns its text.
///
/// Every call is a single request; failures are returned, never retried.
#[derive(Clone)]
pub struct GenAiClient<T: Transport = UreqTransport> {
    api_key: String,
    endpoint: String,
    transport: T,
}

impl GenAiClient<UreqTransport> {
    /// A client configured from the environment over the default transport.
    pub fn from_env() -> Result<Self, GenAiError> {
        Self::new(GenAiConfig::from_env(), UreqTransport::new())
    }
}

impl<T: Transport> GenAiClient<T> {
    /// Creates a client.
    ///
    /// Fails with [`GenAiError::MissingApiKey`] when the configuration has
    /// no key.
    pub fn new(config: GenAiConfig, transport: T) -> Result<Self, GenAiError> {
        let endpoint = config.endpoint();
        let api_key = config.api_key.ok_or(GenAiError::MissingApiKey)?;
        Ok(Self {
            api_key,
            endpoint,
            transport,
        })
    }

    /// The `generateContent` URL this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends `prompt` and returns the model's text.
    ///
    /// Fails with [`GenAiError::EmptyResponse`] when the model answers
    /// without any text.
    pub fn generate_text(&self, prompt: &str) -> Result<String, GenAiError> {
        let body = serde_json::to_string(&GenerateContentRequest::user_prompt(prompt))?;
        debug!(endpoint = %self.endpoint, prompt_len = prompt.len(), "generateContent");

        let response = self.transport.post_json(&self.endpoint, &self.api_key, &body)?;
        if !response.is_success() {
            warn!(status = response.status, "generateContent failed");
            return Err(GenAiError::Http {
                status: response.status,
                body: response.body,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&response.body)?;
        parsed.text().ok_or(GenAiError::EmptyResponse)
    }

    /// Sends `prompt` and parses the model's text as JSON.
    ///
    /// A Markdown code fence around the payload is removed first.
    pub fn generate_json<V: DeserializeOwned>(&self, prompt: &str) -> Result<V, GenAiError> {
        let text = self.generate_text(prompt)?;
        Ok(serde_json::from_str(strip_code_fence(&text))?)
    }
}

impl<T: Transport> core::fmt::Debug for GenAiClient<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GenAiClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

/// Removes a leading "```" or "```json" fence and a trailing "```".
///
/// The language tag is matched case-insensitively. Text without a fence is
/// returned unchanged.
///
/// ```
/// use glide_genai::strip_code_fence;
///
/// assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}\n");
/// assert_eq!(strip_code_fence("[1, 2]"), "[1, 2]");
/// ```
#[must_use]
pub fn strip_code_fence(text: &str) -> &str {
    let mut rest = text;
    if let Some(after) = rest.strip_prefix("```") {
        let after = match after.get(..4) {
            Some(tag) if tag.eq_ignore_ascii_case("json") => &after[4..],
            _ => after,
        };
        rest = after.trim_start();
    }
    let trimmed = rest.trim_end();
    match trimmed.strip_suffix("```") {
        Some(inner) => inner,
        None => rest,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use serde::Deserialize;

    use super::*;
    use crate::transport::HttpResponse;

    #[derive(Default)]
    struct Canned {
        status: u16,
        body: String,
        seen: RefCell<Vec<(String, String, String)>>,
    }

    impl Canned {
        fn ok(body: &str) -> Self {
            Self {
                status: 200,
                body: body.to_string(),
                seen: RefCell::default(),
            }
        }

        fn text(text: &str) -> Self {
            Self::ok(
                &serde_json::json!({
                    "candidates": [{ "content": { "parts": [{ "text": text }] } }]
                })
                .to_string(),
            )
        }
    }

    impl Transport for Canned {
        fn post_json(
            &self,
            url: &str,
            api_key: &str,
            body: &str,
        ) -> Result<HttpResponse, GenAiError> {
            self.seen
                .borrow_mut()
                .push((url.to_string(), api_key.to_string(), body.to_string()));
            Ok(HttpResponse {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }

    fn config() -> GenAiConfig {
        GenAiConfig::default().with_api_key("test-key")
    }

    #[test]
    fn missing_key_fails_construction() {
        let err = GenAiClient::new(GenAiConfig::default(), Canned::default()).unwrap_err();
        assert!(matches!(err, GenAiError::MissingApiKey));
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn generate_text_posts_prompt_and_returns_text() {
        let transport = Canned::text("Light becomes sugar.");
        let client = GenAiClient::new(config(), &transport).unwrap();
        let text = client.generate_text("photosynthesis").unwrap();
        assert_eq!(text, "Light becomes sugar.");

        let seen = transport.seen.borrow();
        let (url, key, body) = &seen[0];
        assert!(url.ends_with("/models/gemini-3-flash-preview:generateContent"));
        assert_eq!(key, "test-key");
        let body: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "photosynthesis");
    }

    #[test]
    fn empty_text_is_an_error() {
        let client = GenAiClient::new(config(), Canned::ok(r#"{"candidates":[]}"#)).unwrap();
        assert!(matches!(
            client.generate_text("x"),
            Err(GenAiError::EmptyResponse)
        ));
    }

    #[test]
    fn http_failure_carries_status_and_body() {
        let transport = Canned {
            status: 403,
            body: "API key not valid".to_string(),
            seen: RefCell::default(),
        };
        let client = GenAiClient::new(config(), transport).unwrap();
        match client.generate_text("x") {
            Err(GenAiError::Http { status, body }) => {
                assert_eq!(status, 403);
                assert_eq!(body, "API key not valid");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn malformed_response_is_decode_error() {
        let client = GenAiClient::new(config(), Canned::ok("<html>")).unwrap();
        assert!(matches!(client.generate_text("x"), Err(GenAiError::Decode(_))));
    }

    #[test]
    fn generate_json_strips_fence() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Card {
            term: String,
            level: u8,
        }

        let client = GenAiClient::new(
            config(),
            Canned::text("```JSON\n{\"term\": \"chlorophyll\", \"level\": 2}\n```\n"),
        )
        .unwrap();
        let card: Card = client.generate_json("card").unwrap();
        assert_eq!(
            card,
            Card {
                term: "chlorophyll".to_string(),
                level: 2
            }
        );
    }

    #[test]
    fn generate_json_rejects_non_json_text() {
        let client = GenAiClient::new(config(), Canned::text("Sure! Here you go.")).unwrap();
        let result: Result<serde_json::Value, _> = client.generate_json("x");
        assert!(matches!(result, Err(GenAiError::Decode(_))));
    }

    #[test]
    fn fence_variants() {
        assert_eq!(strip_code_fence("```\n[1]\n```"), "[1]\n");
        assert_eq!(strip_code_fence("```json   {}```   "), "{}");
        assert_eq!(strip_code_fence("{\"a\":\"```\"}"), "{\"a\":\"```\"}");
        assert_eq!(strip_code_fence("  ```json\n{}\n```"), "  ```json\n{}\n");
    }
}
