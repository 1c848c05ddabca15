// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTTP seam between the client and the network.

use crate::error::GenAiError;

/// Status and body of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Returns `true` for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one authenticated JSON `POST`.
///
/// Non-success statuses are returned as responses, not errors; only failures
/// to talk to the server at all are [`GenAiError::Transport`].
pub trait Transport {
    /// Posts `body` (a JSON document) to `url` with the given API key.
    fn post_json(&self, url: &str, api_key: &str, body: &str) -> Result<HttpResponse, GenAiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_json(&self, url: &str, api_key: &str, body: &str) -> Result<HttpResponse, GenAiError> {
        (**self).post_json(url, api_key, body)
    }
}

/// Blocking transport built on `ureq`.
#[derive(Clone, Debug)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Creates a transport with its own connection pool.
    #[must_use]
    pub fn new() -> Self {
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build();
        Self {
            agent: ureq::Agent::new_with_config(config),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn post_json(&self, url: &str, api_key: &str, body: &str) -> Result<HttpResponse, GenAiError> {
        let mut response = self
            .agent
            .post(url)
            .header("x-goog-api-key", api_key)
            .header("content-type", "application/json")
            .send(body)
            .map_err(|err| GenAiError::Transport(Box::new(err)))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|err| GenAiError::Transport(Box::new(err)))?;
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        let ok = HttpResponse {
            status: 204,
            body: String::new(),
        };
        let bad = HttpResponse {
            status: 429,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!bad.is_success());
    }
}
