// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Boxed error from an HTTP transport.
pub type TransportError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Errors surfaced by [`GenAiClient`](crate::GenAiClient).
#[derive(Debug)]
pub enum GenAiError {
    /// No API key was configured.
    MissingApiKey,
    /// The upstream answered but produced no text.
    EmptyResponse,
    /// The upstream answered with a non-success status.
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },
    /// The request could not be sent or the response could not be read.
    Transport(TransportError),
    /// A response or generated payload was not valid JSON of the expected shape.
    Decode(serde_json::Error),
}

impl fmt::Display for GenAiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => {
                f.write_str("GEMINI_API_KEY is not set; add it to the environment or .env file")
            }
            Self::EmptyResponse => f.write_str("Gemini did not return any text"),
            Self::Http { status, body } => {
                write!(f, "Gemini request failed with status {status}: {body}")
            }
            Self::Transport(err) => write!(f, "Gemini request failed: {err}"),
            Self::Decode(err) => write!(f, "could not decode Gemini output: {err}"),
        }
    }
}

impl core::error::Error for GenAiError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err.as_ref()),
            Self::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GenAiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err)
    }
}
