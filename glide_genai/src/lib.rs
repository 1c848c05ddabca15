// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=glide_genai --heading-base-level=0

//! Glide GenAI: a thin server-side proxy to Gemini text generation.
//!
//! [`GenAiClient`] sends a prompt to the `generateContent` endpoint and returns
//! the model's text, or parses it as JSON with [`GenAiClient::generate_json`]
//! after stripping a Markdown code fence. It is meant to run server-side only:
//! the API key comes from `GEMINI_API_KEY` and never reaches the browser.
//!
//! Requests are blocking and made through the [`Transport`] trait;
//! [`UreqTransport`] is the default, and tests substitute their own.
//!
//! ```rust,no_run
//! use glide_genai::GenAiClient;
//!
//! let client = GenAiClient::from_env()?;
//! let summary = client.generate_text("Explain photosynthesis in one sentence.")?;
//! println!("{summary}");
//! # Ok::<(), glide_genai::GenAiError>(())
//! ```
//!
//! Failures are explicit: a missing key fails construction, an answer without
//! text is [`GenAiError::EmptyResponse`], and nothing is retried.

mod client;
mod config;
mod error;
mod transport;
mod wire;

pub use client::{GenAiClient, strip_code_fence};
pub use config::{API_KEY_VAR, DEFAULT_BASE_URL, DEFAULT_MODEL, GenAiConfig, MODEL_VAR};
pub use error::{GenAiError, TransportError};
pub use transport::{HttpResponse, Transport, UreqTransport};
