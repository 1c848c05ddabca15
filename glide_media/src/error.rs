// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::io;
use std::path::PathBuf;

/// Errors from a conversion batch.
#[derive(Debug)]
pub enum MediaError {
    /// The input path does not exist.
    InputNotFound(PathBuf),
    /// Listing a directory or spawning the transcoder failed.
    Io {
        /// Path being read, or the transcoder program being spawned.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// The transcoder ran and exited unsuccessfully.
    TranscoderFailed {
        /// Input whose conversion failed.
        input: PathBuf,
        /// Exit code, or `None` when terminated by a signal.
        code: Option<i32>,
    },
}

impl MediaError {
    /// Process exit code to report for this error.
    ///
    /// A transcoder failure forwards the transcoder's own code; everything
    /// else is `1`.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::TranscoderFailed {
                code: Some(code), ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputNotFound(path) => write!(f, "Input not found: {}", path.display()),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::TranscoderFailed {
                input,
                code: Some(code),
            } => write!(f, "converting {} failed with exit code {code}", input.display()),
            Self::TranscoderFailed { input, code: None } => {
                write!(f, "converting {} was terminated by a signal", input.display())
            }
        }
    }
}

impl core::error::Error for MediaError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_forwards_transcoder_status() {
        let failed = |code| MediaError::TranscoderFailed {
            input: PathBuf::from("a.mp4"),
            code,
        };
        assert_eq!(failed(Some(69)).exit_code(), 69);
        assert_eq!(failed(None).exit_code(), 1);
        assert_eq!(failed(Some(-1)).exit_code(), 1);
        assert_eq!(failed(Some(256)).exit_code(), 1);
        assert_eq!(MediaError::InputNotFound(PathBuf::from("x")).exit_code(), 1);
    }
}
