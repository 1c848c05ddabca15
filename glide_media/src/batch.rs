// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input discovery and sequential conversion.

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::MediaError;
use crate::gif::{GifOptions, is_mp4, output_path_for};

/// Program used when no transcoder path is configured.
pub const DEFAULT_FFMPEG: &str = "ffmpeg";

/// Runs the transcoder for one conversion.
pub trait Transcoder {
    /// Runs the transcoder with `args` and waits for it to exit.
    ///
    /// Returns the exit code, or `None` if the process was terminated by a
    /// signal. Failure to start the process is an `Err`.
    fn run(&mut self, args: &[OsString]) -> io::Result<Option<i32>>;

    /// Program name, for error reports.
    fn program(&self) -> &OsStr;
}

/// Spawns an ffmpeg executable with inherited stdio.
#[derive(Clone, Debug)]
pub struct Ffmpeg {
    program: OsString,
}

impl Ffmpeg {
    /// Uses the executable at `program`, resolved through `PATH` if bare.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Ffmpeg {
    fn default() -> Self {
        Self::new(DEFAULT_FFMPEG)
    }
}

impl Transcoder for Ffmpeg {
    fn run(&mut self, args: &[OsString]) -> io::Result<Option<i32>> {
        let status = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        Ok(status.code())
    }

    fn program(&self) -> &OsStr {
        &self.program
    }
}

impl<T: Transcoder + ?Sized> Transcoder for &mut T {
    fn run(&mut self, args: &[OsString]) -> io::Result<Option<i32>> {
        (**self).run(args)
    }

    fn program(&self) -> &OsStr {
        (**self).program()
    }
}

/// Resolves `input` to the list of videos to convert.
///
/// A directory yields its `.mp4` files (any case, not recursive) in name
/// order, possibly none. Any other existing path is converted as given.
pub fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>, MediaError> {
    if input.is_dir() {
        let io_err = |source| MediaError::Io {
            path: input.to_path_buf(),
            source,
        };
        let mut found = Vec::new();
        for entry in std::fs::read_dir(input).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if is_mp4(&path) && path.is_file() {
                found.push(path);
            }
        }
        found.sort();
        debug!(dir = %input.display(), count = found.len(), "collected inputs");
        Ok(found)
    } else if input.exists() {
        Ok(vec![input.to_path_buf()])
    } else {
        Err(MediaError::InputNotFound(input.to_path_buf()))
    }
}

/// Converts one input into `output` with a single transcoder run.
pub fn convert_one<T: Transcoder>(
    input: &Path,
    output: &Path,
    options: GifOptions,
    transcoder: &mut T,
) -> Result<(), MediaError> {
    debug!(input = %input.display(), output = %output.display(), %options, "converting");
    let args = options.ffmpeg_args(input, output);
    let code = transcoder.run(&args).map_err(|source| MediaError::Io {
        path: PathBuf::from(transcoder.program()),
        source,
    })?;
    if code != Some(0) {
        return Err(MediaError::TranscoderFailed {
            input: input.to_path_buf(),
            code,
        });
    }
    info!(output = %output.display(), "converted");
    Ok(())
}

/// Converts each input in order, stopping at the first failure.
///
/// Returns the outputs written.
pub fn convert_all<T: Transcoder>(
    inputs: &[PathBuf],
    outdir: Option<&Path>,
    options: GifOptions,
    mut transcoder: T,
) -> Result<Vec<PathBuf>, MediaError> {
    let mut written = Vec::with_capacity(inputs.len());
    for input in inputs {
        let output = output_path_for(input, outdir);
        convert_one(input, &output, options, &mut transcoder)?;
        written.push(output);
    }
    Ok(written)
}
