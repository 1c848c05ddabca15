// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=glide_media --heading-base-level=0

//! Glide Media: batch MP4 to animated GIF conversion.
//!
//! Each video is converted by one ffmpeg run that samples it at a fixed frame
//! rate, optionally rescales it, and builds an optimized palette in the same
//! pass. The `mp42gif` binary wraps [`collect_inputs`] and [`convert_one`];
//! [`convert_all`] runs a whole batch without progress output.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use glide_media::{Ffmpeg, GifOptions, collect_inputs, convert_all};
//!
//! let inputs = collect_inputs(Path::new("media"))?;
//! let options = GifOptions { fps: 12, width: Some(640) };
//! convert_all(&inputs, Some(Path::new("gifs")), options, Ffmpeg::default())?;
//! # Ok::<(), glide_media::MediaError>(())
//! ```

mod batch;
mod error;
mod gif;

pub use batch::{DEFAULT_FFMPEG, Ffmpeg, Transcoder, collect_inputs, convert_all, convert_one};
pub use error::MediaError;
pub use gif::{DEFAULT_FPS, GifOptions, is_mp4, output_path_for};
