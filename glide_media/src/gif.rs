// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ffmpeg invocation for one GIF conversion.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Frame rate used when none is given.
pub const DEFAULT_FPS: u32 = 15;

/// Sampling and sizing of the generated GIF.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GifOptions {
    /// Output frames per second.
    pub fps: u32,
    /// Output width in pixels; height follows the aspect ratio. `None` keeps
    /// the source width.
    pub width: Option<u32>,
}

impl Default for GifOptions {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            width: None,
        }
    }
}

impl GifOptions {
    /// The `-vf` filter graph.
    ///
    /// The palette is generated and applied in a single pass by splitting the
    /// stream.
    ///
    /// ```
    /// use glide_media::GifOptions;
    ///
    /// let options = GifOptions { fps: 10, width: Some(480) };
    /// assert_eq!(
    ///     options.filter_graph(),
    ///     "fps=10,scale=480:-1:flags=lanczos,split[s0][s1];\
    ///      [s0]palettegen=stats_mode=diff[pal];[s1][pal]paletteuse"
    /// );
    /// ```
    #[must_use]
    pub fn filter_graph(&self) -> String {
        let mut vf = format!("fps={}", self.fps);
        if let Some(width) = self.width {
            vf.push_str(&format!(",scale={width}:-1:flags=lanczos"));
        }
        format!("{vf},split[s0][s1];[s0]palettegen=stats_mode=diff[pal];[s1][pal]paletteuse")
    }

    /// Full ffmpeg argument list for converting `input` into `output`.
    #[must_use]
    pub fn ffmpeg_args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        vec![
            "-y".into(),
            "-nostdin".into(),
            "-i".into(),
            input.as_os_str().to_owned(),
            "-vf".into(),
            self.filter_graph().into(),
            output.as_os_str().to_owned(),
        ]
    }
}

impl core::fmt::Display for GifOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "fps={}", self.fps)?;
        if let Some(width) = self.width {
            write!(f, ", width={width}")?;
        }
        Ok(())
    }
}

/// Returns `true` if `path` has an `.mp4` extension in any case.
#[must_use]
pub fn is_mp4(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("mp4"))
}

/// Where the GIF for `input` goes: the same file name with a `.gif`
/// extension, inside `outdir` if given, otherwise next to `input`.
#[must_use]
pub fn output_path_for(input: &Path, outdir: Option<&Path>) -> PathBuf {
    let name = Path::new(input.file_name().unwrap_or(input.as_os_str())).with_extension("gif");
    match outdir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_without_width() {
        assert_eq!(
            GifOptions::default().filter_graph(),
            "fps=15,split[s0][s1];[s0]palettegen=stats_mode=diff[pal];[s1][pal]paletteuse"
        );
    }

    #[test]
    fn args_order() {
        let args = GifOptions::default().ffmpeg_args(Path::new("in.mp4"), Path::new("out.gif"));
        let args: Vec<_> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(&args[..4], ["-y", "-nostdin", "-i", "in.mp4"]);
        assert_eq!(args[4], "-vf");
        assert!(args[5].starts_with("fps=15,split"));
        assert_eq!(args[6], "out.gif");
    }

    #[test]
    fn display_matches_progress_line() {
        assert_eq!(GifOptions::default().to_string(), "fps=15");
        let sized = GifOptions {
            fps: 12,
            width: Some(320),
        };
        assert_eq!(sized.to_string(), "fps=12, width=320");
    }

    #[test]
    fn mp4_detection_ignores_case() {
        assert!(is_mp4(Path::new("clip.mp4")));
        assert!(is_mp4(Path::new("CLIP.MP4")));
        assert!(!is_mp4(Path::new("clip.mov")));
        assert!(!is_mp4(Path::new("mp4")));
    }

    #[test]
    fn output_beside_input_or_in_outdir() {
        assert_eq!(
            output_path_for(Path::new("media/Demo.MP4"), None),
            Path::new("media/Demo.gif")
        );
        assert_eq!(
            output_path_for(Path::new("media/demo.mp4"), Some(Path::new("out"))),
            Path::new("out/demo.gif")
        );
        assert_eq!(
            output_path_for(Path::new("clip.mov"), None),
            Path::new("clip.gif")
        );
    }
}
