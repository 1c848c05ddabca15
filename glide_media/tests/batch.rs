// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Batch conversion against temporary directories and a scripted transcoder.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glide_media::{GifOptions, MediaError, Transcoder, collect_inputs, convert_all, convert_one};
use tempfile::{TempDir, tempdir};

fn touch(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, b"").unwrap();
    path
}

/// Records invocations and answers with scripted exit codes (then 0).
#[derive(Default)]
struct Scripted {
    codes: Vec<Option<i32>>,
    calls: Vec<Vec<OsString>>,
}

impl Transcoder for Scripted {
    fn run(&mut self, args: &[OsString]) -> io::Result<Option<i32>> {
        self.calls.push(args.to_vec());
        Ok(if self.codes.is_empty() {
            Some(0)
        } else {
            self.codes.remove(0)
        })
    }

    fn program(&self) -> &OsStr {
        OsStr::new("scripted")
    }
}

struct Unspawnable;

impl Transcoder for Unspawnable {
    fn run(&mut self, _: &[OsString]) -> io::Result<Option<i32>> {
        Err(io::Error::new(io::ErrorKind::NotFound, "no such program"))
    }

    fn program(&self) -> &OsStr {
        OsStr::new("/nowhere/ffmpeg")
    }
}

#[test]
fn directory_yields_sorted_mp4s_only() {
    let scratch = tempdir().unwrap();
    touch(&scratch, "b.mp4");
    touch(&scratch, "A.MP4");
    touch(&scratch, "notes.txt");
    touch(&scratch, "c.mp4.bak");
    fs::create_dir(scratch.path().join("nested.mp4")).unwrap();

    let inputs = collect_inputs(scratch.path()).unwrap();
    let names: Vec<_> = inputs
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["A.MP4", "b.mp4"]);
}

#[test]
fn empty_directory_yields_nothing() {
    let scratch = tempdir().unwrap();
    touch(&scratch, "readme.md");
    assert!(collect_inputs(scratch.path()).unwrap().is_empty());
}

#[test]
fn single_file_is_taken_as_given() {
    let scratch = tempdir().unwrap();
    let clip = touch(&scratch, "clip.mov");
    assert_eq!(collect_inputs(&clip).unwrap(), [clip]);
}

#[test]
fn missing_input_is_an_error() {
    let scratch = tempdir().unwrap();
    let err = collect_inputs(&scratch.path().join("absent.mp4")).unwrap_err();
    assert!(matches!(err, MediaError::InputNotFound(_)));
    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().starts_with("Input not found: "));
}

#[test]
fn converts_each_input_into_outdir() {
    let scratch = tempdir().unwrap();
    let inputs = [touch(&scratch, "one.mp4"), touch(&scratch, "two.mp4")];
    let outdir = scratch.path().join("gifs");
    let mut transcoder = Scripted::default();

    let written = convert_all(
        &inputs,
        Some(&outdir),
        GifOptions {
            fps: 10,
            width: Some(320),
        },
        &mut transcoder,
    )
    .unwrap();

    assert_eq!(written, [outdir.join("one.gif"), outdir.join("two.gif")]);
    assert_eq!(transcoder.calls.len(), 2);
    let first = &transcoder.calls[0];
    assert_eq!(first[3], inputs[0].as_os_str());
    assert_eq!(
        first[5],
        "fps=10,scale=320:-1:flags=lanczos,split[s0][s1];[s0]palettegen=stats_mode=diff[pal];[s1][pal]paletteuse"
    );
    assert_eq!(Path::new(&first[6]), outdir.join("one.gif"));
}

#[test]
fn failure_stops_the_batch_with_its_code() {
    let inputs = [
        PathBuf::from("a.mp4"),
        PathBuf::from("b.mp4"),
        PathBuf::from("c.mp4"),
    ];
    let mut transcoder = Scripted {
        codes: vec![Some(0), Some(3)],
        ..Scripted::default()
    };

    let err = convert_all(&inputs, None, GifOptions::default(), &mut transcoder).unwrap_err();
    match &err {
        MediaError::TranscoderFailed { input, code } => {
            assert_eq!(input, Path::new("b.mp4"));
            assert_eq!(*code, Some(3));
        }
        other => panic!("unexpected: {other:?}"),
    }
    assert_eq!(err.exit_code(), 3);
    assert_eq!(transcoder.calls.len(), 2, "c.mp4 must not be attempted");
}

#[test]
fn spawn_failure_names_the_program() {
    let err = convert_all(
        &[PathBuf::from("a.mp4")],
        None,
        GifOptions::default(),
        Unspawnable,
    )
    .unwrap_err();
    assert!(matches!(err, MediaError::Io { .. }));
    assert!(err.to_string().starts_with("/nowhere/ffmpeg: "));
    assert!(core::error::Error::source(&err).is_some());
}

#[test]
fn single_conversion_writes_to_the_given_output() {
    let mut transcoder = Scripted::default();
    convert_one(
        Path::new("in/clip.mp4"),
        Path::new("out/clip.gif"),
        GifOptions::default(),
        &mut transcoder,
    )
    .unwrap();
    let args = &transcoder.calls[0];
    assert_eq!(args[3], "in/clip.mp4");
    assert_eq!(args[6], "out/clip.gif");
}
