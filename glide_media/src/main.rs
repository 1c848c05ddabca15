// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `mp42gif`: convert an MP4 file, or every MP4 in a directory, to GIF.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use glide_media::{
    DEFAULT_FFMPEG, DEFAULT_FPS, Ffmpeg, GifOptions, collect_inputs, convert_one, output_path_for,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "mp42gif", version, about = "Convert MP4 videos to animated GIFs")]
struct Cli {
    /// MP4 file, or directory whose MP4 files are converted
    input: PathBuf,
    /// Directory for the GIFs (defaults to beside each input)
    outdir: Option<PathBuf>,
    /// Output frame rate
    #[arg(default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,
    /// Output width in pixels (defaults to the source width)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,
    /// ffmpeg executable
    #[arg(long, env = "FFMPEG", default_value = DEFAULT_FFMPEG)]
    ffmpeg: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let outdir = cli.outdir.filter(|dir| !dir.as_os_str().is_empty());
    let options = GifOptions {
        fps: cli.fps,
        width: cli.width,
    };

    let inputs = match collect_inputs(&cli.input) {
        Ok(inputs) => inputs,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(err.exit_code());
        }
    };
    if inputs.is_empty() {
        println!("No .mp4 files found in {}", cli.input.display());
        return ExitCode::SUCCESS;
    }

    let mut ffmpeg = Ffmpeg::new(cli.ffmpeg);
    for input in &inputs {
        let output = output_path_for(input, outdir.as_deref());
        println!(
            "Converting {} -> {} ({options})",
            input.display(),
            output.display()
        );
        if let Err(err) = convert_one(input, &output, options, &mut ffmpeg) {
            eprintln!("{err}");
            return ExitCode::from(err.exit_code());
        }
    }
    ExitCode::SUCCESS
}
