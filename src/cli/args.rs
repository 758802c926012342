// file: src/cli/args.rs
// version: 1.0.0
// guid: 2d6b80f4-9e37-4a51-bc08-74e1c59d3a26

//! Command line argument definitions

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tempo-play")]
#[command(about = "Play an audio file or audio from a video URL with a given tempo multiplier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Path to an audio file (FLAC or MP3) or a video URL
    pub file_or_url: String,

    /// Tempo multiplier
    #[arg(short, long, default_value_t = 1.0)]
    pub tempo: f64,

    /// Track start time in seconds
    #[arg(short, long, default_value_t = 0.0)]
    pub start: f64,

    /// Track end time in seconds
    #[arg(short, long)]
    pub end: Option<f64>,

    /// Loop the track
    #[arg(short = 'l', long = "loop")]
    pub loop_playback: bool,

    /// Save the downloaded audio to the given path. Do not include an extension
    #[arg(long)]
    pub save: Option<String>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}
