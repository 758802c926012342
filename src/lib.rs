// file: src/lib.rs
// version: 1.0.0
// guid: 7b2e94d0-5c1a-4f38-9e67-12a4b8f03cde

//! # tempo-play
//!
//! Plays a local audio file or the audio track of an online video, optionally
//! adjusting playback tempo, cropping to a start/end range, and looping.
//!
//! This crate is an orchestration layer: downloading is delegated to `yt-dlp`
//! and all audio processing and playback to the SoX toolchain (`sox`, `soxi`,
//! `play`), invoked as subprocesses.

pub mod audio;
pub mod cli;
pub mod error;
pub mod logging;
pub mod source;
pub mod utils;

pub use error::{PlayError, Result};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
