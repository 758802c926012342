// file: src/source/downloader.rs
// version: 1.0.0
// guid: 5a9e37c2-1b84-4f06-92d7-e83b50c416fa

//! Audio acquisition via yt-dlp
//!
//! Downloads the best available audio track for a video URL and has yt-dlp's
//! postprocessor convert it to FLAC. Metadata probing uses yt-dlp's JSON dump
//! so the player can show the track title.

use crate::{PlayError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info};

/// Format requested from yt-dlp's audio extraction postprocessor
pub const AUDIO_FORMAT: &str = "flac";

/// Track metadata from `yt-dlp -J`
#[derive(Debug, Clone, Deserialize)]
pub struct TrackMetadata {
    pub title: Option<String>,
    pub duration: Option<f64>,
    pub uploader: Option<String>,
}

/// Downloads a video's audio track through yt-dlp
pub struct AudioDownloader;

impl AudioDownloader {
    pub fn new() -> Self {
        Self
    }

    /// Probe track metadata without downloading
    pub async fn probe(&self, url: &str) -> Result<TrackMetadata> {
        debug!("Probing metadata for {}", url);

        let output = Command::new("yt-dlp")
            .args(["-J", "--no-playlist", "--no-warnings", url])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| PlayError::download(format!("Failed to run yt-dlp: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PlayError::download(format!(
                "yt-dlp metadata probe failed with exit code {}: {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        let metadata: TrackMetadata = serde_json::from_slice(&output.stdout)?;
        if let Some(title) = &metadata.title {
            debug!("Resolved track title: {}", title);
        }
        Ok(metadata)
    }

    /// Download the audio track into `work_dir` and return the FLAC path
    pub async fn download(&self, url: &str, work_dir: &Path) -> Result<PathBuf> {
        let dest = work_dir.join(format!("audio.{}", AUDIO_FORMAT));
        let template = work_dir.join("audio.%(ext)s");

        info!("Downloading audio from {}", url);

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .map_err(|e| PlayError::download(e.to_string()))?,
        );
        spinner.set_message("Downloading song...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let output = Command::new("yt-dlp")
            .args([
                "-f",
                "bestaudio/best",
                "--no-playlist",
                "--no-warnings",
                "-x",
                "--audio-format",
                AUDIO_FORMAT,
                "--audio-quality",
                "0",
                "-q",
                "-o",
            ])
            .arg(&template)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| PlayError::download(format!("Failed to run yt-dlp: {}", e)))?;

        spinner.finish_and_clear();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PlayError::download(format!(
                "Failed to download audio (invalid URL?): yt-dlp exited with code {}: {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        if !dest.exists() {
            return Err(PlayError::download(format!(
                "yt-dlp reported success but {} was not created",
                dest.display()
            )));
        }

        info!("Downloaded audio to {}", dest.display());
        Ok(dest)
    }
}

impl Default for AudioDownloader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_deserializes_from_json_dump() {
        let json = r#"{
            "title": "Test Track",
            "duration": 215.0,
            "uploader": "someone",
            "view_count": 1234
        }"#;

        let metadata: TrackMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.title.as_deref(), Some("Test Track"));
        assert_eq!(metadata.duration, Some(215.0));
        assert_eq!(metadata.uploader.as_deref(), Some("someone"));
    }

    #[test]
    fn test_metadata_tolerates_missing_fields() {
        let metadata: TrackMetadata = serde_json::from_str("{}").unwrap();
        assert!(metadata.title.is_none());
        assert!(metadata.duration.is_none());
    }
}
