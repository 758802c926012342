// file: src/audio/transform.rs
// version: 1.0.0
// guid: b07c49e5-8f13-4d62-a590-3e61d84f72b9

//! SoX invocation for trim and tempo effects
//!
//! Builds the sox effect chain for the requested crop range and tempo
//! multiplier, and reads track durations through `soxi -D`. Identity
//! transforms skip sox entirely; the caller plays the source file as-is.

use crate::{PlayError, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Requested crop range and tempo multiplier
#[derive(Debug, Clone, PartialEq)]
pub struct TransformSpec {
    pub start: f64,
    pub end: Option<f64>,
    pub tempo: f64,
}

impl TransformSpec {
    pub fn new(start: f64, end: Option<f64>, tempo: f64) -> Self {
        Self { start, end, tempo }
    }

    /// Validate option ranges before any external tool runs
    pub fn validate(&self) -> Result<()> {
        if !self.tempo.is_finite() || self.tempo <= 0.0 || self.tempo > 100.0 {
            return Err(PlayError::invalid_argument(format!(
                "Tempo multiplier must be in (0, 100], got {}",
                self.tempo
            )));
        }
        if !self.start.is_finite() || self.start < 0.0 {
            return Err(PlayError::invalid_argument(format!(
                "Start time must be non-negative, got {}",
                self.start
            )));
        }
        if let Some(end) = self.end {
            if !end.is_finite() || end <= self.start {
                return Err(PlayError::invalid_argument(format!(
                    "End time must be greater than start time ({} <= {})",
                    end, self.start
                )));
            }
        }
        Ok(())
    }

    /// Whether the spec changes the audio at all
    pub fn is_identity(&self) -> bool {
        self.start == 0.0 && self.end.is_none() && self.tempo == 1.0
    }

    /// SoX effect chain for this spec. Trim runs before tempo, so the crop
    /// range is expressed in source-track seconds.
    pub fn effect_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if self.start != 0.0 || self.end.is_some() {
            args.push("trim".to_string());
            args.push(format!("{:.3}", self.start));
            if let Some(end) = self.end {
                args.push(format!("{:.3}", end - self.start));
            }
        }

        if self.tempo != 1.0 {
            // -m selects the music-tuned segment size
            args.push("tempo".to_string());
            args.push("-m".to_string());
            args.push(format!("{}", self.tempo));
        }

        args
    }
}

/// Runs sox and soxi as subprocesses
pub struct SoxProcessor;

impl SoxProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Apply the transform, writing the processed audio to `output`
    pub async fn apply(&self, spec: &TransformSpec, input: &Path, output: &Path) -> Result<()> {
        let effects = spec.effect_args();
        debug!("Applying sox effects {:?} to {}", effects, input.display());

        let result = Command::new("sox")
            .arg(input)
            .arg(output)
            .args(&effects)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| PlayError::transform(format!("Failed to run sox: {}", e)))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(PlayError::transform(format!(
                "sox exited with code {}: {}",
                result.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        info!("Wrote playback file {}", output.display());
        Ok(())
    }

    /// Read a file's duration in seconds via `soxi -D`
    pub async fn duration(&self, file: &Path) -> Result<f64> {
        let result = Command::new("soxi")
            .arg("-D")
            .arg(file)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| PlayError::transform(format!("Failed to run soxi: {}", e)))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(PlayError::transform(format!(
                "soxi exited with code {}: {}",
                result.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        parse_duration(&String::from_utf8_lossy(&result.stdout))
    }
}

impl Default for SoxProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse `soxi -D` output (seconds as a decimal number)
pub(crate) fn parse_duration(output: &str) -> Result<f64> {
    output
        .trim()
        .parse::<f64>()
        .map_err(|_| PlayError::transform(format!("Unexpected soxi duration output: {:?}", output)))
}
