// file: src/source/mod.rs
// version: 1.0.0
// guid: 8c4f2d91-6e0b-4a73-85c2-39d7f10e6b58

//! Source resolution for the positional argument
//!
//! The input is either a local audio file path or a video URL. URLs are handed
//! to the downloader; local paths are tilde-expanded and checked against the
//! two supported formats.

use crate::{PlayError, Result};
use std::path::{Path, PathBuf};
use tracing::warn;
use url::Url;

pub mod downloader;

/// Local input formats with reliable seeking in the playback layer
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["flac", "mp3"];

/// A classified playback source
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Local(PathBuf),
    Remote(Url),
}

/// Classify the positional argument as a local file or a remote URL
pub fn classify(input: &str) -> Result<Source> {
    if input.starts_with("http") {
        let url = Url::parse(input)
            .map_err(|e| PlayError::invalid_argument(format!("Invalid URL {}: {}", input, e)))?;
        Ok(Source::Remote(url))
    } else {
        let expanded = shellexpand::tilde(input);
        Ok(Source::Local(PathBuf::from(expanded.as_ref())))
    }
}

/// Validate that a local source exists and is a supported format
pub fn validate_local(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(PlayError::file_not_found(path.display().to_string()));
    }

    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.iter().any(|s| *s == ext)
        })
        .unwrap_or(false);

    if !supported {
        return Err(PlayError::UnsupportedFormat(format!(
            "{}: supported formats are {}",
            path.display(),
            SUPPORTED_EXTENSIONS.join(", ")
        )));
    }

    Ok(())
}

/// Destination path for `--save`, forcing the downloaded audio's extension
pub fn save_destination(save: &str, format: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(save).as_ref()).with_extension(format)
}

/// Copy the downloaded file out of the working directory.
///
/// A failed copy is not fatal: the user may have passed a directory or an
/// otherwise unwritable path, and playback should proceed regardless.
pub async fn save_downloaded_copy(source: &Path, save: &str, format: &str) {
    let dest = save_destination(save, format);
    match tokio::fs::copy(source, &dest).await {
        Ok(_) => tracing::info!("Saved downloaded audio to {}", dest.display()),
        Err(e) => warn!("Failed to save downloaded audio to {}: {}", dest.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_url() {
        let source = classify("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        match source {
            Source::Remote(url) => assert_eq!(url.host_str(), Some("www.youtube.com")),
            other => panic!("expected remote source, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_plain_http() {
        assert!(matches!(
            classify("http://example.com/video").unwrap(),
            Source::Remote(_)
        ));
    }

    #[test]
    fn test_classify_local_path() {
        let source = classify("music/song.flac").unwrap();
        assert_eq!(source, Source::Local(PathBuf::from("music/song.flac")));
    }

    #[test]
    fn test_classify_invalid_url() {
        let result = classify("http://[not-a-url");
        assert!(matches!(result, Err(PlayError::InvalidArgument(_))));
    }

    #[test]
    fn test_validate_local_missing_file() {
        let result = validate_local(Path::new("/nonexistent/song.flac"));
        assert!(matches!(result, Err(PlayError::FileNotFound(_))));
    }

    #[test]
    fn test_validate_local_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("song.wav");
        std::fs::write(&path, b"riff").unwrap();

        let result = validate_local(&path);
        assert!(matches!(result, Err(PlayError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_validate_local_supported_extensions() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.flac", "b.mp3", "c.FLAC"] {
            let path = dir.path().join(name);
            std::fs::write(&path, b"data").unwrap();
            validate_local(&path).unwrap();
        }
    }

    #[test]
    fn test_save_destination_replaces_extension() {
        assert_eq!(
            save_destination("keeper", "flac"),
            PathBuf::from("keeper.flac")
        );
        assert_eq!(
            save_destination("out/track.tmp", "flac"),
            PathBuf::from("out/track.flac")
        );
    }
}
