// file: src/utils/system.rs
// version: 1.0.0
// guid: 1c7a94e0-5d38-4b26-9f71-a40c82d5e319

//! System utility functions

use crate::{PlayError, Result};

/// System utility functions
pub struct SystemUtils;

impl SystemUtils {
    /// Check if a command exists in PATH
    pub fn command_exists(command: &str) -> bool {
        which::which(command).is_ok()
    }

    /// Check that the external toolchain is installed.
    ///
    /// The SoX tools are always required; yt-dlp only when the input is a URL.
    pub fn check_prerequisites(needs_downloader: bool) -> Result<()> {
        let mut required = vec!["sox", "soxi", "play"];
        if needs_downloader {
            required.push("yt-dlp");
        }

        let missing: Vec<&str> = required
            .into_iter()
            .filter(|cmd| !Self::command_exists(cmd))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(PlayError::Prerequisites(format!(
                "required tools not found on PATH: {}",
                missing.join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_exists() {
        assert!(SystemUtils::command_exists("ls"));
        assert!(!SystemUtils::command_exists("nonexistent-command-12345"));
    }

    #[test]
    fn test_missing_prerequisites_are_named() {
        // sox may or may not be installed; only assert the error shape when
        // something is missing
        if let Err(e) = SystemUtils::check_prerequisites(true) {
            assert!(matches!(e, PlayError::Prerequisites(_)));
        }
    }
}
