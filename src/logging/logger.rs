// file: src/logging/logger.rs
// version: 1.0.0
// guid: c9e05b38-7a21-4f6d-8e43-10b6f92d4a7c

//! Logger initialization and configuration

use crate::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| {
            crate::error::PlayError::config(format!("Failed to initialize logger: {}", e))
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_default() {
        // Tracing subscribers can only be installed once per process, so this
        // only checks that the call does not panic either way.
        let result = init_logger(false, false);
        assert!(result.is_ok() || result.is_err());
    }

    #[test]
    fn test_init_logger_quiet() {
        let result = init_logger(false, true);
        assert!(result.is_ok() || result.is_err());
    }
}
