// file: src/main.rs
// version: 1.0.0
// guid: f6a02d8e-4b79-4c15-a3d0-81e5c7f29b64

//! tempo-play - Main entry point

use clap::Parser;
use tempo_play::{
    cli::{args::Cli, commands},
    logging::logger,
    Result,
};
use tokio::signal;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    logger::init_logger(cli.verbose, cli.quiet)?;

    // Ctrl+C during download/processing; the interactive player handles keys
    // itself once the terminal is in raw mode
    let shutdown_signal = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
        warn!("Received Ctrl+C, shutting down...");
    };

    let command_future = commands::play_command(
        &cli.file_or_url,
        cli.tempo,
        cli.start,
        cli.end,
        cli.loop_playback,
        cli.save,
    );

    tokio::select! {
        result = command_future => result,
        _ = shutdown_signal => {
            std::process::exit(130); // Standard exit code for Ctrl+C
        }
    }
}
