// file: src/cli/commands.rs
// version: 1.0.0
// guid: 0b3e75c8-92d4-4f1a-b687-53a09c1e84d2

//! Command implementations for the CLI

use crate::{
    audio::{
        player::Player,
        transform::{SoxProcessor, TransformSpec},
    },
    source::{self, downloader::AudioDownloader, Source},
    utils::system::SystemUtils,
    PlayError, Result,
};
use tracing::{debug, info, warn};

/// Play an audio file or a video URL's audio track
pub async fn play_command(
    file_or_url: &str,
    tempo: f64,
    start: f64,
    end: Option<f64>,
    loop_playback: bool,
    save: Option<String>,
) -> Result<()> {
    let spec = TransformSpec::new(start, end, tempo);
    spec.validate()?;

    let source = source::classify(file_or_url)?;
    if let Source::Local(path) = &source {
        source::validate_local(path)?;
        if save.is_some() {
            warn!("--save only applies to downloaded audio, ignoring");
        }
    }

    SystemUtils::check_prerequisites(matches!(source, Source::Remote(_)))?;

    // everything intermediate lives in a temp dir removed on exit
    let work_dir = tempfile::tempdir()?;

    let (source_file, title) = match &source {
        Source::Local(path) => (path.clone(), None),
        Source::Remote(url) => {
            let downloader = AudioDownloader::new();
            let title = match downloader.probe(url.as_str()).await {
                Ok(metadata) => metadata.title,
                Err(e) => {
                    debug!("Metadata probe failed, continuing without title: {}", e);
                    None
                }
            };

            let file = downloader.download(url.as_str(), work_dir.path()).await?;
            if let Some(save) = &save {
                source::save_downloaded_copy(&file, save, source::downloader::AUDIO_FORMAT).await;
            }
            (file, title)
        }
    };

    let sox = SoxProcessor::new();
    let playback_file = if spec.is_identity() {
        source_file
    } else {
        info!("Preparing playback file");
        let output = work_dir
            .path()
            .join(format!("playback.{}", source::downloader::AUDIO_FORMAT));
        sox.apply(&spec, &source_file, &output).await?;
        output
    };

    let duration = sox.duration(&playback_file).await?;
    debug!("Playback file duration: {:.3}s", duration);

    let player = Player::new(playback_file, tempo, duration, title, loop_playback);
    tokio::task::spawn_blocking(move || player.run())
        .await
        .map_err(|e| PlayError::playback(format!("Player task failed: {}", e)))??;

    Ok(())
}
