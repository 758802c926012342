// file: src/audio/player.rs
// version: 1.0.0
// guid: 9f51d6e3-0b82-47a4-bd19-6c3a85e20f47

//! Interactive playback on top of SoX's `play`
//!
//! `play` exposes no pause or seek interface, so the player emulates both by
//! killing the child and respawning it with a `trim <offset>` effect, keeping
//! track of the playhead itself. The playhead position is the offset passed to
//! the last spawn plus the wall-clock time since that spawn.

use crate::{PlayError, Result};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};
use tracing::debug;

use super::ui;

const SEEK_DISTANCE_SECONDS: f64 = 5.0;
const VOLUME_INCREMENT: u8 = 10;
const PROGRESS_BAR_WIDTH: u16 = 60;
const TICK_INTERVAL: Duration = Duration::from_millis(50);

const HELP_LINE: &str =
    "space: pause, r: restart, left/right: seek, up/down: volume, q/esc: quit";

/// Key bindings resolved to player actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Quit,
    TogglePause,
    Restart,
    SeekBackward,
    SeekForward,
    VolumeUp,
    VolumeDown,
}

/// Map a key event to a player action
pub fn action_for(key: &KeyEvent) -> Option<PlayerAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    // raw mode swallows SIGINT, so Ctrl-C arrives here as a key event
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(PlayerAction::Quit);
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(PlayerAction::Quit),
        KeyCode::Char(' ') => Some(PlayerAction::TogglePause),
        KeyCode::Char('r') => Some(PlayerAction::Restart),
        KeyCode::Left => Some(PlayerAction::SeekBackward),
        KeyCode::Right => Some(PlayerAction::SeekForward),
        KeyCode::Up => Some(PlayerAction::VolumeUp),
        KeyCode::Down => Some(PlayerAction::VolumeDown),
        _ => None,
    }
}

/// Emulated playhead across restarts of the external player
#[derive(Debug, Clone)]
pub struct PlayheadState {
    start_offset: f64,
    paused: bool,
    volume: u8,
    duration: f64,
}

impl PlayheadState {
    pub fn new(duration: f64) -> Self {
        Self {
            start_offset: 0.0,
            paused: false,
            volume: 100,
            duration,
        }
    }

    /// Current position given the time elapsed since the last spawn
    pub fn position(&self, elapsed: f64) -> f64 {
        let elapsed = if self.paused { 0.0 } else { elapsed };
        (self.start_offset + elapsed).min(self.duration)
    }

    /// Fold elapsed time into the offset and pause
    pub fn pause_at(&mut self, elapsed: f64) {
        self.start_offset = self.position(elapsed);
        self.paused = true;
    }

    /// Unpause, returning the offset to respawn the player at
    pub fn resume(&mut self) -> f64 {
        self.paused = false;
        self.start_offset
    }

    /// Move the playhead by `delta` seconds, clamped to the track bounds,
    /// returning the new offset
    pub fn seek(&mut self, elapsed: f64, delta: f64) -> f64 {
        self.start_offset = (self.position(elapsed) + delta).clamp(0.0, self.duration);
        self.start_offset
    }

    /// Rewind to the beginning, preserving the pause state
    pub fn restart(&mut self) {
        self.start_offset = 0.0;
    }

    /// Park the playhead at the end of the track
    pub fn park_at_end(&mut self) {
        self.start_offset = self.duration;
    }

    pub fn volume_up(&mut self) {
        self.volume = self.volume.saturating_add(VOLUME_INCREMENT).min(100);
    }

    pub fn volume_down(&mut self) {
        self.volume = self.volume.saturating_sub(VOLUME_INCREMENT);
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn progress(&self, elapsed: f64) -> f64 {
        if self.duration > 0.0 {
            (self.position(elapsed) / self.duration).min(1.0)
        } else {
            1.0
        }
    }
}

/// Interactive terminal player for a prepared playback file
pub struct Player {
    file: PathBuf,
    tempo: f64,
    duration: f64,
    title: Option<String>,
    looped: bool,
}

impl Player {
    pub fn new(
        file: PathBuf,
        tempo: f64,
        duration: f64,
        title: Option<String>,
        looped: bool,
    ) -> Self {
        Self {
            file,
            tempo,
            duration,
            title,
            looped,
        }
    }

    /// Run the player until the user quits or the track ends
    pub fn run(&self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        if execute!(stdout, EnterAlternateScreen, Hide).is_err() {
            let _ = disable_raw_mode();
            return Err(PlayError::playback("Failed to set up terminal".to_string()));
        }

        let result = self.event_loop(&mut stdout);

        // always restore the terminal, even on error
        let _ = execute!(stdout, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        result
    }

    fn event_loop(&self, out: &mut impl Write) -> Result<()> {
        let mut state = PlayheadState::new(self.duration);
        let mut child = Some(self.spawn_player(0.0, state.volume())?);
        let mut started = Instant::now();

        loop {
            // external player finished on its own
            if let Some(c) = child.as_mut() {
                if c.try_wait()?.is_some() {
                    child = None;
                    if self.looped && !state.paused() {
                        debug!("Track finished, looping");
                        state.restart();
                        child = Some(self.spawn_player(0.0, state.volume())?);
                        started = Instant::now();
                    } else if !state.paused() {
                        state.park_at_end();
                    }
                }
            }

            let elapsed = if child.is_some() && !state.paused() {
                started.elapsed().as_secs_f64()
            } else {
                0.0
            };

            if event::poll(TICK_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    match action_for(&key) {
                        Some(PlayerAction::Quit) => break,
                        Some(PlayerAction::TogglePause) => {
                            if state.paused() {
                                let offset = state.resume();
                                child = Some(self.spawn_player(offset, state.volume())?);
                                started = Instant::now();
                            } else {
                                state.pause_at(elapsed);
                                Self::stop(&mut child);
                            }
                        }
                        Some(PlayerAction::Restart) => {
                            state.restart();
                            Self::stop(&mut child);
                            if !state.paused() {
                                child = Some(self.spawn_player(0.0, state.volume())?);
                                started = Instant::now();
                            }
                        }
                        Some(PlayerAction::SeekBackward) => {
                            let offset = state.seek(elapsed, -SEEK_DISTANCE_SECONDS);
                            Self::stop(&mut child);
                            if !state.paused() {
                                child = Some(self.spawn_player(offset, state.volume())?);
                                started = Instant::now();
                            }
                        }
                        Some(PlayerAction::SeekForward) => {
                            let offset = state.seek(elapsed, SEEK_DISTANCE_SECONDS);
                            Self::stop(&mut child);
                            if !state.paused() {
                                child = Some(self.spawn_player(offset, state.volume())?);
                                started = Instant::now();
                            }
                        }
                        Some(action @ (PlayerAction::VolumeUp | PlayerAction::VolumeDown)) => {
                            if action == PlayerAction::VolumeUp {
                                state.volume_up();
                            } else {
                                state.volume_down();
                            }
                            // volume is a spawn-time flag, so apply it by
                            // respawning at the current position
                            if child.is_some() && !state.paused() {
                                state.pause_at(elapsed);
                                Self::stop(&mut child);
                                let offset = state.resume();
                                child = Some(self.spawn_player(offset, state.volume())?);
                                started = Instant::now();
                            }
                        }
                        None => {}
                    }
                }
            }

            let elapsed = if child.is_some() && !state.paused() {
                started.elapsed().as_secs_f64()
            } else {
                0.0
            };
            self.draw(out, &state, elapsed)?;
        }

        Self::stop(&mut child);
        Ok(())
    }

    fn spawn_player(&self, offset: f64, volume: u8) -> Result<Child> {
        let mut cmd = Command::new("play");
        cmd.arg("-q");
        cmd.arg("-v");
        cmd.arg(format!("{:.2}", f64::from(volume) / 100.0));
        cmd.arg(&self.file);
        if offset > 0.0 {
            cmd.arg("trim");
            cmd.arg(format!("{:.3}", offset));
        }
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        debug!("Spawning play at offset {:.3}s, volume {}%", offset, volume);
        cmd.spawn()
            .map_err(|e| PlayError::playback(format!("Failed to start play: {}", e)))
    }

    fn stop(child: &mut Option<Child>) {
        if let Some(mut c) = child.take() {
            let _ = c.kill();
            let _ = c.wait();
        }
    }

    fn draw(&self, out: &mut impl Write, state: &PlayheadState, elapsed: f64) -> Result<()> {
        let (width, height) = terminal::size()?;
        let center_y = height / 2;
        let max_width = usize::from(width.saturating_sub(2));

        queue!(out, Clear(ClearType::All))?;

        // progress bar
        let max_bars = max_width
            .saturating_sub(2)
            .min(usize::from(PROGRESS_BAR_WIDTH));
        let bar = ui::render_progress_bar(state.progress(elapsed), max_bars);
        queue!(
            out,
            MoveTo(ui::centered_column(width, bar.len()), center_y),
            Print(&bar)
        )?;

        // info line: displayed time is in source-track seconds
        if center_y > 0 {
            let info = format!(
                "tempo: {:.2}x - volume: {:3}% - {}",
                self.tempo,
                state.volume(),
                ui::format_timestamp(self.tempo * state.position(elapsed))
            );
            if info.len() < max_width {
                queue!(
                    out,
                    MoveTo(ui::centered_column(width, info.len()), center_y - 1),
                    Print(&info)
                )?;
            }
        }

        // track title, when known
        if center_y > 2 {
            if let Some(title) = &self.title {
                if title.len() < max_width {
                    queue!(
                        out,
                        MoveTo(ui::centered_column(width, title.len()), center_y - 3),
                        Print(title)
                    )?;
                }
            }
        }

        // key help
        if center_y < height.saturating_sub(2) && HELP_LINE.len() < max_width {
            queue!(
                out,
                MoveTo(ui::centered_column(width, HELP_LINE.len()), center_y + 2),
                Print(HELP_LINE)
            )?;
        }

        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_action_bindings() {
        assert_eq!(action_for(&key(KeyCode::Char('q'))), Some(PlayerAction::Quit));
        assert_eq!(action_for(&key(KeyCode::Esc)), Some(PlayerAction::Quit));
        assert_eq!(
            action_for(&key(KeyCode::Char(' '))),
            Some(PlayerAction::TogglePause)
        );
        assert_eq!(
            action_for(&key(KeyCode::Char('r'))),
            Some(PlayerAction::Restart)
        );
        assert_eq!(action_for(&key(KeyCode::Left)), Some(PlayerAction::SeekBackward));
        assert_eq!(action_for(&key(KeyCode::Right)), Some(PlayerAction::SeekForward));
        assert_eq!(action_for(&key(KeyCode::Up)), Some(PlayerAction::VolumeUp));
        assert_eq!(action_for(&key(KeyCode::Down)), Some(PlayerAction::VolumeDown));
        assert_eq!(action_for(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(&event), Some(PlayerAction::Quit));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(action_for(&event), None);
    }

    #[test]
    fn test_position_advances_while_playing() {
        let state = PlayheadState::new(100.0);
        assert_eq!(state.position(12.5), 12.5);
    }

    #[test]
    fn test_position_clamps_to_duration() {
        let state = PlayheadState::new(100.0);
        assert_eq!(state.position(250.0), 100.0);
    }

    #[test]
    fn test_pause_folds_elapsed_into_offset() {
        let mut state = PlayheadState::new(100.0);
        state.pause_at(30.0);
        assert!(state.paused());
        // elapsed is ignored while paused
        assert_eq!(state.position(999.0), 30.0);
        assert_eq!(state.resume(), 30.0);
        assert!(!state.paused());
    }

    #[test]
    fn test_seek_backward_clamps_at_zero() {
        let mut state = PlayheadState::new(100.0);
        assert_eq!(state.seek(2.0, -5.0), 0.0);
    }

    #[test]
    fn test_seek_forward_clamps_at_duration() {
        let mut state = PlayheadState::new(100.0);
        assert_eq!(state.seek(98.0, 5.0), 100.0);
    }

    #[test]
    fn test_seek_while_paused_uses_frozen_position() {
        let mut state = PlayheadState::new(100.0);
        state.pause_at(40.0);
        assert_eq!(state.seek(123.0, 5.0), 45.0);
        assert!(state.paused());
    }

    #[test]
    fn test_restart_preserves_pause_state() {
        let mut state = PlayheadState::new(100.0);
        state.pause_at(40.0);
        state.restart();
        assert!(state.paused());
        assert_eq!(state.position(0.0), 0.0);
    }

    #[test]
    fn test_volume_steps_and_clamps() {
        let mut state = PlayheadState::new(100.0);
        assert_eq!(state.volume(), 100);
        state.volume_up();
        assert_eq!(state.volume(), 100);
        for _ in 0..12 {
            state.volume_down();
        }
        assert_eq!(state.volume(), 0);
        state.volume_up();
        assert_eq!(state.volume(), 10);
    }

    #[test]
    fn test_progress_with_zero_duration() {
        let state = PlayheadState::new(0.0);
        assert_eq!(state.progress(0.0), 1.0);
    }

    #[test]
    fn test_park_at_end() {
        let mut state = PlayheadState::new(100.0);
        state.park_at_end();
        assert_eq!(state.position(0.0), 100.0);
        assert_eq!(state.progress(0.0), 1.0);
    }
}
