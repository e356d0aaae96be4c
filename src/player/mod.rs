// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Video playback control.
//!
//! This module provides the [`MediaSurface`] capability used by the shell to
//! command playback, and [`VideoPlayer`], the MPV-backed implementation. The
//! player manages a background worker thread that owns the MPV context,
//! ensuring that media operations do not block the main application thread.
//!
//! Playback position lives here and in MPV, never in the playlist state. The
//! shell only issues commands.

mod commands;
mod error;

use std::sync::{Arc, Mutex, mpsc};

use tracing::debug;

use crate::{config::AppConfig, events::AppEvent, player::commands::VideoPlayerCommand};

pub(crate) use error::MediaError;

/// Represents the current playback status of the video engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

/// Imperative control over a single playable media surface.
///
/// A surface is bound to at most one source at a time. With no source bound
/// it shows nothing and transport commands do nothing.
pub(crate) trait MediaSurface {
    /// Binds the surface to `source`, or unbinds it.
    ///
    /// Binding the source that is already bound is a no-op. A newly bound
    /// source starts paused at the beginning.
    fn load(&mut self, source: Option<&str>) -> Result<(), MediaError>;

    fn play(&mut self) -> Result<(), MediaError>;

    fn pause(&mut self) -> Result<(), MediaError>;

    /// Moves to an absolute position, in seconds.
    fn seek_to(&mut self, seconds: f64) -> Result<(), MediaError>;

    /// Current playback position, in seconds.
    fn current_position(&self) -> f64;

    /// Length of the bound source, if known yet.
    fn duration(&self) -> Option<f64>;

    /// Whether playback has run to the end of the bound source.
    fn ended(&self) -> bool;

    /// Moves the playback position by `delta` seconds, clamped to the
    /// bounds of the source.
    ///
    /// Moving forward needs a known duration and is skipped until the source
    /// reports one.
    fn seek_by(&mut self, delta: f64) -> Result<(), MediaError> {
        let target = self.current_position() + delta;

        let target = match self.duration() {
            Some(duration) => target.min(duration),
            None if delta > 0.0 => return Ok(()),
            None => target,
        };

        self.seek_to(target.max(0.0))
    }
}

/// Position and length of the bound source as last reported by MPV.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct PlaybackSnapshot {
    pub(crate) position: f64,
    pub(crate) duration: Option<f64>,
    pub(crate) finished: bool,

    /// Bumped on every source change, the worker only writes reports that
    /// belong to the latest one.
    pub(crate) generation: u64,
}

/// A handle to the video playback engine.
///
/// This struct acts as a command proxy; it does not perform media processing
/// itself but instead sends instructions to a background worker thread. MPV
/// opens its own video window while a source is bound.
pub(crate) struct VideoPlayer {
    /// Channel for sending commands to the background worker thread.
    command_tx: mpsc::Sender<VideoPlayerCommand>,

    /// Source currently bound to MPV.
    source: Option<String>,

    /// Updated by the worker as MPV reports property changes.
    snapshot: Arc<Mutex<PlaybackSnapshot>>,
}

impl VideoPlayer {
    /// Spawns the video worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `config` - Supplies the MPV video output driver.
    /// * `event_tx` - A channel to send application-level events (like progress
    ///   updates or errors) back to the main event loop.
    pub(crate) fn new(config: &AppConfig, event_tx: mpsc::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = mpsc::channel::<VideoPlayerCommand>();
        let snapshot = Arc::new(Mutex::new(PlaybackSnapshot::default()));

        commands::spawn_player_worker(
            config.video_output.clone(),
            command_rx,
            Arc::clone(&snapshot),
            event_tx,
        );

        Self {
            command_tx,
            source: None,
            snapshot,
        }
    }

    // Maps internal MPV flags to a simplified [`PlayerState`].
    fn player_state(is_paused: bool, is_idle: bool) -> PlayerState {
        if is_idle {
            PlayerState::Stopped
        } else if is_paused {
            PlayerState::Paused
        } else {
            PlayerState::Playing
        }
    }

    fn send(&self, command: VideoPlayerCommand) -> Result<(), MediaError> {
        debug!(?command, "media command");
        self.command_tx
            .send(command)
            .map_err(|_| MediaError::Disconnected)
    }

    fn read_snapshot(&self) -> PlaybackSnapshot {
        self.snapshot
            .lock()
            .map(|snapshot| *snapshot)
            .unwrap_or_default()
    }

    /// Clears the snapshot for a new source and returns its generation.
    fn reset_snapshot(&self) -> u64 {
        match self.snapshot.lock() {
            Ok(mut snapshot) => {
                let generation = snapshot.generation.wrapping_add(1);
                *snapshot = PlaybackSnapshot {
                    generation,
                    ..PlaybackSnapshot::default()
                };
                generation
            }
            Err(_) => 0,
        }
    }
}

#[cfg(test)]
impl VideoPlayer {
    /// A player without a worker, commands are left on the returned channel.
    pub(crate) fn detached() -> (Self, mpsc::Receiver<VideoPlayerCommand>) {
        let (command_tx, command_rx) = mpsc::channel();
        let player = Self {
            command_tx,
            source: None,
            snapshot: Arc::new(Mutex::new(PlaybackSnapshot::default())),
        };
        (player, command_rx)
    }
}

impl MediaSurface for VideoPlayer {
    fn load(&mut self, source: Option<&str>) -> Result<(), MediaError> {
        if self.source.as_deref() == source {
            return Ok(());
        }

        let generation = self.reset_snapshot();
        self.source = source.map(str::to_string);

        match source {
            Some(url) => self.send(VideoPlayerCommand::Load {
                url: url.to_string(),
                generation,
            }),
            None => self.send(VideoPlayerCommand::Unload { generation }),
        }
    }

    fn play(&mut self) -> Result<(), MediaError> {
        if self.source.is_none() {
            return Ok(());
        }
        self.send(VideoPlayerCommand::Play)
    }

    fn pause(&mut self) -> Result<(), MediaError> {
        if self.source.is_none() {
            return Ok(());
        }
        self.send(VideoPlayerCommand::Pause)
    }

    fn seek_to(&mut self, seconds: f64) -> Result<(), MediaError> {
        if self.source.is_none() {
            return Ok(());
        }

        // Relative seeks issued before MPV reports back start from here.
        if let Ok(mut snapshot) = self.snapshot.lock() {
            snapshot.position = seconds;
            snapshot.finished = false;
        }

        self.send(VideoPlayerCommand::SeekTo(seconds))
    }

    fn current_position(&self) -> f64 {
        self.read_snapshot().position
    }

    fn duration(&self) -> Option<f64> {
        self.read_snapshot().duration
    }

    fn ended(&self) -> bool {
        self.read_snapshot().finished
    }
}


#[cfg(test)]
mod tests {
    use super::{
        MediaSurface, PlayerState, VideoPlayer,
        commands::VideoPlayerCommand,
        testing::{RecordingSurface, SurfaceCall},
    };

    #[test]
    fn seek_back_clamps_at_start() {
        let mut surface = RecordingSurface::at(5.0, Some(60.0));

        surface.seek_by(-10.0).unwrap();

        assert_eq!(surface.calls, vec![SurfaceCall::SeekTo(0.0)]);
    }

    #[test]
    fn seek_forward_clamps_at_duration() {
        let mut surface = RecordingSurface::at(55.0, Some(60.0));

        surface.seek_by(10.0).unwrap();

        assert_eq!(surface.position, 60.0);
    }

    #[test]
    fn seek_forward_waits_for_a_known_duration() {
        let mut surface = RecordingSurface::at(3.0, None);

        surface.seek_by(10.0).unwrap();

        assert!(surface.calls.is_empty());
    }

    #[test]
    fn seek_back_works_without_a_duration() {
        let mut surface = RecordingSurface::at(30.0, None);

        surface.seek_by(-10.0).unwrap();

        assert_eq!(surface.position, 20.0);
    }

    #[test]
    fn player_state_prefers_idle_over_paused() {
        assert_eq!(VideoPlayer::player_state(true, true), PlayerState::Stopped);
        assert_eq!(VideoPlayer::player_state(true, false), PlayerState::Paused);
        assert_eq!(VideoPlayer::player_state(false, false), PlayerState::Playing);
    }

    #[test]
    fn switching_source_starts_a_new_generation() {
        let (mut player, command_rx) = VideoPlayer::detached();

        player.load(Some("http://host/a.mp4")).unwrap();
        player.load(Some("http://host/b.mp4")).unwrap();
        player.load(None).unwrap();

        let commands: Vec<_> = command_rx.try_iter().collect();
        assert!(matches!(
            commands.as_slice(),
            [
                VideoPlayerCommand::Load { generation: 1, .. },
                VideoPlayerCommand::Load { generation: 2, .. },
                VideoPlayerCommand::Unload { generation: 3 },
            ]
        ));
    }

    #[test]
    fn switching_source_forgets_the_old_position() {
        let (mut player, _command_rx) = VideoPlayer::detached();
        player.load(Some("http://host/a.mp4")).unwrap();
        if let Ok(mut snapshot) = player.snapshot.lock() {
            snapshot.position = 90.0;
            snapshot.duration = Some(100.0);
            snapshot.finished = true;
        }

        player.load(Some("http://host/b.mp4")).unwrap();

        assert_eq!(player.current_position(), 0.0);
        assert_eq!(player.duration(), None);
        assert!(!player.ended());
    }

    #[test]
    fn seeking_clears_the_finished_flag() {
        let (mut player, _command_rx) = VideoPlayer::detached();
        player.load(Some("http://host/a.mp4")).unwrap();
        if let Ok(mut snapshot) = player.snapshot.lock() {
            snapshot.finished = true;
        }

        player.seek_to(0.0).unwrap();

        assert!(!player.ended());
    }
}
