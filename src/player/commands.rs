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

//! MPV-backed video playback engine and event processing.
//!
//! This module provides the core playback logic, leveraging `libmpv` for
//! fetching, decoding and displaying video. It manages a background worker
//! thread that bridges the gap between the application's command-based
//! interface and the low-level MPV property observation system.
//!
//! # Architecture
//!
//! The engine operates using a dual-channel communication pattern:
//! 1. **Command Channel**: Receives [`VideoPlayerCommand`]s from the shell to
//!    control playback (load, play, pause, seek).
//! 2. **Event Channel**: Broadcasts [`AppEvent`]s to notify the UI of state
//!    changes, such as progress, duration and title changes.
//!
//! Position and duration are additionally written to a shared
//! [`PlaybackSnapshot`] so that relative seeks can be clamped synchronously.

use anyhow::{Context, Result};
use mpv::Format;
use std::{
    sync::{
        Arc, Mutex,
        mpsc::{self, Receiver, Sender, TryRecvError},
    },
    thread,
};
use tracing::{error, info, warn};

use crate::{
    events::AppEvent,
    player::{MediaError, PlaybackSnapshot, PlayerState, VideoPlayer},
};

/// Seconds to wait for an MPV event before checking for commands again.
const EVENT_WAIT_SECS: f64 = 0.05;

#[derive(Debug)]
pub(crate) enum VideoPlayerCommand {
    Load { url: String, generation: u64 },
    Unload { generation: u64 },
    Play,
    Pause,
    SeekTo(f64),
}

impl VideoPlayerCommand {
    fn describe(&self) -> String {
        match self {
            VideoPlayerCommand::Load { url, .. } => format!("loadfile {}", url),
            VideoPlayerCommand::Unload { .. } => "stop".to_string(),
            VideoPlayerCommand::Play => "set pause no".to_string(),
            VideoPlayerCommand::Pause => "set pause yes".to_string(),
            VideoPlayerCommand::SeekTo(seconds) => format!("seek {} absolute", seconds),
        }
    }
}

/// Tracks MPV flags between events so state changes are only broadcast once.
#[derive(Debug)]
struct WorkerState {
    is_paused: bool,
    is_idle: bool,
    player_state: PlayerState,

    /// Generation of the last source change sent to MPV.
    generation: u64,

    /// Loads sent to MPV whose file has not started yet.
    pending_starts: u32,
}

impl WorkerState {
    fn new() -> Self {
        Self {
            is_paused: false,
            is_idle: true,
            player_state: PlayerState::Stopped,
            generation: 0,
            pending_starts: 0,
        }
    }

    fn source_loaded(&mut self, generation: u64) {
        self.generation = generation;
        self.pending_starts += 1;
    }

    fn source_unloaded(&mut self, generation: u64) {
        self.generation = generation;
        self.pending_starts = 0;
    }

    fn file_started(&mut self) {
        self.pending_starts = self.pending_starts.saturating_sub(1);
    }

    /// Reports from MPV describe the current source only once its file has
    /// started and no newer source has been chosen since.
    fn is_current(&self, snapshot: &PlaybackSnapshot) -> bool {
        self.pending_starts == 0 && self.generation == snapshot.generation
    }
}

/// Applies `update` to the snapshot if MPV is reporting on the current
/// source, returns whether it did.
fn record(
    state: &WorkerState,
    snapshot: &Mutex<PlaybackSnapshot>,
    update: impl FnOnce(&mut PlaybackSnapshot),
) -> bool {
    match snapshot.lock() {
        Ok(mut snapshot) if state.is_current(&snapshot) => {
            update(&mut snapshot);
            true
        }
        _ => false,
    }
}

/// Spawns the video worker thread to process playback commands.
///
/// If the worker fails to start MPV, or loses its event channel, the error is
/// broadcast as a fatal application event.
///
/// # Arguments
///
/// * `video_output` - The MPV `vo` driver.
/// * `command_rx` - The receiving end of the player command channel.
/// * `snapshot` - Shared position and duration read by the player handle.
/// * `event_tx` - The channel used to broadcast playback updates and errors.
pub(crate) fn spawn_player_worker(
    video_output: String,
    command_rx: Receiver<VideoPlayerCommand>,
    snapshot: Arc<Mutex<PlaybackSnapshot>>,
    event_tx: Sender<AppEvent>,
) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = video_player_worker(&video_output, command_rx, &snapshot, event_tx) {
            error!("MPV worker failure: {:?}", e);
            let _ = error_tx.send(AppEvent::FatalError(format!("MPV worker failure: {:?}", e)));
        }
    });
}

fn create_handler(video_output: &str) -> Result<mpv::MpvHandler> {
    let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
    builder
        .set_option("vo", video_output)
        .context("Failed to set video output")?;
    builder
        .set_option("keep-open", "yes")
        .context("Failed to set keep-open")?;
    builder
        .set_option("idle", "yes")
        .context("Failed to set idle")?;
    builder.build().context("Failed to build MPV handler")
}

/// The primary execution loop for the video player backend.
///
/// Runs until the player handle is dropped, which closes the command channel.
///
/// # Errors
///
/// Returns an error if the MPV context fails to initialize or if the event
/// channel back to the application is closed.
fn video_player_worker(
    video_output: &str,
    command_rx: Receiver<VideoPlayerCommand>,
    snapshot: &Mutex<PlaybackSnapshot>,
    event_tx: Sender<AppEvent>,
) -> Result<()> {
    let mut handler = create_handler(video_output)?;

    handler
        .observe_property::<&str>("media-title", 0)
        .context("Failed to observe media-title")?;
    handler
        .observe_property::<f64>("duration", 0)
        .context("Failed to observe duration")?;
    handler
        .observe_property::<bool>("pause", 0)
        .context("Failed to observe pause")?;
    handler
        .observe_property::<f64>("time-pos", 0)
        .context("Failed to observe time-pos")?;
    handler
        .observe_property::<bool>("idle-active", 0)
        .context("Failed to observe idle-active")?;
    handler
        .observe_property::<bool>("eof-reached", 0)
        .context("Failed to observe eof-reached")?;

    info!(video_output, "MPV worker started");

    let mut state = WorkerState::new();

    while process_commands(&mut handler, &mut state, &command_rx, &event_tx)? {
        process_mpv_events(&mut handler, &mut state, snapshot, &event_tx)?;
    }

    info!("MPV worker stopped");

    Ok(())
}

/// Drains and executes all pending commands from the application channel.
///
/// A rejected command is reported and skipped, it does not stop the worker.
/// Returns `false` once the player handle has gone away.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    state: &mut WorkerState,
    command_rx: &Receiver<VideoPlayerCommand>,
    event_tx: &Sender<AppEvent>,
) -> Result<bool> {
    loop {
        let command = match command_rx.try_recv() {
            Ok(command) => command,
            Err(TryRecvError::Empty) => return Ok(true),
            Err(TryRecvError::Disconnected) => return Ok(false),
        };

        match execute_command(handler, &command) {
            Ok(()) => match command {
                VideoPlayerCommand::Load { generation, .. } => state.source_loaded(generation),
                VideoPlayerCommand::Unload { generation } => state.source_unloaded(generation),
                _ => {}
            },
            Err(e) => {
                warn!("{}", e);
                event_tx
                    .send(AppEvent::Error(e.to_string()))
                    .context("Failed to send error event")?;
            }
        }
    }
}

fn execute_command(
    handler: &mut mpv::MpvHandler,
    command: &VideoPlayerCommand,
) -> Result<(), MediaError> {
    let result = match command {
        // Sources start paused, playback waits for an explicit play.
        VideoPlayerCommand::Load { url, .. } => match handler.set_property("pause", true) {
            Ok(()) => handler.command(&["loadfile", url.as_str(), "replace"]),
            Err(e) => Err(e),
        },
        VideoPlayerCommand::Unload { .. } => handler.command(&["stop"]),
        VideoPlayerCommand::Play => handler.set_property("pause", false),
        VideoPlayerCommand::Pause => handler.set_property("pause", true),
        VideoPlayerCommand::SeekTo(seconds) => {
            let position = seconds.to_string();
            handler.command(&["seek", position.as_str(), "absolute"])
        }
    };

    result.map_err(|e| MediaError::Backend {
        command: command.describe(),
        reason: format!("{:?}", e),
    })
}

/// Polls for MPV events and synchronizes the application state.
///
/// This function waits briefly for an event from the MPV context. If an event
/// occurs, it updates the shared snapshot and internal flags and broadcasts
/// any necessary [`AppEvent`]s to the UI.
///
/// Position reports still queued for a replaced source are dropped.
fn process_mpv_events(
    handler: &mut mpv::MpvHandler,
    state: &mut WorkerState,
    snapshot: &Mutex<PlaybackSnapshot>,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<()> {
    if let Some(mpv_event) = handler.wait_event(EVENT_WAIT_SECS) {
        let app_event = match mpv_event {
            mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
                ("media-title", Format::Str(title)) => {
                    Some(AppEvent::TitleChanged(title.to_string()))
                }
                ("duration", Format::Double(duration)) => {
                    record(state, snapshot, |snapshot| snapshot.duration = Some(duration))
                        .then_some(AppEvent::DurationChanged(duration))
                }
                ("pause", Format::Flag(pause)) => {
                    state.is_paused = pause;
                    None
                }
                ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => {
                    record(state, snapshot, |snapshot| snapshot.position = seconds)
                        .then_some(AppEvent::TimeChanged(seconds))
                }
                ("idle-active", Format::Flag(idle_active)) => {
                    state.is_idle = idle_active;
                    None
                }
                ("eof-reached", Format::Flag(finished)) => {
                    let current = record(state, snapshot, |snapshot| snapshot.finished = finished);
                    (current && finished).then_some(AppEvent::VideoFinished)
                }
                _ => None,
            },
            mpv::Event::StartFile => {
                state.file_started();
                None
            }
            mpv::Event::EndFile(Err(e)) => {
                // Load and stream failures stay with MPV, they are only logged.
                warn!("MPV could not play the source: {:?}", e);
                None
            }
            _ => None,
        };

        let new_player_state = VideoPlayer::player_state(state.is_paused, state.is_idle);

        if new_player_state != state.player_state {
            state.player_state = new_player_state;
            event_tx
                .send(AppEvent::PlayerStateChanged(new_player_state))
                .context("Failed to send player state event")?;
        }

        if let Some(event) = app_event {
            event_tx.send(event).context("Failed to send event")?;
        }
    }

    Ok(())
}
