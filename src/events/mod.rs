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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), playback updates from the
//! video worker, and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function dispatches playlist
//!    actions, mirrors playback updates for display, and manages focus.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.
//!
//! Only this loop mutates application state, so transitions are applied one
//! at a time in the order their events arrive.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::io::Stdout;

use anyhow::{Result, anyhow};
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::{error, info};

use crate::{App, actions::Action, player::PlayerState, render::draw};

/// Which component receives key input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Focus {
    Playlist,
    UrlInput,
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Action(Action),
    SetFocus(Focus),

    PlayerStateChanged(PlayerState),
    TitleChanged(String),
    DurationChanged(f64),
    TimeChanged(f64),
    VideoFinished,

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
///
/// # Errors
///
/// Returns an error on a fatal event, such as the video worker failing to
/// start, or if the terminal cannot be drawn.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if !handle_event(app, event)? {
            break;
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
///
/// Returns `false` once the application should exit.
fn handle_event(app: &mut App, event: AppEvent) -> Result<bool> {
    match event {
        AppEvent::ExitApplication => {
            info!("exit requested");
            return Ok(false);
        }
        AppEvent::FatalError(message) => {
            error!("{}", message);
            return Err(anyhow!(message));
        }

        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Action(action) => handle_action(app, action)?,
        AppEvent::SetFocus(focus) => handle_set_focus(app, focus),
        AppEvent::PlayerStateChanged(state) => handle_player_state_changed(app, state),
        AppEvent::TitleChanged(title) => handle_title_changed(app, title),
        AppEvent::DurationChanged(duration) => handle_duration_changed(app, duration),
        AppEvent::TimeChanged(secs) => handle_time_changed(app, secs),
        AppEvent::VideoFinished => handle_video_finished(app),
        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::Tick => {}
    }

    Ok(true)
}
