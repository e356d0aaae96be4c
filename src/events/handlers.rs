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

//! Handlers for individual application events.

use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    App,
    actions::{self, Action},
    events::Focus,
    player::PlayerState,
};

/// Dispatches a playlist action and brings the views in line with the
/// resulting playlist.
pub(super) fn handle_action(app: &mut App, action: Action) -> Result<()> {
    // A new action supersedes whatever the status line was reporting.
    app.status = None;

    actions::dispatch(&mut app.playlist, &mut app.video_player, action)
        .context("Failed to command the video player")?;

    app.playlist_view.sync(&app.playlist);
    app.url_input.sync(app.playlist.draft());

    Ok(())
}

pub(super) fn handle_set_focus(app: &mut App, focus: Focus) {
    debug!(?focus, "focus changed");
    app.focus = focus;
}

pub(super) fn handle_player_state_changed(app: &mut App, state: PlayerState) {
    app.player_state = state;
    if state == PlayerState::Stopped {
        app.player_title = None;
        app.player_duration = None;
        app.player_time = None;
    }
}

pub(super) fn handle_title_changed(app: &mut App, title: String) {
    app.player_title = Some(title);
}

pub(super) fn handle_duration_changed(app: &mut App, duration: f64) {
    app.player_duration = Some(duration);
}

pub(super) fn handle_time_changed(app: &mut App, seconds: f64) {
    app.player_time = Some(seconds);
}

pub(super) fn handle_video_finished(app: &mut App) {
    app.player_time = app.player_duration;
}

pub(super) fn handle_error(app: &mut App, message: String) {
    app.status = Some(message);
}
