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

//! Two-phase action dispatch.
//!
//! An action is committed to the playlist first. The media surface is then
//! bound to whatever is now selected, and only after that is the resulting
//! command issued, so a command always applies to the source chosen by the
//! same action.

use tracing::debug;

use crate::{
    actions::{Action, MediaCommand, apply},
    model::Playlist,
    player::{MediaError, MediaSurface},
};

/// Applies `action` to `playlist` and drives `surface` accordingly.
///
/// # Errors
///
/// Returns an error if the surface can no longer accept commands. The
/// playlist change has already been committed when this happens.
pub(crate) fn dispatch<S>(
    playlist: &mut Playlist,
    surface: &mut S,
    action: Action,
) -> Result<(), MediaError>
where
    S: MediaSurface + ?Sized,
{
    debug!(?action, "dispatching action");

    let command = apply(playlist, action);

    surface.load(playlist.selected_url())?;

    if let Some(command) = command {
        issue(surface, command)?;
    }

    Ok(())
}

fn issue<S>(surface: &mut S, command: MediaCommand) -> Result<(), MediaError>
where
    S: MediaSurface + ?Sized,
{
    match command {
        MediaCommand::Play => {
            // A finished source plays again from the start.
            if surface.ended() {
                surface.seek_to(0.0)?;
            }
            surface.play()
        }
        MediaCommand::Pause => surface.pause(),
        MediaCommand::Stop => {
            surface.pause()?;
            surface.seek_to(0.0)
        }
        MediaCommand::SeekBy(delta) => surface.seek_by(delta),
    }
}
