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

//! Playlist actions and their effect on playback.
//!
//! This module is the "Controller" logic of the player shell. Every user
//! interaction is expressed as an [`Action`], and handled in two ordered
//! phases:
//!
//! * [`transitions`]: a pure function applying an action to the
//!   [`Playlist`](crate::model::Playlist) and yielding the follow-up
//!   [`MediaCommand`], if any.
//! * [`dispatch`]: binds the media surface to the newly selected source and
//!   then issues that command.

pub(crate) mod dispatch;
pub(crate) mod transitions;

pub(crate) use dispatch::dispatch;
pub(crate) use transitions::apply;

/// A user interaction with the player shell.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Action {
    Select(usize),
    Remove(usize),
    Previous,
    Next,
    Rewind(f64),
    FastForward(f64),
    Play,
    Pause,
    UpdateDraft(String),
    CommitDraft,
}

/// An imperative command for the media surface, issued after the state
/// change that caused it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum MediaCommand {
    Play,
    Pause,
    /// Pause and return to the start.
    Stop,
    SeekBy(f64),
}
