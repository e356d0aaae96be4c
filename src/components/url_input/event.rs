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

//! Event routing for the URL input.
//!
//! While focused, the input consumes every key. Enter commits the draft and
//! Esc or Tab hands focus back to the playlist.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    actions::Action,
    components::UrlInput,
    events::{AppEvent, Focus},
};

impl UrlInput {
    /// Edits the input, and returns the event the key stands for.
    ///
    /// The returned event must be applied before the next key is read, an
    /// edit that trails behind the input would overwrite it on sync.
    pub(crate) fn process_key(&mut self, event: &Event) -> Option<AppEvent> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Esc | KeyCode::Tab => Some(AppEvent::SetFocus(Focus::Playlist)),

            KeyCode::Enter => Some(AppEvent::Action(Action::CommitDraft)),

            _ => {
                // Delegate all other key events to the managed input component.
                let before = self.input.value().to_string();
                self.input.handle_event(event);

                (self.input.value() != before).then(|| {
                    let draft = self.input.value().to_string();
                    AppEvent::Action(Action::UpdateDraft(draft))
                })
            }
        }
    }
}
