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

//! Event routing for the playlist view.
//!
//! Cursor movement is handled inside the view. Keys that act on the row
//! under the cursor become playlist actions.

use crossterm::event::{Event, KeyCode};

use crate::{actions::Action, components::PlaylistView};

impl PlaylistView {
    /// Moves the cursor, or maps the key to an action on the cursor row.
    pub(crate) fn process_key(&mut self, event: &Event) -> Option<Action> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(),

            KeyCode::Enter => return self.cursor().map(Action::Select),
            KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
                return self.cursor().map(Action::Remove);
            }

            _ => {}
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::Playlist;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn view(len: usize) -> PlaylistView {
        PlaylistView::new(&Playlist::new(
            (0..len).map(|i| format!("http://host/{i}.mp4")).collect(),
        ))
    }

    #[test]
    fn enter_selects_the_row_under_the_cursor() {
        let mut view = view(3);

        assert_eq!(view.process_key(&key(KeyCode::Down)), None);
        assert_eq!(view.process_key(&key(KeyCode::Enter)), Some(Action::Select(1)));
    }

    #[test]
    fn delete_keys_remove_the_row_under_the_cursor() {
        let mut view = view(3);
        view.process_key(&key(KeyCode::Char('G')));

        assert_eq!(view.process_key(&key(KeyCode::Char('d'))), Some(Action::Remove(2)));
        assert_eq!(view.process_key(&key(KeyCode::Delete)), Some(Action::Remove(2)));
    }

    #[test]
    fn empty_playlist_produces_no_actions() {
        let mut view = view(0);

        assert_eq!(view.process_key(&key(KeyCode::Enter)), None);
        assert_eq!(view.process_key(&key(KeyCode::Char('x'))), None);
    }
}
