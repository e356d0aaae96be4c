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

//! Playlist view state.
//!
//! The view keeps a cursor over the playlist rows. The cursor is what the
//! user points at; the selection, i.e. the entry bound to the player, only
//! changes when an action is dispatched.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::model::Playlist;

pub(crate) struct PlaylistView {
    pub(crate) list_state: ListState,
    len: usize,
}

impl PlaylistView {
    pub(crate) fn new(playlist: &Playlist) -> Self {
        let mut view = Self {
            list_state: ListState::default(),
            len: 0,
        };
        view.sync(playlist);
        view
    }

    /// Keeps the cursor on an existing row after the playlist has changed.
    pub(crate) fn sync(&mut self, playlist: &Playlist) {
        self.len = playlist.len();

        match self.list_state.selected() {
            _ if self.len == 0 => self.list_state.select(None),
            None => self.list_state.select(Some(0)),
            Some(i) if i >= self.len => self.list_state.select(Some(self.len - 1)),
            Some(_) => {}
        }
    }

    pub(crate) fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }

    fn goto_next(&mut self) {
        let len = self.len;
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.len;
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) => len - 1,
            Some(i) => i - 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if self.len > 0 {
            self.list_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if self.len > 0 {
            self.list_state.select(Some(self.len - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist(len: usize) -> Playlist {
        Playlist::new((0..len).map(|i| format!("http://host/{i}.mp4")).collect())
    }

    #[test]
    fn cursor_starts_on_first_row() {
        let view = PlaylistView::new(&playlist(3));

        assert_eq!(view.cursor(), Some(0));
    }

    #[test]
    fn cursor_is_clamped_when_rows_disappear() {
        let mut view = PlaylistView::new(&playlist(3));
        view.goto_last();

        view.sync(&playlist(2));
        assert_eq!(view.cursor(), Some(1));

        view.sync(&playlist(0));
        assert_eq!(view.cursor(), None);
    }

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut view = PlaylistView::new(&playlist(3));

        view.goto_previous();
        assert_eq!(view.cursor(), Some(2));

        view.goto_next();
        assert_eq!(view.cursor(), Some(0));
    }
}
