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

//! The playlist transition table.

use crate::{
    actions::{Action, MediaCommand},
    model::Playlist,
};

/// Applies `action` to the playlist and returns the media command that must
/// follow it.
///
/// Actions that cannot apply (empty playlist, index out of range, empty
/// draft) leave the playlist untouched and return `None`.
pub(crate) fn apply(playlist: &mut Playlist, action: Action) -> Option<MediaCommand> {
    match action {
        Action::Select(index) => playlist.select(index).then_some(MediaCommand::Play),

        Action::Remove(index) => {
            if !playlist.remove(index) {
                return None;
            }

            // Decided from the updated selection.
            match playlist.selected() {
                Some(_) => Some(MediaCommand::Play),
                None => Some(MediaCommand::Stop),
            }
        }

        Action::Previous => playlist.previous().then_some(MediaCommand::Play),
        Action::Next => playlist.next().then_some(MediaCommand::Play),

        Action::Rewind(seconds) => {
            (!playlist.is_empty()).then_some(MediaCommand::SeekBy(-seconds))
        }
        Action::FastForward(seconds) => {
            (!playlist.is_empty()).then_some(MediaCommand::SeekBy(seconds))
        }

        Action::Play => playlist.ensure_selection().then_some(MediaCommand::Play),
        Action::Pause => (!playlist.is_empty()).then_some(MediaCommand::Pause),

        Action::UpdateDraft(text) => {
            playlist.set_draft(text);
            None
        }
        Action::CommitDraft => {
            playlist.commit_draft();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist(urls: &[&str], selected: Option<usize>) -> Playlist {
        let mut playlist = Playlist::new(urls.iter().map(|u| u.to_string()).collect());
        if let Some(index) = selected {
            playlist.select(index);
        }
        playlist
    }

    #[test]
    fn select_plays_the_chosen_entry() {
        let mut playlist = playlist(&["A", "B"], None);

        assert_eq!(apply(&mut playlist, Action::Select(1)), Some(MediaCommand::Play));
        assert_eq!(playlist.selected_url(), Some("B"));
    }

    #[test]
    fn select_out_of_range_issues_nothing() {
        let mut playlist = playlist(&["A"], None);

        assert_eq!(apply(&mut playlist, Action::Select(4)), None);
        assert_eq!(playlist.selected(), None);
    }

    #[test]
    fn remove_before_selection_keeps_playing_the_same_url() {
        let mut playlist = playlist(&["A", "B", "C"], Some(1));

        assert_eq!(apply(&mut playlist, Action::Remove(0)), Some(MediaCommand::Play));
        assert_eq!(playlist.urls(), ["B", "C"]);
        assert_eq!(playlist.selected(), Some(0));
    }

    #[test]
    fn remove_of_last_entry_stops_playback() {
        let mut playlist = playlist(&["A"], Some(0));

        assert_eq!(apply(&mut playlist, Action::Remove(0)), Some(MediaCommand::Stop));
        assert_eq!(playlist.selected(), None);
    }

    #[test]
    fn remove_without_selection_stops_playback() {
        let mut playlist = playlist(&["A", "B"], None);

        assert_eq!(apply(&mut playlist, Action::Remove(1)), Some(MediaCommand::Stop));
    }

    #[test]
    fn next_wraps_and_plays() {
        let mut playlist = playlist(&["A", "B", "C"], Some(2));

        assert_eq!(apply(&mut playlist, Action::Next), Some(MediaCommand::Play));
        assert_eq!(playlist.selected_url(), Some("A"));
    }

    #[test]
    fn play_without_selection_starts_at_first_entry() {
        let mut playlist = playlist(&["A", "B"], None);

        assert_eq!(apply(&mut playlist, Action::Play), Some(MediaCommand::Play));
        assert_eq!(playlist.selected(), Some(0));
    }

    #[test]
    fn seeking_is_relative_to_the_step() {
        let mut playlist = playlist(&["A"], None);

        assert_eq!(apply(&mut playlist, Action::Rewind(10.0)), Some(MediaCommand::SeekBy(-10.0)));
        assert_eq!(
            apply(&mut playlist, Action::FastForward(10.0)),
            Some(MediaCommand::SeekBy(10.0))
        );
        assert_eq!(apply(&mut playlist, Action::Pause), Some(MediaCommand::Pause));
    }

    #[test]
    fn empty_playlist_ignores_transport_actions() {
        let actions = [
            Action::Remove(0),
            Action::Next,
            Action::Previous,
            Action::Play,
            Action::Pause,
            Action::Rewind(10.0),
            Action::FastForward(10.0),
            Action::Select(0),
        ];

        for action in actions {
            let mut playlist = playlist(&[], None);
            assert_eq!(apply(&mut playlist, action.clone()), None, "{:?}", action);
            assert_eq!(playlist.selected(), None);
        }
    }

    #[test]
    fn draft_actions_never_touch_playback() {
        let mut playlist = playlist(&["A"], Some(0));

        assert_eq!(apply(&mut playlist, Action::UpdateDraft("B".to_string())), None);
        assert_eq!(playlist.draft(), "B");

        assert_eq!(apply(&mut playlist, Action::CommitDraft), None);
        assert_eq!(playlist.urls(), ["A", "B"]);
        assert_eq!(playlist.draft(), "");
        assert_eq!(playlist.selected(), Some(0));
    }

    #[test]
    fn committing_an_empty_draft_changes_nothing() {
        let mut playlist = playlist(&["A"], None);
        let before = playlist.clone();

        apply(&mut playlist, Action::CommitDraft);

        assert_eq!(playlist, before);
    }
}
