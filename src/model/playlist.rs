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

//! Playlist state.
//!
//! Holds the ordered list of URLs, the selected index and the draft entry.
//!
//! Every mutation keeps the selection pointing at a valid entry, or clears it.
//! Nothing here knows about playback, the transition layer in
//! [`crate::actions`] decides which media command follows each change.

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Playlist {
    urls: Vec<String>,
    selected: Option<usize>,
    draft: String,
}

impl Playlist {
    pub(crate) fn new(urls: Vec<String>) -> Self {
        Self {
            urls,
            selected: None,
            draft: String::new(),
        }
    }

    pub(crate) fn urls(&self) -> &[String] {
        &self.urls
    }

    pub(crate) fn len(&self) -> usize {
        self.urls.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub(crate) fn selected_url(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.urls.get(index))
            .map(String::as_str)
    }

    pub(crate) fn draft(&self) -> &str {
        &self.draft
    }

    /// Selects the entry at `index`, returns `false` if there is no such entry.
    pub(crate) fn select(&mut self, index: usize) -> bool {
        if index >= self.urls.len() {
            return false;
        }

        self.selected = Some(index);
        true
    }

    /// Selects the first entry if nothing is selected yet.
    pub(crate) fn ensure_selection(&mut self) -> bool {
        if self.urls.is_empty() {
            return false;
        }

        self.selected.get_or_insert(0);
        true
    }

    /// Removes the entry at `index` and re-derives the selection.
    ///
    /// * Empty result, or no prior selection: nothing selected.
    /// * Removed entry after the selection: selection unchanged.
    /// * Otherwise: the same index if an entry still exists there, else the
    ///   first entry.
    pub(crate) fn remove(&mut self, index: usize) -> bool {
        if index >= self.urls.len() {
            return false;
        }

        self.urls.remove(index);

        self.selected = match self.selected {
            _ if self.urls.is_empty() => None,
            None => None,
            Some(selected) if index > selected => Some(selected),
            Some(_) if index < self.urls.len() => Some(index),
            Some(_) => Some(0),
        };

        true
    }

    /// Moves the selection back one entry, wrapping to the last entry.
    pub(crate) fn previous(&mut self) -> bool {
        let len = self.urls.len();
        if len == 0 {
            return false;
        }

        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
        true
    }

    /// Moves the selection forward one entry, wrapping to the first entry.
    pub(crate) fn next(&mut self) -> bool {
        let len = self.urls.len();
        if len == 0 {
            return false;
        }

        self.selected = Some(match self.selected {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        });
        true
    }

    pub(crate) fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Appends the draft to the playlist and clears it.
    ///
    /// An empty draft is left alone and `false` returned.
    pub(crate) fn commit_draft(&mut self) -> bool {
        if self.draft.is_empty() {
            return false;
        }

        self.urls.push(std::mem::take(&mut self.draft));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn playlist(urls: &[&str], selected: Option<usize>) -> Playlist {
        let mut playlist = Playlist::new(urls.iter().map(|u| u.to_string()).collect());
        if let Some(index) = selected {
            assert!(playlist.select(index));
        }
        playlist
    }

    #[test]
    fn starts_with_nothing_selected() {
        let playlist = playlist(&["A", "B"], None);

        assert_eq!(playlist.selected(), None);
        assert_eq!(playlist.selected_url(), None);
        assert_eq!(playlist.draft(), "");
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut playlist = playlist(&["A", "B"], Some(1));

        assert!(!playlist.select(2));
        assert_eq!(playlist.selected(), Some(1));
    }

    #[test]
    fn removing_before_selection_keeps_the_same_url_selected() {
        let mut playlist = playlist(&["A", "B", "C"], Some(1));

        assert!(playlist.remove(0));

        assert_eq!(playlist.urls(), ["B", "C"]);
        assert_eq!(playlist.selected(), Some(0));
        assert_eq!(playlist.selected_url(), Some("B"));
    }

    #[test]
    fn removing_the_selected_last_entry_falls_back_to_first() {
        let mut playlist = playlist(&["A", "B", "C"], Some(2));

        playlist.remove(2);

        assert_eq!(playlist.selected(), Some(0));
        assert_eq!(playlist.selected_url(), Some("A"));
    }

    #[test]
    fn removing_the_selected_entry_selects_its_successor() {
        let mut playlist = playlist(&["A", "B", "C"], Some(1));

        playlist.remove(1);

        assert_eq!(playlist.selected_url(), Some("C"));
    }

    #[test]
    fn removing_after_selection_leaves_it_alone() {
        let mut playlist = playlist(&["A", "B", "C"], Some(0));

        playlist.remove(2);

        assert_eq!(playlist.selected(), Some(0));
        assert_eq!(playlist.selected_url(), Some("A"));
    }

    #[test]
    fn removing_without_selection_keeps_nothing_selected() {
        let mut playlist = playlist(&["A", "B"], None);

        playlist.remove(0);

        assert_eq!(playlist.selected(), None);
        assert_eq!(playlist.urls(), ["B"]);
    }

    #[test]
    fn removing_the_only_entry_clears_the_selection() {
        let mut playlist = playlist(&["A"], Some(0));

        playlist.remove(0);

        assert!(playlist.is_empty());
        assert_eq!(playlist.selected(), None);
    }

    #[test]
    fn next_wraps_to_first_entry() {
        let mut playlist = playlist(&["A", "B", "C"], Some(2));

        playlist.next();

        assert_eq!(playlist.selected(), Some(0));
    }

    #[test]
    fn previous_without_selection_jumps_to_last_entry() {
        let mut playlist = playlist(&["A", "B", "C"], None);

        playlist.previous();

        assert_eq!(playlist.selected(), Some(2));
    }

    #[test]
    fn next_without_selection_starts_at_first_entry() {
        let mut playlist = playlist(&["A", "B", "C"], None);

        playlist.next();

        assert_eq!(playlist.selected(), Some(0));
    }

    #[test]
    fn navigation_on_empty_playlist_does_nothing() {
        let mut playlist = playlist(&[], None);

        assert!(!playlist.next());
        assert!(!playlist.previous());
        assert!(!playlist.ensure_selection());
        assert!(!playlist.remove(0));
        assert_eq!(playlist.selected(), None);
    }

    #[test]
    fn ensure_selection_keeps_an_existing_selection() {
        let mut playlist = playlist(&["A", "B"], Some(1));

        assert!(playlist.ensure_selection());
        assert_eq!(playlist.selected(), Some(1));
    }

    #[test]
    fn empty_draft_is_not_committed() {
        let mut playlist = playlist(&["A"], None);

        assert!(!playlist.commit_draft());
        assert_eq!(playlist.urls(), ["A"]);
        assert_eq!(playlist.draft(), "");
    }

    #[test]
    fn committed_draft_is_appended_and_cleared() {
        let mut playlist = playlist(&["A"], Some(0));
        playlist.set_draft("http://example.com/clip.mp4".to_string());

        assert!(playlist.commit_draft());

        assert_eq!(playlist.urls(), ["A", "http://example.com/clip.mp4"]);
        assert_eq!(playlist.draft(), "");
        assert_eq!(playlist.selected(), Some(0));
    }

    #[test]
    fn duplicate_urls_are_permitted() {
        let mut playlist = playlist(&["A"], None);
        playlist.set_draft("A".to_string());
        playlist.commit_draft();

        assert_eq!(playlist.urls(), ["A", "A"]);
    }

    fn seeded(len: usize, selected: Option<usize>) -> Playlist {
        let urls = (0..len).map(|i| format!("http://host/{i}.mp4")).collect();
        let mut playlist = Playlist::new(urls);
        if let Some(index) = selected {
            playlist.select(index);
        }
        playlist
    }

    fn playlist_with_selection() -> impl Strategy<Value = Playlist> {
        (1usize..12).prop_flat_map(|len| {
            proptest::option::of(0..len).prop_map(move |selected| seeded(len, selected))
        })
    }

    fn selected_and_later_index() -> impl Strategy<Value = (usize, usize, usize)> {
        (2usize..12)
            .prop_flat_map(|len| (Just(len), 0..len - 1))
            .prop_flat_map(|(len, selected)| (Just(len), Just(selected), selected + 1..len))
    }

    fn selected_and_earlier_index() -> impl Strategy<Value = (usize, usize, usize)> {
        (2usize..12)
            .prop_flat_map(|len| (Just(len), 0..len))
            .prop_flat_map(|(len, selected)| (Just(len), Just(selected), 0..=selected))
    }

    proptest! {
        #[test]
        fn next_then_previous_is_an_inverse_pair(
            (len, selected) in (1usize..12).prop_flat_map(|len| (Just(len), 0..len)),
        ) {
            let mut playlist = seeded(len, Some(selected));

            playlist.next();
            playlist.previous();
            prop_assert_eq!(playlist.selected(), Some(selected));

            playlist.previous();
            playlist.next();
            prop_assert_eq!(playlist.selected(), Some(selected));
        }

        #[test]
        fn selection_stays_in_bounds_after_remove(
            mut playlist in playlist_with_selection(),
            index in 0usize..12,
        ) {
            playlist.remove(index);

            if let Some(selected) = playlist.selected() {
                prop_assert!(selected < playlist.len());
            }
        }

        #[test]
        fn remove_after_selection_keeps_the_selected_url(
            (len, selected, index) in selected_and_later_index(),
        ) {
            let mut playlist = seeded(len, Some(selected));
            let url = playlist.selected_url().map(str::to_string);

            playlist.remove(index);

            prop_assert_eq!(playlist.selected(), Some(selected));
            prop_assert_eq!(playlist.selected_url().map(str::to_string), url);
        }

        #[test]
        fn remove_at_or_before_selection_reclamps(
            (len, selected, index) in selected_and_earlier_index(),
        ) {
            let mut playlist = seeded(len, Some(selected));

            playlist.remove(index);

            let expected = if index < playlist.len() { index } else { 0 };
            prop_assert_eq!(playlist.selected(), Some(expected));
        }

        #[test]
        fn commit_appends_exactly_the_draft(
            mut playlist in playlist_with_selection(),
            draft in "[a-z:/.]{1,24}",
        ) {
            let mut expected = playlist.urls().to_vec();
            expected.push(draft.clone());
            let selected = playlist.selected();

            playlist.set_draft(draft);
            prop_assert!(playlist.commit_draft());

            prop_assert_eq!(playlist.urls(), expected.as_slice());
            prop_assert_eq!(playlist.draft(), "");
            prop_assert_eq!(playlist.selected(), selected);
        }
    }
}
