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

//! URL entry for new playlist items.
//!
//! This component wraps a text input. Every edit is mirrored into the
//! playlist draft through an action, and Enter commits the draft. The input
//! follows the draft back, so clearing the draft on commit also clears the
//! input.

mod event;
mod render;

use tui_input::Input;

pub(crate) const PLACEHOLDER: &str = "Provide video url and press enter to add...";

pub(crate) struct UrlInput {
    pub(crate) input: Input,
}

impl UrlInput {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
        }
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    /// Replaces the input text with `draft` if the two have diverged.
    pub(crate) fn sync(&mut self, draft: &str) {
        if self.input.value() != draft {
            self.input = Input::new(draft.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_clears_the_input_once_the_draft_is_committed() {
        let mut url_input = UrlInput::new();
        url_input.sync("http://host/a.mp4");
        assert_eq!(url_input.value(), "http://host/a.mp4");

        url_input.sync("");
        assert_eq!(url_input.value(), "");
    }

    #[test]
    fn sync_keeps_the_cursor_when_nothing_changed() {
        let mut url_input = UrlInput::new();
        url_input.input = Input::new("abc".to_string()).with_cursor(1);

        url_input.sync("abc");

        assert_eq!(url_input.input.cursor(), 1);
    }
}
