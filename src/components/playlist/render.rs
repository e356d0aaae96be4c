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

//! UI rendering logic for the playlist view.
//!
//! Rows are listed by position, so duplicate URLs are drawn as separate rows.
//! The entry bound to the player is marked and drawn in bold, the cursor row
//! is highlighted, and every other row is shaded.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
};

use crate::{components::PlaylistView, model::Playlist, render::icons::ICON_PLAY, theme::Theme};

impl PlaylistView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        playlist: &Playlist,
        theme: &Theme,
        focused: bool,
    ) {
        let items: Vec<ListItem> = playlist
            .urls()
            .iter()
            .enumerate()
            .map(|(index, url)| {
                let is_selected = playlist.selected() == Some(index);

                let mut style = Style::default().fg(theme.text_colour);
                if index % 2 == 1 {
                    style = style.bg(theme.alternate_row_colour);
                }
                if is_selected {
                    style = style.fg(theme.accent_colour).add_modifier(Modifier::BOLD);
                }

                let marker = if is_selected { ICON_PLAY } else { " " };

                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", marker)),
                    Span::raw(url.as_str()),
                ]))
                .style(style)
            })
            .collect();

        let border_colour = if focused {
            theme.focus_border_colour
        } else {
            theme.border_colour
        };

        let title = match playlist.len() {
            1 => " Playlist | 1 video ".to_string(),
            n => format!(" Playlist | {} videos ", n),
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(border_colour))
                    .padding(Padding::horizontal(1)),
            )
            .highlight_style(Style::default().fg(theme.cursor_fg).bg(theme.cursor_bg))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}
