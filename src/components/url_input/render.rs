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

//! Render the URL input.
//!
//! This module renders the current draft, or a placeholder while it is empty,
//! and places the terminal cursor when the input has focus.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::PLACEHOLDER;
use crate::{components::UrlInput, theme::Theme};

impl UrlInput {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let border_colour = if focused {
            theme.focus_border_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Add video ")
            .border_style(Style::default().fg(border_colour))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        let width = inner.width.max(1) as usize;
        let scroll = self.input.visual_scroll(width);

        let paragraph = if self.value().is_empty() {
            Paragraph::new(PLACEHOLDER).style(
                Style::default()
                    .fg(theme.dim_text_colour)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Paragraph::new(self.value())
                .style(Style::default().fg(theme.text_colour))
                .scroll((0, scroll as u16))
        };

        f.render_widget(paragraph.block(block), area);

        if focused {
            let offset = self.input.visual_cursor().saturating_sub(scroll);
            f.set_cursor_position((inner.x + offset as u16, inner.y));
        }
    }
}
