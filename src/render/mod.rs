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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface. The video
//! itself is shown by MPV in its own window.

pub(crate) mod icons;
mod player;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Paragraph},
};

use crate::{App, events::Focus, render::player::draw_player};

const PLAYLIST_HELP: &str =
    "enter play row | d remove | b/n prev/next | ,/. seek | p play | space pause | a add | q quit";
const INPUT_HELP: &str = "enter add to playlist | esc back";

/// Renders the user interface to the terminal frame.
///
/// The screen is split, top to bottom, into the playlist, the URL input, the
/// player panel and a status line.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to update internal view state (like list scroll positions).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .split(area);

    app.playlist_view.draw(
        f,
        outer[0],
        &app.playlist,
        &app.theme,
        app.focus == Focus::Playlist,
    );

    app.url_input
        .draw(f, outer[1], &app.theme, app.focus == Focus::UrlInput);

    draw_player(f, outer[2], app);

    draw_status(f, outer[3], app);
}

/// Renders the last reported error, or key help for the focused component.
fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let status = match (&app.status, app.focus) {
        (Some(message), _) => {
            Paragraph::new(message.as_str()).style(Style::default().fg(app.theme.error_colour))
        }
        (None, Focus::Playlist) => {
            Paragraph::new(PLAYLIST_HELP).style(Style::default().fg(app.theme.dim_text_colour))
        }
        (None, Focus::UrlInput) => {
            Paragraph::new(INPUT_HELP).style(Style::default().fg(app.theme.dim_text_colour))
        }
    };

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    f.render_widget(status, container[0]);
}
