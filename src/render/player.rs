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

//! Render the video player panel.
//!
//! This module renders what is playing, the playback state and time, the
//! transport controls with their keys, and a position bar.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    player::PlayerState,
    render::icons::{ICON_FF, ICON_NEXT, ICON_PAUSE, ICON_PLAY, ICON_PREV, ICON_RW, ICON_STOP},
    util::format::{format_time, whole_seconds},
};

/// Transport controls in display order, with the key that triggers each.
const CONTROLS: [(&str, &str); 6] = [
    (ICON_PREV, "b"),
    (ICON_RW, ","),
    (ICON_PLAY, "p"),
    (ICON_PAUSE, "space"),
    (ICON_FF, "."),
    (ICON_NEXT, "n"),
];

/// Renders the main player widget including now playing and controls.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(chunks[0]);

    let bold = Style::default().add_modifier(Modifier::BOLD);

    let icon = match app.player_state {
        PlayerState::Playing => ICON_PLAY,
        PlayerState::Paused => ICON_PAUSE,
        PlayerState::Stopped => ICON_STOP,
    };

    let title = app
        .player_title
        .as_deref()
        .or(app.playlist.selected_url())
        .unwrap_or("Nothing selected");

    let title_line = Line::from(vec![
        Span::styled(format!(" {} ", icon), bold).fg(app.theme.text_colour),
        Span::styled(title, bold).fg(app.theme.accent_colour),
    ]);
    f.render_widget(Paragraph::new(title_line), info_chunks[0]);

    if let Some(duration) = app.player_duration {
        let duration = whole_seconds(duration);
        let time = app.player_time.map(whole_seconds).unwrap_or(0);
        let remaining = duration.saturating_sub(time);

        let time_line = Line::from(vec![
            Span::styled(format_time(time), bold).fg(app.theme.accent_colour),
            Span::styled(" / ", bold).fg(app.theme.text_colour),
            Span::styled(format_time(duration), bold).fg(app.theme.accent_colour),
            Span::styled(" (-", bold).fg(app.theme.text_colour),
            Span::styled(format_time(remaining), bold).fg(app.theme.accent_colour),
            Span::styled(")", bold).fg(app.theme.text_colour),
        ]);

        f.render_widget(
            Paragraph::new(time_line).alignment(Alignment::Right),
            info_chunks[1],
        );
    }

    let mut control_spans = Vec::with_capacity(CONTROLS.len() * 2);
    for (icon, key) in CONTROLS {
        control_spans.push(Span::styled(format!(" {} ", icon), bold).fg(app.theme.text_colour));
        control_spans.push(Span::raw(format!("{}  ", key)).fg(app.theme.dim_text_colour));
    }

    f.render_widget(
        Paragraph::new(Line::from(control_spans)).alignment(Alignment::Center),
        chunks[2],
    );

    let position = match (app.player_time, app.player_duration) {
        (Some(time), Some(duration)) if duration > 0.0 => (time / duration).clamp(0.0, 1.0),
        _ => 0.0,
    };

    let position_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .bg(app.theme.gauge_track_colour),
        )
        .ratio(position)
        .label("")
        .use_unicode(true);

    f.render_widget(position_gauge, chunks[3]);
}
