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

//! Visual styling and colour configuration for the TUI.
//!
//! This module defines the application's colour palette. Everything drawn by
//! the shell takes its colours from a [`Theme`].

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) focus_border_colour: Color,
    pub(crate) gauge_track_colour: Color,

    pub(crate) text_colour: Color,
    pub(crate) dim_text_colour: Color,
    pub(crate) error_colour: Color,

    /// Shading for every other playlist row.
    pub(crate) alternate_row_colour: Color,
    pub(crate) cursor_fg: Color,
    pub(crate) cursor_bg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(16, 16, 24),
            accent_colour: Color::Rgb(229, 57, 53),
            border_colour: Color::Rgb(102, 102, 102),
            focus_border_colour: Color::Rgb(211, 211, 211),
            gauge_track_colour: Color::Rgb(40, 40, 52),

            text_colour: Color::Rgb(235, 235, 235),
            dim_text_colour: Color::Rgb(140, 140, 150),
            error_colour: Color::Rgb(255, 110, 90),

            alternate_row_colour: Color::Rgb(24, 28, 40),
            cursor_fg: Color::Rgb(255, 255, 255),
            cursor_bg: Color::Rgb(50, 70, 120),
        }
    }
}
