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

//! Terminal emulator background control.
//!
//! The UI paints its own background, but the emulator shows a thin border of
//! its default colour around the grid. OSC 11 and OSC 111 let the application
//! change and later restore that colour. Emulators without support simply
//! ignore the sequences.

use std::io::{self, Write};

use ratatui::style::Color;

/// Asks the emulator to use `colour` as its background.
///
/// Only RGB colours can be expressed, any other colour is skipped.
pub(crate) fn set_terminal_bg(colour: Color) -> io::Result<()> {
    match set_bg_sequence(colour) {
        Some(sequence) => write_sequence(&sequence),
        None => Ok(()),
    }
}

/// Restores the emulator's configured background colour.
pub(crate) fn reset_terminal_bg() -> io::Result<()> {
    write_sequence("\x1b]111\x07")
}

fn set_bg_sequence(colour: Color) -> Option<String> {
    match colour {
        Color::Rgb(r, g, b) => Some(format!("\x1b]11;#{:02x}{:02x}{:02x}\x07", r, g, b)),
        _ => None,
    }
}

fn write_sequence(sequence: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(sequence.as_bytes())?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_colours_become_osc_11() {
        assert_eq!(
            set_bg_sequence(Color::Rgb(16, 16, 24)).as_deref(),
            Some("\x1b]11;#101018\x07")
        );
    }

    #[test]
    fn palette_colours_are_skipped() {
        assert_eq!(set_bg_sequence(Color::Black), None);
    }
}
