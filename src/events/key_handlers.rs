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

//! Keyboard routing.
//!
//! Keys go to the focused component first. With the playlist focused, keys
//! the playlist view does not use fall through to the transport controls.
//!
//! Actions and focus changes caused by a key are applied before the next key
//! is handled, so the URL input and the draft never disagree about what was
//! typed and a focus change takes effect for the very next key.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::{
    App,
    actions::Action,
    events::{
        AppEvent, Focus,
        handlers::{handle_action, handle_set_focus},
    },
};

/// Maps keyboard input to playlist actions and playback commands.
///
/// # Arguments
///
/// * `app` - A mutable reference to the application state.
/// * `key` - The key event captured from the terminal backend.
///
/// # Errors
///
/// Returns an error if an event cannot be sent to the event loop.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    let event = Event::Key(key);

    let outcome = match app.focus {
        Focus::UrlInput => app.url_input.process_key(&event),
        Focus::Playlist => match app.playlist_view.process_key(&event) {
            Some(action) => Some(AppEvent::Action(action)),
            None => transport_key_event(key, app.config.seek_seconds),
        },
    };

    match outcome {
        Some(AppEvent::Action(action)) => handle_action(app, action)?,
        Some(AppEvent::SetFocus(focus)) => handle_set_focus(app, focus),
        Some(event) => app.event_tx.send(event)?,
        None => {}
    }

    Ok(())
}

/// Keys available whenever the playlist has focus.
fn transport_key_event(key: KeyEvent, seek_seconds: f64) -> Option<AppEvent> {
    let event = match key.code {
        KeyCode::Char('q') => AppEvent::ExitApplication,

        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => {
            AppEvent::SetFocus(Focus::UrlInput)
        }

        KeyCode::Char('b') => AppEvent::Action(Action::Previous),
        KeyCode::Char(',') => AppEvent::Action(Action::Rewind(seek_seconds)),
        KeyCode::Char('p') => AppEvent::Action(Action::Play),
        KeyCode::Char(' ') => AppEvent::Action(Action::Pause),
        KeyCode::Char('.') => AppEvent::Action(Action::FastForward(seek_seconds)),
        KeyCode::Char('n') => AppEvent::Action(Action::Next),

        _ => return None,
    };

    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn transport_keys_map_to_actions() {
        assert!(matches!(
            transport_key_event(key(KeyCode::Char('b')), 10.0),
            Some(AppEvent::Action(Action::Previous))
        ));
        assert!(matches!(
            transport_key_event(key(KeyCode::Char('n')), 10.0),
            Some(AppEvent::Action(Action::Next))
        ));
        assert!(matches!(
            transport_key_event(key(KeyCode::Char(' ')), 10.0),
            Some(AppEvent::Action(Action::Pause))
        ));
    }

    #[test]
    fn seek_keys_use_the_configured_step() {
        assert!(matches!(
            transport_key_event(key(KeyCode::Char(',')), 15.0),
            Some(AppEvent::Action(Action::Rewind(step))) if step == 15.0
        ));
        assert!(matches!(
            transport_key_event(key(KeyCode::Char('.')), 15.0),
            Some(AppEvent::Action(Action::FastForward(step))) if step == 15.0
        ));
    }

    #[test]
    fn tab_focuses_the_url_input() {
        assert!(matches!(
            transport_key_event(key(KeyCode::Tab), 10.0),
            Some(AppEvent::SetFocus(Focus::UrlInput))
        ));
    }

    #[test]
    fn playlist_keys_are_not_transport_keys() {
        assert!(transport_key_event(key(KeyCode::Enter), 10.0).is_none());
        assert!(transport_key_event(key(KeyCode::Char('j')), 10.0).is_none());
    }
}
