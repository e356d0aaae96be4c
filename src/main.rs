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

//! # Video Playlist TUI.
//!
//! A terminal-based video playlist player.
//!
//! The shell keeps a playlist of video URLs, lets the user add and remove
//! entries, and drives an MPV instance that streams and shows the selected
//! video in its own window.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, owns all playlist
//!   state and renders the UI.
//! * The **Video Worker** owns the MPV context and reports playback progress.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of an error. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod actions;
mod components;
mod config;
mod events;
mod model;
mod player;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs, io,
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::{
    components::{PlaylistView, UrlInput},
    config::AppConfig,
    events::{AppEvent, Focus, process_events},
    model::Playlist,
    player::{PlayerState, VideoPlayer},
    theme::Theme,
};

const LOG_FILE_PREFIX: &str = "reelist.log";

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub focus: Focus,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub video_player: VideoPlayer,

    pub playlist: Playlist,

    pub playlist_view: PlaylistView,
    pub url_input: UrlInput,

    pub player_state: PlayerState,
    pub player_title: Option<String>,
    pub player_duration: Option<f64>,
    pub player_time: Option<f64>,

    /// Last error reported by the video worker.
    pub status: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let video_player = VideoPlayer::new(&config, event_tx.clone());

        Self::with_player(config, event_tx, event_rx, video_player)
    }

    fn with_player(
        config: AppConfig,
        event_tx: Sender<AppEvent>,
        event_rx: Receiver<AppEvent>,
        video_player: VideoPlayer,
    ) -> Self {
        let playlist = Playlist::new(config.seed_playlist.clone());
        let playlist_view = PlaylistView::new(&playlist);

        Self {
            config,
            theme: Theme::default(),
            focus: Focus::Playlist,
            event_tx,
            event_rx,
            video_player,
            playlist,
            playlist_view,
            url_input: UrlInput::new(),
            player_state: PlayerState::Stopped,
            player_title: None,
            player_duration: None,
            player_time: None,
            status: None,
        }
    }
}

#[cfg(test)]
impl App {
    /// Application state around a player with no MPV worker behind it.
    pub(crate) fn detached(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        let (video_player, _command_rx) = VideoPlayer::detached();

        Self::with_player(config, event_tx, event_rx, video_player)
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, initializes the
/// application state, manages the terminal lifecycle, and returns an error if
/// any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    // Held until exit so buffered log lines are flushed.
    let _log_guard = init_logging(&config);

    info!(videos = config.seed_playlist.len(), "starting");

    let mut app = App::new(config);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal, &app);

    res.context("Application error occurred")
}

/// Routes `tracing` output to a daily log file in the configuration
/// directory, the terminal itself is owned by the UI.
///
/// Logging is skipped if no log directory can be prepared.
fn init_logging(config: &AppConfig) -> Option<WorkerGuard> {
    let log_dir = config::config_dir()?;
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Logging disabled, cannot create {}: {}", log_dir.display(), e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("reelist={}", config.log_level)));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .init();

    Some(guard)
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin outline in the emulator's default colour
    if let Err(e) = util::term::set_terminal_bg(app.theme.background_colour) {
        warn!("Failed to set terminal background: {}", e);
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &App) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();

    info!(videos = app.playlist.len(), "terminal restored");
}

/// Starts the input and tick threads and enters the main event loop.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw key presses to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    let message = format!("Failed to read input: {}", e);
                    let _ = tx_keys.send(AppEvent::FatalError(message));
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
