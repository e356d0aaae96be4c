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

//! Application configuration.
//!
//! This module manages the application configuration file. The configuration
//! is only ever read, the playlist itself is not persisted.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_NAME: &str = "reelist";

const DEFAULT_SEED_PLAYLIST: [&str; 3] = [
    "http://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
    "http://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4",
    "http://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Playlist entries present at startup.
    pub seed_playlist: Vec<String>,
    /// Step used by rewind and fast-forward.
    pub seek_seconds: f64,
    /// Value for the mpv `vo` option.
    pub video_output: String,
    /// Default log filter, `RUST_LOG` takes precedence.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            seed_playlist: DEFAULT_SEED_PLAYLIST.iter().map(|url| url.to_string()).collect(),
            seek_seconds: 10.0,
            video_output: "gpu".to_string(),
            log_level: "info".to_string(),
        }
    }
}

pub fn load_config() -> AppConfig {
    match confy::load(CONFIG_NAME, None) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Ignoring unreadable configuration: {}", e);
            AppConfig::default()
        }
    }
}

/// Directory holding the configuration file, also used for log files.
pub fn config_dir() -> Option<PathBuf> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .and_then(|path| path.parent().map(|dir| dir.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_seeds_three_sample_videos() {
        let config = AppConfig::default();

        assert_eq!(config.seed_playlist.len(), 3);
        assert!(config.seed_playlist[0].ends_with("BigBuckBunny.mp4"));
        assert!(config.seed_playlist[2].ends_with("ForBiggerBlazes.mp4"));
        assert_eq!(config.seek_seconds, 10.0);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = load_from_toml("seek_seconds = 5.0");

        assert_eq!(config.seek_seconds, 5.0);
        assert_eq!(config.video_output, "gpu");
        assert_eq!(config.seed_playlist, AppConfig::default().seed_playlist);
    }

    // Goes through confy's own loader so the TOML and serde defaults are
    // exercised together.
    fn load_from_toml(toml_text: &str) -> AppConfig {
        let dir = std::env::temp_dir().join(format!("reelist-config-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, toml_text).unwrap();
        let config = confy::load_path(&path).unwrap();
        std::fs::remove_dir_all(&dir).ok();
        config
    }
}
