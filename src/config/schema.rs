use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/spoty/config.toml` or `~/.config/spoty/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SPOTY__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub playback: PlaybackSettings,
    pub controls: ControlsSettings,
    pub ui: UiSettings,
    pub storage: StorageSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Timeout for fetching remote sources (seconds).
    pub fetch_timeout_secs: u64,
    /// Initial output volume, 0.0 to 1.0.
    pub volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: 30,
            volume: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Whether shuffle starts enabled.
    pub shuffle: bool,
    /// Whether repeat-one starts enabled.
    pub repeat: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to scrub when pressing `H` / `L`.
    pub scrub_seconds: u64,
    /// Volume change per `+` / `-` press.
    pub volume_step: f32,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            scrub_seconds: 5,
            volume_step: 0.05,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Text rendered in the header next to the search box.
    pub header_text: String,
    /// Event poll interval; also the cadence of progress updates.
    pub tick_ms: u64,
    /// Which track fields make up the now-playing line, and in what order.
    ///
    /// Example: ["title", "artist"]
    pub now_playing_fields: Vec<TrackField>,
    /// Separator used to join `now_playing_fields`.
    pub now_playing_separator: String,
    /// Which clock labels to show around the progress bar.
    pub time_fields: Vec<TimeField>,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " Good evening ".to_string(),
            tick_ms: 100,
            now_playing_fields: vec![TrackField::Title, TrackField::Artist],
            now_playing_separator: " - ".to_string(),
            time_fields: vec![TimeField::Elapsed, TimeField::Total],
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackField {
    Title,
    Artist,
    Category,
    #[serde(alias = "img", alias = "artwork")]
    Image,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeField {
    Elapsed,
    Total,
    Remaining,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Key the catalog blob is stored under.
    pub key: String,
    /// Directory holding the blob; defaults to the XDG data dir.
    pub dir: Option<PathBuf>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            key: "premium_spoty_v1".to_string(),
            dir: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Log file; defaults to `spoty.log` in the data dir.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
