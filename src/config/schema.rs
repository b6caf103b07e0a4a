use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/wavecast/config.toml` or
/// `~/.config/wavecast/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `WAVECAST__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub playback: PlaybackSettings,
    pub cast: CastSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as playable (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["wav".into()],
            follow_links: true,
            include_hidden: false,
            recursive: false,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Pause after a failed track read before moving on (milliseconds).
    /// Also applied once per pass when no track in the list is playable.
    pub error_backoff_ms: u64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            error_backoff_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CastSettings {
    /// Where the inline-audio document is written. The hosting page embeds
    /// this file; each track change replaces its contents.
    pub output_path: String,
}

impl Default for CastSettings {
    fn default() -> Self {
        Self {
            output_path: "now_playing.html".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Glyph prefixed to the currently playing track in the playlist.
    pub marker: String,
    /// Color name for the currently playing track (any ratatui color name).
    pub accent_color: String,
    /// Text shown in the playlist region after a stop.
    pub stopped_text: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ wavecast: on air ~ ".to_string(),
            marker: "▶ ".to_string(),
            accent_color: "blue".to_string(),
            stopped_text: "playback stopped".to_string(),
        }
    }
}
