// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5001";
pub const DEFAULT_SCROLL_DELAY_MS: u64 = 100;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Search service location
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_url")]
    pub url: String,
    /// Request timeout; no timeout when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            url: default_server_url(),
            timeout_secs: None,
        }
    }
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

/// Results pane behavior
#[derive(Debug, Clone, Deserialize)]
pub struct ResultsConfig {
    /// Delay before moving the view to freshly rendered results
    #[serde(default = "default_scroll_delay_ms")]
    pub scroll_delay_ms: u64,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        ResultsConfig {
            scroll_delay_ms: DEFAULT_SCROLL_DELAY_MS,
        }
    }
}

fn default_scroll_delay_ms() -> u64 {
    DEFAULT_SCROLL_DELAY_MS
}

/// Script shown by the kana picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PickerScript {
    #[default]
    Hiragana,
    Katakana,
}

/// Kana picker configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PickerConfig {
    #[serde(default)]
    pub script: PickerScript,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub results: ResultsConfig,
    #[serde(default)]
    pub picker: PickerConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}
