//! Configuration module
//!
//! Loads `~/.config/charlearner/config.toml`. Every field has a default, so a
//! missing file is not an error.

mod loader;
mod types;

pub use loader::{ConfigResult, config_path, load_config, load_config_from_path};
pub use types::{
    ClipboardBackend, ClipboardConfig, Config, DEFAULT_SCROLL_DELAY_MS, DEFAULT_SERVER_URL,
    PickerConfig, PickerScript, ResultsConfig, ServerConfig,
};
