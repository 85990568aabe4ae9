use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::types::Config;

const CONFIG_DIR: &str = "charlearner";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus an optional warning for the UI
#[derive(Debug, Clone)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

/// Load the config from `path`, falling back to defaults
///
/// A missing file yields defaults silently. Unreadable or invalid files
/// yield defaults with a warning.
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            return ConfigResult {
                config: Config::default(),
                warning: None,
            };
        }
        Err(e) => {
            let warning = format!("Could not read config {}: {}", path.display(), e);
            log::warn!("{}", warning);
            return ConfigResult {
                config: Config::default(),
                warning: Some(warning),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            let warning = format!("Invalid config {}: {}", path.display(), e.message());
            log::warn!("{}", warning);
            ConfigResult {
                config: Config::default(),
                warning: Some(warning),
            }
        }
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
