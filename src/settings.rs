use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::history::DEFAULT_CAPACITY;

const MAX_RECENT_THEMES: usize = 10;

/// User settings stored at `~/.config/theme-builder/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub recent_themes: Vec<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_CAPACITY,
            output_dir: None,
            recent_themes: Vec::new(),
        }
    }
}

fn default_history_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Settings {
    /// Moves `path` to the front of the recent list, keeping at most ten entries.
    pub fn remember_theme(&mut self, path: PathBuf) {
        self.recent_themes.retain(|existing| existing != &path);
        self.recent_themes.insert(0, path);
        self.recent_themes.truncate(MAX_RECENT_THEMES);
    }
}

fn settings_dir() -> Result<PathBuf, ThemeError> {
    let home = dirs_next::config_dir().ok_or(ThemeError::NoHomeDir)?;
    Ok(home.join("theme-builder"))
}

pub fn settings_path() -> Result<PathBuf, ThemeError> {
    Ok(settings_dir()?.join("config.toml"))
}

/// Loads the user settings, returning defaults if the file doesn't exist.
pub fn load_settings() -> Result<Settings, ThemeError> {
    load_settings_from(&settings_path()?)
}

pub fn save_settings(settings: &Settings) -> Result<(), ThemeError> {
    save_settings_to(&settings_path()?, settings)
}

pub fn load_settings_from(path: &Path) -> Result<Settings, ThemeError> {
    if !path.exists() {
        log::debug!("no settings at {}; using defaults", path.display());
        return Ok(Settings::default());
    }
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Persists settings, creating parent directories as needed.
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), ThemeError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(settings)?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Records `theme_path` in the saved settings and returns the updated copy.
pub fn remember_theme(theme_path: PathBuf) -> Result<Settings, ThemeError> {
    let mut settings = load_settings()?;
    settings.remember_theme(theme_path);
    save_settings(&settings)?;
    Ok(settings)
}
