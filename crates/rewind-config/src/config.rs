/// Application configuration: load, save, and sanitize.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How shortcut hints are written on buttons and tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HintStyle {
    /// `Ctrl+Z`, `Ctrl+Shift+Z`.
    #[default]
    Standard,
    /// `⌘Z`, `⌘⇧Z`.
    Mac,
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Max retained history states per editing session (minimum 1).
    pub max_history: usize,
    /// Whether undo/redo chords are bound at all.
    pub shortcuts_enabled: bool,
    pub hint_style: HintStyle,
    /// Whether tooltips include the chord, e.g. "Undo (Ctrl+Z)".
    pub show_shortcut_hints: bool,
    /// Points shown by the history timeline (minimum 1).
    pub timeline_max_visible: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_history: 50,
            shortcuts_enabled: true,
            hint_style: HintStyle::Standard,
            show_shortcut_hints: true,
            timeline_max_visible: 10,
        }
    }
}

impl AppConfig {
    /// Returns the config file path.
    ///
    /// Resolution order:
    /// 1. `REWIND_CONFIG` environment variable
    /// 2. `rewind/rewind.json` under the user's config directory
    /// 3. `rewind.json` in the working directory
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("REWIND_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .map(|d| d.join("rewind").join("rewind.json"))
            .unwrap_or_else(|| PathBuf::from("rewind.json"))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (unreadable file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match Self::load(path) {
                Ok(config) => return config,
                Err(e) => tracing::warn!("{e:#}"),
            }
            // Return defaults on error (don't overwrite broken file)
            Self::default()
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config: {e:#}");
            }
            config
        }
    }

    /// Reads and sanitizes the config at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or isn't valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let mut config: AppConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        config.sanitize();
        Ok(config)
    }

    /// Saves config to `path` as pretty-printed JSON, creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file can't be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config at {}", path.display()))
    }

    /// Clamps values to valid ranges.
    pub fn sanitize(&mut self) {
        self.max_history = self.max_history.max(1);
        self.timeline_max_visible = self.timeline_max_visible.max(1);
    }
}
