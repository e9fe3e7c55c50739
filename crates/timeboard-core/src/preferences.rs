//! User preferences persistence for timeboard
//!
//! Stores UI preferences (color scheme, custom keybindings) in
//! `<config_dir>/preferences.json`, by default `~/.config/timeboard/`.

use crate::models::ColorScheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

const PREFERENCES_FILE: &str = "preferences.json";

/// timeboard user preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Color scheme (dark / light)
    pub color_scheme: ColorScheme,

    /// Custom keybindings, e.g. `{"Ctrl+D": "select_daily"}`
    pub keybindings: HashMap<String, String>,
}

/// Default directory for preferences (`<config_dir>/timeboard`)
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("timeboard"))
}

impl Preferences {
    /// Load preferences from `<config_dir>/preferences.json`.
    /// Returns defaults on any I/O or parse error.
    pub fn load(config_dir: &Path) -> Self {
        let path = config_dir.join(PREFERENCES_FILE);
        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Ignoring malformed preferences");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Persist preferences to `<config_dir>/preferences.json`.
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(config_dir)
            .context("Failed to create config directory for preferences")?;
        let path = config_dir.join(PREFERENCES_FILE);
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize preferences")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write preferences to {}", path.display()))
    }
}
