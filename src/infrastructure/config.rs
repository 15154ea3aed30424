//! Configuration management

use crate::domain::Mood;
use crate::error::{MoodError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Show onboarding before the mood picker
    #[serde(default = "default_first_run")]
    pub first_run: bool,
    /// Mood preselected in the picker
    #[serde(default)]
    pub default_mood: Mood,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
}

fn default_first_run() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            first_run: true,
            default_mood: Mood::default(),
            created: Utc::now(),
        }
    }

    /// Default config location: $MOODMETER_HOME/config.toml, else ~/.moodmeter/config.toml
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(home) = std::env::var("MOODMETER_HOME") {
            return Ok(PathBuf::from(home).join(CONFIG_FILE));
        }

        std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map(|home| PathBuf::from(home).join(".moodmeter").join(CONFIG_FILE))
            .map_err(|_| {
                MoodError::Config(
                    "Cannot locate a home directory; set MOODMETER_HOME or pass --config"
                        .to_string(),
                )
            })
    }

    /// Load config from a file, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::new()),
            Err(e) => return Err(MoodError::Io(e)),
        };

        toml::from_str(&contents).map_err(|e| {
            MoodError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save config to a file, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MoodError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, contents)?;
        info!(path = %path.display(), "saved config");

        Ok(())
    }

    /// Mark onboarding as done. Returns true if the flag changed.
    pub fn acknowledge_onboarding(&mut self) -> bool {
        let changed = self.first_run;
        self.first_run = false;
        changed
    }
}
