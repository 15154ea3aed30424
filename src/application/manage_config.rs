//! Config management use case

use crate::domain::Mood;
use crate::error::{MoodError, Result};
use crate::infrastructure::Config;
use std::path::PathBuf;

/// Service for reading and updating the config file
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Create a new config service for the given file
    pub fn new(path: PathBuf) -> Self {
        ConfigService { path }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load(&self.path)?;

        match key {
            "first_run" => Ok(config.first_run.to_string()),
            "default_mood" => Ok(config.default_mood.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: first_run, default_mood, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load(&self.path)?;

        match key {
            "first_run" => {
                config.first_run = value.trim().parse::<bool>().map_err(|_| {
                    MoodError::Config(format!(
                        "Invalid value for first_run: '{}'. Use true or false",
                        value
                    ))
                })?;
            }
            "default_mood" => {
                config.default_mood = value.parse::<Mood>()?;
            }
            "created" => {
                return Err(MoodError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: first_run, default_mood",
                    key
                )));
            }
        }

        config.save(&self.path)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load(&self.path)
    }
}
