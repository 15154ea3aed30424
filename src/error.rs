//! Error types for moodmeter

use thiserror::Error;

/// Main error type for moodmeter
#[derive(Debug, Error)]
pub enum MoodError {
    #[error("Invalid mood: '{0}'")]
    InvalidMood(String),

    #[error("Cannot {event} while {state}")]
    InvalidTransition {
        state: &'static str,
        event: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MoodError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodError::Config(_) => 2,
            MoodError::InvalidMood(_) => 3,
            MoodError::InvalidTransition { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodError::InvalidMood(label) => {
                format!(
                    "Invalid mood: '{}'\n\n\
                    Valid moods:\n\
                    • happy, sad, angry, tired, anxious\n\
                    • n/a (no particular mood)\n\n\
                    Examples:\n\
                    moodmeter config default_mood tired",
                    label
                )
            }
            MoodError::InvalidTransition { .. } => {
                format!("{}\n\nType 'help' to see what you can do right now.", self)
            }
            MoodError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: moodmeter config default_mood sad",
                        msg
                    )
                } else if msg.contains("Failed to parse") {
                    format!(
                        "{}\n\n\
                        Suggestions:\n\
                        • Fix or delete the config file to restore defaults\n\
                        • Point at another file with --config <PATH>\n\
                        • Set MOODMETER_HOME to a different directory",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodError
pub type Result<T> = std::result::Result<T, MoodError>;
