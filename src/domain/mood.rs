//! Mood labels offered by the picker

use crate::error::MoodError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of moods a check-in can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Happy,
    Sad,
    Angry,
    Tired,
    Anxious,
    /// No particular mood ("N/A")
    #[serde(rename = "n/a")]
    NotApplicable,
}

impl Mood {
    /// Moods shown in the picker, in display order
    pub const PICKER: [Mood; 5] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Tired,
        Mood::Anxious,
    ];

    /// Canonical label
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Tired => "Tired",
            Mood::Anxious => "Anxious",
            Mood::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = MoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "angry" => Ok(Mood::Angry),
            "tired" => Ok(Mood::Tired),
            "anxious" => Ok(Mood::Anxious),
            "n/a" | "na" => Ok(Mood::NotApplicable),
            _ => Err(MoodError::InvalidMood(s.to_string())),
        }
    }
}
