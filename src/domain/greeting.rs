//! Time-of-day greeting for the home banner

use chrono::{NaiveDateTime, Timelike};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Night,
}

impl Greeting {
    /// Pick the greeting for an hour of the day (0-23)
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            0..=11 => Greeting::Morning,
            12..=16 => Greeting::Afternoon,
            _ => Greeting::Night,
        }
    }

    pub fn for_time(now: NaiveDateTime) -> Self {
        Self::for_hour(now.hour())
    }

    /// Banner line shown above the mood picker
    pub fn banner(&self) -> String {
        format!("{} User", self)
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phrase = match self {
            Greeting::Morning => "Good Morning",
            Greeting::Afternoon => "Good Afternoon",
            Greeting::Night => "Good Night",
        };
        f.write_str(phrase)
    }
}
