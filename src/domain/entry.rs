//! Journal entry model

use crate::domain::Mood;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// One recorded mood check-in. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    date: NaiveDate,
    mood: Mood,
    note: String,
    declined: bool,
}

impl JournalEntry {
    pub fn new(date: NaiveDate, mood: Mood, note: String) -> Self {
        JournalEntry {
            date,
            mood,
            note,
            declined: false,
        }
    }

    /// Entry for a check-in where the user chose not to write a note
    pub fn declined(date: NaiveDate, mood: Mood) -> Self {
        JournalEntry {
            date,
            mood,
            note: String::new(),
            declined: true,
        }
    }

    /// Calendar day the entry belongs to
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Midnight of the entry's day
    pub fn start_of_day(&self) -> NaiveDateTime {
        self.date.and_time(NaiveTime::MIN)
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn is_declined(&self) -> bool {
        self.declined
    }
}
