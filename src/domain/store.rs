//! Session-local journal store

use crate::domain::{Clock, JournalEntry, Mood, SystemClock};
use crate::error::Result;
use chrono::NaiveDate;
use tracing::debug;

/// Append-only sequence of journal entries for the current session.
///
/// Every entry is stamped with the clock's calendar day at the moment it is
/// recorded. Entries are never edited or removed.
#[derive(Debug)]
pub struct JournalStore<C: Clock = SystemClock> {
    clock: C,
    entries: Vec<JournalEntry>,
}

impl JournalStore<SystemClock> {
    /// Create an empty store using the local system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for JournalStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> JournalStore<C> {
    pub fn with_clock(clock: C) -> Self {
        JournalStore {
            clock,
            entries: Vec::new(),
        }
    }

    /// Append an entry for today
    pub fn record(&mut self, mood: Mood, note: impl Into<String>) {
        let entry = JournalEntry::new(self.clock.today(), mood, note.into());
        self.push(entry);
    }

    /// Append a declined check-in for today
    pub fn record_declined(&mut self, mood: Mood) {
        let entry = JournalEntry::declined(self.clock.today(), mood);
        self.push(entry);
    }

    /// Parse a textual mood label and record it
    pub fn record_label(&mut self, label: &str, note: impl Into<String>) -> Result<()> {
        let mood = label.parse::<Mood>()?;
        self.record(mood, note);
        Ok(())
    }

    /// Entries stamped with today's date, in insertion order
    pub fn entries_for_today(&self) -> Vec<&JournalEntry> {
        self.entries_on(self.clock.today())
    }

    /// Entries stamped with the given date, in insertion order
    pub fn entries_on(&self, date: NaiveDate) -> Vec<&JournalEntry> {
        self.entries.iter().filter(|e| e.date() == date).collect()
    }

    /// Whole session history
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn push(&mut self, entry: JournalEntry) {
        debug!(
            date = %entry.date(),
            mood = %entry.mood(),
            declined = entry.is_declined(),
            "recorded journal entry"
        );
        self.entries.push(entry);
    }
}
