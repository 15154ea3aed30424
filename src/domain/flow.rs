//! Check-in state machine
//!
//! A check-in moves from picking a mood, through the "Would you like to
//! journal today?" prompt, to an optional note. Exactly one entry is recorded
//! when a check-in completes; cancelling records nothing.

use crate::domain::{Clock, JournalStore, Mood};
use crate::error::{MoodError, Result};
use tracing::debug;

/// Where the user is in the current check-in
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CheckInState {
    /// No check-in in progress
    #[default]
    Idle,
    /// Mood picked, waiting for a yes/no on writing a note
    AwaitingConfirmation { mood: Mood },
    /// Writing a note for the picked mood
    AwaitingNote { mood: Mood, draft: String },
}

impl CheckInState {
    fn describe(&self) -> &'static str {
        match self {
            CheckInState::Idle => "waiting for a mood",
            CheckInState::AwaitingConfirmation { .. } => "waiting for a yes or no",
            CheckInState::AwaitingNote { .. } => "writing a note",
        }
    }
}

/// Drives a single check-in at a time against a store it does not own
#[derive(Debug, Default)]
pub struct CheckInFlow {
    state: CheckInState,
}

impl CheckInFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CheckInState {
        &self.state
    }

    /// Pick a mood and ask whether to write a note
    pub fn submit(&mut self, mood: Mood) -> Result<()> {
        match self.state {
            CheckInState::Idle => {
                self.transition(CheckInState::AwaitingConfirmation { mood });
                Ok(())
            }
            _ => Err(self.reject("pick a mood")),
        }
    }

    /// Answer "yes" to the journal prompt
    pub fn accept(&mut self) -> Result<()> {
        match self.state {
            CheckInState::AwaitingConfirmation { mood } => {
                self.transition(CheckInState::AwaitingNote {
                    mood,
                    draft: String::new(),
                });
                Ok(())
            }
            _ => Err(self.reject("answer yes")),
        }
    }

    /// Answer "no" to the journal prompt, recording the mood without a note
    pub fn decline<C: Clock>(&mut self, store: &mut JournalStore<C>) -> Result<()> {
        match self.state {
            CheckInState::AwaitingConfirmation { mood } => {
                store.record_declined(mood);
                self.transition(CheckInState::Idle);
                Ok(())
            }
            _ => Err(self.reject("answer no")),
        }
    }

    /// Append a line to the note being written
    pub fn edit_note(&mut self, line: &str) -> Result<()> {
        match &mut self.state {
            CheckInState::AwaitingNote { draft, .. } => {
                if !draft.is_empty() {
                    draft.push('\n');
                }
                draft.push_str(line);
                Ok(())
            }
            _ => Err(self.reject("write a note")),
        }
    }

    /// Record the mood with the written note
    pub fn save<C: Clock>(&mut self, store: &mut JournalStore<C>) -> Result<()> {
        let (mood, note) = match &self.state {
            CheckInState::AwaitingNote { mood, draft } => (*mood, draft.trim().to_string()),
            _ => return Err(self.reject("save a note")),
        };
        store.record(mood, note);
        self.transition(CheckInState::Idle);
        Ok(())
    }

    /// Abandon the check-in without recording anything
    pub fn cancel(&mut self) -> Result<()> {
        match self.state {
            CheckInState::Idle => Err(self.reject("cancel")),
            _ => {
                self.transition(CheckInState::Idle);
                Ok(())
            }
        }
    }

    fn transition(&mut self, next: CheckInState) {
        debug!(from = self.state.describe(), to = next.describe(), "check-in transition");
        self.state = next;
    }

    fn reject(&self, event: &'static str) -> MoodError {
        MoodError::InvalidTransition {
            state: self.state.describe(),
            event,
        }
    }
}
