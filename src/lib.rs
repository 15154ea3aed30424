//! moodmeter - Daily mood check-ins from the terminal
//!
//! Pick a mood, optionally write a note, and review the entries recorded
//! today. Entries live for the session only; the only thing kept on disk is
//! a small config file holding the onboarding flag and the default mood.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodError;
