//! Output formatting utilities

use crate::domain::{Greeting, JournalEntry, Mood};

/// Format the day's entries for the "Mood Calendar" view
pub fn format_entry_list(entries: &[&JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries recorded today\n".to_string();
    }

    let mut output = String::from("Recent Entries\n");
    for entry in entries {
        output.push_str(&format!("\nDate: {}\n", entry.date().format("%m/%d/%y")));
        output.push_str(&format!("Mood: {}\n", entry.mood()));
        if entry.is_declined() {
            output.push_str("Entry: (declined)\n");
        } else {
            output.push_str(&format!("Entry: {}\n", entry.note()));
        }
    }
    output
}

/// Onboarding screen
pub fn format_welcome() -> String {
    "Welcome to Mood Journal\nType 'sign in' to get started.\n".to_string()
}

/// Home screen with greeting and mood picker
pub fn format_home(greeting: Greeting, default_mood: Mood) -> String {
    let picker: Vec<String> = Mood::PICKER
        .iter()
        .map(|mood| {
            if *mood == default_mood {
                format!("[{}]", mood)
            } else {
                mood.to_string()
            }
        })
        .collect();

    format!(
        "Mood Meter\n{}\n\nHow are you feeling today?\n  {}\n",
        greeting.banner(),
        picker.join("  ")
    )
}

/// Command reference
pub fn format_help() -> String {
    "Commands:\n\
    \x20 <mood> | submit [<mood>]  check in (happy, sad, angry, tired, anxious)\n\
    \x20 yes | no                  answer the journal prompt\n\
    \x20 save | cancel             finish or discard a note\n\
    \x20 today | calendar          show today's entries\n\
    \x20 help                      show this help\n\
    \x20 quit                      end the session\n"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 26).unwrap()
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_entry_list(&[]), "No entries recorded today\n");
    }

    #[test]
    fn test_format_entry_list() {
        let first = JournalEntry::new(day(), Mood::Happy, "Felt great".to_string());
        let second = JournalEntry::declined(day(), Mood::Sad);

        let output = format_entry_list(&[&first, &second]);
        assert!(output.starts_with("Recent Entries\n"));
        assert!(output.contains("Date: 02/26/24\nMood: Happy\nEntry: Felt great\n"));
        assert!(output.contains("Mood: Sad\nEntry: (declined)\n"));
    }

    #[test]
    fn test_format_sentinel_entry() {
        let entry = JournalEntry::new(day(), Mood::NotApplicable, String::new());
        let output = format_entry_list(&[&entry]);
        assert!(output.contains("Mood: N/A\nEntry: \n"));
    }

    #[test]
    fn test_format_home_marks_default() {
        let output = format_home(Greeting::Afternoon, Mood::Sad);
        assert!(output.contains("Good Afternoon User"));
        assert!(output.contains("How are you feeling today?"));
        assert!(output.contains("Happy  [Sad]  Angry  Tired  Anxious"));
    }

    #[test]
    fn test_format_welcome() {
        assert!(format_welcome().contains("sign in"));
    }

    #[test]
    fn test_format_help_lists_commands() {
        let help = format_help();
        for word in ["submit", "yes", "save", "cancel", "today", "quit"] {
            assert!(help.contains(word), "help is missing '{}'", word);
        }
    }
}
