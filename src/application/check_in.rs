//! Mood check-in use case

use crate::domain::{CheckInFlow, CheckInState, Clock, Greeting, JournalEntry, JournalStore, Mood};
use crate::error::Result;
use crate::infrastructure::Config;
use std::path::PathBuf;
use tracing::info;

/// Orchestrates onboarding, check-ins and the day's history for one session
pub struct CheckInService<C: Clock> {
    store: JournalStore<C>,
    flow: CheckInFlow,
    config: Config,
    config_path: PathBuf,
}

impl<C: Clock> CheckInService<C> {
    /// Create a service over a store, with the config loaded at startup
    pub fn new(store: JournalStore<C>, config: Config, config_path: PathBuf) -> Self {
        CheckInService {
            store,
            flow: CheckInFlow::new(),
            config,
            config_path,
        }
    }

    /// Whether the welcome screen should be shown
    pub fn needs_onboarding(&self) -> bool {
        self.config.first_run
    }

    /// Acknowledge onboarding, persisting the flag the first time
    pub fn sign_in(&mut self) -> Result<()> {
        if self.config.acknowledge_onboarding() {
            self.config.save(&self.config_path)?;
            info!("onboarding acknowledged");
        }
        Ok(())
    }

    pub fn greeting(&self) -> Greeting {
        Greeting::for_time(self.store.clock().now())
    }

    pub fn default_mood(&self) -> Mood {
        self.config.default_mood
    }

    /// Pick a mood, or the configured default when none is given
    pub fn submit(&mut self, mood: Option<Mood>) -> Result<Mood> {
        let mood = mood.unwrap_or(self.config.default_mood);
        self.flow.submit(mood)?;
        Ok(mood)
    }

    /// Answer the "journal today?" prompt
    pub fn answer(&mut self, write_note: bool) -> Result<()> {
        if write_note {
            self.flow.accept()
        } else {
            self.flow.decline(&mut self.store)
        }
    }

    pub fn write(&mut self, line: &str) -> Result<()> {
        self.flow.edit_note(line)
    }

    pub fn save(&mut self) -> Result<()> {
        self.flow.save(&mut self.store)
    }

    pub fn cancel(&mut self) -> Result<()> {
        self.flow.cancel()
    }

    pub fn state(&self) -> &CheckInState {
        self.flow.state()
    }

    /// Entries recorded today
    pub fn today(&self) -> Vec<&JournalEntry> {
        self.store.entries_for_today()
    }

    pub fn store(&self) -> &JournalStore<C> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FixedClock;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn service(temp: &TempDir, config: Config) -> CheckInService<FixedClock> {
        let clock = FixedClock::at(NaiveDate::from_ymd_opt(2024, 2, 26).unwrap(), 8);
        CheckInService::new(
            JournalStore::with_clock(clock),
            config,
            temp.path().join("config.toml"),
        )
    }

    #[test]
    fn test_sign_in_persists_flag_once() {
        let temp = TempDir::new().unwrap();
        let mut service = service(&temp, Config::new());
        assert!(service.needs_onboarding());

        service.sign_in().unwrap();
        assert!(!service.needs_onboarding());
        let saved = Config::load(&temp.path().join("config.toml")).unwrap();
        assert!(!saved.first_run);

        std::fs::remove_file(temp.path().join("config.toml")).unwrap();
        service.sign_in().unwrap();
        assert!(!temp.path().join("config.toml").exists());
    }

    #[test]
    fn test_submit_uses_default_mood() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.default_mood = Mood::Tired;
        let mut service = service(&temp, config);

        assert_eq!(service.submit(None).unwrap(), Mood::Tired);
        assert_eq!(
            service.state(),
            &CheckInState::AwaitingConfirmation { mood: Mood::Tired }
        );
    }

    #[test]
    fn test_full_check_in() {
        let temp = TempDir::new().unwrap();
        let mut service = service(&temp, Config::new());

        service.submit(Some(Mood::Sad)).unwrap();
        service.answer(true).unwrap();
        service.write("Rainy day").unwrap();
        service.save().unwrap();

        service.submit(Some(Mood::Angry)).unwrap();
        service.answer(false).unwrap();

        let today = service.today();
        assert_eq!(today.len(), 2);
        assert_eq!(today[0].note(), "Rainy day");
        assert!(today[1].is_declined());
        assert_eq!(service.store().len(), 2);
    }

    #[test]
    fn test_greeting_follows_clock() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp, Config::new());
        assert_eq!(service.greeting(), Greeting::Morning);
    }
}
