//! Line-oriented interactive session

use crate::application::CheckInService;
use crate::cli::output::{format_entry_list, format_help, format_home, format_welcome};
use crate::domain::{CheckInState, Clock, Mood};
use crate::error::{MoodError, Result};
use std::io::{BufRead, Write};
use tracing::debug;

const PROMPT: &str = "Would you like to Journal Today? [yes/no]";

/// Whether the loop should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Continue,
    Quit,
}

/// Reads commands from `input`, drives a check-in service, and writes screens to `output`
pub struct Session<C: Clock, W: Write> {
    service: CheckInService<C>,
    output: W,
}

impl<C: Clock, W: Write> Session<C, W> {
    pub fn new(service: CheckInService<C>, output: W) -> Self {
        Session { service, output }
    }

    /// Run until `quit` or end of input
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        self.show_start()?;

        for line in input.lines() {
            let line = line?;
            if self.handle(&line)? == Control::Quit {
                break;
            }
        }

        if matches!(self.service.state(), CheckInState::AwaitingNote { .. }) {
            debug!("input ended while writing a note; discarding draft");
        }
        self.output.flush()?;
        Ok(())
    }

    pub fn service(&self) -> &CheckInService<C> {
        &self.service
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn show_start(&mut self) -> Result<()> {
        if self.service.needs_onboarding() {
            write!(self.output, "{}", format_welcome())?;
        } else {
            self.show_home()?;
        }
        Ok(())
    }

    fn show_home(&mut self) -> Result<()> {
        let home = format_home(self.service.greeting(), self.service.default_mood());
        write!(self.output, "{}", home)?;
        Ok(())
    }

    fn handle(&mut self, line: &str) -> Result<Control> {
        let command = line.trim().to_lowercase();

        if self.service.needs_onboarding() {
            return self.handle_onboarding(&command);
        }

        // Inside a note every line except save/cancel is text
        if matches!(self.service.state(), CheckInState::AwaitingNote { .. }) {
            let outcome = match command.as_str() {
                "save" => self.service.save().map(|_| "Entry saved."),
                "cancel" => self.service.cancel().map(|_| "Entry discarded."),
                _ => self.service.write(line.trim_end()).map(|_| ""),
            };
            return self.report(outcome);
        }

        match command.as_str() {
            "quit" | "exit" => return Ok(Control::Quit),
            "help" | "?" => {
                write!(self.output, "{}", format_help())?;
                return Ok(Control::Continue);
            }
            "today" | "calendar" => {
                let list = format_entry_list(&self.service.today());
                write!(self.output, "{}", list)?;
                return Ok(Control::Continue);
            }
            "" => return Ok(Control::Continue),
            _ => {}
        }

        let outcome = match command.as_str() {
            "yes" | "y" => self
                .service
                .answer(true)
                .map(|_| "Enter Your Journal Entry (type 'save' when done, 'cancel' to discard)"),
            "no" | "n" => self.service.answer(false).map(|_| "Mood saved."),
            "cancel" => self.service.cancel().map(|_| "Check-in cancelled."),
            "save" => self.service.save().map(|_| "Entry saved."),
            _ => self.submit(line),
        };
        self.report(outcome)
    }

    fn handle_onboarding(&mut self, command: &str) -> Result<Control> {
        match command {
            "sign in" | "signin" | "" => {
                self.service.sign_in()?;
                self.show_home()?;
            }
            "quit" | "exit" => return Ok(Control::Quit),
            _ => writeln!(self.output, "Type 'sign in' to get started.")?,
        }
        Ok(Control::Continue)
    }

    /// Accepts `<mood>`, `submit` or `submit <mood>`, keeping the user's casing for errors
    fn submit(&mut self, line: &str) -> Result<&'static str> {
        let line = line.trim();
        let label = match line.split_once(char::is_whitespace) {
            Some((word, rest)) if word.eq_ignore_ascii_case("submit") => rest.trim(),
            _ if line.eq_ignore_ascii_case("submit") => "",
            _ => line,
        };
        let mood = if label.is_empty() {
            None
        } else {
            Some(label.parse::<Mood>()?)
        };
        self.service.submit(mood)?;
        Ok(PROMPT)
    }

    /// Print a status line, or the error for recoverable failures
    fn report(&mut self, outcome: Result<&'static str>) -> Result<Control> {
        match outcome {
            Ok("") => {}
            Ok(message) => writeln!(self.output, "{}", message)?,
            Err(e @ (MoodError::InvalidMood(_) | MoodError::InvalidTransition { .. })) => {
                writeln!(self.output, "{}", e.display_with_suggestions())?;
            }
            Err(e) => return Err(e),
        }
        Ok(Control::Continue)
    }
}
