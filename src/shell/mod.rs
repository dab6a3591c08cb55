//! Interactive menu loop.
//!
//! The shell owns the session: it asks for a name, hydrates the user's history
//! from the journal file, then loops over the numbered menu until the user
//! chooses to save and exit. Input and output are generic so the whole flow
//! can be driven from tests.
//!
//! Every persistence failure is reported to the user and the loop carries on;
//! only console I/O failures end the session with an error.

use crate::config::Config;
use crate::constants::{DATE_FORMAT_ISO, DEFAULT_USER_NAME};
use crate::errors::{AppError, AppResult};
use crate::journal_core::{classify, suggest_activity, User};
use crate::journal_io;
use crate::ops;
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

const MENU: &str = "\nMood Journal Menu:\n\
                    1. Log a new entry\n\
                    2. View Mood history\n\
                    3. View weekly Summary\n\
                    4. View most common Mood\n\
                    5. Export Journal to Text file\n\
                    6. Save and exit";

/// One option of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    LogEntry,
    ViewHistory,
    WeeklySummary,
    MostCommonMood,
    Export,
    SaveAndExit,
}

impl MenuChoice {
    /// Parses a menu selection. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::LogEntry),
            "2" => Some(MenuChoice::ViewHistory),
            "3" => Some(MenuChoice::WeeklySummary),
            "4" => Some(MenuChoice::MostCommonMood),
            "5" => Some(MenuChoice::Export),
            "6" => Some(MenuChoice::SaveAndExit),
            _ => None,
        }
    }
}

/// Resolves the date typed when logging an entry.
///
/// A blank input means `today`; anything else must be `YYYY-MM-DD`.
///
/// # Examples
///
/// ```
/// use mood_journal::shell::parse_entry_date;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// assert_eq!(parse_entry_date("", today).unwrap(), today);
/// assert_eq!(
///     parse_entry_date("2024-01-15", today).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
/// );
/// assert!(parse_entry_date("13/32/2024", today).is_err());
/// ```
pub fn parse_entry_date(input: &str, today: NaiveDate) -> AppResult<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(today);
    }

    // chrono's %Y also takes signed years of any width
    let year = input.split('-').next().unwrap_or_default();
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::Journal(format!(
            "Invalid date format '{}': year must have four digits",
            input
        )));
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT_ISO)
        .map_err(|e| AppError::Journal(format!("Invalid date format '{}': {}", input, e)))
}

/// States of the session. The user travels with the state.
enum State {
    Startup,
    Menu(User),
    Terminated,
}

/// Whether the input stream is still open after a sub-flow.
enum InputStatus {
    Open,
    Closed,
}

/// The interactive session driver.
pub struct Shell<R, W> {
    input: R,
    output: W,
    journal_path: PathBuf,
    export_path: PathBuf,
    today: NaiveDate,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell reading from `input` and writing to `output`.
    ///
    /// `today` is used when the user logs an entry without typing a date.
    pub fn new(input: R, output: W, config: &Config, today: NaiveDate) -> Self {
        Self {
            input,
            output,
            journal_path: config.journal_path.clone(),
            export_path: config.export_path.clone(),
            today,
        }
    }

    /// Runs the session until the user saves and exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if reading from or writing to the console fails.
    pub fn run(mut self) -> AppResult<()> {
        let mut state = State::Startup;
        loop {
            state = match state {
                State::Startup => self.start_session()?,
                State::Menu(user) => self.menu(user)?,
                State::Terminated => return Ok(()),
            };
        }
    }

    fn start_session(&mut self) -> AppResult<State> {
        let Some(name) = self.prompt("Enter your name: ")? else {
            return self.input_closed();
        };

        let name = if name.is_empty() {
            writeln!(
                self.output,
                "Name cannot be empty. Using default name '{}'.",
                DEFAULT_USER_NAME
            )?;
            DEFAULT_USER_NAME.to_string()
        } else {
            name
        };

        let mut user = User::new(name);
        match journal_io::load_journal(&self.journal_path) {
            Ok(Some(mut document)) => {
                if let Some(history) = document.take(&user.name) {
                    user.mood_history = history;
                    writeln!(self.output, "Welcome back, {}! Loaded your Journal.", user.name)?;
                }
            }
            Ok(None) => debug!("Starting a new journal"),
            Err(e) => {
                warn!("Failed to load journal: {}", e);
                writeln!(self.output, "Error loading Journal: {}", e)?;
            }
        }

        info!(entries = user.mood_history.len(), "Session started");
        Ok(State::Menu(user))
    }

    fn menu(&mut self, mut user: User) -> AppResult<State> {
        writeln!(self.output, "{}", MENU)?;
        let Some(choice) = self.prompt("Enter your choice (1-6): ")? else {
            return self.input_closed();
        };

        let Some(choice) = MenuChoice::parse(&choice) else {
            writeln!(
                self.output,
                "Invalid choice. Please enter a number between 1 and 6."
            )?;
            return Ok(State::Menu(user));
        };
        debug!(?choice, "Menu selection");

        match choice {
            MenuChoice::LogEntry => {
                if let InputStatus::Closed = self.log_entry(&mut user)? {
                    return self.input_closed();
                }
            }
            MenuChoice::ViewHistory => {
                write!(self.output, "{}", ops::render_history(&user))?;
            }
            MenuChoice::WeeklySummary => match ops::weekly_summary(user.get_history()) {
                Some(summary) => writeln!(self.output, "{}", summary)?,
                None => writeln!(self.output, "No entries to summarize.")?,
            },
            MenuChoice::MostCommonMood => match ops::most_common_mood(user.get_history()) {
                Some(mood) => writeln!(self.output, "Most Common Mood: {}", mood)?,
                None => writeln!(self.output, "No entries to analyze.")?,
            },
            MenuChoice::Export => match journal_io::export_journal(&user, &self.export_path) {
                Ok(()) => writeln!(
                    self.output,
                    "Journal exported to {}",
                    self.export_path.display()
                )?,
                Err(e) => {
                    warn!("Export failed: {}", e);
                    writeln!(self.output, "Error exporting Journal: {}", e)?;
                }
            },
            MenuChoice::SaveAndExit => {
                match journal_io::save_journal(&user, &self.journal_path) {
                    Ok(()) => writeln!(self.output, "Journal saved successfully!")?,
                    Err(e) => {
                        warn!("Save failed: {}", e);
                        writeln!(self.output, "Error saving Journal: {}", e)?;
                    }
                }
                writeln!(self.output, "Goodbye!")?;
                return Ok(State::Terminated);
            }
        }

        Ok(State::Menu(user))
    }

    fn log_entry(&mut self, user: &mut User) -> AppResult<InputStatus> {
        let Some(date_input) =
            self.prompt("Enter date (YYYY-MM-DD) or press Enter for today: ")?
        else {
            return Ok(InputStatus::Closed);
        };

        let date = match parse_entry_date(&date_input, self.today) {
            Ok(date) => date,
            Err(e) => {
                debug!("Rejected entry date: {}", e);
                writeln!(self.output, "Invalid date format. Please use YYYY-MM-DD.")?;
                return Ok(InputStatus::Open);
            }
        };

        let Some(description) = self.prompt("How are you feeling today? ")? else {
            return Ok(InputStatus::Closed);
        };
        if description.is_empty() {
            writeln!(self.output, "Description cannot be empty.")?;
            return Ok(InputStatus::Open);
        }

        let (mood, score) = classify(&description);
        user.add_entry(date, description, mood);
        info!(%date, %mood, "Logged entry");

        writeln!(self.output, "Entry logged: Mood = {}, Score = {}", mood, score)?;
        writeln!(self.output, "Suggestion: {}", suggest_activity(mood.label()))?;
        Ok(InputStatus::Open)
    }

    /// Prints `message` and reads one trimmed line. `None` means end of input.
    fn prompt(&mut self, message: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn input_closed(&mut self) -> AppResult<State> {
        warn!("Input closed before save; unsaved entries are discarded");
        writeln!(self.output, "\nInput closed. Exiting without saving.")?;
        Ok(State::Terminated)
    }
}
