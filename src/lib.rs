/*!
# Mood Journal

A single-user command-line mood journal. Each day's entry is a short free-text
description; the journal classifies it as Happy, Neutral or Sad by keyword,
suggests an activity, and keeps simple statistics over the history.

## Core Features

- Log one entry per day (re-logging a date replaces that day's entry)
- Keyword-based mood classification with activity suggestions
- View the history, the average-score summary and the most common mood
- Persist all users' journals in one JSON file
- Export a user's journal as plain text

## Architecture

- `cli`: Command-line flags using clap
- `config`: Configuration loading and validation
- `constants`: Fixed literals (file names, keyword tables, messages)
- `errors`: Error handling infrastructure
- `journal_core`: Pure journal logic (moods, classification, the store)
- `journal_io`: JSON persistence and text export
- `ops`: Reports over a user's journal
- `shell`: The interactive menu loop

## Usage Example

```rust,no_run
use mood_journal::{Config, Shell};
use chrono::Local;
use std::io;

fn main() -> mood_journal::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let stdin = io::stdin();
    let shell = Shell::new(stdin.lock(), io::stdout(), &config, Local::now().date_naive());
    shell.run()
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Pure journal logic: moods, classification, the journal store
pub mod journal_core;
/// Journal persistence and export
pub mod journal_io;
/// Reports over a user's journal
pub mod ops;
/// Interactive menu loop
pub mod shell;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal_core::{classify, suggest_activity, JournalStore, Mood, User};
pub use shell::Shell;
