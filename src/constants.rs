//! Constants used throughout the application.
//!
//! This module contains the fixed literals of the mood journal, organized into
//! logical groups: file locations, keyword tables, menu texts and logging names.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "mood-journal";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A command-line mood journal with keyword-based mood tracking";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level. Kept quiet so logs do not drown the interactive menu.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Log level used when `--verbose` is given.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable overriding the journal JSON file location.
pub const ENV_VAR_JOURNAL_FILE: &str = "MOOD_JOURNAL_FILE";
/// Environment variable overriding the text export location.
pub const ENV_VAR_EXPORT_FILE: &str = "MOOD_EXPORT_FILE";
/// Default journal file, relative to the working directory.
pub const DEFAULT_JOURNAL_FILE: &str = "journal.json";
/// Default text export file, relative to the working directory.
pub const DEFAULT_EXPORT_FILE: &str = "journal_export.txt";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED_PATH]";

// File System Parameters
/// Default POSIX permissions for newly created journal files (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Date Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";

// Classification
/// Keywords that mark an entry as Happy. Checked first.
pub const POSITIVE_KEYWORDS: &[&str] = &["happy", "great", "awesome", "good", "excited"];
/// Keywords that mark an entry as Sad when no positive keyword matched.
pub const NEGATIVE_KEYWORDS: &[&str] = &["sad", "tired", "bad", "angry", "depressed"];
/// Neutral vocabulary. Never consulted: Neutral is the fallback.
pub const NEUTRAL_KEYWORDS: &[&str] = &["okay", "fine", "normal", "meh"];

// Advisor
/// Activity suggested for a Happy mood.
pub const SUGGESTION_HAPPY: &str = "Go for a walk and enjoy the day!";
/// Activity suggested for a Neutral mood.
pub const SUGGESTION_NEUTRAL: &str = "Try reading a book or watching a movie.";
/// Activity suggested for a Sad mood.
pub const SUGGESTION_SAD: &str = "Listen to some uplifting music or call a friend.";
/// Activity suggested for a mood label we do not know.
pub const SUGGESTION_FALLBACK: &str = "Take some time to relax.";

// Reporting
/// Averages strictly above this are "Mostly Happy".
pub const SUMMARY_HAPPY_THRESHOLD: f64 = 2.5;
/// Averages strictly above this (and not above the happy threshold) are "Mostly Neutral".
pub const SUMMARY_NEUTRAL_THRESHOLD: f64 = 1.5;
/// Width of the `=` divider under the export header.
pub const EXPORT_DIVIDER_WIDTH: usize = 30;

// Interactive Shell
/// Name used when the user enters a blank name.
pub const DEFAULT_USER_NAME: &str = "User";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "mood-journal";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
