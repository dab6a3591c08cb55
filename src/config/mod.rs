//! Configuration management for the mood journal.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with defaults matching the historical fixed file names. Command-line
//! flags are applied on top of the environment.
//!
//! # Environment Variables
//!
//! - `MOOD_JOURNAL_FILE`: Path to the JSON journal (defaults to `journal.json`)
//! - `MOOD_EXPORT_FILE`: Path of the text export (defaults to `journal_export.txt`)
//!
//! Both values are expanded with `shellexpand`, so `~` and `$VAR` references work.

use crate::cli::CliArgs;
use crate::constants::{
    DEFAULT_EXPORT_FILE, DEFAULT_JOURNAL_FILE, ENV_VAR_EXPORT_FILE, ENV_VAR_JOURNAL_FILE,
    REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

/// Configuration for the mood journal.
///
/// # Examples
///
/// ```
/// use mood_journal::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     journal_path: PathBuf::from("/tmp/journal.json"),
///     export_path: PathBuf::from("/tmp/journal_export.txt"),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Location of the JSON journal shared by all users.
    pub journal_path: PathBuf,

    /// Location the text export is written to.
    pub export_path: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("journal_path", &REDACTED_PLACEHOLDER)
            .field("export_path", &REDACTED_PLACEHOLDER)
            .finish()
    }
}

impl Default for Config {
    /// The fixed file names in the current working directory.
    fn default() -> Self {
        Config {
            journal_path: PathBuf::from(DEFAULT_JOURNAL_FILE),
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a path fails to expand (for example it
    /// references an unset environment variable).
    pub fn load() -> AppResult<Self> {
        let journal_path = Self::path_from_env(ENV_VAR_JOURNAL_FILE, DEFAULT_JOURNAL_FILE)?;
        let export_path = Self::path_from_env(ENV_VAR_EXPORT_FILE, DEFAULT_EXPORT_FILE)?;

        Ok(Config {
            journal_path,
            export_path,
        })
    }

    /// Replaces paths with the ones given on the command line, if any.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a path fails to expand.
    pub fn with_cli_overrides(mut self, args: &CliArgs) -> AppResult<Self> {
        if let Some(path) = &args.journal {
            self.journal_path = expand_path(path)?;
        }
        if let Some(path) = &args.export {
            self.export_path = expand_path(path)?;
        }
        Ok(self)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if either path is empty or names an
    /// existing directory.
    pub fn validate(&self) -> AppResult<()> {
        Self::validate_file_path("Journal file", &self.journal_path)?;
        Self::validate_file_path("Export file", &self.export_path)
    }

    fn validate_file_path(what: &str, path: &Path) -> AppResult<()> {
        if path.as_os_str().is_empty() {
            return Err(AppError::Config(format!("{} path is empty", what)));
        }

        if path.is_dir() {
            return Err(AppError::Config(format!(
                "{} path {} is a directory",
                what,
                path.display()
            )));
        }

        Ok(())
    }

    fn path_from_env(var: &str, default: &str) -> AppResult<PathBuf> {
        let raw = env::var(var).unwrap_or_else(|_| default.to_string());
        expand_path(&raw)
    }
}

fn expand_path(raw: &str) -> AppResult<PathBuf> {
    let expanded = shellexpand::full(raw)
        .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serial_test::serial;
    use tempfile::tempdir;

    fn setup() {
        env::remove_var(ENV_VAR_JOURNAL_FILE);
        env::remove_var(ENV_VAR_EXPORT_FILE);
    }

    #[test]
    fn test_debug_impl_redacts_paths() {
        let config = Config {
            journal_path: PathBuf::from("/home/username/private/journal.json"),
            export_path: PathBuf::from("/home/username/private/export.txt"),
        };

        let debug_output = format!("{:?}", config);

        assert!(debug_output.contains("[REDACTED_PATH]"));
        assert!(!debug_output.contains("/home/username/private"));
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        setup();

        let config = Config::load().unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.journal_path, PathBuf::from("journal.json"));
        assert_eq!(config.export_path, PathBuf::from("journal_export.txt"));
    }

    #[test]
    #[serial]
    fn test_load_from_env() {
        setup();
        let temp_dir = tempdir().unwrap();
        let journal = temp_dir.path().join("moods.json");
        let export = temp_dir.path().join("moods.txt");

        env::set_var(ENV_VAR_JOURNAL_FILE, &journal);
        env::set_var(ENV_VAR_EXPORT_FILE, &export);
        let config = Config::load().unwrap();
        setup();

        assert_eq!(config.journal_path, journal);
        assert_eq!(config.export_path, export);
    }

    #[test]
    #[serial]
    fn test_load_expands_env_references() {
        setup();
        let orig_home = env::var("HOME").ok();
        env::set_var("HOME", "/tmp/mood-home");
        env::set_var(ENV_VAR_JOURNAL_FILE, "$HOME/journal.json");

        let config = Config::load().unwrap();

        setup();
        match orig_home {
            Some(home) => env::set_var("HOME", home),
            None => env::remove_var("HOME"),
        }
        assert_eq!(config.journal_path, PathBuf::from("/tmp/mood-home/journal.json"));
    }

    #[test]
    #[serial]
    fn test_load_rejects_unset_variable_reference() {
        setup();
        env::remove_var("MOOD_JOURNAL_TEST_UNSET");
        env::set_var(ENV_VAR_JOURNAL_FILE, "$MOOD_JOURNAL_TEST_UNSET/journal.json");

        let result = Config::load();
        setup();

        match result {
            Err(AppError::Config(msg)) => assert!(msg.contains("Failed to expand path")),
            _ => panic!("Expected Config error for unexpandable path"),
        }
    }

    #[test]
    fn test_cli_overrides_win() {
        let args = CliArgs::parse_from(["mood-journal", "--journal", "/tmp/a.json"]);

        let config = Config::default().with_cli_overrides(&args).unwrap();

        assert_eq!(config.journal_path, PathBuf::from("/tmp/a.json"));
        assert_eq!(config.export_path, PathBuf::from("journal_export.txt"));
    }

    #[test]
    fn test_validate_empty_path() {
        let config = Config {
            journal_path: PathBuf::from(""),
            ..Config::default()
        };

        match config.validate() {
            Err(AppError::Config(message)) => {
                assert!(message.contains("Journal file path is empty"))
            }
            _ => panic!("Expected Config error about empty journal path"),
        }
    }

    #[test]
    fn test_validate_directory_path() {
        let temp_dir = tempdir().unwrap();
        let config = Config {
            export_path: temp_dir.path().to_path_buf(),
            ..Config::default()
        };

        match config.validate() {
            Err(AppError::Config(message)) => assert!(message.contains("is a directory")),
            _ => panic!("Expected Config error about directory path"),
        }
    }

    #[test]
    fn test_validate_relative_paths_are_allowed() {
        assert!(Config::default().validate().is_ok());
    }
}
