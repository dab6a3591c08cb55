//! Error handling utilities for the mood journal.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Library functions return these errors; only the interactive shell and `main`
//! render them for the user.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents specific failures while reading or writing the persisted journal.
///
/// A missing journal file is not an error (loading yields `None`), so every
/// variant here describes a file that exists but could not be used.
///
/// # Examples
///
/// ```
/// use mood_journal::errors::PersistenceError;
/// use std::path::PathBuf;
///
/// let error = PersistenceError::Corrupt {
///     path: PathBuf::from("journal.json"),
///     reason: "expected value at line 1 column 1".to_string(),
/// };
///
/// assert!(format!("{}", error).contains("journal.json"));
/// assert!(format!("{}", error).contains("not a valid mood journal"));
/// ```
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The journal file exists but could not be read.
    #[error("Failed to read journal file {path}: {source}")]
    Read {
        /// The path of the journal file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing the journal or the export failed.
    #[error("Failed to write {path}: {source}. Please check file permissions and available disk space.")]
    Write {
        /// The path being written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The journal file exists but its contents are not a valid document.
    #[error("Journal file {path} is not a valid mood journal: {reason}. The file was left untouched.")]
    Corrupt {
        /// The path of the journal file
        path: PathBuf,
        /// Description of what failed to parse or validate
        reason: String,
    },

    /// The in-memory journal could not be serialized.
    #[error("Failed to serialize journal: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Represents errors that can occur when attempting to lock the journal file.
///
/// # Examples
///
/// ```
/// use mood_journal::errors::LockError;
/// use std::path::PathBuf;
///
/// let error = LockError::FileBusy {
///     path: PathBuf::from("/path/to/journal.json"),
/// };
///
/// assert!(format!("{}", error).contains("currently being saved"));
/// ```
#[derive(Debug, Error)]
pub enum LockError {
    /// Error when the file is already locked by another process.
    #[error("Journal file is currently being saved by another process: {path}. Please wait for the other mood-journal session to finish.")]
    FileBusy {
        /// The path to the file that is locked
        path: PathBuf,
    },

    /// Error when acquiring the lock fails for a technical reason.
    #[error("Failed to acquire lock for journal file {path}: {source}. Please check file permissions and ensure the directory is accessible.")]
    AcquisitionFailed {
        /// The path to the file that couldn't be locked
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents all possible errors that can occur in the mood journal.
///
/// # Examples
///
/// ```
/// use mood_journal::errors::AppError;
///
/// let error = AppError::Config("Journal file path is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Journal file path is empty");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from the console or filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors in journal entry logic (e.g., invalid date formats).
    #[error("Journal logic error: {0}")]
    Journal(String),

    /// Errors loading, saving or exporting the journal.
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Errors related to file locking.
    #[error("File locking error: {0}")]
    Lock(#[from] LockError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;
