//! Journal persistence: the JSON document and the plain-text export.
//!
//! This module contains all filesystem operations of the mood journal.
//! Loading distinguishes a missing journal (`Ok(None)`) from one that cannot be
//! read or parsed (an error). Saving merges the current user's history into
//! whatever the file already holds for other users. It runs under an exclusive
//! lock on a `<journal>.lock` sidecar and replaces the journal by renaming a
//! fully written temporary file over it, so a failed save never leaves a
//! partially written journal behind.

use crate::constants::EXPORT_DIVIDER_WIDTH;
use crate::errors::{AppError, AppResult, LockError, PersistenceError};
use crate::journal_core::{JournalDocument, User};
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Loads the journal document stored at `path`.
///
/// # Returns
///
/// - `Ok(Some(document))` with every user found in the file; a file holding
///   nothing but whitespace is an empty journal
/// - `Ok(None)` if no file exists at `path`
///
/// # Errors
///
/// - `PersistenceError::Read` if the file exists but cannot be read
/// - `PersistenceError::Corrupt` if the contents are not a valid journal,
///   including bytes that are not UTF-8, entries with an unknown mood, a score
///   that disagrees with the mood, or a date key that is not `YYYY-MM-DD`
///
/// # Examples
///
/// ```no_run
/// use mood_journal::journal_io::load_journal;
/// use std::path::Path;
///
/// match load_journal(Path::new("journal.json")) {
///     Ok(Some(document)) => println!("{} users in journal", document.len()),
///     Ok(None) => println!("No journal yet"),
///     Err(e) => eprintln!("{}", e),
/// }
/// ```
pub fn load_journal(path: &Path) -> AppResult<Option<JournalDocument>> {
    let document = read_document(path)?;
    match &document {
        Some(document) => info!(users = document.len(), "Loaded journal from {}", path.display()),
        None => debug!("No journal file at {}", path.display()),
    }
    Ok(document)
}

/// Saves `user`'s history into the journal document at `path`.
///
/// The journal is written with owner read/write permissions only (on unix),
/// including when it replaces an existing file with broader permissions.
/// Missing parent directories are created. Histories of other users already
/// stored in the file are kept; the current user's history replaces whatever
/// was stored under their name.
///
/// # Errors
///
/// - `LockError::FileBusy` if another process is saving the same file
/// - `PersistenceError::Corrupt` if the existing file is not a valid journal;
///   it is left untouched
/// - `PersistenceError::Read`/`Write` for filesystem failures; the previous
///   journal, if any, is left untouched
pub fn save_journal(user: &User, path: &Path) -> AppResult<()> {
    ensure_parent_directory_exists(path)?;

    let _lock = lock_journal(path)?;

    let mut document = read_document(path)?.unwrap_or_default();
    document.upsert_user(user);

    let mut serialized =
        serde_json::to_vec_pretty(&document).map_err(PersistenceError::Serialize)?;
    serialized.push(b'\n');

    replace_atomically(path, |file| file.write_all(&serialized))?;

    info!(
        entries = user.mood_history.len(),
        users = document.len(),
        "Saved journal to {}",
        path.display()
    );
    Ok(())
}

/// Writes the human-readable export of `user`'s history to `path`,
/// replacing any existing file.
///
/// See [`render_export`] for the format.
pub fn export_journal(user: &User, path: &Path) -> AppResult<()> {
    ensure_parent_directory_exists(path)?;

    fs::write(path, render_export(user)).map_err(|e| PersistenceError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!(
        entries = user.mood_history.len(),
        "Exported journal to {}",
        path.display()
    );
    Ok(())
}

/// Renders the plain-text export of `user`'s history.
///
/// The export starts with a `<name>'s Mood Journal` header and a divider of
/// `=` characters, followed by one block per entry in store order:
///
/// ```text
/// Date: 2024-01-01
/// Description: Test
/// Mood: Happy (Score: 3)
///
/// ```
pub fn render_export(user: &User) -> String {
    let mut out = format!(
        "{}'s Mood Journal\n{}\n",
        user.name,
        "=".repeat(EXPORT_DIVIDER_WIDTH)
    );

    for entry in user.get_history() {
        out.push_str(&format!(
            "Date: {}\nDescription: {}\nMood: {} (Score: {})\n\n",
            entry.date_key(),
            entry.description,
            entry.mood,
            entry.score()
        ));
    }

    out
}

/// Creates the parent directory of `path` if it is missing.
pub fn ensure_parent_directory_exists(path: &Path) -> AppResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Io(io::Error::new(
                    e.kind(),
                    format!("Failed to create directory {}: {}", parent.display(), e),
                ))
            })?;
            debug!("Created directory {}", parent.display());
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Reads and parses the journal at `path`; `None` when there is no file.
fn read_document(path: &Path) -> AppResult<Option<JournalDocument>> {
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(PersistenceError::Read {
                path: path.to_path_buf(),
                source: e,
            }
            .into())
        }
    };

    if content.iter().all(u8::is_ascii_whitespace) {
        debug!("Journal file {} is empty", path.display());
        return Ok(Some(JournalDocument::new()));
    }

    serde_json::from_slice::<JournalDocument>(&content)
        .map(Some)
        .map_err(|e| {
            AppError::from(PersistenceError::Corrupt {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        })
}

/// Path of the sidecar file locked while `path` is being saved.
fn lock_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".lock");
    PathBuf::from(name)
}

/// Takes an exclusive advisory lock on the journal's sidecar lock file.
/// The lock is released when the returned file is dropped.
fn lock_journal(path: &Path) -> AppResult<File> {
    let lock_path = lock_path(path);

    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true).truncate(false);
    #[cfg(unix)]
    options.mode(crate::constants::DEFAULT_FILE_PERMISSIONS);

    let file = options.open(&lock_path).map_err(|e| {
        AppError::Lock(LockError::AcquisitionFailed {
            path: lock_path.clone(),
            source: e,
        })
    })?;

    fs2::FileExt::try_lock_exclusive(&file).map_err(|e| {
        let error = if e.raw_os_error() == fs2::lock_contended_error().raw_os_error() {
            LockError::FileBusy {
                path: path.to_path_buf(),
            }
        } else {
            LockError::AcquisitionFailed {
                path: lock_path.clone(),
                source: e,
            }
        };
        AppError::Lock(error)
    })?;
    debug!("Acquired exclusive lock on {}", lock_path.display());
    Ok(file)
}

/// Replaces `path` with the contents produced by `write_contents`.
///
/// The contents go to a temporary file in the same directory, which is synced
/// and then renamed over `path`. If anything fails before the rename, the
/// temporary file is removed and `path` keeps its previous contents.
fn replace_atomically<F>(path: &Path, write_contents: F) -> AppResult<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let write_error = |source: io::Error| {
        AppError::from(PersistenceError::Write {
            path: path.to_path_buf(),
            source,
        })
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_error)?;
    #[cfg(unix)]
    tmp.as_file()
        .set_permissions(fs::Permissions::from_mode(
            crate::constants::DEFAULT_FILE_PERMISSIONS,
        ))
        .map_err(write_error)?;

    write_contents(tmp.as_file_mut()).map_err(write_error)?;
    tmp.as_file().sync_all().map_err(write_error)?;

    tmp.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}
