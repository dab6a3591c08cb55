use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

use test_helpers::base_journal_command;

#[test]
fn test_cli_log_entry_and_save() {
    let temp_dir = tempdir().unwrap();

    base_journal_command(temp_dir.path())
        .write_stdin("Ada\n1\n2024-01-01\nFeeling great today\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry logged: Mood = Happy, Score = 3"))
        .stdout(predicate::str::contains(
            "Suggestion: Go for a walk and enjoy the day!",
        ))
        .stdout(predicate::str::contains("Journal saved successfully!"))
        .stdout(predicate::str::contains("Goodbye!"));

    let content = fs::read_to_string(temp_dir.path().join("journal.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"Ada": {"2024-01-01": ["Feeling great today", "Happy", 3]}})
    );
}

#[test]
fn test_cli_returning_user() {
    let temp_dir = tempdir().unwrap();

    base_journal_command(temp_dir.path())
        .write_stdin("Ada\n1\n2024-01-01\nso tired\n6\n")
        .assert()
        .success();

    base_journal_command(temp_dir.path())
        .write_stdin("Ada\n2\n3\n4\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome back, Ada! Loaded your Journal."))
        .stdout(predicate::str::contains(
            "Date: 2024-01-01, Description: so tired, Mood: Sad (Score: 1)",
        ))
        .stdout(predicate::str::contains(
            "Weekly Mood Summary: Mostly Sad (Average Score: 1.00)",
        ))
        .stdout(predicate::str::contains("Most Common Mood: Sad"));
}

#[test]
fn test_cli_invalid_date_and_choice() {
    let temp_dir = tempdir().unwrap();

    base_journal_command(temp_dir.path())
        .write_stdin("Ada\n1\n13/32/2024\nabc\n2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid date format. Please use YYYY-MM-DD.",
        ))
        .stdout(predicate::str::contains(
            "Invalid choice. Please enter a number between 1 and 6.",
        ))
        .stdout(predicate::str::contains("No entries found."));
}

#[test]
fn test_cli_export() {
    let temp_dir = tempdir().unwrap();

    base_journal_command(temp_dir.path())
        .write_stdin("Ada\n1\n2024-01-01\nTest\n5\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Journal exported to"));

    let text = fs::read_to_string(temp_dir.path().join("journal_export.txt")).unwrap();
    assert!(text.contains("Date: 2024-01-01"));
    assert!(text.contains("Description: Test"));
    assert!(text.contains("Mood: Neutral (Score: 2)"));
}

#[test]
fn test_cli_journal_flag_overrides_env() {
    let temp_dir = tempdir().unwrap();
    let custom = temp_dir.path().join("custom").join("moods.json");

    base_journal_command(temp_dir.path())
        .arg("--journal")
        .arg(&custom)
        .write_stdin("Ada\n1\n2024-01-01\ngood\n6\n")
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!temp_dir.path().join("journal.json").exists());
}

#[test]
fn test_cli_default_paths_are_relative_to_working_directory() {
    let temp_dir = tempdir().unwrap();

    base_journal_command(temp_dir.path())
        .env_remove("MOOD_JOURNAL_FILE")
        .env_remove("MOOD_EXPORT_FILE")
        .write_stdin("Ada\n1\n2024-01-01\ngood\n5\n6\n")
        .assert()
        .success();

    assert!(temp_dir.path().join("journal.json").exists());
    assert!(temp_dir.path().join("journal_export.txt").exists());
}

#[test]
fn test_cli_closed_input_does_not_save() {
    let temp_dir = tempdir().unwrap();

    base_journal_command(temp_dir.path())
        .write_stdin("Ada\n1\n2024-01-01\ngood\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exiting without saving."));

    assert!(!temp_dir.path().join("journal.json").exists());
}

#[test]
fn test_cli_corrupt_journal_is_not_fatal() {
    let temp_dir = tempdir().unwrap();
    let journal = temp_dir.path().join("journal.json");
    fs::write(&journal, "[1, 2, 3]").unwrap();

    base_journal_command(temp_dir.path())
        .write_stdin("Ada\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error loading Journal:"))
        .stdout(predicate::str::contains("Error saving Journal:"));

    assert_eq!(fs::read_to_string(&journal).unwrap(), "[1, 2, 3]");
}

#[test]
fn test_cli_logs_go_to_stderr() {
    let temp_dir = tempdir().unwrap();

    base_journal_command(temp_dir.path())
        .arg("--verbose")
        .arg("--log-format")
        .arg("json")
        .write_stdin("Ada\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"level\"").not())
        .stderr(predicate::str::contains("Session started"))
        .stderr(predicate::str::contains("app_invocation"));
}

#[test]
fn test_cli_invalid_log_format() {
    let temp_dir = tempdir().unwrap();

    base_journal_command(temp_dir.path())
        .arg("--log-format")
        .arg("xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_cli_directory_as_journal_path_fails() {
    let temp_dir = tempdir().unwrap();

    base_journal_command(temp_dir.path())
        .arg("--journal")
        .arg(temp_dir.path())
        .write_stdin("Ada\n6\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a directory"));
}
